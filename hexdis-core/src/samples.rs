//! Known-good x86-64 payloads for quick inspection without having
//! bytes at hand.

use hex_literal::hex;

/// `push rbp; mov rbp,rsp; mov eax,0x1; pop rbp; ret`
pub const RETURN_ONE: &[u8] = &hex!("55 48 89 e5 b8 01 00 00 00 5d c3");

/// Frame setup, a 32-bit argument spilled to the stack, a near call,
/// and an add before the frame is torn down.
pub const FRAME_CALL: &[u8] = &hex!(
    "55 48 89 e5 41 57 48 83 ec 08"
    "89 bc 24 04 00 00 00"
    "41 89 ff 44 89 ff"
    "e8 e4 ff ff ff"
    "44 8b bc 24 04 00 00 00"
    "44 01 f8"
    "48 83 c4 08 41 5f 5d c3"
);

/// Loads a pointer argument and stores through it at an offset,
/// with a 0xdeaddead immediate in ecx.
pub const STORE_DEADDEAD: &[u8] = &hex!(
    "55 48 89 e5 b8 ff ff ff ff b9 ad de ad de"
    "89 c0 48 8b 17 89 0c 02 5d c3"
);

pub const NAMES: [&str; 3] = ["return-one", "frame-call", "store-deaddead"];

pub fn find(name: &str) -> Option<&'static [u8]> {
    match name {
        "return-one" => Some(RETURN_ONE),
        "frame-call" => Some(FRAME_CALL),
        "store-deaddead" => Some(STORE_DEADDEAD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(find(name).is_some(), "unresolvable sample: {name}");
        }
        assert!(find("no-such-sample").is_none());
    }

    #[test]
    fn payload_shapes() {
        assert_eq!(RETURN_ONE.len(), 11);
        assert_eq!(FRAME_CALL.len(), 47);
        assert_eq!(STORE_DEADDEAD.len(), 24);
        // every payload is a prologue-to-ret function body
        for bytes in [RETURN_ONE, FRAME_CALL, STORE_DEADDEAD] {
            assert_eq!(bytes[0], 0x55);
            assert_eq!(*bytes.last().unwrap(), 0xc3);
        }
    }
}
