use std::io::{self, Write};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseHexError {
    #[error("'{0}' is not a hex byte")]
    InvalidDigit(String),
    #[error("'{0}' has an odd number of hex digits")]
    OddLength(String),
}

/// Parses a human-written hex spelling into bytes.
///
/// Tokens are separated by whitespace and/or commas, with an optional
/// `0x` prefix. A one- or two-digit token is a single byte; a longer
/// even-length token is consumed as consecutive byte pairs, so
/// `"554889e5"` and `"0x55, 0x48, 0x89, 0xe5"` spell the same bytes.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, ParseHexError> {
    let mut out = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let bad = || ParseHexError::InvalidDigit(token.to_string());
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        if digits.len() <= 2 {
            out.push(u8::from_str_radix(digits, 16).map_err(|_| bad())?);
        } else if digits.len() % 2 != 0 {
            return Err(ParseHexError::OddLength(token.to_string()));
        } else {
            for i in (0..digits.len()).step_by(2) {
                out.push(u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad())?);
            }
        }
    }
    Ok(out)
}

/// Writes `data` as a hex dump: 16 bytes per line in groups of four,
/// each line prefixed with its offset.
pub fn hex_dump(data: &[u8], w: &mut impl Write) -> io::Result<()> {
    for (i, chunk) in data.chunks(16).enumerate() {
        write!(w, "{:04x}: ", i * 16)?;
        for (j, byte) in chunk.iter().enumerate() {
            if j > 0 && j % 4 == 0 {
                write!(w, " ")?;
            }
            write!(w, " {byte:02x}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}
