//! Stage raw machine-code bytes in a scratch file and drive an
//! external disassembler (objdump in raw-binary mode) on them.

mod arch;
mod bytes;
mod objdump;
pub mod samples;
mod scratch;

pub use arch::{Arch, Syntax};
pub use bytes::{hex_dump, parse_hex, ParseHexError};
pub use objdump::{DisasError, Objdump};
pub use scratch::ScratchBin;
