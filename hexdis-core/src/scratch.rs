use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// A byte sequence staged in a named temporary file so an external
/// process can read it by path. The file is removed on drop, which
/// covers every exit path including a failed tool launch.
pub struct ScratchBin {
    file: NamedTempFile,
}

impl ScratchBin {
    /// Creates the scratch file and writes `bytes` to it verbatim.
    /// The contents are flushed before this returns; an empty slice
    /// yields a zero-length file.
    pub fn write(bytes: &[u8]) -> io::Result<ScratchBin> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(ScratchBin { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn round_trip() {
        let bytes = [0x55, 0x48, 0x89, 0xe5, 0x5d, 0xc3];
        let scratch = ScratchBin::write(&bytes).unwrap();
        assert_eq!(fs::read(scratch.path()).unwrap(), bytes);
    }

    #[test]
    fn empty_sequence_yields_empty_file() {
        let scratch = ScratchBin::write(&[]).unwrap();
        let meta = fs::metadata(scratch.path()).unwrap();
        assert_eq!(meta.len(), 0);
    }

    #[test]
    fn removed_on_drop() {
        let scratch = ScratchBin::write(&[0xc3]).unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.exists());
        drop(scratch);
        assert!(!path.exists());
    }
}
