use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::arch::{Arch, Syntax};
use crate::scratch::ScratchBin;

/// A failure before the tool got to run. A tool that launches and
/// exits non-zero is not an error here; its status is handed back
/// for the caller to act on.
#[derive(Debug, Error)]
pub enum DisasError {
    #[error("failed to stage bytes in a scratch file: {0}")]
    Scratch(#[source] io::Error),
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Driver for an external objdump-compatible disassembler.
///
/// Runs `<program> -b binary -m <arch> [-M intel] [extra..] -D <path>`
/// against a scratch file holding the byte sequence.
pub struct Objdump {
    program: PathBuf,
    arch: Arch,
    syntax: Syntax,
    extra_args: Vec<OsString>,
}

impl Objdump {
    pub fn new() -> Objdump {
        Objdump {
            program: PathBuf::from("objdump"),
            arch: Arch::default(),
            syntax: Syntax::default(),
            extra_args: Vec::new(),
        }
    }

    pub fn program(mut self, program: impl Into<PathBuf>) -> Objdump {
        self.program = program.into();
        self
    }

    pub fn arch(mut self, arch: Arch) -> Objdump {
        self.arch = arch;
        self
    }

    pub fn syntax(mut self, syntax: Syntax) -> Objdump {
        self.syntax = syntax;
        self
    }

    /// Appends a flag passed to the tool verbatim, before `-D`.
    pub fn extra_arg(mut self, arg: impl Into<OsString>) -> Objdump {
        self.extra_args.push(arg.into());
        self
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-b", "binary", "-m"]).arg(self.arch.bfd_name());
        if self.syntax == Syntax::Intel {
            cmd.args(["-M", "intel"]);
        }
        cmd.args(&self.extra_args);
        cmd.arg("-D").arg(path);
        cmd
    }

    /// Disassembles `bytes`, streaming the tool's listing straight to
    /// this process's stdout. Blocks until the tool exits and returns
    /// its exit status; the scratch file is removed either way.
    pub fn disassemble(&self, bytes: &[u8]) -> Result<ExitStatus, DisasError> {
        let scratch = ScratchBin::write(bytes).map_err(DisasError::Scratch)?;
        let status = self
            .command(scratch.path())
            .status()
            .map_err(|source| self.launch_error(source))?;
        Ok(status)
    }

    /// Captured-output variant of [`disassemble`](Self::disassemble).
    pub fn disassemble_to_string(&self, bytes: &[u8]) -> Result<String, DisasError> {
        let scratch = ScratchBin::write(bytes).map_err(DisasError::Scratch)?;
        let output = self
            .command(scratch.path())
            .output()
            .map_err(|source| self.launch_error(source))?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn launch_error(&self, source: io::Error) -> DisasError {
        DisasError::Launch {
            program: self.program.display().to_string(),
            source,
        }
    }
}

impl Default for Objdump {
    fn default() -> Self {
        Objdump::new()
    }
}
