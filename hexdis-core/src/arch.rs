use std::fmt::{self, Display, Formatter};

use strum_macros::{EnumString, IntoStaticStr};

/// Architecture selector, mapped to the disassembler's `-m` names.
///
/// Unknown spellings parse to `Other` and are passed to the tool
/// untouched; a wrong name surfaces as the tool's own error.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum Arch {
    #[strum(serialize = "i386:x86-64", serialize = "x86-64", serialize = "x86_64")]
    X86_64,
    #[strum(serialize = "i386")]
    I386,
    #[strum(serialize = "i8086")]
    I8086,
    #[strum(serialize = "arm")]
    Arm,
    #[strum(serialize = "aarch64")]
    Aarch64,
    #[strum(serialize = "riscv:rv64", serialize = "rv64")]
    Rv64,
    #[strum(default)]
    Other(String),
}

impl Arch {
    /// The BFD architecture name the tool expects after `-m`.
    pub fn bfd_name(&self) -> &str {
        match self {
            Arch::X86_64 => "i386:x86-64",
            Arch::I386 => "i386",
            Arch::I8086 => "i8086",
            Arch::Arm => "arm",
            Arch::Aarch64 => "aarch64",
            Arch::Rv64 => "riscv:rv64",
            Arch::Other(name) => name,
        }
    }
}

impl Default for Arch {
    fn default() -> Self {
        Arch::X86_64
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bfd_name())
    }
}

/// Operand syntax for x86 targets; `Intel` adds `-M intel`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Syntax {
    #[default]
    Att,
    Intel,
}

impl Display for Syntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s: &'static str = self.into();
        write!(f, "{}", s)
    }
}
