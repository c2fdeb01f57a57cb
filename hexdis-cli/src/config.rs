use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use hexdis_core::{Arch, Syntax};

/// Optional defaults; command-line flags win over these.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    pub(crate) tool: Option<String>,
    pub(crate) arch: Option<ArchName>,
    pub(crate) syntax: Option<SyntaxName>,
}

pub(crate) fn load_config(path: &Path) -> Result<Config> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(config)
}

#[derive(Debug, Clone)]
pub(crate) struct ArchName(pub(crate) Arch);

impl<'de> Deserialize<'de> for ArchName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Arch::from_str(&s).map(ArchName).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SyntaxName(pub(crate) Syntax);

impl<'de> Deserialize<'de> for SyntaxName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        match Syntax::from_str(&s) {
            Ok(x) => Ok(SyntaxName(x)),
            Err(_) => Err(D::Error::custom(format!(
                "err in '{}', expected 'att' or 'intel'",
                &s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: Config = toml::from_str(
            "tool = \"/opt/cross/bin/objdump\"\narch = \"i386\"\nsyntax = \"intel\"\n",
        )
        .unwrap();
        assert_eq!(cfg.tool.as_deref(), Some("/opt/cross/bin/objdump"));
        assert_eq!(cfg.arch.unwrap().0, Arch::I386);
        assert_eq!(cfg.syntax.unwrap().0, Syntax::Intel);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.tool.is_none());
        assert!(cfg.arch.is_none());
        assert!(cfg.syntax.is_none());
    }

    #[test]
    fn unknown_arch_passes_through() {
        let cfg: Config = toml::from_str("arch = \"m68k\"").unwrap();
        assert_eq!(cfg.arch.unwrap().0, Arch::Other("m68k".to_string()));
    }

    #[test]
    fn rejects_bad_syntax() {
        let err = toml::from_str::<Config>("syntax = \"nasm\"").unwrap_err();
        assert!(err.to_string().contains("nasm"));
    }
}
