use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use hexdis_core::{hex_dump, parse_hex, samples, Arch, Objdump, Syntax};

mod config;

/// Write machine-code bytes to a scratch file and run an external
/// disassembler on them. The tool's listing goes straight to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hex bytes to disassemble ("55 48 89 e5", "0x55,0x48", "5548...")
    #[arg(value_name = "HEX")]
    hex: Vec<String>,

    /// Read raw bytes from a file ("-" for stdin)
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "hex")]
    file: Option<PathBuf>,

    /// Use a built-in sample payload (see --list-samples)
    #[arg(
        short = 's',
        long = "sample",
        value_name = "NAME",
        conflicts_with_all = ["hex", "file"]
    )]
    sample: Option<String>,

    /// List the built-in sample payloads and exit
    #[arg(long = "list-samples")]
    list_samples: bool,

    /// Architecture passed to the tool's -m flag
    #[arg(short = 'm', long = "arch", value_name = "ARCH")]
    arch: Option<Arch>,

    /// Operand syntax: att or intel
    #[arg(long = "syntax", value_name = "SYNTAX")]
    syntax: Option<Syntax>,

    /// Disassembler executable to invoke
    #[arg(long = "tool", value_name = "PATH")]
    tool: Option<PathBuf>,

    /// Print a local hex dump instead of invoking the tool
    #[arg(short = 'x', long = "hex-dump")]
    hex_dump: bool,

    /// Read defaults from a TOML config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn read_bytes(args: &Args) -> Result<Vec<u8>> {
    if let Some(name) = &args.sample {
        return samples::find(name)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| anyhow!("unknown sample '{name}', try --list-samples"));
    }
    if let Some(path) = &args.file {
        if path.as_os_str() == "-" {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            return Ok(buf);
        }
        return fs::read(path).with_context(|| format!("cannot read {}", path.display()));
    }
    if args.hex.is_empty() {
        bail!("no bytes given; pass HEX arguments, --file, or --sample");
    }
    Ok(parse_hex(&args.hex.join(" "))?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_samples {
        for name in samples::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let cfg = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::Config::default(),
    };

    let bytes = read_bytes(&args)?;

    if args.hex_dump {
        hex_dump(&bytes, &mut io::stdout().lock())?;
        return Ok(());
    }

    let mut tool = Objdump::new();
    if let Some(program) = args.tool.clone().or_else(|| cfg.tool.clone().map(PathBuf::from)) {
        tool = tool.program(program);
    }
    if let Some(arch) = args.arch.clone().or_else(|| cfg.arch.clone().map(|a| a.0)) {
        tool = tool.arch(arch);
    }
    if let Some(syntax) = args.syntax.or_else(|| cfg.syntax.map(|s| s.0)) {
        tool = tool.syntax(syntax);
    }

    let status = tool.disassemble(&bytes)?;
    if !status.success() {
        eprintln!("disassembler exited with {status}");
        process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_positionals_parse() {
        let args = Args::try_parse_from(["hexdis", "55", "48,89", "e5"]).unwrap();
        assert_eq!(read_bytes(&args).unwrap(), vec![0x55, 0x48, 0x89, 0xe5]);
    }

    #[test]
    fn sample_source() {
        let args = Args::try_parse_from(["hexdis", "-s", "return-one"]).unwrap();
        assert_eq!(read_bytes(&args).unwrap(), samples::RETURN_ONE);
    }

    #[test]
    fn unknown_sample_is_an_error() {
        let args = Args::try_parse_from(["hexdis", "-s", "nope"]).unwrap();
        assert!(read_bytes(&args).is_err());
    }

    #[test]
    fn sources_conflict() {
        assert!(Args::try_parse_from(["hexdis", "55", "-s", "return-one"]).is_err());
        assert!(Args::try_parse_from(["hexdis", "55", "-f", "a.bin"]).is_err());
    }

    #[test]
    fn no_source_is_an_error() {
        let args = Args::try_parse_from(["hexdis"]).unwrap();
        assert!(read_bytes(&args).is_err());
    }

    #[test]
    fn arch_flag_parses() {
        let args = Args::try_parse_from(["hexdis", "-m", "rv64", "c3"]).unwrap();
        assert_eq!(args.arch, Some(Arch::Rv64));
        let args = Args::try_parse_from(["hexdis", "-m", "m68k", "c3"]).unwrap();
        assert_eq!(args.arch, Some(Arch::Other("m68k".to_string())));
    }
}
