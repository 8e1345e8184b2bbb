//! RISC-V disassembler CLI.
//!
//! This binary prints one listing line per instruction. It supports:
//! 1. **Words:** Disassemble instruction words given as hex on the command line.
//! 2. **File:** Walk a raw little-endian binary parcel by parcel.
//!
//! The ISA comes from `--isa`/`--xlen` or from a JSON `--config` file.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rvdis_core::config::{ConfigError, IsaConfig, Preset};
use rvdis_core::isa::disasm::{ILLEGAL, address_mask};
use rvdis_core::isa::module::Module;
use rvdis_core::{Disassembly, Isa};

#[derive(Parser, Debug)]
#[command(
    name = "rvdis",
    author,
    version,
    about = "Table-driven RISC-V disassembler",
    long_about = "Disassemble RISC-V instruction words or raw binaries.\n\nExamples:\n  rvdis words 00008067 4501\n  rvdis words --isa rv32gc --address 0x80000000 fe010113\n  rvdis words --isa rv32i --module rv32m 02c58533\n  rvdis file --config isa.json firmware.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble hex instruction words at consecutive addresses.
    Words {
        #[command(flatten)]
        isa: IsaArgs,

        /// Instruction words in hex (16-bit parcels or 32-bit words).
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,
    },

    /// Disassemble a raw little-endian binary file.
    File {
        #[command(flatten)]
        isa: IsaArgs,

        /// Binary to read.
        path: PathBuf,
    },
}

/// ISA selection shared by every subcommand.
#[derive(Args, Debug)]
struct IsaArgs {
    /// Instruction set preset.
    #[arg(long, default_value = "rv64gc")]
    isa: Preset,

    /// Register width (32, 64 or 128); defaults to the preset's width.
    #[arg(long)]
    xlen: Option<u32>,

    /// Extra module appended after the preset's (repeatable).
    #[arg(long = "module", value_name = "MODULE")]
    modules: Vec<Module>,

    /// JSON ISA configuration file; replaces --isa, --xlen and --module.
    #[arg(long, conflicts_with_all = ["isa", "xlen", "modules"])]
    config: Option<PathBuf>,

    /// Address of the first instruction.
    #[arg(long, default_value = "0", value_parser = parse_address)]
    address: u64,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Words { isa, words } => cmd_words(&isa, &words),
        Commands::File { isa, path } => cmd_file(&isa, &path),
    };
    if let Err(e) = result {
        eprintln!("rvdis: {e}");
        process::exit(1);
    }
}

/// Parses a hex value with an optional `0x` prefix.
fn parse_hex(text: &str) -> Result<u64, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value `{text}`: {e}"))
}

fn parse_address(text: &str) -> Result<u64, String> {
    parse_hex(text)
}

fn parse_word(text: &str) -> Result<u32, String> {
    let value = parse_hex(text)?;
    u32::try_from(value).map_err(|_| format!("instruction word `{text}` exceeds 32 bits"))
}

/// Builds the ISA selected by the command-line options.
fn build_isa(args: &IsaArgs) -> Result<Isa, CliError> {
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            IsaConfig::from_json(&json)?
        }
        None => IsaConfig {
            xlen: args.xlen,
            modules: args.modules.clone(),
            ..IsaConfig::for_preset(args.isa)
        },
    };
    let isa = config.build()?;
    debug!(isa = %isa, "Using instruction set");
    Ok(isa)
}

/// Disassembles each word, advancing the address by its decoded length.
fn cmd_words(args: &IsaArgs, words: &[u32]) -> Result<(), CliError> {
    let isa = build_isa(args)?;
    let mut out = BufWriter::new(io::stdout().lock());
    let mut address = args.address;
    for &word in words {
        let line = isa.disassemble(address, word);
        writeln!(out, "{line}")?;
        address = address.wrapping_add(line.length as u64);
    }
    out.flush()?;
    Ok(())
}

/// Walks a binary image parcel by parcel.
fn cmd_file(args: &IsaArgs, path: &Path) -> Result<(), CliError> {
    let isa = build_isa(args)?;
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "Read binary");

    let mut out = BufWriter::new(io::stdout().lock());
    for line in walk(&isa, args.address, &bytes) {
        writeln!(out, "{line}")?;
    }
    if bytes.len() % 2 != 0 {
        warn!(len = bytes.len(), "Ignoring trailing odd byte");
    }
    out.flush()?;
    Ok(())
}

/// Disassembles `bytes` as a little-endian instruction stream starting at `base`.
///
/// A 32-bit instruction whose second parcel is missing is reported as an
/// illegal 16-bit parcel.
fn walk(isa: &Isa, base: u64, bytes: &[u8]) -> Vec<Disassembly> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    while let Some(low) = bytes.get(offset..offset + 2) {
        let parcel = u32::from(u16::from_le_bytes([low[0], low[1]]));
        let address = base.wrapping_add(offset as u64);
        let line = if parcel & 0b11 != 0b11 {
            isa.disassemble(address, parcel)
        } else if let Some(high) = bytes.get(offset + 2..offset + 4) {
            let word = parcel | u32::from(u16::from_le_bytes([high[0], high[1]])) << 16;
            isa.disassemble(address, word)
        } else {
            Disassembly {
                address: address & address_mask(isa.xlen().bits()),
                address_bits: isa.xlen().bits(),
                word: parcel,
                length: 2,
                assembly: ILLEGAL.to_owned(),
            }
        };
        offset += line.length;
        lines.push(line);
    }
    lines
}
