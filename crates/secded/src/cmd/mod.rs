use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::exit::{io_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a byte stream into SECDED codewords.
    Encode(EncodeArgs),
    /// Decode a codeword stream, correcting single-bit errors.
    Decode(DecodeArgs),
    /// Show per-codeword syndrome diagnostics.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file. `-` or absent reads stdin.
    pub input: Option<PathBuf>,
    /// Output file. `-` or absent writes stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input codeword file. `-` or absent reads stdin.
    pub input: Option<PathBuf>,
    /// Output file. `-` or absent writes stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Exit with the data-invalid code when uncorrectable codewords are
    /// detected. Output is still written in full.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input codeword file. `-` or absent reads stdin.
    pub input: Option<PathBuf>,
    /// Inspect at most N codewords.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn is_stdio(path: Option<&Path>) -> bool {
    match path {
        None => true,
        Some(p) => p.as_os_str() == "-",
    }
}

pub(crate) fn open_input(path: Option<&Path>) -> CliResult<Box<dyn Read>> {
    match path {
        Some(path) if !is_stdio(Some(path)) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(std::io::stdin().lock())),
    }
}

/// Open the output sink. The flag reports whether it is stdout, so callers
/// can keep reports off the data stream.
pub(crate) fn open_output(path: Option<&Path>) -> CliResult<(Box<dyn Write>, bool)> {
    match path {
        Some(path) if !is_stdio(Some(path)) => {
            let file = File::create(path)
                .map_err(|err| io_error(&format!("failed creating {}", path.display()), err))?;
            Ok((Box::new(file), false))
        }
        _ => Ok((Box::new(std::io::stdout().lock()), true)),
    }
}
