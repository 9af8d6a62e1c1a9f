use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use email_base32::{decode, encode, is_email_base32_with, Error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode up to 40 bytes read from a file, stdin, or --hex.
    Encode {
        #[arg()]
        input: Option<PathBuf>,

        #[arg(long, conflicts_with = "input")]
        hex: Option<String>,
    },
    /// Decode a symbol string to raw bytes.
    Decode {
        #[arg()]
        value: Option<String>,

        /// Print the bytes as lowercase hex.
        #[arg(long)]
        hex: bool,

        /// Fold the value to lowercase before decoding.
        #[arg(short, long)]
        lowercase: bool,
    },
    /// Print whether every character belongs to the alphabet.
    Check {
        #[arg()]
        value: Option<String>,

        #[arg(long)]
        case_sensitive: bool,
    },
}

fn read_input(input: Option<PathBuf>, hex: Option<String>) -> anyhow::Result<Vec<u8>> {
    if let Some(hex) = hex {
        return hex::decode(hex.trim()).context("--hex is not valid hex");
    }
    match input {
        Some(path) => fs::read(&path).with_context(|| format!("could not read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("stdin read error")?;
            Ok(buf)
        }
    }
}

/// Runs one command, writing its output to `out`. Returns whether the
/// command succeeded; only `check` can report failure without an error.
fn run(command: Commands, out: &mut impl Write) -> anyhow::Result<bool> {
    match command {
        Commands::Encode { input, hex } => {
            let src = read_input(input, hex)?;
            tracing::debug!(bytes = src.len(), "encoding");
            let encoded = encode(&src).context("encode failed")?;
            writeln!(out, "{}", encoded)?;
        }
        Commands::Decode { value, hex, lowercase } => {
            let value = value.ok_or(Error::NullInput)?;
            let value = if lowercase { value.to_ascii_lowercase() } else { value };
            tracing::debug!(symbols = value.chars().count(), "decoding");
            let bytes = decode(&value).context("decode failed")?;

            if hex {
                writeln!(out, "{}", hex::encode(&bytes))?;
            } else {
                out.write_all(&bytes)?;
            }
        }
        Commands::Check { value, case_sensitive } => {
            let valid = value.as_deref().is_some_and(|value| is_email_base32_with(value, !case_sensitive));
            writeln!(out, "{}", valid)?;
            out.flush().context("write error")?;
            return Ok(valid);
        }
    }

    out.flush().context("write error")?;
    Ok(true)
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting email-base32");

    let mut stdout = io::stdout().lock();
    if run(args.command, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
