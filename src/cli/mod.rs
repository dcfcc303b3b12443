pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// keyid — short opaque identifiers with a Luhn mod 63 check symbol.
#[derive(Parser, Debug)]
#[command(name = "keyid", version, about)]
pub struct Cli {
    /// Total key id length, check symbol included. Values below 16 are raised
    /// to 16; 0 or an empty value means the default of 32. Decimals are truncated.
    #[arg(long, global = true, env = "KEYID_LENGTH", value_parser = parse_length)]
    pub length: Option<i64>,

    /// Print JSON instead of one line per key id.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate new key ids.
    Generate {
        /// Seed the first seven symbols from the current time instead of randomness.
        #[arg(long)]
        unique: bool,

        /// How many key ids to print.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Check key ids against their check symbol. Exits non-zero if any is invalid.
    Validate {
        /// Key ids to check.
        ids: Vec<String>,

        /// Read additional key ids from a file, one per line.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Append the check symbol to caller-chosen data symbols (length - 1 of them).
    Seal {
        /// Data symbols drawn from a-z, A-Z, 0-9 and `_`.
        data: String,
    },
}

/// Parse CLI arguments. Called from `main`.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Accept integers or decimals; decimals are truncated toward zero.
fn parse_length(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n.trunc() as i64),
        _ => Err(format!("`{raw}` is not a number")),
    }
}
