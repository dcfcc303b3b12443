use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rand::Rng;

use keyid::util::fs::read_candidates;
use keyid::{Clock, GeneratedKey, KeyId, KeyMode, ValidationReport};

use crate::cli::{Cli, Command};

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let mut key = KeyId::new();
    key.set_length(cli.length);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate { unique, count } => {
            cmd_generate(&mut key, unique, count, cli.json, &mut out)
        }
        Command::Validate { ids, file } => {
            cmd_validate(&key, ids, file.as_deref(), cli.json, &mut out)
        }
        Command::Seal { data } => cmd_seal(&key, &data, &mut out),
    }
}

// ─── generate ───────────────────────────────────────────────────────────────

fn cmd_generate<R: Rng, C: Clock>(
    key: &mut KeyId<R, C>,
    unique: bool,
    count: usize,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mode = KeyMode::from(unique);
    let keys: Vec<GeneratedKey> = (0..count)
        .map(|_| GeneratedKey {
            id: key.generate(mode.is_unique()),
            mode,
            length: key.length(),
            generated_at: Utc::now(),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &keys).context("failed to serialize key ids")?;
        writeln!(out)?;
    } else {
        for k in &keys {
            writeln!(out, "{}", k.id)?;
        }
    }
    Ok(())
}

// ─── validate ───────────────────────────────────────────────────────────────

fn cmd_validate<R, C>(
    key: &KeyId<R, C>,
    mut ids: Vec<String>,
    file: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(path) = file {
        ids.extend(read_candidates(path)?);
    }
    if ids.is_empty() {
        bail!("no key ids to validate");
    }

    let reports: Vec<ValidationReport> = ids
        .into_iter()
        .map(|id| {
            let valid = key.validate(&id);
            ValidationReport { id, valid }
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)
            .context("failed to serialize validation results")?;
        writeln!(out)?;
    } else {
        for report in &reports {
            writeln!(out, "{report}")?;
        }
    }
    out.flush()?;

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        bail!(
            "{invalid} of {} key ids failed validation at length {}",
            reports.len(),
            key.length()
        );
    }
    Ok(())
}

// ─── seal ───────────────────────────────────────────────────────────────────

fn cmd_seal<R, C>(key: &KeyId<R, C>, data: &str, out: &mut impl Write) -> Result<()> {
    let id = key
        .seal(data)
        .with_context(|| format!("cannot seal '{data}' at length {}", key.length()))?;
    writeln!(out, "{id}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyid::{FixedClock, UniqueSeed};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_key(length: i64) -> KeyId<StdRng, FixedClock> {
        let mut key = KeyId::with_sources(
            StdRng::seed_from_u64(42),
            FixedClock(UniqueSeed([0, 1, 2, 3, 4, 5, 6])),
        );
        key.set_length(Some(length));
        key
    }

    #[test]
    fn generate_prints_one_id_per_line() {
        let mut key = test_key(20);
        let mut out = Vec::new();
        cmd_generate(&mut key, true, 3, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 20);
            assert!(line.starts_with("abcdefg"));
            assert!(key.validate(line));
        }
    }

    #[test]
    fn generate_json_reports_mode_and_length() {
        let mut key = test_key(16);
        let mut out = Vec::new();
        cmd_generate(&mut key, false, 2, true, &mut out).unwrap();

        let keys: Vec<GeneratedKey> = serde_json::from_slice(&out).unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().all(|k| k.mode == KeyMode::Random && k.length == 16));
    }

    #[test]
    fn validate_fails_when_any_id_is_invalid() {
        let key = test_key(16);
        let ids = vec!["abcdefghijklmnoC".to_string(), "abcdefghijklmnoD".to_string()];
        let mut out = Vec::new();

        let err = cmd_validate(&key, ids, None, false, &mut out).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("abcdefghijklmnoC\tvalid"));
        assert!(text.contains("abcdefghijklmnoD\tinvalid"));
    }

    #[test]
    fn validate_requires_input() {
        let key = test_key(16);
        let mut out = Vec::<u8>::new();
        assert!(cmd_validate(&key, Vec::new(), None, false, &mut out).is_err());
    }

    #[test]
    fn seal_appends_check_symbol() {
        let key = test_key(16);
        let mut out = Vec::new();
        cmd_seal(&key, "abcdefghijklmno", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "abcdefghijklmnoC\n");

        let err = cmd_seal(&key, "short", &mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("expected 15 data symbols"));
    }
}
