//! Plumbing for the `ledger_report` binary: entries arrive as a JSON array on
//! stdin and the report is written to stdout.

use std::io::{self, Read, Write};

use tracing::info;

use crate::{
    config::{ConfigManager, ReportConfig},
    errors::CliError,
    ledger::{Entry, LedgerFormatter},
};

/// Reads entries from `input` and writes the formatted report to `output`.
pub fn run<R: Read, W: Write>(
    config: &ReportConfig,
    mut input: R,
    mut output: W,
) -> Result<(), CliError> {
    let formatter = LedgerFormatter::from_config(config)?;

    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let entries: Vec<Entry> = if raw.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&raw).map_err(|err| CliError::Input(err.to_string()))?
    };
    info!(
        "rendering {} entries as {} / {}",
        entries.len(),
        config.currency,
        config.locale
    );

    let report = formatter.format(&entries)?;
    output.write_all(report.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Entry point used by the binary: loads the stored configuration, applies
/// environment overrides and processes stdin.
pub fn run_cli() -> Result<(), CliError> {
    let config = ConfigManager::new().load()?.with_env_overrides();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), stdout.lock())
}
