//! Replay history export (CSV/JSON) for downstream reporting.

use anyhow::{Context, Result};
use marklab_core::domain::DailySnapshot;
use std::fs::File;
use std::path::Path;

/// Write one trade's history as `date,equity,pnl,capital_used`.
pub fn write_history_csv(path: &Path, history: &[DailySnapshot]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create history CSV {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for snapshot in history {
        writer
            .serialize(snapshot)
            .context("Failed to serialize snapshot row")?;
    }
    writer.flush().context("Failed to flush history CSV")?;
    Ok(())
}

pub fn write_history_json(path: &Path, history: &[DailySnapshot]) -> Result<()> {
    let json = serde_json::to_string_pretty(history).context("Failed to serialize history")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write history JSON {}", path.display()))?;
    Ok(())
}
