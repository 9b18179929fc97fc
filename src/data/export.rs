use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Observation, TimeSeries};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write observations to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "observation_id": ..., "time": ..., "x": [...], "y": [...] }, ...]`
/// * `.csv`  – one row per sample, header `time,x,<variable>`
pub fn export_file(path: &Path, variable: &str, observations: &[Observation]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => export_json(path, observations),
        "csv" => export_csv(path, variable, observations),
        other => bail!("Unsupported export extension: .{other}"),
    }
}

/// Export the whole series.
pub fn export_series(path: &Path, series: &TimeSeries) -> Result<()> {
    export_file(path, &series.variable, &series.observations)
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

fn export_json(path: &Path, observations: &[Observation]) -> Result<()> {
    let file = File::create(path).context("creating JSON file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, observations).context("writing JSON")?;
    writer.flush().context("flushing JSON file")?;
    Ok(())
}

fn export_csv(path: &Path, variable: &str, observations: &[Observation]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    writer
        .write_record(["time", "x", variable])
        .context("writing CSV header")?;

    for obs in observations {
        for sample in obs.samples() {
            writer
                .serialize((obs.time, sample.x, sample.value))
                .with_context(|| format!("writing CSV row of {}", obs.id))?;
        }
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}
