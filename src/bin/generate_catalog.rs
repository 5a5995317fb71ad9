//! Writes a `movies_data.csv` demo catalog so the browser can be exercised
//! against a real file instead of the in-process fallback.

use anyhow::{Context, Result};

use cinerack::fallback_catalog;

const OUTPUT_PATH: &str = "movies_data.csv";
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let catalog = fallback_catalog(SEED);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    for rec in &catalog.records {
        writer.serialize(rec).context("writing record")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} movies to {OUTPUT_PATH}", catalog.len());
    Ok(())
}
