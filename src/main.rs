mod funds;
mod json_writer;
mod models;
mod summary;

use anyhow::Result;
use tracing::{error, info};

use crate::funds::build_records;
use crate::json_writer::export_to_file;
use crate::summary::summarize;

const OUTPUT_PATH: &str = "strike_funds_data.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting strike fund export");

    let funds = build_records();
    info!("Built {} strike fund records", funds.len());

    if let Err(e) = export_to_file(&funds, OUTPUT_PATH) {
        error!("Export to {} failed: {:#}", OUTPUT_PATH, e);
        return Err(e);
    }

    let summary = summarize(&funds);
    println!("{summary}");
    println!("Data saved to {OUTPUT_PATH}");

    info!("Export complete");
    Ok(())
}
