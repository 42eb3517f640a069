//! Computes, for every US postal code, the set of postal codes within 25 km,
//! and writes the resulting adjacency mapping to disk.

mod dataset;
mod output;
mod records;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use geonear::{pipeline, DiagnosticLog, SpatialIndex};

fn main() -> Result<()> {
    env_logger::init();

    let diagnostics = DiagnosticLog::new();
    let started = Instant::now();
    let output_dir = Path::new(".");

    // Acquisition failure is fatal: no mapping can be produced. Flush what
    // diagnostics exist and exit without writing the mapping artifact.
    let raw = match dataset::fetch_postal_data(&diagnostics) {
        Ok(raw) => raw,
        Err(err) => {
            output::write_diagnostics(&diagnostics, output_dir);
            return Err(err);
        }
    };

    let records = records::parse_postal_records(raw.as_slice(), &diagnostics);
    log::info!("parsed {} postal code records", records.len());

    let index = SpatialIndex::build(&records);
    let map = pipeline::run(&index);

    output::write_results(&map, &diagnostics, started.elapsed(), output_dir);
    output::write_diagnostics(&diagnostics, output_dir);
    Ok(())
}
