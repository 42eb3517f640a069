//! Persistence of the adjacency mapping and diagnostic artifacts.
//!
//! Output failures are recoverable at the process level: the run has
//! already completed its computation, so a write failure is logged and the
//! artifact is simply missing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use geonear::{AdjacencyMap, DiagnosticLog};

/// The mapping artifact: postal code to array of nearby postal codes.
pub const ADJACENCY_ARTIFACT: &str = "NearbyPostalCodes.json";

/// The diagnostic artifact, written only when at least one message exists.
pub const DIAGNOSTIC_ARTIFACT: &str = "NearbyPostalCodesLog.txt";

/// Serializes the finished mapping to the JSON artifact under `dir` and
/// records the run outcome in the diagnostic log.
pub fn write_results(map: &AdjacencyMap, diagnostics: &DiagnosticLog, elapsed: Duration, dir: &Path) {
    if let Err(err) = write_adjacency(map, &dir.join(ADJACENCY_ARTIFACT)) {
        diagnostics.append(format!("could not write adjacency artifact: {}", err));
        log::error!("could not write {}: {}", ADJACENCY_ARTIFACT, err);
        return;
    }

    diagnostics.append(format!("time taken: {:?}", elapsed));
    diagnostics.append(format!("wrote {} entries to {}", map.len(), ADJACENCY_ARTIFACT));
    log::info!("wrote {} entries to {}", map.len(), ADJACENCY_ARTIFACT);
}

/// Writes the mapping as pretty-printed JSON to `path`.
pub fn write_adjacency(map: &AdjacencyMap, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, map)?;
    // An implicit flush in drop would discard the error
    writer.flush()?;
    Ok(())
}

/// Flushes accumulated diagnostics to the diagnostic artifact under `dir`.
pub fn write_diagnostics(diagnostics: &DiagnosticLog, dir: &Path) {
    match diagnostics.flush_to_file(&dir.join(DIAGNOSTIC_ARTIFACT)) {
        Ok(true) => log::info!(
            "wrote {} diagnostic messages to {}",
            diagnostics.len(),
            DIAGNOSTIC_ARTIFACT
        ),
        Ok(false) => {}
        Err(err) => log::error!("could not write {}: {}", DIAGNOSTIC_ARTIFACT, err),
    }
}
