//! Acquisition of the geonames postal code dataset.
//!
//! Downloads the zipped US postal code export, caching the archive on disk
//! so subsequent runs skip the network entirely, and extracts the `US.txt`
//! member. Acquisition failures are fatal to the run: without the dataset
//! no mapping can be produced.

use std::fs;
use std::io::{Cursor, Read};

use anyhow::Result;
use geonear::DiagnosticLog;

/// Source of the zipped postal code export.
pub const DATASET_URL: &str = "https://download.geonames.org/export/zip/US.zip";

/// On-disk cache of the downloaded archive.
pub const CACHE_FILE: &str = "US.zip";

/// The archive member holding the tab-separated records.
const DATASET_MEMBER: &str = "US.txt";

/// Returns the raw contents of `US.txt`, downloading and caching the
/// archive when no cached copy exists.
pub fn fetch_postal_data(diagnostics: &DiagnosticLog) -> Result<Vec<u8>> {
    let archive = match fs::read(CACHE_FILE) {
        Ok(bytes) => {
            log::info!("using cached archive {} ({} bytes)", CACHE_FILE, bytes.len());
            bytes
        }
        Err(_) => download_archive(diagnostics)?,
    };

    extract_member(&archive, diagnostics)
}

fn download_archive(diagnostics: &DiagnosticLog) -> Result<Vec<u8>> {
    log::info!("downloading {}", DATASET_URL);

    let response = match reqwest::blocking::get(DATASET_URL).and_then(|r| r.error_for_status()) {
        Ok(response) => response,
        Err(err) => {
            diagnostics.append(format!("could not download postal code data: {}", err));
            return Err(err.into());
        }
    };

    let bytes = match response.bytes() {
        Ok(bytes) => bytes.to_vec(),
        Err(err) => {
            diagnostics.append(format!(
                "could not read zipped postal code response body: {}",
                err
            ));
            return Err(err.into());
        }
    };

    // A missing cache only costs the next run a download
    if let Err(err) = fs::write(CACHE_FILE, &bytes) {
        diagnostics.append(format!("could not cache postal code archive: {}", err));
        log::warn!("could not write {}: {}", CACHE_FILE, err);
    }

    Ok(bytes)
}

fn extract_member(archive: &[u8], diagnostics: &DiagnosticLog) -> Result<Vec<u8>> {
    let mut zip = match zip::ZipArchive::new(Cursor::new(archive)) {
        Ok(zip) => zip,
        Err(err) => {
            diagnostics.append(format!("could not unzip postal code archive: {}", err));
            return Err(err.into());
        }
    };

    let mut member = match zip.by_name(DATASET_MEMBER) {
        Ok(member) => member,
        Err(err) => {
            diagnostics.append(format!(
                "could not open {} in postal code archive: {}",
                DATASET_MEMBER, err
            ));
            return Err(err.into());
        }
    };

    let mut contents = Vec::with_capacity(member.size() as usize);
    member.read_to_end(&mut contents)?;
    log::info!("extracted {} ({} bytes)", DATASET_MEMBER, contents.len());
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn archive_with(name: &str, contents: &[u8]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_member() {
        let archive = archive_with("US.txt", b"US\t10001\tNew York\n");
        let diagnostics = DiagnosticLog::new();

        let contents = extract_member(&archive, &diagnostics).unwrap();
        assert_eq!(contents, b"US\t10001\tNew York\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_extract_missing_member() {
        let archive = archive_with("readme.txt", b"not the dataset");
        let diagnostics = DiagnosticLog::new();

        let result = extract_member(&archive, &diagnostics);
        assert!(result.is_err());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.snapshot()[0].contains("US.txt"));
    }

    #[test]
    fn test_extract_corrupt_archive() {
        let diagnostics = DiagnosticLog::new();

        let result = extract_member(b"definitely not a zip file", &diagnostics);
        assert!(result.is_err());
        assert_eq!(diagnostics.len(), 1);
    }
}
