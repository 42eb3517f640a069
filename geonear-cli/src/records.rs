//! Parsing of the tab-separated geonames postal code records.
//!
//! Each row carries 12 tab-separated fields; the ones used here are the
//! postal code (1), place name (2), admin code (4), latitude (9) and
//! longitude (10). Malformed rows are skipped with a diagnostic entry, so
//! the offending point is simply absent from the index and the final
//! mapping.

use std::io::Read;

use geonear::{DiagnosticLog, GeoPoint, PointRecord};

/// Expected number of tab-separated fields per row.
const FIELDS_PER_RECORD: usize = 12;

const POSTAL_CODE_FIELD: usize = 1;
const CITY_FIELD: usize = 2;
const REGION_FIELD: usize = 4;
const LATITUDE_FIELD: usize = 9;
const LONGITUDE_FIELD: usize = 10;

/// Parses normalized point records from a tab-separated reader.
///
/// Never fails as a whole: unreadable or malformed rows are logged to
/// `diagnostics` and skipped.
pub fn parse_postal_records<R: Read>(reader: R, diagnostics: &DiagnosticLog) -> Vec<PointRecord> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                diagnostics.append(format!("could not read record from dataset: {}", err));
                continue;
            }
        };

        if row.len() != FIELDS_PER_RECORD {
            diagnostics.append(format!(
                "skipping record with {} fields (expected {})",
                row.len(),
                FIELDS_PER_RECORD
            ));
            continue;
        }

        let postal_code = &row[POSTAL_CODE_FIELD];

        let latitude: f64 = match row[LATITUDE_FIELD].parse() {
            Ok(value) => value,
            Err(err) => {
                diagnostics.append(format!(
                    "could not parse latitude for record {}: {}",
                    postal_code, err
                ));
                continue;
            }
        };

        let longitude: f64 = match row[LONGITUDE_FIELD].parse() {
            Ok(value) => value,
            Err(err) => {
                diagnostics.append(format!(
                    "could not parse longitude for record {}: {}",
                    postal_code, err
                ));
                continue;
            }
        };

        // Range check beyond mere parseability
        if let Err(err) = GeoPoint::new(latitude, longitude) {
            diagnostics.append(format!(
                "invalid coordinates for record {}: {}",
                postal_code, err
            ));
            continue;
        }

        records.push(PointRecord::new(
            postal_code,
            latitude,
            longitude,
            &row[CITY_FIELD],
            &row[REGION_FIELD],
        ));
    }

    records
}
