//! CSV export of a user's BMI history.

use crate::{HistoryStore, Result};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    user_name: String,
    weight_kg: f64,
    height_m: f64,
    bmi: f64,
    classification: String,
}

/// Write all of a user's records to a CSV file with headers
///
/// Returns the number of rows written. An empty history writes nothing
/// and returns 0, leaving no file behind.
pub fn history_to_csv(store: &HistoryStore, user_name: &str, csv_path: &Path) -> Result<usize> {
    let records = store.list_all(user_name)?;

    if records.is_empty() {
        tracing::info!("No history for '{}' - nothing to export", user_name);
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(csv_path)?;
    for record in &records {
        writer.serialize(CsvRow {
            user_name: record.user_name.clone(),
            weight_kg: record.weight_kg,
            height_m: record.height_m,
            bmi: record.bmi,
            classification: record.classification().label().to_string(),
        })?;
    }
    writer.flush()?;

    tracing::info!("Exported {} entries to {:?}", records.len(), csv_path);
    Ok(records.len())
}
