// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table and plot export.
//!
//! Records export to CSV with one JSON-encoded value per cell. Plots export
//! through the chart view's own image renderer.

use glimmer_link::view::{ChartView, ImageFormat, ViewError};
use glimmer_link::{Entity, MeasurementMatrix};
use serde_json::{Map, Value};

/// File name offered for CSV downloads.
pub const CSV_FILE_NAME: &str = "glimmaTable.csv";

/// Scale factor for exported images.
pub const EXPORT_SCALE: f64 = 3.0;

const ROW_SEPARATOR: &str = "\r\n";

/// Fields of `entity`, followed by its per-sample counts when `matrix` has a
/// row for it.
///
/// A count column named like an existing field replaces that field's value.
#[must_use]
pub fn merge_counts(entity: &Entity, matrix: Option<&MeasurementMatrix>) -> Map<String, Value> {
    let mut record = entity.fields().clone();
    if let Some(row) = matrix.zip(entity.index()).and_then(|(m, index)| m.row(index)) {
        record.extend(row.to_fields());
    }
    record
}

/// Formats records as CSV.
///
/// The header lists the fields of the first record. Each cell is the JSON
/// encoding of the record's value for that field, `null` is written as `""`
/// and a missing field as an empty cell. Returns `None` for no records.
#[must_use]
pub fn records_to_csv(records: &[Map<String, Value>]) -> Option<String> {
    let header: Vec<&str> = records.first()?.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header.join(","));
    for record in records {
        let cells: Vec<String> = header
            .iter()
            .map(|field| match record.get(*field) {
                None => String::new(),
                Some(Value::Null) => "\"\"".to_owned(),
                Some(value) => value.to_string(),
            })
            .collect();
        lines.push(cells.join(","));
    }
    Some(lines.join(ROW_SEPARATOR))
}

/// Exports `entities` with their counts merged in.
#[must_use]
pub fn entities_to_csv<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    matrix: Option<&MeasurementMatrix>,
) -> Option<String> {
    let records: Vec<_> = entities
        .into_iter()
        .map(|entity| merge_counts(entity, matrix))
        .collect();
    records_to_csv(&records)
}

/// A rendered plot ready to be offered as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageExport {
    /// URL of the rendered image.
    pub url: String,
    /// Suggested file name.
    pub file_name: String,
}

/// Renders `view` to `format` at [`EXPORT_SCALE`], named `<label>.<ext>`.
pub async fn export_plot<V: ChartView>(
    view: &mut V,
    format: ImageFormat,
    label: &str,
) -> Result<ImageExport, ViewError> {
    let url = view.to_image_url(format, EXPORT_SCALE).await?;
    let file_name = format!("{label}.{}", format.extension());
    log::debug!("exported `{file_name}`");
    Ok(ImageExport { url, file_name })
}
