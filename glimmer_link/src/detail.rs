// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detail panel: per-sample measurements of the most relevant selected record.
//!
//! The panel follows the selection. When a record is added, its measurement
//! row is shown. When a record is removed, the panel falls back to the last
//! record still selected, or is cleared if nothing is left.
//!
//! After every redraw the panel re-checks the user-entered y-axis bounds
//! against the data extent and shows or hides a warning banner.

use core::fmt;

use serde_json::{Value, json};

use crate::entity::Entity;
use crate::matrix::{MatrixRow, MeasurementMatrix, SampleGroups};
use crate::view::{Banner, ChartView, names};

/// One bar of the detail plot.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRecord {
    /// Group the sample belongs to.
    pub group: String,
    /// Sample name.
    pub sample: String,
    /// Measurement, `None` if missing.
    pub count: Option<f64>,
}

impl SampleRecord {
    /// The record as the detail plot consumes it.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "group": self.group,
            "sample": self.sample,
            "count": self.count,
        })
    }
}

/// Projects a measurement row into per-sample records.
///
/// Columns that are not known samples are skipped. Without configured levels
/// the records keep column order; otherwise they are stably sorted by the
/// level order of their group.
#[must_use]
pub fn project_row(row: MatrixRow<'_>, groups: &SampleGroups) -> Vec<SampleRecord> {
    let mut records: Vec<SampleRecord> = row
        .iter()
        .filter_map(|(sample, count)| {
            let group = groups.group_of(sample)?;
            Some(SampleRecord {
                group: group.into(),
                sample: sample.into(),
                count,
            })
        })
        .collect();
    if groups.levels().is_some() {
        records.sort_by_key(|record| groups.level_rank(&record.group));
    }
    records
}

/// Axis bound the user entered outside of the data extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisWarning {
    /// The entered minimum lies above the smallest value.
    MinOutOfBounds,
    /// The entered maximum lies below the largest value.
    MaxOutOfBounds,
}

impl AxisWarning {
    /// Banner text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MinOutOfBounds => "Y min out of bounds",
            Self::MaxOutOfBounds => "Y max out of bounds",
        }
    }
}

impl fmt::Display for AxisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks user-entered bounds against the data extent `(min, max)`.
///
/// The minimum check takes precedence. Unset inputs never warn, and neither
/// do comparisons involving NaN.
///
/// ```
/// use glimmer_link::detail::{AxisWarning, axis_warning};
///
/// assert_eq!(axis_warning((0.0, 10.0), Some(5.0), Some(20.0)), Some(AxisWarning::MinOutOfBounds));
/// assert_eq!(axis_warning((0.0, 10.0), None, Some(8.0)), Some(AxisWarning::MaxOutOfBounds));
/// assert_eq!(axis_warning((0.0, 10.0), Some(-1.0), None), None);
/// ```
#[must_use]
pub fn axis_warning(
    extent: (f64, f64),
    min_input: Option<f64>,
    max_input: Option<f64>,
) -> Option<AxisWarning> {
    let (min_extent, max_extent) = extent;
    if min_input.is_some_and(|min| min > min_extent) {
        return Some(AxisWarning::MinOutOfBounds);
    }
    if max_input.is_some_and(|max| max < max_extent) {
        return Some(AxisWarning::MaxOutOfBounds);
    }
    None
}

/// Reads a bound input signal: `null` and `""` are unset, strings are parsed.
///
/// Text that is not a number reads as NaN, which never triggers a warning.
#[must_use]
pub fn axis_input(value: &Value) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.trim().parse().unwrap_or(f64::NAN)),
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Array(_) | Value::Object(_) => Some(f64::NAN),
    }
}

fn extent_bound(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

/// What an update did to the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailUpdate {
    /// No detail panel is configured.
    Disabled,
    /// The measurements of record `id` are shown.
    Shown {
        /// Identifier of the displayed record.
        id: String,
    },
    /// The panel was emptied because nothing is selected.
    Cleared,
    /// The record has no measurement row; the panel was emptied.
    Missing {
        /// Identifier of the record.
        id: String,
        /// Its index, if it had one.
        index: Option<usize>,
    },
}

/// The secondary plot showing per-sample measurements.
#[derive(Debug)]
pub struct DetailPanel<V, B> {
    view: V,
    banner: B,
    matrix: MeasurementMatrix,
    groups: SampleGroups,
    warning: Option<AxisWarning>,
}

impl<V, B> DetailPanel<V, B> {
    /// Creates a panel drawing into `view` and warning through `banner`.
    pub fn new(view: V, banner: B, matrix: MeasurementMatrix, groups: SampleGroups) -> Self {
        Self {
            view,
            banner,
            matrix,
            groups,
            warning: None,
        }
    }

    /// The detail chart.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The detail chart, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The axis warning banner.
    pub fn banner(&self) -> &B {
        &self.banner
    }

    /// The measurements backing the panel.
    pub fn matrix(&self) -> &MeasurementMatrix {
        &self.matrix
    }

    /// The sample grouping.
    pub fn groups(&self) -> &SampleGroups {
        &self.groups
    }

    /// The warning currently shown, if any.
    pub fn warning(&self) -> Option<AxisWarning> {
        self.warning
    }
}

impl<V: ChartView, B: Banner> DetailPanel<V, B> {
    /// Refreshes the panel after `entity` was toggled.
    ///
    /// `added` is `true` when the toggle added `entity`; `selection` is the
    /// selection after the toggle.
    pub async fn update(&mut self, added: bool, entity: &Entity, selection: &[Entity]) -> DetailUpdate {
        let target = if added {
            entity
        } else if let Some(last) = selection.last() {
            last
        } else {
            self.clear().await;
            return DetailUpdate::Cleared;
        };
        self.show(target).await
    }

    /// Shows the measurements of `entity`.
    pub async fn show(&mut self, entity: &Entity) -> DetailUpdate {
        let Some(row) = entity.index().and_then(|index| self.matrix.row(index)) else {
            log::warn!(
                "no measurements for `{}` at index {:?} ({} rows); detail plot cleared",
                entity.id(),
                entity.index(),
                self.matrix.len()
            );
            self.clear().await;
            return DetailUpdate::Missing {
                id: entity.id().into(),
                index: entity.index(),
            };
        };

        let rows = project_row(row, &self.groups)
            .iter()
            .map(SampleRecord::to_value)
            .collect();
        self.view.set_data(names::DETAIL_TABLE, rows);
        self.view
            .set_signal(names::TITLE_SIGNAL, Value::String(format!("Gene {}", entity.id())));
        self.view.run().await;
        self.refresh_axis_warning();
        DetailUpdate::Shown {
            id: entity.id().into(),
        }
    }

    /// Empties the plot and its title.
    pub async fn clear(&mut self) {
        self.view.set_data(names::DETAIL_TABLE, Vec::new());
        self.view
            .set_signal(names::TITLE_SIGNAL, Value::String(String::new()));
        self.view.run().await;
        self.refresh_axis_warning();
    }

    /// Re-evaluates the axis bound warning and updates the banner.
    ///
    /// Call this when the bound inputs change as well as after redraws.
    pub fn refresh_axis_warning(&mut self) -> Option<AxisWarning> {
        let extent = (
            extent_bound(&self.view.signal(names::MIN_EXTENT)),
            extent_bound(&self.view.signal(names::MAX_EXTENT)),
        );
        let warning = axis_warning(
            extent,
            axis_input(&self.view.signal(names::MIN_Y_INPUT)),
            axis_input(&self.view.signal(names::MAX_Y_INPUT)),
        );
        match warning {
            Some(warning) => self.banner.show(warning.message()),
            None => self.banner.hide(),
        }
        self.warning = warning;
        warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(levels: Option<&[&str]>) -> SampleGroups {
        SampleGroups::new(
            ["trt", "ctl", "trt", "ctl"].map(String::from).to_vec(),
            ["S1", "S2", "S3", "S4"].map(String::from).to_vec(),
            levels.map(|l| l.iter().map(|s| String::from(*s)).collect()),
        )
        .unwrap()
    }

    fn matrix() -> MeasurementMatrix {
        MeasurementMatrix::new(
            ["S1", "S2", "extra", "S3", "S4"].map(String::from).to_vec(),
            vec![vec![Some(1.0), Some(2.0), Some(9.0), Some(3.0), None]],
        )
        .unwrap()
    }

    #[test]
    fn projection_skips_unknown_columns_and_keeps_order() {
        let m = matrix();
        let records = project_row(m.row(0).unwrap(), &groups(None));
        let samples: Vec<&str> = records.iter().map(|r| r.sample.as_str()).collect();
        assert_eq!(samples, ["S1", "S2", "S3", "S4"]);
        assert_eq!(records[3].count, None);
        assert_eq!(records[1].group, "ctl");
    }

    #[test]
    fn projection_sorts_stably_by_levels() {
        let m = matrix();
        let records = project_row(m.row(0).unwrap(), &groups(Some(&["ctl", "trt"])));
        let samples: Vec<&str> = records.iter().map(|r| r.sample.as_str()).collect();
        assert_eq!(samples, ["S2", "S4", "S1", "S3"]);
    }

    #[test]
    fn record_value_has_null_for_missing_count() {
        let r = SampleRecord {
            group: "g".into(),
            sample: "s".into(),
            count: None,
        };
        assert_eq!(r.to_value(), json!({"group": "g", "sample": "s", "count": null}));
    }

    #[test]
    fn min_warning_takes_precedence() {
        assert_eq!(
            axis_warning((0.0, 10.0), Some(5.0), Some(20.0)),
            Some(AxisWarning::MinOutOfBounds)
        );
        assert_eq!(
            axis_warning((0.0, 10.0), Some(5.0), Some(5.0)),
            Some(AxisWarning::MinOutOfBounds)
        );
    }

    #[test]
    fn inputs_inside_extent_do_not_warn() {
        assert_eq!(axis_warning((0.0, 10.0), Some(0.0), Some(10.0)), None);
        assert_eq!(axis_warning((0.0, 10.0), None, None), None);
        assert_eq!(axis_warning((f64::NAN, f64::NAN), Some(1.0), Some(1.0)), None);
    }

    #[test]
    fn axis_input_reads_blank_as_unset() {
        assert_eq!(axis_input(&Value::Null), None);
        assert_eq!(axis_input(&json!("")), None);
        assert_eq!(axis_input(&json!("2.5")), Some(2.5));
        assert_eq!(axis_input(&json!(4)), Some(4.0));
        assert!(axis_input(&json!("abc")).is_some_and(f64::is_nan));
    }
}
