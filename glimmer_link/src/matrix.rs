// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-sample measurements and sample grouping.

use core::fmt;

use hashbrown::HashMap;
use serde_json::{Map, Number, Value};

/// Error returned when measurement or grouping data is inconsistent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// A column or row does not have the expected number of entries.
    Ragged {
        /// Name of the offending column, or the row position.
        what: String,
        /// Number of entries found.
        len: usize,
        /// Number of entries expected.
        expected: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                what,
                len,
                expected,
            } => write!(f, "{what} has {len} entries, expected {expected}"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Immutable mapping from entity index to a row of per-sample counts.
///
/// Sample names are kept in their natural column order. Counts keep the
/// number as it was written, so integers export as integers. Missing or
/// non-numeric values are stored as `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementMatrix {
    samples: Vec<String>,
    rows: Vec<Vec<Option<Number>>>,
}

impl MeasurementMatrix {
    /// Creates a matrix from sample names and rows of counts.
    ///
    /// Non-finite counts are stored as missing.
    pub fn new(samples: Vec<String>, rows: Vec<Vec<Option<f64>>>) -> Result<Self, MatrixError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.and_then(Number::from_f64)).collect())
            .collect();
        Self::from_numbers(samples, rows)
    }

    fn from_numbers(
        samples: Vec<String>,
        rows: Vec<Vec<Option<Number>>>,
    ) -> Result<Self, MatrixError> {
        if let Some((pos, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != samples.len())
        {
            return Err(MatrixError::Ragged {
                what: format!("row {pos}"),
                len: row.len(),
                expected: samples.len(),
            });
        }
        Ok(Self { samples, rows })
    }

    /// Creates a matrix from a column-oriented data frame, one column per sample.
    ///
    /// A scalar column counts as a single-row column.
    pub fn from_columns(columns: &Map<String, Value>) -> Result<Self, MatrixError> {
        let mut samples = Vec::with_capacity(columns.len());
        let mut cells: Vec<&[Value]> = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            let values = match column {
                Value::Array(values) => values.as_slice(),
                scalar => core::slice::from_ref(scalar),
            };
            if let Some(first) = cells.first()
                && first.len() != values.len()
            {
                return Err(MatrixError::Ragged {
                    what: format!("column `{name}`"),
                    len: values.len(),
                    expected: first.len(),
                });
            }
            samples.push(name.clone());
            cells.push(values);
        }

        let height = cells.first().map_or(0, |c| c.len());
        let rows = (0..height)
            .map(|row| {
                cells
                    .iter()
                    .map(|column| match &column[row] {
                        Value::Number(n) => Some(n.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .collect();
        Self::from_numbers(samples, rows)
    }

    /// Sample names in column order.
    #[must_use]
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`, or `None` if it is out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<MatrixRow<'_>> {
        self.rows.get(index).map(|counts| MatrixRow {
            samples: &self.samples,
            counts,
        })
    }
}

/// A borrowed row of a [`MeasurementMatrix`].
#[derive(Clone, Copy, Debug)]
pub struct MatrixRow<'a> {
    samples: &'a [String],
    counts: &'a [Option<Number>],
}

impl<'a> MatrixRow<'a> {
    /// Iterates `(sample, count)` pairs in column order.
    pub fn iter(self) -> impl Iterator<Item = (&'a str, Option<f64>)> + 'a {
        self.samples
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().map(|c| c.as_ref().and_then(Number::as_f64)))
    }

    /// The row as a record keyed by sample name, with `null` for missing counts.
    ///
    /// Counts keep their original JSON form.
    #[must_use]
    pub fn to_fields(&self) -> Map<String, Value> {
        self.samples
            .iter()
            .zip(self.counts)
            .map(|(sample, count)| {
                let value = count.clone().map_or(Value::Null, Value::Number);
                (sample.clone(), value)
            })
            .collect()
    }
}

/// Group membership of each sample, plus an optional display order of groups.
///
/// `groups[i]` is the group of `samples[i]`.
#[derive(Clone, Debug, Default)]
pub struct SampleGroups {
    groups: Vec<String>,
    samples: Vec<String>,
    levels: Option<Vec<String>>,
    by_sample: HashMap<String, usize>,
}

impl SampleGroups {
    /// Creates the mapping from parallel group/sample vectors.
    pub fn new(
        groups: Vec<String>,
        samples: Vec<String>,
        levels: Option<Vec<String>>,
    ) -> Result<Self, MatrixError> {
        if groups.len() != samples.len() {
            return Err(MatrixError::Ragged {
                what: "group list".into(),
                len: groups.len(),
                expected: samples.len(),
            });
        }
        let mut by_sample = HashMap::with_capacity(samples.len());
        for (pos, sample) in samples.iter().enumerate() {
            // First occurrence wins for duplicated sample names.
            by_sample.entry(sample.clone()).or_insert(pos);
        }
        Ok(Self {
            groups,
            samples,
            levels,
            by_sample,
        })
    }

    /// Sample names.
    #[must_use]
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Configured display order of groups, if any.
    #[must_use]
    pub fn levels(&self) -> Option<&[String]> {
        self.levels.as_deref()
    }

    /// Returns the group of `sample`, or `None` if it is not a known sample.
    #[must_use]
    pub fn group_of(&self, sample: &str) -> Option<&str> {
        self.by_sample
            .get(sample)
            .map(|&pos| self.groups[pos].as_str())
    }

    /// Sort rank of `group` under the configured levels.
    ///
    /// Groups that are not listed rank before every listed group. Returns
    /// `None` when no levels are configured.
    #[must_use]
    pub fn level_rank(&self, group: &str) -> Option<isize> {
        let levels = self.levels.as_ref()?;
        Some(
            levels
                .iter()
                .position(|level| level == group)
                .and_then(|pos| isize::try_from(pos).ok())
                .unwrap_or(-1),
        )
    }
}
