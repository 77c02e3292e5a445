// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column-oriented data frames and the payload's R encoding quirks.
//!
//! Data frames arrive column-oriented (`{"gene": [...], "logFC": [...]}`)
//! and are turned into one record per row. Length-one vectors may arrive as
//! bare scalars, and absent optional inputs are encoded as `-1`.

use glimmer_link::MatrixError;
use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

/// Converts a column-oriented data frame into row records.
///
/// Every record lists the columns in frame order. A scalar column counts as
/// a single-row column. Columns of different lengths are rejected.
pub fn dataframe_to_rows(frame: &Map<String, Value>) -> Result<Vec<Map<String, Value>>, MatrixError> {
    let columns: Vec<(&String, &[Value])> = frame
        .iter()
        .map(|(name, column)| match column {
            Value::Array(values) => (name, values.as_slice()),
            scalar => (name, core::slice::from_ref(scalar)),
        })
        .collect();

    let height = columns.first().map_or(0, |(_, values)| values.len());
    if let Some((name, values)) = columns.iter().find(|(_, values)| values.len() != height) {
        return Err(MatrixError::Ragged {
            what: format!("column `{name}`"),
            len: values.len(),
            expected: height,
        });
    }

    Ok((0..height)
        .map(|row| {
            columns
                .iter()
                .map(|(name, values)| ((*name).clone(), values[row].clone()))
                .collect()
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(values) => values,
            OneOrMany::One(value) => vec![value],
        }
    }
}

/// Deserializes a vector that may have been flattened to a scalar.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

/// Like [`one_or_many`], with `null` read as absent.
pub(crate) fn optional_one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(|value| value.map(Vec::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Sentinel<T> {
    Marker(i64),
    Null,
    Present(T),
}

/// Deserializes an optional input where `-1` (or `null`) means absent.
pub(crate) fn absent_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Sentinel::deserialize(deserializer)? {
        Sentinel::Marker(-1) | Sentinel::Null => Ok(None),
        Sentinel::Marker(other) => Err(de::Error::custom(format_args!(
            "expected -1 for an absent value, found {other}"
        ))),
        Sentinel::Present(value) => Ok(Some(value)),
    }
}
