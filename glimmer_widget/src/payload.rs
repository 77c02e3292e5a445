// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget payloads as emitted by the R side.

use core::fmt;

use glimmer_link::{EntityError, MatrixError};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::frame::{absent_as_none, one_or_many, optional_one_or_many};

/// A column-oriented data frame.
pub type DataFrame = Map<String, Value>;

/// Error returned when a payload cannot be turned into a widget.
#[derive(Debug)]
pub enum PayloadError {
    /// The payload is not valid JSON or does not have the expected shape.
    Json(serde_json::Error),
    /// A data frame or the sample grouping is inconsistent.
    Frame {
        /// Which part of the payload.
        name: &'static str,
        /// What is wrong with it.
        source: MatrixError,
    },
    /// A table row cannot be used as a selectable record.
    Row {
        /// Row position in the table.
        row: usize,
        /// What is wrong with it.
        source: EntityError,
    },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed payload: {err}"),
            Self::Frame { name, source } => write!(f, "invalid `{name}`: {source}"),
            Self::Row { row, source } => write!(f, "table row {row}: {source}"),
        }
    }
}

impl core::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Frame { source, .. } => Some(source),
            Self::Row { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Payload of the XY summary widget.
#[derive(Clone, Debug, Deserialize)]
pub struct XyPayload {
    /// Widget data.
    pub data: XyData,
}

impl XyPayload {
    /// Decodes a payload from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Data of the XY summary widget.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XyData {
    /// One row per record; must carry `gene` and `index` columns.
    pub table: DataFrame,
    /// Per-sample measurements, one column per sample.
    #[serde(default, deserialize_with = "absent_as_none")]
    pub counts: Option<DataFrame>,
    /// Sample groups.
    pub groups: Groups,
    /// Display order of the groups in the detail plot.
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub levels: Option<Vec<String>>,
    /// Table columns, in display order.
    #[serde(deserialize_with = "one_or_many")]
    pub cols: Vec<String>,
    /// Widget title.
    #[serde(default)]
    pub title: String,
    /// Column plotted on the x axis.
    #[serde(default)]
    pub x: String,
    /// Column plotted on the y axis.
    #[serde(default)]
    pub y: String,
    /// Columns shown in the plot tooltip.
    #[serde(default, deserialize_with = "absent_as_none")]
    pub anno_cols: Option<OneOrManyStrings>,
    /// Columns shown in the detail plot tooltip.
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub exp_cols: Option<Vec<String>>,
    /// Sample names.
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub samples: Option<Vec<String>>,
    /// Colours of the detail plot's samples.
    #[serde(default, deserialize_with = "absent_as_none")]
    pub sample_colours: Option<OneOrManyStrings>,
    /// Colours of the differential expression status levels.
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub status_colours: Option<Vec<String>>,
}

/// A string vector that may have been flattened to a single string.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct OneOrManyStrings(#[serde(deserialize_with = "one_or_many")] pub Vec<String>);

/// Group membership of each sample, as parallel columns.
#[derive(Clone, Debug, Deserialize)]
pub struct Groups {
    /// Group of each sample.
    #[serde(deserialize_with = "one_or_many")]
    pub group: Vec<String>,
    /// Sample names.
    #[serde(deserialize_with = "one_or_many")]
    pub sample: Vec<String>,
}

/// Payload of the MDS widget.
#[derive(Clone, Debug, Deserialize)]
pub struct MdsPayload {
    /// Widget data.
    pub data: MdsData,
}

impl MdsPayload {
    /// Decodes a payload from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Data of the MDS widget.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdsData {
    /// Sample coordinates and annotations, one row per sample.
    pub mds_data: DataFrame,
    /// Variance explained per dimension.
    pub eigen_data: DataFrame,
    /// Dimension names offered on the axes, such as `dim1`.
    #[serde(deserialize_with = "one_or_many")]
    pub dimlist: Vec<String>,
    /// Annotation columns usable for colour, shape and scale.
    pub features: Features,
    /// Whether colours are drawn from a continuous scale.
    #[serde(default)]
    pub continuous_colour: bool,
}

/// Annotation columns of the MDS data, by kind.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Features {
    /// Numeric columns.
    #[serde(default, deserialize_with = "one_or_many")]
    pub numeric: Vec<String>,
    /// Discrete columns.
    #[serde(default, deserialize_with = "one_or_many")]
    pub discrete: Vec<String>,
}
