// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The MDS widget: a sample scatter plot beside a variance-explained bar
//! chart whose highlighted bars follow the plotted dimensions.

use hashbrown::HashSet;
use serde_json::{Map, Value};

use glimmer_link::view::{Banner, ChartView, ImageFormat, ViewError};

use crate::export::{ImageExport, export_plot};
use crate::frame::dataframe_to_rows;
use crate::payload::{Features, MdsPayload, PayloadError};

/// Signal and data names shared with the MDS chart specifications.
pub mod names {
    /// MDS plot signal holding the dimension on the x axis.
    pub const X_AXIS: &str = "x_axis";
    /// MDS plot signal holding the dimension on the y axis.
    pub const Y_AXIS: &str = "y_axis";
    /// Eigen plot signal highlighting the x dimension.
    pub const EXTERNAL_SELECT_X: &str = "external_select_x";
    /// Eigen plot signal highlighting the y dimension.
    pub const EXTERNAL_SELECT_Y: &str = "external_select_y";
    /// MDS plot signal naming the column points are coloured by.
    pub const COLOUR_BY: &str = "colour_by";
    /// MDS plot signal naming the colour scheme.
    pub const COLOUR_SCHEME: &str = "colourscheme";
}

/// Value of the colour signal that disables colouring.
const NO_COLOUR: &str = "-";

/// Number of distinct colours offered by each categorical scheme.
///
/// Continuous schemes and unknown names have no limit.
#[must_use]
pub fn scheme_size(scheme: &str) -> Option<usize> {
    let size = match scheme {
        "category10" | "tableau10" => 10,
        "category20" | "category20b" | "category20c" | "tableau20" => 20,
        "accent" | "dark2" | "pastel2" | "set2" => 8,
        "paired" | "set3" => 12,
        "pastel1" | "set1" => 9,
        _ => return None,
    };
    Some(size)
}

/// A plot axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    fn external_select(self) -> &'static str {
        match self {
            Self::X => names::EXTERNAL_SELECT_X,
            Self::Y => names::EXTERNAL_SELECT_Y,
        }
    }
}

/// Reads the dimension number from an axis value such as `dim3`.
///
/// Digits after the three-character prefix are read up to the first
/// non-digit.
#[must_use]
pub fn dimension_number(value: &str) -> Option<u32> {
    let digits = value.get(3..)?;
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Which plot of an MDS widget to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MdsPlot {
    /// The sample scatter plot.
    Mds,
    /// The variance explained bar chart.
    Eigen,
}

/// Views the embedder renders for an MDS widget.
#[derive(Debug)]
pub struct MdsViews<M, E, B> {
    /// The sample scatter plot.
    pub mds: M,
    /// The variance explained bar chart.
    pub eigen: E,
    /// Banner for the colour scheme warning.
    pub warning: B,
}

/// A rendered MDS widget.
#[derive(Debug)]
pub struct MdsWidget<M, E, B> {
    mds: M,
    eigen: E,
    warning: B,
    samples: Vec<Map<String, Value>>,
    eigen_values: Vec<Map<String, Value>>,
    dimensions: Vec<String>,
    features: Features,
    continuous_colour: bool,
}

impl<M, E, B> MdsWidget<M, E, B>
where
    M: ChartView,
    E: ChartView,
    B: Banner,
{
    /// Builds the widget from its payload.
    pub fn render(payload: MdsPayload, views: MdsViews<M, E, B>) -> Result<Self, PayloadError> {
        let data = payload.data;
        let samples = dataframe_to_rows(&data.mds_data).map_err(|source| PayloadError::Frame {
            name: "mdsData",
            source,
        })?;
        let eigen_values =
            dataframe_to_rows(&data.eigen_data).map_err(|source| PayloadError::Frame {
                name: "eigenData",
                source,
            })?;

        let mut features = data.features;
        features.numeric.sort();
        features.discrete.sort();

        log::debug!(
            "mds widget with {} samples over {} dimensions",
            samples.len(),
            data.dimlist.len()
        );
        Ok(Self {
            mds: views.mds,
            eigen: views.eigen,
            warning: views.warning,
            samples,
            eigen_values,
            dimensions: data.dimlist,
            features,
            continuous_colour: data.continuous_colour,
        })
    }

    /// Mirrors a change of the MDS plot's `axis` onto the eigen plot.
    ///
    /// Returns the highlighted dimension, or `None` when `value` names none.
    pub async fn on_axis_signal(&mut self, axis: Axis, value: &str) -> Option<u32> {
        let Some(dimension) = dimension_number(value) else {
            log::warn!("axis value `{value}` names no dimension");
            return None;
        };
        self.eigen
            .set_signal(axis.external_select(), Value::from(dimension));
        self.eigen.run().await;
        Some(dimension)
    }

    /// Shows or hides the colour warning for the current colour settings.
    ///
    /// The warning is shown when the scheme has fewer colours than the
    /// colouring column has distinct values.
    pub fn refresh_colour_warning(&mut self) -> Option<String> {
        self.warning.hide();
        if self.continuous_colour {
            return None;
        }

        let colour_by = self.mds.signal(names::COLOUR_BY);
        let scheme = self.mds.signal(names::COLOUR_SCHEME);
        let (Some(colour_by), Some(scheme)) = (colour_by.as_str(), scheme.as_str()) else {
            return None;
        };
        if colour_by == NO_COLOUR {
            return None;
        }
        let supported = scheme_size(scheme)?;

        let distinct = self
            .samples
            .iter()
            .filter_map(|sample| sample.get(colour_by).map(Value::to_string))
            .collect::<HashSet<_>>()
            .len();
        if supported >= distinct {
            return None;
        }

        let message = format!("Warning: not enough distinct colours. {supported} supported.");
        log::debug!("{distinct} levels of `{colour_by}` exceed scheme `{scheme}`");
        self.warning.show(&message);
        Some(message)
    }

    /// Exports `plot` as an image.
    pub async fn save_plot(
        &mut self,
        plot: MdsPlot,
        format: ImageFormat,
    ) -> Result<ImageExport, ViewError> {
        match plot {
            MdsPlot::Mds => export_plot(&mut self.mds, format, "MDS plot").await,
            MdsPlot::Eigen => export_plot(&mut self.eigen, format, "Variance explained").await,
        }
    }
}

impl<M, E, B> MdsWidget<M, E, B> {
    /// Layout is owned by the embedder; resizing changes nothing here.
    pub fn resize(&mut self, _width: f64, _height: f64) {}

    /// One record per sample.
    pub fn samples(&self) -> &[Map<String, Value>] {
        &self.samples
    }

    /// Variance explained, one record per dimension.
    pub fn eigen_values(&self) -> &[Map<String, Value>] {
        &self.eigen_values
    }

    /// Dimension names offered on the axes.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Annotation columns, sorted within each kind.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// The sample scatter plot.
    pub fn mds(&self) -> &M {
        &self.mds
    }

    /// The sample scatter plot, mutably.
    pub fn mds_mut(&mut self) -> &mut M {
        &mut self.mds
    }

    /// The variance explained bar chart.
    pub fn eigen(&self) -> &E {
        &self.eigen
    }

    /// The colour warning banner.
    pub fn warning(&self) -> &B {
        &self.warning
    }
}
