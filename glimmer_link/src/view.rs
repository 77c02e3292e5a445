// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits implemented by the embedder.
//!
//! The chart engine and the table widget live outside this crate. The
//! coordinator only needs the small capability sets below; an embedder wraps
//! its real chart views and table widget in these traits, and tests use
//! recording fakes.

use core::fmt;
use core::future::{Future, ready};

use serde_json::Value;

use crate::filter::SearchFilter;

/// Data channel and signal names shared with the chart specifications.
pub mod names {
    /// Plot data channel receiving the selected records.
    pub const SELECTED_POINTS: &str = "selected_points";
    /// Detail plot data channel receiving per-sample records.
    pub const DETAIL_TABLE: &str = "table";
    /// Detail plot title signal.
    pub const TITLE_SIGNAL: &str = "title_signal";
    /// Lower bound of the detail plot's data extent.
    pub const MIN_EXTENT: &str = "min_extent";
    /// Upper bound of the detail plot's data extent.
    pub const MAX_EXTENT: &str = "max_extent";
    /// User-entered lower y-axis bound.
    pub const MIN_Y_INPUT: &str = "min_y_input";
    /// User-entered upper y-axis bound.
    pub const MAX_Y_INPUT: &str = "max_y_input";
}

/// Image formats a chart can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Raster export.
    Png,
    /// Vector export.
    Svg,
}

impl ImageFormat {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Error reported by a chart view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    /// Message from the chart engine.
    pub message: String,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart view error: {}", self.message)
    }
}

impl core::error::Error for ViewError {}

/// A rendered chart driven by named data channels and signals.
pub trait ChartView {
    /// Replaces the rows of data channel `name`.
    fn set_data(&mut self, name: &str, rows: Vec<Value>);

    /// Returns the current value of signal `name`, or `Value::Null` if unknown.
    fn signal(&self, name: &str) -> Value;

    /// Sets signal `name`.
    fn set_signal(&mut self, name: &str, value: Value);

    /// Re-evaluates the dataflow and redraws. Resolves once the redraw is done.
    fn run(&mut self) -> impl Future<Output = ()>;

    /// Renders the chart to an image and resolves to a URL for it.
    fn to_image_url(
        &mut self,
        format: ImageFormat,
        scale: f64,
    ) -> impl Future<Output = Result<String, ViewError>>;
}

/// The searchable data table listing every record.
///
/// Rows are addressed by record identifier.
pub trait TableView {
    /// Flips the selected highlight of the row for `id`.
    fn toggle_row_highlight(&mut self, id: &str);

    /// Removes the selected highlight from every row.
    fn clear_row_highlights(&mut self);

    /// Clears the global search and every column search.
    fn clear_search(&mut self);

    /// Applies `filter` to the search of `column`.
    fn search_column(&mut self, column: usize, filter: &SearchFilter);

    /// Redraws the table with the current searches.
    fn draw(&mut self);
}

/// A warning box that can be shown with a message or hidden.
pub trait Banner {
    /// Shows `message`.
    fn show(&mut self, message: &str);

    /// Hides the banner.
    fn hide(&mut self);
}

/// Buttons whose captions count the selected records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterButton {
    /// Saves the selected records.
    Save,
    /// Clears the selection.
    Clear,
}

impl CounterButton {
    /// Caption for `count` selected records, for example `Save (3)`.
    #[must_use]
    pub fn caption(self, count: usize) -> String {
        let name = match self {
            Self::Save => "Save",
            Self::Clear => "Clear",
        };
        format!("{name} ({count})")
    }
}

/// Receives counter captions whenever the selection is written.
pub trait LabelSink {
    /// Sets the caption of `button`.
    fn set_label(&mut self, button: CounterButton, text: &str);
}

/// Inert view used where no detail plot is configured.
///
/// Every operation is a no-op and every signal reads as `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Detached;

impl ChartView for Detached {
    fn set_data(&mut self, _name: &str, _rows: Vec<Value>) {}

    fn signal(&self, _name: &str) -> Value {
        Value::Null
    }

    fn set_signal(&mut self, _name: &str, _value: Value) {}

    fn run(&mut self) -> impl Future<Output = ()> {
        ready(())
    }

    fn to_image_url(
        &mut self,
        _format: ImageFormat,
        _scale: f64,
    ) -> impl Future<Output = Result<String, ViewError>> {
        ready(Err(ViewError {
            message: "no view attached".into(),
        }))
    }
}

impl Banner for Detached {
    fn show(&mut self, _message: &str) {}

    fn hide(&mut self) {}
}

impl LabelSink for Detached {
    fn set_label(&mut self, _button: CounterButton, _text: &str) {}
}
