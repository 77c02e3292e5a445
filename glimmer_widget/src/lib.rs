// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glimmer Widget: render entry points for the XY and MDS widgets.
//!
//! The R side serializes each widget as a JSON payload. This crate decodes
//! it, converts column-oriented data frames into records, and wires the
//! embedder's views together:
//!
//! - [`XyWidget`] links a summary scatter plot, a table and an optional
//!   expression plot through a [`glimmer_link::SyncBridge`].
//! - [`MdsWidget`] keeps the variance explained chart in step with the MDS
//!   plot's axes and warns when a colour scheme runs out of colours.
//! - [`export`] produces CSV downloads and plot images.
//!
//! ```
//! use glimmer_widget::XyPayload;
//!
//! let payload = XyPayload::from_json(r#"{"data": {
//!     "table": {"gene": ["Foo", "Bar"], "index": [0, 1]},
//!     "counts": -1,
//!     "groups": {"group": "a", "sample": "S1"},
//!     "cols": ["gene"]
//! }}"#).unwrap();
//! assert!(payload.data.counts.is_none());
//! ```

pub mod export;
mod frame;
pub mod mds;
mod payload;
mod xy;

pub use frame::dataframe_to_rows;
pub use mds::{Axis, MdsPlot, MdsViews, MdsWidget};
pub use payload::{
    DataFrame, Features, Groups, MdsData, MdsPayload, OneOrManyStrings, PayloadError, XyData,
    XyPayload,
};
pub use xy::{XyPlot, XyViews, XyWidget};
