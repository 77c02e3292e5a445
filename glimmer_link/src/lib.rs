// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glimmer Link: linked selection between a plot, a table and a detail plot.
//!
//! An XY summary widget shows every record twice: as a point in a scatter
//! plot and as a row in a searchable table. A third view, the detail plot,
//! shows per-sample measurements of the most relevant selected record. This
//! crate keeps the three in one consistent selection state:
//!
//! - [`SyncBridge`] is the coordinator. It owns the selection store, the
//!   [`mode::ModeController`] and the views, and exposes one entry point per
//!   input channel.
//! - [`mode`] decides which channel may currently change the selection.
//! - [`detail`] derives the detail plot from the selection and checks the
//!   user's axis bounds.
//! - [`filter`] builds the table search that narrows the table to the points
//!   selected on the plot.
//! - [`view`] defines the traits the embedder implements for its chart
//!   engine, table widget, warning banners and counter labels.
//!
//! Rendering, chart specifications and table internals are out of scope; the
//! crate only talks to them through [`view`].
//!
//! ## Interaction rules
//!
//! - Clicking table rows toggles them in and out of the selection.
//! - Clicking a plot point while the table owns the selection starts over:
//!   the table highlights and the selection are cleared and the plot takes
//!   ownership. Table clicks are then ignored until the last plot-selected
//!   point is deselected or the selection is cleared.
//! - Every write to the selection refreshes the `Save (N)` and `Clear (N)`
//!   counters before the write returns.
//! - Adding a record shows it in the detail plot; removing one falls back to
//!   the last record still selected.

mod bridge;
pub mod detail;
mod entity;
pub mod filter;
pub mod matrix;
pub mod mode;
pub mod view;

pub use bridge::{Interaction, SyncBridge};
pub use detail::{DetailPanel, DetailUpdate};
pub use entity::{Entity, EntityError, ID_FIELD, INDEX_FIELD};
pub use glimmer_selection::{Keyed, SelectionStore, Toggled};
pub use matrix::{MatrixError, MeasurementMatrix, SampleGroups};
