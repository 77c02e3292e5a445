// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode controller: which input channel currently owns the selection.
//!
//! Two channels can toggle records in and out of the selection: rows of the
//! data table and points of the plot. Letting both drive the selection at
//! once would mix a table narrowed by a graph-driven filter with direct row
//! clicks, so [`ModeController`] admits interactions by channel:
//!
//! | Current mode | Table click | Plot click                 |
//! |--------------|-------------|----------------------------|
//! | `None`       | → `Table`   | → `Graph`, clear first     |
//! | `Table`      | accepted    | → `Graph`, clear first     |
//! | `Graph`      | rejected    | accepted                   |
//!
//! After a graph toggle that leaves the selection empty, [`ModeController::settle`]
//! returns to `None` so that either channel may take over.
//!
//! ## Minimal example
//!
//! ```
//! use glimmer_link::mode::{Admission, Channel, Mode, ModeController};
//!
//! let mut mode = ModeController::new();
//! assert_eq!(mode.admit(Channel::Plot), Admission::Switched);
//! assert_eq!(mode.mode(), Mode::Graph);
//!
//! // Table clicks are ignored while the plot owns the selection.
//! assert_eq!(mode.admit(Channel::Table), Admission::Rejected);
//!
//! // The last point was deselected: both channels are open again.
//! mode.settle(true);
//! assert_eq!(mode.admit(Channel::Table), Admission::Accepted);
//! assert_eq!(mode.mode(), Mode::Table);
//! ```

/// Which channel owns selection semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Nothing is selected through a graph interaction; either channel may start.
    #[default]
    None,
    /// Selection is being driven by table row clicks.
    Table,
    /// Selection is being driven by plot clicks; table clicks are ignored.
    Graph,
}

/// Source of a selection interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// A click on a table row.
    Table,
    /// A click signal emitted by the plot.
    Plot,
}

/// Outcome of [`ModeController::admit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Admission {
    /// The interaction must be ignored.
    Rejected,
    /// The interaction may be processed as-is.
    Accepted,
    /// The mode changed to `Graph`; existing selection and table highlights
    /// must be cleared before processing the interaction.
    Switched,
}

/// Tracks the current [`Mode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Creates a controller in [`Mode::None`].
    #[must_use]
    pub const fn new() -> Self {
        Self { mode: Mode::None }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Decides whether an interaction from `channel` may proceed, updating the mode.
    pub fn admit(&mut self, channel: Channel) -> Admission {
        match (channel, self.mode) {
            (Channel::Table, Mode::Graph) => Admission::Rejected,
            (Channel::Table, _) => {
                self.transition(Mode::Table);
                Admission::Accepted
            }
            (Channel::Plot, Mode::Graph) => Admission::Accepted,
            (Channel::Plot, _) => {
                self.transition(Mode::Graph);
                Admission::Switched
            }
        }
    }

    /// Re-opens both channels if a graph-driven selection became empty.
    ///
    /// Table-driven selections keep `Table` mode when emptied.
    pub fn settle(&mut self, selection_is_empty: bool) {
        if self.mode == Mode::Graph && selection_is_empty {
            self.transition(Mode::None);
        }
    }

    /// Returns to [`Mode::None`] unconditionally.
    pub fn reset(&mut self) {
        self.transition(Mode::None);
    }

    fn transition(&mut self, to: Mode) {
        if self.mode != to {
            log::debug!("selection mode {:?} -> {:?}", self.mode, to);
            self.mode = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_none() {
        assert_eq!(ModeController::new().mode(), Mode::None);
        assert_eq!(ModeController::default().mode(), Mode::None);
    }

    #[test]
    fn table_clicks_claim_table_mode_without_switching() {
        let mut m = ModeController::new();
        assert_eq!(m.admit(Channel::Table), Admission::Accepted);
        assert_eq!(m.mode(), Mode::Table);
        assert_eq!(m.admit(Channel::Table), Admission::Accepted);
        assert_eq!(m.mode(), Mode::Table);
    }

    #[test]
    fn plot_click_switches_from_table_and_none() {
        let mut m = ModeController::new();
        assert_eq!(m.admit(Channel::Plot), Admission::Switched);

        let mut m = ModeController::new();
        let _ = m.admit(Channel::Table);
        assert_eq!(m.admit(Channel::Plot), Admission::Switched);
        assert_eq!(m.mode(), Mode::Graph);
        assert_eq!(m.admit(Channel::Plot), Admission::Accepted);
    }

    #[test]
    fn graph_mode_rejects_table() {
        let mut m = ModeController::new();
        let _ = m.admit(Channel::Plot);
        assert_eq!(m.admit(Channel::Table), Admission::Rejected);
        assert_eq!(m.mode(), Mode::Graph);
    }

    #[test]
    fn settle_only_reverts_empty_graph_selection() {
        let mut m = ModeController::new();
        let _ = m.admit(Channel::Plot);
        m.settle(false);
        assert_eq!(m.mode(), Mode::Graph);
        m.settle(true);
        assert_eq!(m.mode(), Mode::None);

        let _ = m.admit(Channel::Table);
        m.settle(true);
        assert_eq!(m.mode(), Mode::Table);
    }

    #[test]
    fn reset_returns_to_none() {
        let mut m = ModeController::new();
        let _ = m.admit(Channel::Plot);
        m.reset();
        assert_eq!(m.mode(), Mode::None);
    }
}
