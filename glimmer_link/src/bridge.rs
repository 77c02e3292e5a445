// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator keeping plot, table and detail panel in one selection state.
//!
//! [`SyncBridge`] owns the selection store, the mode controller and the
//! views. Its two entry points mirror the two input channels:
//!
//! - [`SyncBridge::on_table_row_click`]: toggles the clicked row, then pushes
//!   the selection to the plot.
//! - [`SyncBridge::on_plot_click`]: toggles the clicked point, pushes the
//!   selection to the plot and narrows the table to the selected rows.
//!
//! Both are `async` because redraws are. They take `&mut self`, so one
//! interaction, including its awaited redraws, completes before the next one
//! can start.
//!
//! ## Minimal example
//!
//! ```
//! use glimmer_link::{Entity, Interaction, SyncBridge};
//! use glimmer_link::mode::Mode;
//! use glimmer_link::view::Detached;
//! # use glimmer_link::filter::SearchFilter;
//! # use glimmer_link::view::TableView;
//! # #[derive(Default)]
//! # struct Table;
//! # impl TableView for Table {
//! #     fn toggle_row_highlight(&mut self, _id: &str) {}
//! #     fn clear_row_highlights(&mut self) {}
//! #     fn clear_search(&mut self) {}
//! #     fn search_column(&mut self, _column: usize, _filter: &SearchFilter) {}
//! #     fn draw(&mut self) {}
//! # }
//!
//! let mut bridge = SyncBridge::new(Detached, Table, Detached);
//! let foo = Entity::new("Foo", Some(0));
//!
//! pollster::block_on(async {
//!     bridge.on_plot_click(Some(&foo)).await;
//!     assert_eq!(bridge.mode(), Mode::Graph);
//!
//!     // The plot owns the selection, so table clicks are ignored.
//!     let ignored = bridge.on_table_row_click(&Entity::new("Bar", Some(1))).await;
//!     assert_eq!(ignored, Interaction::Ignored);
//! });
//! ```

use glimmer_selection::{SelectionStore, Toggled};

use crate::detail::{DetailPanel, DetailUpdate};
use crate::entity::Entity;
use crate::filter::{ID_COLUMN, SearchFilter};
use crate::mode::{Admission, Channel, Mode, ModeController};
use crate::view::{Banner, ChartView, CounterButton, Detached, LabelSink, TableView, names};

/// What an entry point did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// The interaction was not admitted, or carried no record.
    Ignored,
    /// The record was toggled.
    Applied {
        /// Whether the record was added or removed.
        toggled: Toggled,
        /// What the detail panel did in response.
        detail: DetailUpdate,
    },
}

/// Keeps a plot, a table and an optional detail panel in one selection state.
#[derive(Debug)]
pub struct SyncBridge<P, T, D = Detached, B = Detached> {
    selection: SelectionStore<Entity>,
    mode: ModeController,
    plot: P,
    table: T,
    detail: Option<DetailPanel<D, B>>,
}

impl<P, T> SyncBridge<P, T> {
    /// Creates a bridge without a detail panel.
    ///
    /// Every write to the selection refreshes the `Save (N)` and `Clear (N)`
    /// captions through `labels`; they are written once here with `N = 0`.
    pub fn new(plot: P, table: T, labels: impl LabelSink + 'static) -> Self {
        let mut labels = labels;
        let mut selection = SelectionStore::with_on_change(move |items: &[Entity]| {
            for button in [CounterButton::Save, CounterButton::Clear] {
                labels.set_label(button, &button.caption(items.len()));
            }
        });
        selection.clear();
        Self {
            selection,
            mode: ModeController::new(),
            plot,
            table,
            detail: None,
        }
    }
}

impl<P, T, D, B> SyncBridge<P, T, D, B> {
    /// Attaches a detail panel, replacing any previous one.
    pub fn with_detail<D2, B2>(self, detail: DetailPanel<D2, B2>) -> SyncBridge<P, T, D2, B2> {
        self.with_optional_detail(Some(detail))
    }

    /// Like [`with_detail`](Self::with_detail), where `None` leaves the
    /// bridge without a panel but still fixes its panel types.
    pub fn with_optional_detail<D2, B2>(
        self,
        detail: Option<DetailPanel<D2, B2>>,
    ) -> SyncBridge<P, T, D2, B2> {
        SyncBridge {
            selection: self.selection,
            mode: self.mode,
            plot: self.plot,
            table: self.table,
            detail,
        }
    }

    /// The current selection, most recently added last.
    pub fn selection(&self) -> &[Entity] {
        self.selection.get()
    }

    /// The selection store.
    pub fn store(&self) -> &SelectionStore<Entity> {
        &self.selection
    }

    /// Which channel currently owns the selection.
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// The main plot.
    pub fn plot(&self) -> &P {
        &self.plot
    }

    /// The main plot, mutably.
    pub fn plot_mut(&mut self) -> &mut P {
        &mut self.plot
    }

    /// The table.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// The table, mutably.
    pub fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }

    /// The detail panel, if configured.
    pub fn detail(&self) -> Option<&DetailPanel<D, B>> {
        self.detail.as_ref()
    }

    /// The detail panel, mutably.
    pub fn detail_mut(&mut self) -> Option<&mut DetailPanel<D, B>> {
        self.detail.as_mut()
    }
}

impl<P, T, D, B> SyncBridge<P, T, D, B>
where
    P: ChartView,
    T: TableView,
    D: ChartView,
    B: Banner,
{
    /// Handles a click on the table row backed by `row`.
    ///
    /// Ignored while the plot owns the selection.
    pub async fn on_table_row_click(&mut self, row: &Entity) -> Interaction {
        if self.mode.admit(Channel::Table) == Admission::Rejected {
            log::debug!("table click on `{}` ignored in graph mode", row.id());
            return Interaction::Ignored;
        }

        self.table.toggle_row_highlight(row.id());
        let toggled = self.selection.toggle(row.clone());
        let detail = self.update_detail(toggled, row).await;
        self.push_selection().await;

        log::debug!("table click {:?} `{}`", toggled, row.id());
        Interaction::Applied { toggled, detail }
    }

    /// Handles a click signal from the plot.
    ///
    /// `None` is a click on empty canvas and does nothing.
    pub async fn on_plot_click(&mut self, datum: Option<&Entity>) -> Interaction {
        let Some(datum) = datum else {
            return Interaction::Ignored;
        };

        if self.mode.admit(Channel::Plot) == Admission::Switched {
            self.table.clear_row_highlights();
            self.selection.clear();
        }

        let toggled = self.selection.toggle(datum.clone());
        self.mode.settle(self.selection.is_empty());

        let detail = self.update_detail(toggled, datum).await;
        self.push_selection().await;
        self.apply_table_filter();

        log::debug!("plot click {:?} `{}`", toggled, datum.id());
        Interaction::Applied { toggled, detail }
    }

    /// Empties the selection and resets every view, as the Clear button does.
    pub async fn clear(&mut self) {
        self.mode.reset();
        self.selection.clear();
        self.table.clear_row_highlights();
        self.table.clear_search();
        self.table.draw();
        self.push_selection().await;
        if let Some(detail) = self.detail.as_mut() {
            detail.clear().await;
        }
        log::debug!("selection cleared");
    }

    async fn update_detail(&mut self, toggled: Toggled, entity: &Entity) -> DetailUpdate {
        match self.detail.as_mut() {
            Some(detail) => {
                detail
                    .update(toggled.occurred(), entity, self.selection.get())
                    .await
            }
            None => DetailUpdate::Disabled,
        }
    }

    async fn push_selection(&mut self) {
        let rows = self.selection.iter().map(Entity::to_value).collect();
        self.plot.set_data(names::SELECTED_POINTS, rows);
        self.plot.run().await;
    }

    fn apply_table_filter(&mut self) {
        let filter = SearchFilter::for_ids(self.selection.iter().map(Entity::id));
        self.table.clear_search();
        self.table.draw();
        self.table.search_column(ID_COLUMN, &filter);
        self.table.draw();
    }
}
