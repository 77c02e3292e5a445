// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The XY summary widget: a scatter plot linked to a table and, when
//! per-sample counts are supplied, to an expression plot.

use glimmer_link::view::{Banner, ChartView, Detached, ImageFormat, LabelSink, TableView, ViewError};
use glimmer_link::{DetailPanel, Entity, Interaction, MeasurementMatrix, SampleGroups, SyncBridge};
use serde_json::Value;

use crate::export::{ImageExport, entities_to_csv, export_plot};
use crate::frame::dataframe_to_rows;
use crate::payload::{PayloadError, XyPayload};

/// Views the embedder renders for an XY widget.
#[derive(Debug)]
pub struct XyViews<P, T, L, D = Detached, B = Detached> {
    /// The summary scatter plot.
    pub plot: P,
    /// The table listing every record.
    pub table: T,
    /// Captions of the Save and Clear buttons.
    pub labels: L,
    /// The expression plot and its axis warning banner.
    pub detail: Option<(D, B)>,
}

/// Which plot of an XY widget to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XyPlot {
    /// The summary scatter plot.
    Summary,
    /// The per-sample expression plot.
    Expression,
}

impl XyPlot {
    fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary plot",
            Self::Expression => "Expression plot",
        }
    }
}

/// A rendered XY summary widget.
#[derive(Debug)]
pub struct XyWidget<P, T, D = Detached, B = Detached> {
    bridge: SyncBridge<P, T, D, B>,
    rows: Vec<Entity>,
    columns: Vec<String>,
    /// Counts kept for export when no expression plot holds them.
    counts: Option<MeasurementMatrix>,
}

impl<P, T, D, B> XyWidget<P, T, D, B>
where
    P: ChartView,
    T: TableView,
    D: ChartView,
    B: Banner,
{
    /// Builds the widget from its payload.
    ///
    /// The expression plot is only wired up when both the payload carries
    /// counts and the embedder supplied its views.
    pub fn render<L: LabelSink + 'static>(
        payload: XyPayload,
        views: XyViews<P, T, L, D, B>,
    ) -> Result<Self, PayloadError> {
        let data = payload.data;

        let rows = dataframe_to_rows(&data.table)
            .map_err(|source| PayloadError::Frame {
                name: "table",
                source,
            })?
            .into_iter()
            .enumerate()
            .map(|(row, record)| {
                Entity::from_record(record).map_err(|source| PayloadError::Row { row, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let counts = data
            .counts
            .as_ref()
            .map(MeasurementMatrix::from_columns)
            .transpose()
            .map_err(|source| PayloadError::Frame {
                name: "counts",
                source,
            })?;

        let (detail, counts) = match (counts, views.detail) {
            (Some(matrix), Some((view, banner))) => {
                let groups = SampleGroups::new(data.groups.group, data.groups.sample, data.levels)
                    .map_err(|source| PayloadError::Frame {
                        name: "groups",
                        source,
                    })?;
                (Some(DetailPanel::new(view, banner, matrix, groups)), None)
            }
            (counts, _) => {
                log::debug!("xy widget without expression plot");
                (None, counts)
            }
        };

        let bridge =
            SyncBridge::new(views.plot, views.table, views.labels).with_optional_detail(detail);
        log::debug!("xy widget `{}` with {} rows", data.title, rows.len());

        Ok(Self {
            bridge,
            rows,
            columns: data.cols,
            counts,
        })
    }

    /// Handles a click on table row `row`. Out-of-range rows are ignored.
    pub async fn on_table_row_click(&mut self, row: usize) -> Interaction {
        match self.rows.get(row) {
            Some(entity) => self.bridge.on_table_row_click(entity).await,
            None => Interaction::Ignored,
        }
    }

    /// Handles the plot's click signal.
    ///
    /// `null` is a click on empty canvas. A datum that is not a record with an
    /// identifier is logged and ignored.
    pub async fn on_plot_click(&mut self, datum: &Value) -> Interaction {
        if datum.is_null() {
            return self.bridge.on_plot_click(None).await;
        }
        match Entity::try_from(datum.clone()) {
            Ok(entity) => self.bridge.on_plot_click(Some(&entity)).await,
            Err(err) => {
                log::warn!("plot click ignored: {err}");
                Interaction::Ignored
            }
        }
    }

    /// Empties the selection and resets every view.
    pub async fn clear(&mut self) {
        self.bridge.clear().await;
    }

    /// Exports `plot` as an image.
    pub async fn save_plot(
        &mut self,
        plot: XyPlot,
        format: ImageFormat,
    ) -> Result<ImageExport, ViewError> {
        match plot {
            XyPlot::Summary => export_plot(self.bridge.plot_mut(), format, plot.label()).await,
            XyPlot::Expression => match self.bridge.detail_mut() {
                Some(detail) => export_plot(detail.view_mut(), format, plot.label()).await,
                None => Err(ViewError {
                    message: "no expression plot".into(),
                }),
            },
        }
    }
}

impl<P, T, D, B> XyWidget<P, T, D, B> {
    /// Layout is owned by the embedder; resizing changes nothing here.
    pub fn resize(&mut self, _width: f64, _height: f64) {}

    /// The linked selection coordinator.
    pub fn bridge(&self) -> &SyncBridge<P, T, D, B> {
        &self.bridge
    }

    /// The linked selection coordinator, mutably.
    pub fn bridge_mut(&mut self) -> &mut SyncBridge<P, T, D, B> {
        &mut self.bridge
    }

    /// Every table record, in table order.
    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }

    /// Table columns, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Per-sample counts, if the payload carried them.
    pub fn counts(&self) -> Option<&MeasurementMatrix> {
        self.bridge
            .detail()
            .map(DetailPanel::matrix)
            .or(self.counts.as_ref())
    }

    /// The selected records as CSV, or `None` when nothing is selected.
    pub fn selection_csv(&self) -> Option<String> {
        entities_to_csv(self.bridge.selection(), self.counts())
    }

    /// Every record as CSV.
    pub fn table_csv(&self) -> Option<String> {
        entities_to_csv(&self.rows, self.counts())
    }
}
