// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording fakes for the collaborator traits.

#![allow(dead_code, reason = "not every test binary uses every fake")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use glimmer_link::filter::SearchFilter;
use glimmer_link::view::{Banner, ChartView, CounterButton, ImageFormat, LabelSink, TableView, ViewError};
use glimmer_link::{Entity, MeasurementMatrix, SampleGroups};
use serde_json::Value;

/// Suspends once before completing, like a redraw handed to the event loop.
#[derive(Debug, Default)]
pub struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingChart {
    pub data: HashMap<String, Vec<Value>>,
    pub signals: HashMap<String, Value>,
    pub runs: usize,
}

impl RecordingChart {
    pub fn data_ids(&self, name: &str) -> Vec<String> {
        self.data
            .get(name)
            .map(|rows| {
                rows.iter()
                    .filter_map(|row| row.get("gene").and_then(Value::as_str).map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn signal_str(&self, name: &str) -> Option<&str> {
        self.signals.get(name).and_then(Value::as_str)
    }
}

impl ChartView for RecordingChart {
    fn set_data(&mut self, name: &str, rows: Vec<Value>) {
        self.data.insert(name.into(), rows);
    }

    fn signal(&self, name: &str) -> Value {
        self.signals.get(name).cloned().unwrap_or(Value::Null)
    }

    fn set_signal(&mut self, name: &str, value: Value) {
        self.signals.insert(name.into(), value);
    }

    fn run(&mut self) -> impl Future<Output = ()> {
        self.runs += 1;
        YieldOnce::default()
    }

    fn to_image_url(
        &mut self,
        format: ImageFormat,
        scale: f64,
    ) -> impl Future<Output = Result<String, ViewError>> {
        let url = format!("data:image/{};scale={scale}", format.extension());
        async move {
            YieldOnce::default().await;
            Ok(url)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Toggle(String),
    ClearHighlights,
    ClearSearch,
    Search(usize, SearchFilter),
    Draw,
}

#[derive(Debug, Default)]
pub struct RecordingTable {
    pub highlighted: Vec<String>,
    pub column_search: HashMap<usize, SearchFilter>,
    pub events: Vec<TableEvent>,
}

impl TableView for RecordingTable {
    fn toggle_row_highlight(&mut self, id: &str) {
        if let Some(pos) = self.highlighted.iter().position(|h| h == id) {
            self.highlighted.remove(pos);
        } else {
            self.highlighted.push(id.into());
        }
        self.events.push(TableEvent::Toggle(id.into()));
    }

    fn clear_row_highlights(&mut self) {
        self.highlighted.clear();
        self.events.push(TableEvent::ClearHighlights);
    }

    fn clear_search(&mut self) {
        self.column_search.clear();
        self.events.push(TableEvent::ClearSearch);
    }

    fn search_column(&mut self, column: usize, filter: &SearchFilter) {
        self.column_search.insert(column, filter.clone());
        self.events.push(TableEvent::Search(column, filter.clone()));
    }

    fn draw(&mut self) {
        self.events.push(TableEvent::Draw);
    }
}

#[derive(Debug, Default)]
pub struct RecordingBanner {
    pub shown: Option<String>,
}

impl Banner for RecordingBanner {
    fn show(&mut self, message: &str) {
        self.shown = Some(message.into());
    }

    fn hide(&mut self) {
        self.shown = None;
    }
}

/// Counter captions, shared with the test through `Rc`.
#[derive(Debug, Default, Clone)]
pub struct Labels(pub Rc<RefCell<HashMap<CounterButton, String>>>);

impl Labels {
    pub fn get(&self, button: CounterButton) -> Option<String> {
        self.0.borrow().get(&button).cloned()
    }
}

impl LabelSink for Labels {
    fn set_label(&mut self, button: CounterButton, text: &str) {
        self.0.borrow_mut().insert(button, text.into());
    }
}

pub fn entity(id: &str, index: usize) -> Entity {
    Entity::new(id, Some(index)).with_field("logFC", 1.0)
}

/// Three genes A, B, C at indices 0..3 over samples S1..S3 in groups g1, g2, g1.
pub fn matrix_and_groups() -> (MeasurementMatrix, SampleGroups) {
    let samples: Vec<String> = ["S1", "S2", "S3"].map(String::from).to_vec();
    let matrix = MeasurementMatrix::new(
        samples.clone(),
        vec![
            vec![Some(1.0), Some(2.0), Some(3.0)],
            vec![Some(10.0), Some(20.0), Some(30.0)],
            vec![Some(100.0), None, Some(300.0)],
        ],
    )
    .unwrap();
    let groups = SampleGroups::new(["g1", "g2", "g1"].map(String::from).to_vec(), samples, None).unwrap();
    (matrix, groups)
}
