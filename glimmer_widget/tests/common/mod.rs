// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal recording views.

#![allow(dead_code, reason = "not every test binary uses every fake")]

use std::collections::HashMap;
use std::future::{Future, ready};

use glimmer_link::filter::SearchFilter;
use glimmer_link::view::{Banner, ChartView, ImageFormat, TableView, ViewError};
use serde_json::Value;

#[derive(Debug, Default)]
pub struct Chart {
    pub data: HashMap<String, Vec<Value>>,
    pub signals: HashMap<String, Value>,
    pub runs: usize,
}

impl ChartView for Chart {
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
        ready(())
    }

    fn to_image_url(
        &mut self,
        format: ImageFormat,
        scale: f64,
    ) -> impl Future<Output = Result<String, ViewError>> {
        ready(Ok(format!("data:image/{};scale={scale}", format.extension())))
    }
}

#[derive(Debug, Default)]
pub struct Table {
    pub highlighted: Vec<String>,
    pub search: Option<SearchFilter>,
}

impl TableView for Table {
    fn toggle_row_highlight(&mut self, id: &str) {
        if let Some(pos) = self.highlighted.iter().position(|h| h == id) {
            self.highlighted.remove(pos);
        } else {
            self.highlighted.push(id.into());
        }
    }

    fn clear_row_highlights(&mut self) {
        self.highlighted.clear();
    }

    fn clear_search(&mut self) {
        self.search = None;
    }

    fn search_column(&mut self, _column: usize, filter: &SearchFilter) {
        self.search = Some(filter.clone());
    }

    fn draw(&mut self) {}
}

#[derive(Debug, Default)]
pub struct Warning {
    pub shown: Option<String>,
}

impl Banner for Warning {
    fn show(&mut self, message: &str) {
        self.shown = Some(message.into());
    }

    fn hide(&mut self) {
        self.shown = None;
    }
}
