// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectable records.

use core::fmt;

use glimmer_selection::Keyed;
use serde_json::{Map, Value};

/// Field holding the unique identifier of a record.
pub const ID_FIELD: &str = "gene";

/// Field holding the row position of a record in the measurement matrix.
pub const INDEX_FIELD: &str = "index";

/// Error returned when a record cannot be used as an [`Entity`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityError {
    /// The identifier field is absent.
    MissingId,
    /// The identifier field is neither a string nor a number.
    InvalidId(String),
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingId => write!(f, "record has no `{ID_FIELD}` field"),
            Self::InvalidId(found) => {
                write!(f, "`{ID_FIELD}` must be a string or a number, found {found}")
            }
        }
    }
}

impl core::error::Error for EntityError {}

/// A selectable record such as a gene.
///
/// An entity keeps every field of the record it was built from, in the
/// original order, so that it can be pushed back to a chart or exported
/// unchanged. Selection identity is the identifier alone.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    id: String,
    index: Option<usize>,
    fields: Map<String, Value>,
}

impl Entity {
    /// Creates an entity with only the identifier and index fields.
    pub fn new(id: impl Into<String>, index: Option<usize>) -> Self {
        let id = id.into();
        let mut fields = Map::new();
        fields.insert(ID_FIELD.into(), Value::String(id.clone()));
        if let Some(index) = index {
            fields.insert(INDEX_FIELD.into(), Value::from(index));
        }
        Self { id, index, fields }
    }

    /// Builds an entity from a record.
    ///
    /// Numeric identifiers are accepted and compared by their decimal text.
    /// The index may be a non-negative integer or a string holding one; any
    /// other index value is treated as absent.
    pub fn from_record(fields: Map<String, Value>) -> Result<Self, EntityError> {
        let id = match fields.get(ID_FIELD) {
            None | Some(Value::Null) => return Err(EntityError::MissingId),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(EntityError::InvalidId(other.to_string())),
        };
        let index = fields.get(INDEX_FIELD).and_then(parse_index);
        Ok(Self { id, index, fields })
    }

    /// Adds or replaces a field, keeping identifier and index in sync.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == INDEX_FIELD {
            self.index = parse_index(&value);
        }
        if name != ID_FIELD {
            self.fields.insert(name, value);
        }
        self
    }

    /// The unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Row position in the measurement matrix, if the record carries a valid one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// All fields of the record in their original order.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a single field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The record as a JSON object, as charts consume it.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl Keyed for Entity {
    type Key = str;

    fn key(&self) -> &str {
        &self.id
    }
}

impl TryFrom<Value> for Entity {
    type Error = EntityError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::from_record(fields),
            _ => Err(EntityError::MissingId),
        }
    }
}

fn parse_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
