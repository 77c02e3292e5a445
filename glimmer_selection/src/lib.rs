// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glimmer Selection: the selection store shared by linked views.
//!
//! This crate owns the _bookkeeping_ of a linked selection: an ordered list of
//! selected records, unique by key, where insertion order is interaction order.
//! It does **not** know about tables, plots or input channels; the
//! coordinator in `glimmer_link` decides which interactions reach the store.
//!
//! The core type is [`SelectionStore`], which tracks:
//! - The selected records, most recently added last.
//! - A monotonically increasing **revision** counter that bumps when the
//!   selection contents change.
//! - An optional **change callback**, invoked synchronously on every write.
//!
//! Records are identified through the [`Keyed`] trait: two records with equal
//! keys are the same selection entry even if their other fields differ.
//!
//! ## Minimal example
//!
//! ```rust
//! use glimmer_selection::{SelectionStore, Toggled};
//!
//! let mut store = SelectionStore::<u32>::new();
//!
//! assert_eq!(store.toggle(10), Toggled::Added);
//! assert_eq!(store.toggle(20), Toggled::Added);
//! assert_eq!(store.get(), &[10, 20]);
//!
//! // Toggling an existing key removes it and keeps the others in order.
//! assert_eq!(store.toggle(10), Toggled::Removed);
//! assert_eq!(store.last(), Some(&20));
//! ```
//!
//! ## Change notification
//!
//! Every write goes through [`SelectionStore::set`], which calls the change
//! callback before returning. Widgets use this to keep counters such as
//! `Save (N)` in step with the selection:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use glimmer_selection::SelectionStore;
//!
//! let label = Rc::new(RefCell::new(String::new()));
//! let sink = Rc::clone(&label);
//! let mut store = SelectionStore::<u32>::with_on_change(move |items| {
//!     *sink.borrow_mut() = format!("Clear ({})", items.len());
//! });
//!
//! store.set([1, 2, 3]);
//! assert_eq!(*label.borrow(), "Clear (3)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A record that can be selected, identified by a key.
///
/// Selection identity is key equality, not value equality.
pub trait Keyed {
    /// The identifier type.
    type Key: PartialEq + ?Sized;

    /// Returns the identifier of this record.
    fn key(&self) -> &Self::Key;
}

macro_rules! keyed_by_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = Self;

                fn key(&self) -> &Self::Key {
                    self
                }
            }
        )*
    };
}

keyed_by_self!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

impl Keyed for String {
    type Key = str;

    fn key(&self) -> &str {
        self
    }
}

impl Keyed for &str {
    type Key = str;

    fn key(&self) -> &str {
        self
    }
}

/// Callback invoked with the new contents after every write to a [`SelectionStore`].
pub type ChangeCallback<T> = Box<dyn FnMut(&[T])>;

/// Result of [`SelectionStore::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggled {
    /// The record was not selected and has been appended.
    Added,
    /// The record was selected and has been removed.
    Removed,
}

impl Toggled {
    /// Returns `true` if the toggle added the record.
    #[must_use]
    pub fn occurred(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// An ordered, duplicate-free selection with change notification.
///
/// Records are stored in a `Vec<T>` in interaction order; uniqueness is
/// enforced by scanning for an equal [`Keyed::key`].
pub struct SelectionStore<T> {
    items: Vec<T>,
    revision: u64,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: fmt::Debug> fmt::Debug for SelectionStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T> Default for SelectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionStore<T> {
    /// Creates an empty store without a change callback.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
            on_change: None,
        }
    }

    /// Creates an empty store that calls `on_change` after every write.
    ///
    /// The callback is not invoked on construction.
    #[must_use]
    pub fn with_on_change(on_change: impl FnMut(&[T]) + 'static) -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
            on_change: Some(Box::new(on_change)),
        }
    }

    /// Replaces the change callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&[T]) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Returns the current selection in interaction order.
    #[must_use]
    pub fn get(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected records.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the most recently added record still in the selection.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a write changes the sequence of
    /// selected keys. Writes that leave it unchanged still invoke the change
    /// callback.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn notify(&mut self) {
        log::trace!("selection written: {} item(s)", self.items.len());
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.items);
        }
    }
}

impl<T: Keyed> SelectionStore<T> {
    /// Returns `true` if a record with `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with `items`.
    ///
    /// Records whose key already appeared earlier in the input are dropped.
    /// The change callback runs before this returns.
    pub fn set<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for item in items {
            if !new_items.iter().any(|existing| existing.key() == item.key()) {
                new_items.push(item);
            }
        }
        self.commit(new_items);
    }

    /// Empties the selection. The change callback still runs.
    pub fn clear(&mut self) {
        self.commit(Vec::new());
    }

    /// Adds `item` if its key is not selected, otherwise removes the selected
    /// record with that key.
    ///
    /// Removal preserves the relative order of the remaining records;
    /// addition appends. The write goes through the same path as
    /// [`SelectionStore::set`], so the change callback runs.
    pub fn toggle(&mut self, item: T) -> Toggled {
        let mut new_items = core::mem::take(&mut self.items);
        let toggled = if let Some(idx) = new_items.iter().position(|e| e.key() == item.key()) {
            new_items.remove(idx);
            Toggled::Removed
        } else {
            new_items.push(item);
            Toggled::Added
        };
        self.replace(new_items, true);
        toggled
    }

    fn position_of(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn commit(&mut self, new_items: Vec<T>) {
        let changed = new_items.len() != self.items.len()
            || new_items
                .iter()
                .zip(&self.items)
                .any(|(a, b)| a.key() != b.key());
        self.replace(new_items, changed);
    }

    fn replace(&mut self, new_items: Vec<T>, changed: bool) {
        self.items = new_items;
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        self.notify();
    }
}

#[cfg(feature = "hashbrown")]
impl<T> SelectionStore<T>
where
    T: Keyed,
    T::Key: core::hash::Hash + Eq,
{
    /// Replaces the selection with `items`, de-duplicating with hashing.
    ///
    /// Equivalent to [`SelectionStore::set`] but linear in the input length,
    /// which matters when a whole table is selected at once. First-occurrence
    /// order is preserved.
    pub fn set_hashed<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let keep: Vec<bool> = {
            let mut seen = hashbrown::HashSet::with_capacity(items.len());
            items.iter().map(|item| seen.insert(item.key())).collect()
        };
        let new_items = items
            .into_iter()
            .zip(keep)
            .filter_map(|(item, keep)| keep.then_some(item))
            .collect();
        self.commit(new_items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn commit_bumps_revision_only_on_key_change() {
        let mut store = SelectionStore::new();
        store.set([1_u32, 2]);
        assert_eq!(store.revision(), 1);

        store.set([1_u32, 2]);
        assert_eq!(store.revision(), 1);

        store.set([2_u32, 1]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn callback_runs_on_every_write() {
        let calls = Rc::new(Cell::new(0_usize));
        let seen = Rc::clone(&calls);
        let mut store = SelectionStore::<u32>::with_on_change(move |_| seen.set(seen.get() + 1));

        store.clear();
        store.set([1]);
        store.set([1]);
        let _ = store.toggle(1);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn string_keys_compare_by_str() {
        let mut store = SelectionStore::<String>::new();
        let _ = store.toggle(String::from("Foo"));
        assert!(store.contains("Foo"));
        assert!(!store.contains("foo"));
    }
}
