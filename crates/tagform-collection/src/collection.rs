//! Ordered widget collection
//!
//! [`WidgetCollection`] owns the ordered list of widget definitions for one
//! framework section and keeps every widget's `order` field equal to its
//! index. All operations are pure transformations over an immutable
//! snapshot: they either return a new, internally consistent collection or
//! (delete-not-found) a structurally equal copy of the input. Nothing here
//! can partially apply.
//!
//! Single-writer discipline is the caller's job: two inserts against the
//! same snapshot must be serialized by whoever owns the session.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tagform_widget::{ClientId, Widget};

/// Ordered sequence of widgets for one section
///
/// Invariants after any operation completes:
/// - `client_id` values are unique within the collection
/// - `widgets[i].order == i` for every index `i`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetCollection {
    widgets: Vector<Widget>,
}

impl WidgetCollection {
    /// Create an empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from fetched widgets, stamping order from position
    ///
    /// Input order wins over any `order` values carried by the widgets;
    /// fetch layers are expected to deliver widgets already sorted.
    #[must_use]
    pub fn from_widgets(widgets: impl IntoIterator<Item = Widget>) -> Self {
        Self {
            widgets: renumber(widgets.into_iter().collect()),
        }
    }

    /// Number of widgets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widget at an index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    /// Widget with a client id
    #[must_use]
    pub fn find(&self, client_id: ClientId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.client_id == client_id)
    }

    /// Index of the widget with a client id
    #[must_use]
    pub fn position(&self, client_id: ClientId) -> Option<usize> {
        self.widgets.iter().position(|w| w.client_id == client_id)
    }

    /// Whether a client id is present
    #[inline]
    #[must_use]
    pub fn contains(&self, client_id: ClientId) -> bool {
        self.position(client_id).is_some()
    }

    /// Iterate over widgets in order
    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    /// Set of live client ids, for attribute pruning
    #[must_use]
    pub fn client_ids(&self) -> HashSet<ClientId> {
        self.widgets.iter().map(|w| w.client_id).collect()
    }

    /// Snapshot as a plain vector, for hand-off to persistence layers
    #[must_use]
    pub fn to_vec(&self) -> Vec<Widget> {
        self.widgets.iter().cloned().collect()
    }

    /// Append a widget, then renumber
    ///
    /// Result length is input length + 1; no existing widget's client id
    /// changes. Inserting a client id that is already present violates the
    /// uniqueness invariant and is a caller bug (checked in debug builds).
    #[must_use]
    pub fn insert(&self, widget: Widget) -> Self {
        self.insert_at(self.widgets.len(), widget)
    }

    /// Splice a widget in at an index (clamped to the length), then renumber
    #[must_use]
    pub fn insert_at(&self, index: usize, widget: Widget) -> Self {
        debug_assert!(
            !self.contains(widget.client_id),
            "duplicate client id inserted into collection"
        );
        let mut widgets = self.widgets.clone();
        widgets.insert(index.min(widgets.len()), widget);
        Self {
            widgets: renumber(widgets),
        }
    }

    /// Replace the widget with a matching client id, keeping its index
    ///
    /// When no widget matches, the call degrades to an append. That miss
    /// path is load-bearing: an in-flight edit of a brand-new widget is
    /// committed through `replace` before the widget has ever been
    /// inserted. The result carries `updated`'s client id either way.
    #[must_use]
    pub fn replace(&self, client_id: ClientId, updated: Widget) -> Self {
        match self.position(client_id) {
            Some(index) => {
                let mut widgets = self.widgets.clone();
                widgets.set(index, updated);
                Self {
                    widgets: renumber(widgets),
                }
            }
            None => self.insert(updated),
        }
    }

    /// Remove the widget with a client id, then renumber
    ///
    /// Removing an absent id is a no-op: the returned collection is
    /// structurally equal to the input.
    #[must_use]
    pub fn delete(&self, client_id: ClientId) -> Self {
        match self.position(client_id) {
            Some(index) => {
                let mut widgets = self.widgets.clone();
                widgets.remove(index);
                Self {
                    widgets: renumber(widgets),
                }
            }
            None => self.clone(),
        }
    }

    /// Replace the full ordering (drag-and-drop result), re-stamping order
    ///
    /// The caller is responsible for supplying a permutation of the current
    /// client id set; the collection does not validate that the set is
    /// unchanged.
    #[must_use]
    pub fn reorder(&self, new_order: impl IntoIterator<Item = Widget>) -> Self {
        Self {
            widgets: renumber(new_order.into_iter().collect()),
        }
    }
}

impl FromIterator<Widget> for WidgetCollection {
    fn from_iter<I: IntoIterator<Item = Widget>>(iter: I) -> Self {
        Self::from_widgets(iter)
    }
}

/// Stamp every widget's order with its index
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn renumber(widgets: Vector<Widget>) -> Vector<Widget> {
    widgets
        .into_iter()
        .enumerate()
        .map(|(index, mut widget)| {
            widget.order = index as i32;
            widget
        })
        .collect()
}
