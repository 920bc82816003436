//! Attribute value store
//!
//! An [`Attribute`] is the value a user entered against one widget for one
//! tagged document. The [`AttributeStore`] keeps the widget-key -> attribute
//! mapping for a single document and is rebuilt/pruned whenever the widget
//! collection changes shape, so attributes never outlive their widget.
//!
//! Values are carried as raw `serde_json::Value` end to end; the variant
//! dispatcher in `tagform-widget` owns the typed casts.

use crate::collection::WidgetCollection;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tagform_widget::{ClientId, Widget, WidgetKind, WidgetRegistry};

/// The raw value slot of one attribute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeData {
    /// User-entered value, in wire shape
    pub value: Value,
}

/// One user-entered value against one widget
///
/// Holds a weak reference to its widget (`widget` is the widget's client
/// id, the stable join key); widget lifecycle is owned by the collection.
/// `widget_type` and `widget_version` are copied at creation time so the
/// dispatcher can resolve behavior without re-looking-up the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute's own id, independent of the widget's
    pub client_id: ClientId,
    /// Client id of the widget this attribute answers
    pub widget: ClientId,
    /// Widget kind at attribute-creation time
    pub widget_type: WidgetKind,
    /// Value schema version, resolved from the registry at creation time
    pub widget_version: u32,
    /// The value itself
    pub data: AttributeData,
}

impl Attribute {
    /// Create an attribute for a widget with a raw value
    #[must_use]
    pub fn new(widget: &Widget, value: Value) -> Self {
        Self {
            client_id: ClientId::new(),
            widget: widget.client_id,
            widget_type: widget.kind,
            widget_version: WidgetRegistry::global().version_of(widget.kind),
            data: AttributeData { value },
        }
    }

    /// The raw value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.data.value
    }
}

/// Widget-key -> attribute mapping for one document
///
/// Iteration order is insertion order, so pruning preserves the relative
/// order of survivors. Operations are pure: each returns a new store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeStore {
    entries: IndexMap<ClientId, Attribute>,
}

impl AttributeStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from fetched attributes, keyed by widget id
    ///
    /// Later duplicates for the same widget win, matching last-write
    /// semantics of the upsert path.
    #[must_use]
    pub fn from_attributes(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        Self {
            entries: attributes.into_iter().map(|a| (a.widget, a)).collect(),
        }
    }

    /// Synthesize default attributes for a freshly opened document
    ///
    /// One attribute per widget whose kind supports a static default and
    /// whose configuration declares one; all other widgets are skipped and
    /// simply have no attribute until the user enters a value. Output order
    /// matches widget order. Idempotent modulo fresh attribute ids.
    #[must_use]
    pub fn build_defaults(collection: &WidgetCollection) -> Self {
        let registry = WidgetRegistry::global();
        let entries = collection
            .iter()
            .filter(|widget| registry.lookup(widget.kind).supports_default)
            .filter_map(|widget| {
                let value = widget.properties.static_default()?;
                Some((widget.client_id, Attribute::new(widget, value)))
            })
            .collect();

        Self { entries }
    }

    /// Number of attributes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute for a widget, if the user (or a default) has entered one
    #[inline]
    #[must_use]
    pub fn get(&self, widget_id: ClientId) -> Option<&Attribute> {
        self.entries.get(&widget_id)
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    /// Snapshot as a plain vector, for hand-off to persistence layers
    #[must_use]
    pub fn to_vec(&self) -> Vec<Attribute> {
        self.entries.values().cloned().collect()
    }

    /// Update the value for a widget, or create an attribute if none exists
    ///
    /// An existing attribute keeps its client id; only `data.value`
    /// changes.
    #[must_use]
    pub fn upsert(&self, widget: &Widget, value: Value) -> Self {
        let mut entries = self.entries.clone();
        match entries.get_mut(&widget.client_id) {
            Some(attribute) => attribute.data.value = value,
            None => {
                entries.insert(widget.client_id, Attribute::new(widget, value));
            }
        }
        Self { entries }
    }

    /// Drop every attribute whose widget is no longer live
    ///
    /// Survivors keep their relative order. Must be paired with every
    /// structural widget removal so attributes never orphan.
    #[must_use]
    pub fn prune(&self, live_widget_ids: &HashSet<ClientId>) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(widget_id, _)| live_widget_ids.contains(*widget_id))
                .map(|(widget_id, attribute)| (*widget_id, attribute.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tagform_widget::{NumberProperties, WidgetProperties};

    fn number_widget_with_default(default: f64) -> Widget {
        WidgetRegistry::global()
            .instantiate(WidgetKind::Number)
            .with_properties(WidgetProperties::Number(NumberProperties {
                min_value: None,
                max_value: None,
                default_value: Some(default),
            }))
    }

    #[test]
    fn build_defaults_number() {
        let widget = number_widget_with_default(5.0);
        let collection = WidgetCollection::new().insert(widget.clone());

        let store = AttributeStore::build_defaults(&collection);

        assert_eq!(store.len(), 1);
        let attribute = store.get(widget.client_id).unwrap();
        assert_eq!(attribute.value(), &json!(5.0));
        assert_eq!(attribute.widget_type, WidgetKind::Number);
        assert_eq!(attribute.widget, widget.client_id);
        assert_eq!(
            attribute.widget_version,
            WidgetRegistry::global().version_of(WidgetKind::Number)
        );
    }

    #[test]
    fn build_defaults_skips_widgets_without_default() {
        let plain = WidgetRegistry::global().instantiate(WidgetKind::Number);
        let collection = WidgetCollection::new().insert(plain);

        let store = AttributeStore::build_defaults(&collection);
        assert!(store.is_empty());
    }

    #[test]
    fn build_defaults_skips_unsupported_kinds() {
        // Even a matrix configured by hand never auto-populates.
        let matrix = WidgetRegistry::global().instantiate(WidgetKind::Matrix2d);
        let collection = WidgetCollection::new().insert(matrix);

        let store = AttributeStore::build_defaults(&collection);
        assert!(store.is_empty());
    }

    #[test]
    fn build_defaults_order_matches_widgets() {
        let first = number_widget_with_default(1.0);
        let second = number_widget_with_default(2.0);
        let collection = WidgetCollection::new()
            .insert(first.clone())
            .insert(second.clone());

        let store = AttributeStore::build_defaults(&collection);
        let widgets: Vec<_> = store.iter().map(|a| a.widget).collect();
        assert_eq!(widgets, vec![first.client_id, second.client_id]);
    }

    #[test]
    fn build_defaults_idempotent_modulo_ids() {
        let widget = number_widget_with_default(7.0);
        let collection = WidgetCollection::new().insert(widget.clone());

        let a = AttributeStore::build_defaults(&collection);
        let b = AttributeStore::build_defaults(&collection);

        assert_eq!(a.len(), b.len());
        let (a, b) = (
            a.get(widget.client_id).unwrap(),
            b.get(widget.client_id).unwrap(),
        );
        assert_eq!(a.value(), b.value());
        assert_eq!(a.widget_type, b.widget_type);
        assert_ne!(a.client_id, b.client_id); // fresh ids each time
    }

    #[test]
    fn upsert_creates_then_updates() {
        let widget = WidgetRegistry::global().instantiate(WidgetKind::Text);
        let store = AttributeStore::new();

        let store = store.upsert(&widget, json!("first"));
        let created_id = store.get(widget.client_id).unwrap().client_id;

        let store = store.upsert(&widget, json!("second"));
        let attribute = store.get(widget.client_id).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(attribute.value(), &json!("second"));
        assert_eq!(attribute.client_id, created_id);
    }

    #[test]
    fn prune_keeps_exactly_live_in_order() {
        let a = WidgetRegistry::global().instantiate(WidgetKind::Text);
        let b = WidgetRegistry::global().instantiate(WidgetKind::Number);
        let c = WidgetRegistry::global().instantiate(WidgetKind::Date);

        let store = AttributeStore::new()
            .upsert(&a, json!("a"))
            .upsert(&b, json!(1.0))
            .upsert(&c, json!("2024-01-01"));

        let live: HashSet<_> = [a.client_id, c.client_id].into_iter().collect();
        let pruned = store.prune(&live);

        assert_eq!(pruned.len(), 2);
        let widgets: Vec<_> = pruned.iter().map(|attr| attr.widget).collect();
        assert_eq!(widgets, vec![a.client_id, c.client_id]);
        assert!(pruned.get(b.client_id).is_none());
    }

    #[test]
    fn prune_with_all_live_is_identity() {
        let a = WidgetRegistry::global().instantiate(WidgetKind::Text);
        let store = AttributeStore::new().upsert(&a, json!("x"));

        let live: HashSet<_> = [a.client_id].into_iter().collect();
        assert_eq!(store.prune(&live), store);
    }

    #[test]
    fn attribute_serde_roundtrip() {
        let widget = WidgetRegistry::global().instantiate(WidgetKind::Scale);
        let attribute = Attribute::new(&widget, json!("high"));

        let json = serde_json::to_value(&attribute).unwrap();
        assert_eq!(json["widgetType"], "scale");
        assert_eq!(json["data"]["value"], "high");

        let back: Attribute = serde_json::from_value(json).unwrap();
        assert_eq!(back, attribute);
    }
}
