//! Widget definitions
//!
//! A [`Widget`] is the specification of one form field: its kind, display
//! title, layout width, position within its collection, and kind-specific
//! configuration. The client-generated [`ClientId`] is the stable join key
//! between widgets and attribute values; a server-assigned id appears only
//! once the widget has been persisted by an outer layer.

use crate::kind::WidgetKind;
use crate::properties::WidgetProperties;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Sentinel order for a widget that has not been placed in a collection yet
pub const UNPLACED_ORDER: i32 = -1;

/// Client-generated unique identifier (ULID for sortability)
///
/// Assigned once at creation and immutable for the owner's lifetime. Used
/// both for widgets and for attribute values; the two id spaces are
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Ulid);

impl ClientId {
    /// Generate a fresh id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout width of a widget within its section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Width {
    /// Spans the whole section
    #[default]
    Full,
    /// Spans half of the section
    Half,
}

/// One form-field specification
///
/// `client_id` and `kind` are immutable after creation; `title`, `width`,
/// and `properties` are replaced wholesale by edit forms. `order` is owned
/// by the containing collection and re-derived on every structural change,
/// never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Stable join key, unique within a collection
    pub client_id: ClientId,
    /// Server-assigned id, absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Widget type tag, immutable
    pub kind: WidgetKind,
    /// Display label
    pub title: String,
    /// Position within the containing collection ([`UNPLACED_ORDER`] until placed)
    pub order: i32,
    /// Layout width
    pub width: Width,
    /// Kind-specific configuration; variant agrees with `kind`
    pub properties: WidgetProperties,
    /// Visibility rule, opaque to this engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<serde_json::Value>,
}

impl Widget {
    /// Create an unplaced widget with the given configuration
    ///
    /// Most callers should go through
    /// [`crate::WidgetRegistry::instantiate`], which seeds the registry
    /// defaults; this constructor is for building widgets with explicit
    /// configuration (tests, fixtures, deserialized edits).
    #[must_use]
    pub fn new(kind: WidgetKind, title: impl Into<String>, properties: WidgetProperties) -> Self {
        debug_assert_eq!(kind, properties.kind());
        Self {
            client_id: ClientId::new(),
            id: None,
            kind,
            title: title.into(),
            order: UNPLACED_ORDER,
            width: Width::Full,
            properties,
            conditional: None,
        }
    }

    /// With display title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With layout width
    #[inline]
    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// With replacement configuration (variant must agree with `kind`)
    #[must_use]
    pub fn with_properties(mut self, properties: WidgetProperties) -> Self {
        debug_assert_eq!(self.kind, properties.kind());
        self.properties = properties;
        self
    }

    /// With visibility rule
    #[inline]
    #[must_use]
    pub fn with_conditional(mut self, conditional: serde_json::Value) -> Self {
        self.conditional = Some(conditional);
        self
    }

    /// Whether the widget has been placed in a collection
    #[inline]
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.order != UNPLACED_ORDER
    }

    /// Whether the widget has been persisted remotely
    #[inline]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
