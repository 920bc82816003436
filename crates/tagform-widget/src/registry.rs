//! Widget kind registry
//!
//! One explicit, read-only table mapping every [`WidgetKind`] to its
//! [`WidgetDescriptor`]: minimum layout size, value schema version, default
//! configuration, and whether the kind supports a static default value.
//! The table is constructed once at first use and never mutated; per-kind
//! knowledge lives here rather than being scattered across call sites.

use crate::error::UnknownWidgetKind;
use crate::kind::WidgetKind;
use crate::properties::WidgetProperties;
use crate::widget::{ClientId, Widget, Width, UNPLACED_ORDER};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Minimum layout footprint of a widget, in section grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinSize {
    /// Grid columns
    pub width: u32,
    /// Grid rows
    pub height: u32,
}

impl MinSize {
    /// Create a footprint
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Static description of one widget kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// The kind described
    pub kind: WidgetKind,
    /// Value schema version, copied onto attributes at creation time
    pub version: u32,
    /// Minimum layout footprint
    pub min_size: MinSize,
    /// Whether this kind auto-populates from a configured default value
    pub supports_default: bool,
}

impl WidgetDescriptor {
    /// Fresh copy of the default configuration for this kind
    #[inline]
    #[must_use]
    pub fn default_properties(&self) -> WidgetProperties {
        WidgetProperties::default_for(self.kind)
    }
}

static GLOBAL: Lazy<WidgetRegistry> = Lazy::new(WidgetRegistry::with_builtins);

/// Read-only table of widget kind descriptors
///
/// Pure lookup, no state beyond the table itself. [`lookup`] is total
/// because [`WidgetKind`] is a closed enum; the checked entry point for
/// raw wire tags is [`lookup_tag`].
///
/// [`lookup`]: WidgetRegistry::lookup
/// [`lookup_tag`]: WidgetRegistry::lookup_tag
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    /// Descriptors indexed by `WidgetKind::index()`
    descriptors: Vec<WidgetDescriptor>,
}

impl WidgetRegistry {
    /// The process-wide registry
    #[inline]
    #[must_use]
    pub fn global() -> &'static WidgetRegistry {
        &GLOBAL
    }

    /// Build the built-in descriptor table
    #[must_use]
    pub fn with_builtins() -> Self {
        let descriptors = WidgetKind::ALL
            .iter()
            .map(|&kind| WidgetDescriptor {
                kind,
                version: 1,
                min_size: Self::builtin_min_size(kind),
                supports_default: matches!(
                    kind,
                    WidgetKind::Text
                        | WidgetKind::Number
                        | WidgetKind::Date
                        | WidgetKind::Time
                        | WidgetKind::Scale
                ),
            })
            .collect();

        Self { descriptors }
    }

    fn builtin_min_size(kind: WidgetKind) -> MinSize {
        match kind {
            WidgetKind::Text => MinSize::new(2, 2),
            WidgetKind::Number | WidgetKind::Date | WidgetKind::Time => MinSize::new(1, 2),
            WidgetKind::DateRange | WidgetKind::TimeRange => MinSize::new(2, 2),
            WidgetKind::Scale | WidgetKind::SingleSelect | WidgetKind::MultiSelect => {
                MinSize::new(2, 3)
            }
            WidgetKind::Matrix1d => MinSize::new(4, 4),
            WidgetKind::Matrix2d => MinSize::new(6, 4),
        }
    }

    /// Descriptor for a kind (total; the kind set is closed)
    #[inline]
    #[must_use]
    pub fn lookup(&self, kind: WidgetKind) -> &WidgetDescriptor {
        &self.descriptors[kind.index()]
    }

    /// Descriptor for a raw wire tag
    ///
    /// # Errors
    /// Returns [`UnknownWidgetKind`] if the tag is outside the closed set.
    /// This is a programming error on well-formed callers; forward-compatible
    /// consumers should use [`crate::Variant::resolve`] instead.
    pub fn lookup_tag(&self, tag: &str) -> Result<&WidgetDescriptor, UnknownWidgetKind> {
        let kind: WidgetKind = tag.parse()?;
        Ok(self.lookup(kind))
    }

    /// Value schema version for a kind
    #[inline]
    #[must_use]
    pub fn version_of(&self, kind: WidgetKind) -> u32 {
        self.lookup(kind).version
    }

    /// Create a defaults-only widget skeleton for a kind
    ///
    /// The widget gets a fresh [`ClientId`], `order = -1` (not yet placed),
    /// full width, and a copy of the descriptor's default configuration.
    /// Pure apart from the fresh-id source; no registry state changes.
    #[must_use]
    pub fn instantiate(&self, kind: WidgetKind) -> Widget {
        let descriptor = self.lookup(kind);
        Widget {
            client_id: ClientId::new(),
            id: None,
            kind,
            title: String::new(),
            order: UNPLACED_ORDER,
            width: Width::Full,
            properties: descriptor.default_properties(),
            conditional: None,
        }
    }

    /// Number of registered kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty (never true for the built-in table)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterate over all descriptors in registry order
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
