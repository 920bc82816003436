//! Variant dispatch
//!
//! [`Variant`] routes a widget's raw value to its kind-specific behavior:
//! a single exhaustive match over the closed kind set, plus one
//! [`Variant::Unsupported`] fallback for tags the engine does not
//! understand. The fallback accepts and produces nothing; it is the
//! documented forward-compatibility path for server-introduced kinds, not
//! an error.

use crate::kind::WidgetKind;
use crate::value::{DateRangeValue, TimeRangeValue, WidgetValue};
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

/// Kind-specific input/output behavior handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `text` behavior
    Text,
    /// `number` behavior
    Number,
    /// `date` behavior
    Date,
    /// `time` behavior
    Time,
    /// `date-range` behavior
    DateRange,
    /// `time-range` behavior
    TimeRange,
    /// `scale` behavior
    Scale,
    /// `single-select` behavior
    SingleSelect,
    /// `multi-select` behavior
    MultiSelect,
    /// `matrix-1d` behavior
    Matrix1d,
    /// `matrix-2d` behavior
    Matrix2d,
    /// Fallback for unrecognized kinds: accepts and produces nothing
    Unsupported,
}

impl Variant {
    /// Handle for a known kind (total)
    #[must_use]
    pub fn of(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Text => Variant::Text,
            WidgetKind::Number => Variant::Number,
            WidgetKind::Date => Variant::Date,
            WidgetKind::Time => Variant::Time,
            WidgetKind::DateRange => Variant::DateRange,
            WidgetKind::TimeRange => Variant::TimeRange,
            WidgetKind::Scale => Variant::Scale,
            WidgetKind::SingleSelect => Variant::SingleSelect,
            WidgetKind::MultiSelect => Variant::MultiSelect,
            WidgetKind::Matrix1d => Variant::Matrix1d,
            WidgetKind::Matrix2d => Variant::Matrix2d,
        }
    }

    /// Handle for a raw wire tag; unknown tags get the fallback
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        tag.parse::<WidgetKind>()
            .map_or(Variant::Unsupported, Variant::of)
    }

    /// Whether this is the fallback handle
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Variant::Unsupported)
    }

    /// The kind this handle dispatches for, if any
    #[must_use]
    pub fn kind(&self) -> Option<WidgetKind> {
        match self {
            Variant::Text => Some(WidgetKind::Text),
            Variant::Number => Some(WidgetKind::Number),
            Variant::Date => Some(WidgetKind::Date),
            Variant::Time => Some(WidgetKind::Time),
            Variant::DateRange => Some(WidgetKind::DateRange),
            Variant::TimeRange => Some(WidgetKind::TimeRange),
            Variant::Scale => Some(WidgetKind::Scale),
            Variant::SingleSelect => Some(WidgetKind::SingleSelect),
            Variant::MultiSelect => Some(WidgetKind::MultiSelect),
            Variant::Matrix1d => Some(WidgetKind::Matrix1d),
            Variant::Matrix2d => Some(WidgetKind::Matrix2d),
            Variant::Unsupported => None,
        }
    }

    /// Up-cast a raw value to this handle's typed shape
    ///
    /// Returns `None` when the raw value does not have the expected shape
    /// or when this is the fallback handle. The raw slot is caller-supplied
    /// and untrusted end to end, so the mismatch case is a quiet `None`
    /// rather than an error the surrounding form would have to catch.
    #[must_use]
    pub fn cast(&self, raw: &Value) -> Option<WidgetValue> {
        match self {
            Variant::Text => raw.as_str().map(|s| WidgetValue::Text(s.to_string())),
            Variant::Number => raw.as_f64().map(WidgetValue::Number),
            Variant::Date => {
                serde_json::from_value::<NaiveDate>(raw.clone())
                    .ok()
                    .map(WidgetValue::Date)
            }
            Variant::Time => {
                serde_json::from_value::<NaiveTime>(raw.clone())
                    .ok()
                    .map(WidgetValue::Time)
            }
            Variant::DateRange => {
                serde_json::from_value::<DateRangeValue>(raw.clone())
                    .ok()
                    .map(WidgetValue::DateRange)
            }
            Variant::TimeRange => {
                serde_json::from_value::<TimeRangeValue>(raw.clone())
                    .ok()
                    .map(WidgetValue::TimeRange)
            }
            Variant::Scale => raw.as_str().map(|s| WidgetValue::Scale(s.to_string())),
            Variant::SingleSelect => {
                raw.as_str().map(|s| WidgetValue::SingleSelect(s.to_string()))
            }
            Variant::MultiSelect => {
                serde_json::from_value::<Vec<String>>(raw.clone())
                    .ok()
                    .map(WidgetValue::MultiSelect)
            }
            Variant::Matrix1d => raw.as_object().cloned().map(WidgetValue::Matrix1d),
            Variant::Matrix2d => raw.as_object().cloned().map(WidgetValue::Matrix2d),
            Variant::Unsupported => None,
        }
    }

    /// Down-cast a typed value to its raw wire representation
    ///
    /// Total; delegates to [`WidgetValue::to_raw`]. The handle itself is
    /// not consulted — a typed value already knows its shape — but keeping
    /// both cast directions on the handle keeps the dispatch surface in
    /// one place.
    #[inline]
    #[must_use]
    pub fn uncast(&self, value: &WidgetValue) -> Value {
        value.to_raw()
    }
}
