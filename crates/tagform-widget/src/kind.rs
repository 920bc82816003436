//! Widget kind tags
//!
//! Defines [`WidgetKind`], the closed set of form-field types this engine
//! understands. The set is fixed at compile time; tags arriving from the
//! outside world are parsed through `FromStr` (checked) or
//! [`crate::Variant::resolve`] (fallback, never fails).

use crate::error::UnknownWidgetKind;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Closed set of widget type tags
///
/// Wire representation is the kebab-case tag (`"date-range"`,
/// `"matrix-2d"`, ...). The tag of a widget is immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Free-form text input
    Text,
    /// Numeric input
    Number,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date interval
    DateRange,
    /// Time interval
    TimeRange,
    /// Single choice on an ordered scale
    Scale,
    /// Single choice from an option list
    SingleSelect,
    /// Multiple choices from an option list
    MultiSelect,
    /// One-dimensional matrix of cells
    #[serde(rename = "matrix-1d")]
    Matrix1d,
    /// Two-dimensional matrix of cells
    #[serde(rename = "matrix-2d")]
    Matrix2d,
}

impl WidgetKind {
    /// All kinds, in registry order
    pub const ALL: [WidgetKind; 11] = [
        WidgetKind::Text,
        WidgetKind::Number,
        WidgetKind::Date,
        WidgetKind::Time,
        WidgetKind::DateRange,
        WidgetKind::TimeRange,
        WidgetKind::Scale,
        WidgetKind::SingleSelect,
        WidgetKind::MultiSelect,
        WidgetKind::Matrix1d,
        WidgetKind::Matrix2d,
    ];

    /// Wire tag for this kind
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Number => "number",
            WidgetKind::Date => "date",
            WidgetKind::Time => "time",
            WidgetKind::DateRange => "date-range",
            WidgetKind::TimeRange => "time-range",
            WidgetKind::Scale => "scale",
            WidgetKind::SingleSelect => "single-select",
            WidgetKind::MultiSelect => "multi-select",
            WidgetKind::Matrix1d => "matrix-1d",
            WidgetKind::Matrix2d => "matrix-2d",
        }
    }

    /// Position within [`Self::ALL`], used as the registry table index
    #[inline]
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            WidgetKind::Text => 0,
            WidgetKind::Number => 1,
            WidgetKind::Date => 2,
            WidgetKind::Time => 3,
            WidgetKind::DateRange => 4,
            WidgetKind::TimeRange => 5,
            WidgetKind::Scale => 6,
            WidgetKind::SingleSelect => 7,
            WidgetKind::MultiSelect => 8,
            WidgetKind::Matrix1d => 9,
            WidgetKind::Matrix2d => 10,
        }
    }
}

impl Display for WidgetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for WidgetKind {
    type Err = UnknownWidgetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|k| k.tag() == s)
            .copied()
            .ok_or_else(|| UnknownWidgetKind::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip_all_kinds() {
        for kind in WidgetKind::ALL {
            let parsed: WidgetKind = kind.tag().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in WidgetKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn unknown_tag_is_error() {
        let err = "geo-location".parse::<WidgetKind>().unwrap_err();
        assert_eq!(err.tag, "geo-location");
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&WidgetKind::DateRange).unwrap();
        assert_eq!(json, "\"date-range\"");

        let kind: WidgetKind = serde_json::from_str("\"matrix-2d\"").unwrap();
        assert_eq!(kind, WidgetKind::Matrix2d);
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(WidgetKind::MultiSelect.to_string(), "multi-select");
    }
}
