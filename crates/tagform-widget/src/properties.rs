//! Per-kind widget configuration
//!
//! [`WidgetProperties`] is the tagged union of type-specific configuration
//! objects. The variant always agrees with the owning widget's
//! [`WidgetKind`]; edit forms replace the whole properties object, they do
//! not mutate it field by field across kinds.

use crate::kind::WidgetKind;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type-specific widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WidgetProperties {
    /// Configuration for `text`
    Text(TextProperties),
    /// Configuration for `number`
    Number(NumberProperties),
    /// Configuration for `date`
    Date(DateProperties),
    /// Configuration for `time`
    Time(TimeProperties),
    /// Configuration for `date-range`
    DateRange(DateRangeProperties),
    /// Configuration for `time-range`
    TimeRange(TimeRangeProperties),
    /// Configuration for `scale`
    Scale(ScaleProperties),
    /// Configuration for `single-select`
    SingleSelect(SelectProperties),
    /// Configuration for `multi-select`
    MultiSelect(SelectProperties),
    /// Configuration for `matrix-1d`
    #[serde(rename = "matrix-1d")]
    Matrix1d(Matrix1dProperties),
    /// Configuration for `matrix-2d`
    #[serde(rename = "matrix-2d")]
    Matrix2d(Matrix2dProperties),
}

impl WidgetProperties {
    /// The kind this configuration belongs to
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetProperties::Text(_) => WidgetKind::Text,
            WidgetProperties::Number(_) => WidgetKind::Number,
            WidgetProperties::Date(_) => WidgetKind::Date,
            WidgetProperties::Time(_) => WidgetKind::Time,
            WidgetProperties::DateRange(_) => WidgetKind::DateRange,
            WidgetProperties::TimeRange(_) => WidgetKind::TimeRange,
            WidgetProperties::Scale(_) => WidgetKind::Scale,
            WidgetProperties::SingleSelect(_) => WidgetKind::SingleSelect,
            WidgetProperties::MultiSelect(_) => WidgetKind::MultiSelect,
            WidgetProperties::Matrix1d(_) => WidgetKind::Matrix1d,
            WidgetProperties::Matrix2d(_) => WidgetKind::Matrix2d,
        }
    }

    /// Empty/default configuration for a kind
    #[must_use]
    pub fn default_for(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Text => WidgetProperties::Text(TextProperties::default()),
            WidgetKind::Number => WidgetProperties::Number(NumberProperties::default()),
            WidgetKind::Date => WidgetProperties::Date(DateProperties::default()),
            WidgetKind::Time => WidgetProperties::Time(TimeProperties::default()),
            WidgetKind::DateRange => WidgetProperties::DateRange(DateRangeProperties::default()),
            WidgetKind::TimeRange => WidgetProperties::TimeRange(TimeRangeProperties::default()),
            WidgetKind::Scale => WidgetProperties::Scale(ScaleProperties::default()),
            WidgetKind::SingleSelect => {
                WidgetProperties::SingleSelect(SelectProperties::default())
            }
            WidgetKind::MultiSelect => WidgetProperties::MultiSelect(SelectProperties::default()),
            WidgetKind::Matrix1d => WidgetProperties::Matrix1d(Matrix1dProperties::default()),
            WidgetKind::Matrix2d => WidgetProperties::Matrix2d(Matrix2dProperties::default()),
        }
    }

    /// Declared static default value, as the raw wire value
    ///
    /// Only the kinds that support a static default (`text`, `number`,
    /// `date`, `time`, `scale`) can return `Some`; every other kind has no
    /// auto-populated value regardless of configuration.
    #[must_use]
    pub fn static_default(&self) -> Option<Value> {
        match self {
            WidgetProperties::Text(p) => {
                p.default_value.as_ref().map(|v| Value::String(v.clone()))
            }
            WidgetProperties::Number(p) => {
                p.default_value.and_then(|v| serde_json::to_value(v).ok())
            }
            WidgetProperties::Date(p) => {
                p.default_value.and_then(|v| serde_json::to_value(v).ok())
            }
            WidgetProperties::Time(p) => {
                p.default_value.and_then(|v| serde_json::to_value(v).ok())
            }
            WidgetProperties::Scale(p) => {
                p.default_option.as_ref().map(|v| Value::String(v.clone()))
            }
            _ => None,
        }
    }
}

/// `text` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperties {
    /// Pre-filled text for new documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// `number` configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberProperties {
    /// Inclusive lower bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    /// Inclusive upper bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    /// Pre-filled number for new documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<f64>,
}

/// `date` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateProperties {
    /// Pre-filled date for new documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<NaiveDate>,
}

/// `time` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProperties {
    /// Pre-filled time for new documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<NaiveTime>,
}

/// `date-range` configuration (no per-kind settings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangeProperties {}

/// `time-range` configuration (no per-kind settings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRangeProperties {}

/// `scale` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleProperties {
    /// Ordered scale points
    #[serde(default)]
    pub options: Vec<ScaleOption>,
    /// Key of the pre-selected point, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_option: Option<String>,
}

/// One point on a scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleOption {
    /// Stable option key, referenced by attribute values
    pub key: String,
    /// Display label
    pub label: String,
    /// Display color (hex), if configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// `single-select` / `multi-select` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectProperties {
    /// Choices offered to the user
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// One selectable choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Stable option key, referenced by attribute values
    pub key: String,
    /// Display label
    pub label: String,
}

/// `matrix-1d` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Matrix1dProperties {
    /// Matrix rows, each carrying its own cells
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// Row of a one-dimensional matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// Stable row key
    pub key: String,
    /// Display label
    pub label: String,
    /// Cells under this row
    #[serde(default)]
    pub cells: Vec<MatrixCell>,
}

/// Leaf cell of a matrix axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    /// Stable cell key
    pub key: String,
    /// Display label
    pub label: String,
}

/// `matrix-2d` configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Matrix2dProperties {
    /// Row axis, with sub-rows
    #[serde(default)]
    pub rows: Vec<Matrix2dRow>,
    /// Column axis, with sub-columns
    #[serde(default)]
    pub columns: Vec<Matrix2dColumn>,
}

/// Row of a two-dimensional matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix2dRow {
    /// Stable row key
    pub key: String,
    /// Display label
    pub label: String,
    /// Sub-rows under this row
    #[serde(default)]
    pub sub_rows: Vec<MatrixCell>,
}

/// Column of a two-dimensional matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matrix2dColumn {
    /// Stable column key
    pub key: String,
    /// Display label
    pub label: String,
    /// Sub-columns under this column
    #[serde(default)]
    pub sub_columns: Vec<MatrixCell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_for_agrees_with_kind() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetProperties::default_for(kind).kind(), kind);
        }
    }

    #[test]
    fn number_static_default() {
        let props = WidgetProperties::Number(NumberProperties {
            min_value: Some(0.0),
            max_value: Some(10.0),
            default_value: Some(5.0),
        });
        assert_eq!(props.static_default(), Some(serde_json::json!(5.0)));
    }

    #[test]
    fn text_without_default_yields_none() {
        let props = WidgetProperties::default_for(WidgetKind::Text);
        assert_eq!(props.static_default(), None);
    }

    #[test]
    fn scale_default_option() {
        let props = WidgetProperties::Scale(ScaleProperties {
            options: vec![ScaleOption {
                key: "low".to_string(),
                label: "Low".to_string(),
                color: None,
            }],
            default_option: Some("low".to_string()),
        });
        assert_eq!(props.static_default(), Some(Value::String("low".to_string())));
    }

    #[test]
    fn date_default_serializes_as_iso_string() {
        let props = WidgetProperties::Date(DateProperties {
            default_value: NaiveDate::from_ymd_opt(2024, 3, 1),
        });
        assert_eq!(
            props.static_default(),
            Some(Value::String("2024-03-01".to_string()))
        );
    }

    #[test]
    fn unsupported_kinds_never_default() {
        let props = WidgetProperties::Matrix2d(Matrix2dProperties::default());
        assert_eq!(props.static_default(), None);

        let props = WidgetProperties::MultiSelect(SelectProperties::default());
        assert_eq!(props.static_default(), None);
    }

    #[test]
    fn properties_serde_roundtrip() {
        let props = WidgetProperties::Matrix1d(Matrix1dProperties {
            rows: vec![MatrixRow {
                key: "r1".to_string(),
                label: "Row 1".to_string(),
                cells: vec![MatrixCell {
                    key: "c1".to_string(),
                    label: "Cell 1".to_string(),
                }],
            }],
        });

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["kind"], "matrix-1d");

        let back: WidgetProperties = serde_json::from_value(json).unwrap();
        assert_eq!(back, props);
    }
}
