//! Typed widget values
//!
//! [`WidgetValue`] is the typed side of the value lifecycle: attribute
//! stores carry values as raw `serde_json::Value` end to end, and the
//! dispatcher casts between the raw slot and these typed shapes at the
//! input/output boundary.

use crate::kind::WidgetKind;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cell selections of a matrix value, keyed by row/column keys
pub type MatrixSelection = serde_json::Map<String, Value>;

/// Typed value shape per widget kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetValue {
    /// `text`: free-form string
    Text(String),
    /// `number`: double-precision number
    Number(f64),
    /// `date`: calendar date
    Date(NaiveDate),
    /// `time`: time of day
    Time(NaiveTime),
    /// `date-range`: optional start/end pair
    DateRange(DateRangeValue),
    /// `time-range`: optional start/end pair
    TimeRange(TimeRangeValue),
    /// `scale`: selected option key
    Scale(String),
    /// `single-select`: selected option key
    SingleSelect(String),
    /// `multi-select`: selected option keys
    MultiSelect(Vec<String>),
    /// `matrix-1d`: selected cells keyed by row
    Matrix1d(MatrixSelection),
    /// `matrix-2d`: selected cells keyed by row and column
    Matrix2d(MatrixSelection),
}

impl WidgetValue {
    /// The kind this value shape belongs to
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetValue::Text(_) => WidgetKind::Text,
            WidgetValue::Number(_) => WidgetKind::Number,
            WidgetValue::Date(_) => WidgetKind::Date,
            WidgetValue::Time(_) => WidgetKind::Time,
            WidgetValue::DateRange(_) => WidgetKind::DateRange,
            WidgetValue::TimeRange(_) => WidgetKind::TimeRange,
            WidgetValue::Scale(_) => WidgetKind::Scale,
            WidgetValue::SingleSelect(_) => WidgetKind::SingleSelect,
            WidgetValue::MultiSelect(_) => WidgetKind::MultiSelect,
            WidgetValue::Matrix1d(_) => WidgetKind::Matrix1d,
            WidgetValue::Matrix2d(_) => WidgetKind::Matrix2d,
        }
    }

    /// Down-cast to the raw wire representation
    ///
    /// Total: every typed value has a raw form. The inverse direction goes
    /// through [`crate::Variant::cast`], which can fail on shape mismatch.
    #[must_use]
    pub fn to_raw(&self) -> Value {
        let raw = match self {
            WidgetValue::Text(v) | WidgetValue::Scale(v) | WidgetValue::SingleSelect(v) => {
                serde_json::to_value(v)
            }
            WidgetValue::Number(v) => serde_json::to_value(v),
            WidgetValue::Date(v) => serde_json::to_value(v),
            WidgetValue::Time(v) => serde_json::to_value(v),
            WidgetValue::DateRange(v) => serde_json::to_value(v),
            WidgetValue::TimeRange(v) => serde_json::to_value(v),
            WidgetValue::MultiSelect(v) => serde_json::to_value(v),
            WidgetValue::Matrix1d(v) | WidgetValue::Matrix2d(v) => serde_json::to_value(v),
        };
        raw.unwrap_or(Value::Null)
    }
}

/// Value of a `date-range` widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeValue {
    /// Interval start, if entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Interval end, if entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Value of a `time-range` widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeValue {
    /// Interval start, if entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// Interval end, if entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
}
