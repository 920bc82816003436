//! Tagform Widget Model
//!
//! The pure half of the widget collection engine: widget kinds and their
//! per-kind configuration, the read-only kind registry, typed values, and
//! the variant dispatcher that casts between raw and typed value shapes.
//!
//! # Core Concepts
//!
//! - [`Widget`]: one form-field specification (kind, title, width, order,
//!   kind-specific properties)
//! - [`WidgetKind`]: the closed set of widget type tags
//! - [`WidgetRegistry`]: one explicit table of per-kind descriptors,
//!   constructed once and read-only thereafter
//! - [`WidgetValue`] / [`Variant`]: typed value shapes and the exhaustive
//!   dispatch between them and the raw `serde_json::Value` slot
//!
//! # Example
//!
//! ```
//! use tagform_widget::{Variant, WidgetKind, WidgetRegistry};
//!
//! let registry = WidgetRegistry::global();
//! let widget = registry.instantiate(WidgetKind::Number);
//! assert_eq!(widget.order, tagform_widget::UNPLACED_ORDER);
//!
//! let variant = Variant::of(widget.kind);
//! let typed = variant.cast(&serde_json::json!(3.0)).unwrap();
//! assert_eq!(variant.uncast(&typed), serde_json::json!(3.0));
//! ```

#![warn(unreachable_pub)]

mod dispatch;
mod error;
mod kind;
mod properties;
mod registry;
mod value;
mod widget;

pub use dispatch::Variant;
pub use error::UnknownWidgetKind;
pub use kind::WidgetKind;
pub use properties::{
    DateProperties, DateRangeProperties, Matrix1dProperties, Matrix2dColumn, Matrix2dProperties,
    Matrix2dRow, MatrixCell, MatrixRow, NumberProperties, ScaleOption, ScaleProperties,
    SelectOption, SelectProperties, TextProperties, TimeProperties, TimeRangeProperties,
    WidgetProperties,
};
pub use registry::{MinSize, WidgetDescriptor, WidgetRegistry};
pub use value::{DateRangeValue, MatrixSelection, TimeRangeValue, WidgetValue};
pub use widget::{ClientId, Widget, Width, UNPLACED_ORDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
