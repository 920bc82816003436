//! Tagform Collection Engine
//!
//! The stateful half of the widget collection engine: the ordered widget
//! collection with its order/uniqueness invariants, the attribute value
//! store kept consistent with it, and the session types that own one
//! collection each and pair every structural delete with an attribute
//! prune.
//!
//! # Core Concepts
//!
//! - [`WidgetCollection`]: ordered widget list; `order` always equals index
//! - [`AttributeStore`]: widget-key -> value mapping for one document
//! - [`FrameworkSession`]: one open framework-edit screen (collection +
//!   in-flight edit slot)
//! - [`TaggingSession`]: one open tagging screen (widget snapshot +
//!   attributes)
//!
//! All store operations are pure transformations over immutable snapshots;
//! sessions serialize mutations through `&mut self` (single-writer).
//!
//! # Example
//!
//! ```
//! use tagform_collection::{FrameworkSession, TaggingSession};
//! use tagform_widget::WidgetKind;
//!
//! let mut framework = FrameworkSession::new();
//! let text = framework.add_widget(WidgetKind::Text);
//! framework.add_widget(WidgetKind::Number);
//!
//! let mut tagging = TaggingSession::open_new(framework.collection().clone());
//! tagging.change_attribute(text, serde_json::json!("observed"));
//!
//! framework.delete_widget(text);
//! tagging.sync_widgets(framework.collection().clone());
//! assert!(tagging.attributes().get(text).is_none());
//! ```

#![warn(unreachable_pub)]

mod attributes;
mod collection;
mod session;

pub use attributes::{Attribute, AttributeData, AttributeStore};
pub use collection::WidgetCollection;
pub use session::{FrameworkSession, TaggingSession};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
