//! Error types for the widget model
//!
//! The only checked failure in this crate: widget kinds form a closed set,
//! so an unrecognized tag is a programming error on the caller's side and
//! is surfaced eagerly at parse time.

/// Raw widget-type tag outside the closed kind set
///
/// Raised by [`crate::WidgetKind`]'s `FromStr` and by
/// [`crate::WidgetRegistry::lookup_tag`]. Callers that instead want the
/// forward-compatible fallback behavior should go through
/// [`crate::Variant::resolve`], which never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget kind: {tag}")]
pub struct UnknownWidgetKind {
    /// The offending tag as received
    pub tag: String,
}

impl UnknownWidgetKind {
    /// Create error for a tag
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
