//! Edit and tagging sessions
//!
//! A session owns exactly one collection (and, for tagging, one attribute
//! store) for the lifetime of one open screen. Mutations go through `&mut
//! self`, which is the single-writer rule: all structural operations on a
//! snapshot are serialized by whoever owns the session value. Deleting a
//! widget and pruning its attributes happen in the same synchronous call,
//! so no caller can observe an orphaned attribute.

use crate::attributes::AttributeStore;
use crate::collection::WidgetCollection;
use serde_json::Value;
use tagform_widget::{ClientId, Widget, WidgetKind, WidgetRegistry};

/// One open framework-edit screen
///
/// Owns the widget collection being built plus the optional in-flight edit
/// slot: at most one widget is being edited at a time, and until committed
/// it lives outside the collection (it may never have been inserted at
/// all — committing relies on replace's append-on-miss behavior).
#[derive(Debug, Clone, Default)]
pub struct FrameworkSession {
    collection: WidgetCollection,
    editing: Option<Widget>,
}

impl FrameworkSession {
    /// Start a session over an empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over a fetched collection
    #[inline]
    #[must_use]
    pub fn with_collection(collection: WidgetCollection) -> Self {
        Self {
            collection,
            editing: None,
        }
    }

    /// Current collection snapshot
    #[inline]
    #[must_use]
    pub fn collection(&self) -> &WidgetCollection {
        &self.collection
    }

    /// Widget currently being edited, if any
    #[inline]
    #[must_use]
    pub fn editing(&self) -> Option<&Widget> {
        self.editing.as_ref()
    }

    /// Instantiate a widget of `kind` and append it to the collection
    ///
    /// Returns the new widget's client id.
    pub fn add_widget(&mut self, kind: WidgetKind) -> ClientId {
        let widget = WidgetRegistry::global().instantiate(kind);
        let client_id = widget.client_id;
        tracing::debug!(%client_id, %kind, "adding widget");
        self.collection = self.collection.insert(widget);
        client_id
    }

    /// Append an already-built widget (paste, duplicate, import)
    pub fn insert_widget(&mut self, widget: Widget) {
        tracing::debug!(client_id = %widget.client_id, kind = %widget.kind, "inserting widget");
        self.collection = self.collection.insert(widget);
    }

    /// Replace a widget wholesale (edit form submit)
    pub fn edit_widget(&mut self, client_id: ClientId, updated: Widget) {
        if !self.collection.contains(client_id) {
            tracing::warn!(%client_id, "edited widget not in collection, appending");
        }
        self.collection = self.collection.replace(client_id, updated);
    }

    /// Remove a widget from the collection
    pub fn delete_widget(&mut self, client_id: ClientId) {
        tracing::debug!(%client_id, "deleting widget");
        if self
            .editing
            .as_ref()
            .is_some_and(|w| w.client_id == client_id)
        {
            self.editing = None;
        }
        self.collection = self.collection.delete(client_id);
    }

    /// Apply a drag-and-drop result
    pub fn reorder(&mut self, new_order: Vec<Widget>) {
        self.collection = self.collection.reorder(new_order);
    }

    /// Open the edit slot with a brand-new widget of `kind`
    ///
    /// The widget is not inserted into the collection until
    /// [`commit_edit`](Self::commit_edit).
    pub fn begin_create(&mut self, kind: WidgetKind) -> ClientId {
        let widget = WidgetRegistry::global().instantiate(kind);
        let client_id = widget.client_id;
        self.editing = Some(widget);
        client_id
    }

    /// Open the edit slot with a copy of an existing widget
    ///
    /// Returns `false` (leaving the slot untouched) if the id is unknown.
    pub fn begin_edit(&mut self, client_id: ClientId) -> bool {
        match self.collection.find(client_id) {
            Some(widget) => {
                self.editing = Some(widget.clone());
                true
            }
            None => false,
        }
    }

    /// Replace the contents of the edit slot (form keystrokes)
    ///
    /// No-op when no edit is in flight.
    pub fn update_edit(&mut self, widget: Widget) {
        if self.editing.is_some() {
            self.editing = Some(widget);
        }
    }

    /// Commit the in-flight edit into the collection
    ///
    /// Injects via replace-by-key: an existing widget is updated in place,
    /// a never-inserted one is appended. Returns the committed widget's
    /// client id, or `None` when no edit was in flight.
    pub fn commit_edit(&mut self) -> Option<ClientId> {
        let widget = self.editing.take()?;
        let client_id = widget.client_id;
        tracing::debug!(%client_id, "committing widget edit");
        self.collection = self.collection.replace(client_id, widget);
        Some(client_id)
    }

    /// Discard the in-flight edit
    #[inline]
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

/// One open document-tagging screen
///
/// Owns a snapshot of the framework's widgets plus the attribute values
/// entered for one document. The widget snapshot is replaced wholesale via
/// [`sync_widgets`](Self::sync_widgets), which prunes attributes in the
/// same call.
#[derive(Debug, Clone)]
pub struct TaggingSession {
    widgets: WidgetCollection,
    attributes: AttributeStore,
}

impl TaggingSession {
    /// Open a new (never-tagged) document: defaults auto-populate
    #[must_use]
    pub fn open_new(widgets: WidgetCollection) -> Self {
        let attributes = AttributeStore::build_defaults(&widgets);
        tracing::debug!(
            widgets = widgets.len(),
            defaults = attributes.len(),
            "opened new document"
        );
        Self {
            widgets,
            attributes,
        }
    }

    /// Resume a document with previously collected attributes
    ///
    /// Fetched attributes are pruned against the current widget set before
    /// use; the framework may have dropped widgets since the document was
    /// last saved.
    #[must_use]
    pub fn resume(widgets: WidgetCollection, attributes: AttributeStore) -> Self {
        let attributes = attributes.prune(&widgets.client_ids());
        Self {
            widgets,
            attributes,
        }
    }

    /// Current widget snapshot
    #[inline]
    #[must_use]
    pub fn widgets(&self) -> &WidgetCollection {
        &self.widgets
    }

    /// Current attribute values
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Record a value entered against a widget
    ///
    /// Unknown widget ids are ignored with a warning: inputs for widgets
    /// that were deleted mid-edit can still fire once.
    pub fn change_attribute(&mut self, widget_id: ClientId, value: Value) {
        match self.widgets.find(widget_id) {
            Some(widget) => {
                let widget = widget.clone();
                self.attributes = self.attributes.upsert(&widget, value);
            }
            None => {
                tracing::warn!(%widget_id, "attribute change for unknown widget, ignoring");
            }
        }
    }

    /// Replace the widget snapshot and prune newly orphaned attributes
    ///
    /// Pruning happens in the same synchronous call, after the new
    /// snapshot's order stamping is complete, so attributes never observe a
    /// transiently inconsistent collection.
    pub fn sync_widgets(&mut self, widgets: WidgetCollection) {
        self.widgets = widgets;
        let before = self.attributes.len();
        self.attributes = self.attributes.prune(&self.widgets.client_ids());
        let dropped = before - self.attributes.len();
        if dropped > 0 {
            tracing::debug!(dropped, "pruned orphaned attributes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_and_delete_widget() {
        let mut session = FrameworkSession::new();

        let text_id = session.add_widget(WidgetKind::Text);
        let number_id = session.add_widget(WidgetKind::Number);
        assert_eq!(session.collection().len(), 2);

        session.delete_widget(text_id);
        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.collection().get(0).unwrap().client_id, number_id);
        assert_eq!(session.collection().get(0).unwrap().order, 0);
    }

    #[test]
    fn insert_prebuilt_widget() {
        let mut session = FrameworkSession::new();
        let widget = WidgetRegistry::global()
            .instantiate(WidgetKind::MultiSelect)
            .with_title("Affected groups");
        let id = widget.client_id;

        session.insert_widget(widget);

        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.collection().find(id).unwrap().order, 0);
    }

    #[test]
    fn edit_widget_replaces_in_place() {
        let mut session = FrameworkSession::new();
        let first = session.add_widget(WidgetKind::Text);
        session.add_widget(WidgetKind::Number);

        let edited = session
            .collection()
            .find(first)
            .unwrap()
            .clone()
            .with_title("Renamed");
        session.edit_widget(first, edited);

        assert_eq!(session.collection().len(), 2);
        assert_eq!(session.collection().get(0).unwrap().title, "Renamed");
    }

    #[test]
    fn commit_edit_of_new_widget_appends() {
        let mut session = FrameworkSession::new();
        session.add_widget(WidgetKind::Text);

        // The widget under creation is not in the collection yet.
        let created = session.begin_create(WidgetKind::Scale);
        assert_eq!(session.collection().len(), 1);

        let draft = session.editing().unwrap().clone().with_title("Severity");
        session.update_edit(draft);

        let committed = session.commit_edit().unwrap();
        assert_eq!(committed, created);
        assert_eq!(session.collection().len(), 2);
        assert_eq!(session.collection().get(1).unwrap().title, "Severity");
        assert!(session.editing().is_none());
    }

    #[test]
    fn commit_edit_of_existing_widget_replaces() {
        let mut session = FrameworkSession::new();
        let id = session.add_widget(WidgetKind::Text);

        assert!(session.begin_edit(id));
        let draft = session.editing().unwrap().clone().with_title("Renamed");
        session.update_edit(draft);
        session.commit_edit();

        assert_eq!(session.collection().len(), 1);
        assert_eq!(session.collection().get(0).unwrap().title, "Renamed");
    }

    #[test]
    fn cancel_edit_discards_draft() {
        let mut session = FrameworkSession::new();
        session.begin_create(WidgetKind::Number);
        session.cancel_edit();

        assert!(session.editing().is_none());
        assert!(session.commit_edit().is_none());
        assert!(session.collection().is_empty());
    }

    #[test]
    fn begin_edit_unknown_id() {
        let mut session = FrameworkSession::new();
        assert!(!session.begin_edit(ClientId::new()));
        assert!(session.editing().is_none());
    }

    #[test]
    fn deleting_edited_widget_clears_slot() {
        let mut session = FrameworkSession::new();
        let id = session.add_widget(WidgetKind::Text);
        session.begin_edit(id);

        session.delete_widget(id);
        assert!(session.editing().is_none());
        assert!(session.collection().is_empty());
    }

    #[test]
    fn change_attribute_for_unknown_widget_is_ignored() {
        let mut session = TaggingSession::open_new(WidgetCollection::new());
        session.change_attribute(ClientId::new(), json!("x"));
        assert!(session.attributes().is_empty());
    }

    #[test]
    fn sync_widgets_prunes_orphans() {
        let mut framework = FrameworkSession::new();
        let text_id = framework.add_widget(WidgetKind::Text);
        let number_id = framework.add_widget(WidgetKind::Number);

        let mut tagging = TaggingSession::open_new(framework.collection().clone());
        tagging.change_attribute(text_id, json!("note"));
        tagging.change_attribute(number_id, json!(3.0));
        assert_eq!(tagging.attributes().len(), 2);

        framework.delete_widget(text_id);
        tagging.sync_widgets(framework.collection().clone());

        assert_eq!(tagging.attributes().len(), 1);
        assert!(tagging.attributes().get(text_id).is_none());
        assert!(tagging.attributes().get(number_id).is_some());
    }

    #[test]
    fn resume_prunes_fetched_orphans() {
        let mut framework = FrameworkSession::new();
        let live_id = framework.add_widget(WidgetKind::Text);
        let dead_id = framework.add_widget(WidgetKind::Number);

        let mut tagging = TaggingSession::open_new(framework.collection().clone());
        tagging.change_attribute(live_id, json!("keep"));
        tagging.change_attribute(dead_id, json!(9.0));
        let saved = tagging.attributes().clone();

        // Framework dropped a widget between save and resume.
        framework.delete_widget(dead_id);
        let resumed = TaggingSession::resume(framework.collection().clone(), saved);

        assert_eq!(resumed.attributes().len(), 1);
        assert!(resumed.attributes().get(live_id).is_some());
    }
}
