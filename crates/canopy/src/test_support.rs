//! Shared test fixtures: an in-memory host view and a recording info object.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use accesskit::Action;
use canopy_core::{ViewId, init_view_registry, view_registry};
use parking_lot::Mutex;

use crate::host::{HostView, NodeInfoCallback, StringResource};
use crate::info::{CollectionInfo, CollectionItemInfo, NodeInfo};

/// An in-memory host view with a callback slot and refresh counting.
pub(crate) struct TestView {
    id: ViewId,
    callback: Mutex<Option<NodeInfoCallback>>,
    refresh_requests: AtomicUsize,
    inspections: AtomicUsize,
    tab_role_description: String,
}

impl TestView {
    pub fn new() -> Arc<Self> {
        Self::with_tab_role_description("Tab")
    }

    pub fn with_tab_role_description(description: &str) -> Arc<Self> {
        init_view_registry();
        let id = view_registry().unwrap().register();
        Arc::new(Self {
            id,
            callback: Mutex::new(None),
            refresh_requests: AtomicUsize::new(0),
            inspections: AtomicUsize::new(0),
            tab_role_description: description.to_string(),
        })
    }

    /// Simulate the host taking an accessibility snapshot of the view.
    pub fn inspect(&self) -> RecordingNodeInfo {
        self.inspections.fetch_add(1, Ordering::SeqCst);
        let mut info = RecordingNodeInfo::default();
        if let Some(callback) = &*self.callback.lock() {
            callback(self, &mut info);
        }
        info
    }

    /// Number of refresh hints the view has received.
    pub fn refresh_count(&self) -> usize {
        self.refresh_requests.load(Ordering::SeqCst)
    }

    /// Number of snapshots taken via [`TestView::inspect`].
    pub fn inspection_count(&self) -> usize {
        self.inspections.load(Ordering::SeqCst)
    }
}

impl HostView for TestView {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn take_node_info_callback(&self) -> Option<NodeInfoCallback> {
        self.callback.lock().take()
    }

    fn set_node_info_callback(&self, callback: NodeInfoCallback) {
        *self.callback.lock() = Some(callback);
    }

    fn request_node_info(&self) {
        self.refresh_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn string_resource(&self, resource: StringResource) -> String {
        match resource {
            StringResource::TabRoleDescription => self.tab_role_description.clone(),
        }
    }
}

/// An info object that records every write made through [`NodeInfo`].
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RecordingNodeInfo {
    pub checkable: Option<bool>,
    pub checked: Option<bool>,
    pub selected: Option<bool>,
    pub heading: Option<bool>,
    pub class_name: Option<String>,
    pub label: Option<String>,
    pub hint: Option<String>,
    pub role_description: Option<String>,
    pub clickable: Option<bool>,
    pub actions: Vec<Action>,
    pub removed_actions: Vec<Action>,
    pub collection_info: Option<CollectionInfo>,
    pub collection_item_info: Option<CollectionItemInfo>,
}

impl RecordingNodeInfo {
    /// Check that no write has been made at all.
    pub fn is_untouched(&self) -> bool {
        *self == Self::default()
    }
}

impl NodeInfo for RecordingNodeInfo {
    fn set_checkable(&mut self, checkable: bool) {
        self.checkable = Some(checkable);
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = Some(checked);
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = Some(selected);
    }

    fn set_heading(&mut self, heading: bool) {
        self.heading = Some(heading);
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    fn set_hint(&mut self, hint: &str) {
        self.hint = Some(hint.to_string());
    }

    fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn remove_action(&mut self, action: Action) {
        self.actions.retain(|a| *a != action);
        self.removed_actions.push(action);
    }

    fn set_role_description(&mut self, description: &str) {
        self.role_description = Some(description.to_string());
    }

    fn set_clickable(&mut self, clickable: bool) {
        self.clickable = Some(clickable);
    }

    fn set_collection_info(&mut self, info: CollectionInfo) {
        self.collection_info = Some(info);
    }

    fn set_collection_item_info(&mut self, info: CollectionItemInfo) {
        self.collection_item_info = Some(info);
    }
}
