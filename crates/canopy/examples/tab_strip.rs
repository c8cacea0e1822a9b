//! Annotates a three-tab strip and prints what an accessibility inspection
//! would announce for each tab.
//!
//! Run with `RUST_LOG=canopy=trace cargo run --example tab_strip` to see the
//! refresh-request tracing.

use std::sync::Arc;

use canopy::{
    AccessibleRole, Action, CollectionInfo, CollectionItemInfo, HostView, NodeInfo,
    NodeInfoCallback, ViewId, init_view_registry, node_info, view_registry,
};
use parking_lot::Mutex;

/// A toy host view: a callback slot plus an identity in the view registry.
struct DemoView {
    id: ViewId,
    callback: Mutex<Option<NodeInfoCallback>>,
}

impl DemoView {
    fn new(name: &str) -> Arc<Self> {
        let registry = view_registry().expect("registry initialized in main");
        let id = registry.register();
        registry.set_view_name(id, name.to_string()).unwrap();
        Arc::new(Self {
            id,
            callback: Mutex::new(None),
        })
    }

    /// Simulate the host taking an accessibility snapshot.
    fn inspect(&self) -> DemoNodeInfo {
        let mut info = DemoNodeInfo::default();
        if let Some(callback) = &*self.callback.lock() {
            callback(self, &mut info);
        }
        info
    }
}

impl HostView for DemoView {
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
        // A real host would schedule an accessibility pass here; the demo
        // inspects on demand instead.
    }
}

/// A toy info object that collects the announced properties.
#[derive(Debug, Default)]
struct DemoNodeInfo {
    label: Option<String>,
    class_name: Option<String>,
    role_description: Option<String>,
    selected: Option<bool>,
    clickable: Option<bool>,
    actions: Vec<Action>,
    collection_info: Option<CollectionInfo>,
    collection_item_info: Option<CollectionItemInfo>,
}

impl NodeInfo for DemoNodeInfo {
    fn set_checkable(&mut self, _checkable: bool) {}

    fn set_checked(&mut self, _checked: bool) {}

    fn set_selected(&mut self, selected: bool) {
        self.selected = Some(selected);
    }

    fn set_heading(&mut self, _heading: bool) {}

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }

    fn set_hint(&mut self, _hint: &str) {}

    fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn remove_action(&mut self, action: Action) {
        self.actions.retain(|a| *a != action);
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    init_view_registry();

    let labels = ["Home", "Downloads", "Settings"];
    let tabs: Vec<Arc<DemoView>> = labels.iter().map(|l| DemoView::new(l)).collect();

    for (index, (tab, label)) in tabs.iter().zip(labels).enumerate() {
        // The host adds its default click action before Canopy's callback
        // runs, like a real toolkit would.
        tab.set_node_info_callback(Box::new(|_, info| {
            info.add_action(Action::Click);
        }));

        node_info(tab)?
            .set_role(AccessibleRole::Tab)
            .set_label(label)
            .set_selected(index == 0)
            .set_item_index(index)
            .set_item_count(labels.len());
    }

    for tab in &tabs {
        let info = tab.inspect();
        println!(
            "{}: class={} role={} selected={:?} actions={:?}",
            info.label.as_deref().unwrap_or("<unlabelled>"),
            info.class_name.as_deref().unwrap_or("<host default>"),
            info.role_description.as_deref().unwrap_or("<host default>"),
            info.selected,
            info.actions,
        );
        if let (Some(collection), Some(item)) = (info.collection_info, info.collection_item_info) {
            println!(
                "    item {} of {} (selected: {})",
                item.column_index + 1,
                collection.column_count,
                item.selected,
            );
        }
    }

    Ok(())
}
