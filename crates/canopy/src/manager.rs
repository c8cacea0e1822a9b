//! The per-view node-info manager.

use std::fmt;
use std::sync::Arc;

use accesskit::Action;
use parking_lot::Mutex;

use crate::host::{HostView, StringResource};
use crate::info::{CollectionInfo, CollectionItemInfo, NodeInfo, SelectionMode};
use crate::role::AccessibleRole;
use crate::semantics::Semantics;

/// Manages the accessibility semantics declared for one view.
///
/// The manager owns the view's [`Semantics`] record and installs itself into
/// the view's node-info callback slot. Whenever the host requests an
/// accessibility snapshot, the installed callback first delegates to any
/// previously registered callback, then copies every present record field
/// onto the host's info object. Absent fields are skipped, leaving the
/// host's defaults in place.
///
/// Mutation is fluent and externally driven: each setter writes its field
/// and asks the host for a refresh, but the actual field copy only happens
/// inside the callback, at the host's discretion and timing.
///
/// The manager is a cheaply cloneable handle; clones share the same record,
/// so a mutation through one handle is visible through all of them.
///
/// # Example
///
/// ```ignore
/// use canopy::{node_info, AccessibleRole};
///
/// node_info(&view)?
///     .set_role(AccessibleRole::Tab)
///     .set_label("Downloads")
///     .set_selected(false)
///     .set_item_index(1)
///     .set_item_count(3);
/// ```
#[derive(Clone)]
pub struct NodeInfoManager {
    /// The annotated view.
    view: Arc<dyn HostView>,

    /// The semantics record, shared with the installed callback.
    semantics: Arc<Mutex<Semantics>>,
}

impl NodeInfoManager {
    /// Create a manager with an empty record and install its callback on
    /// the view.
    pub fn new(view: Arc<dyn HostView>) -> Self {
        Self::with_semantics(view, Semantics::new())
    }

    /// Create a manager with an initial record and install its callback on
    /// the view.
    ///
    /// The previously installed callback, if any, is preserved: it runs
    /// first on every host invocation, and this manager's record is applied
    /// on top of whatever it set. One refresh is requested so the initial
    /// record reaches the host's next accessibility pass.
    pub fn with_semantics(view: Arc<dyn HostView>, semantics: Semantics) -> Self {
        let semantics = Arc::new(Mutex::new(semantics));

        let record = Arc::clone(&semantics);
        let previous = view.take_node_info_callback();
        view.set_node_info_callback(Box::new(move |host, info| {
            if let Some(previous) = &previous {
                previous(host, info);
            }
            apply_semantics(&record.lock(), host, info);
        }));
        tracing::debug!(
            target: "canopy::node_info",
            view = ?view.view_id(),
            "installed node-info callback"
        );

        let manager = Self { view, semantics };
        manager.reload_node_info();
        manager
    }

    /// The annotated view.
    pub fn view(&self) -> &Arc<dyn HostView> {
        &self.view
    }

    /// A snapshot of the current record.
    pub fn semantics(&self) -> Semantics {
        self.semantics.lock().clone()
    }

    /// Check whether two handles manage the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.semantics, &other.semantics)
    }

    // =========================================================================
    // Fluent Mutators
    // =========================================================================

    /// Declare whether the view supports a checked state.
    pub fn set_checkable(&self, checkable: bool) -> &Self {
        self.semantics.lock().checkable = Some(checkable);
        self.reload_node_info();
        self
    }

    /// Declare whether the view is currently checked.
    pub fn set_checked(&self, checked: bool) -> &Self {
        self.semantics.lock().checked = Some(checked);
        self.reload_node_info();
        self
    }

    /// Declare whether the view is currently selected.
    pub fn set_selected(&self, selected: bool) -> &Self {
        self.semantics.lock().selected = Some(selected);
        self.reload_node_info();
        self
    }

    /// Declare whether the view is announced as a heading.
    pub fn set_heading(&self, heading: bool) -> &Self {
        self.semantics.lock().heading = Some(heading);
        self.reload_node_info();
        self
    }

    /// Declare whether the view is expanded.
    ///
    /// An expanded view exposes a collapse action; a collapsed one exposes
    /// an expand action.
    pub fn set_expanded(&self, expanded: bool) -> &Self {
        self.semantics.lock().expanded = Some(expanded);
        self.reload_node_info();
        self
    }

    /// Declare the accessible name announced for the view.
    pub fn set_label(&self, label: impl Into<String>) -> &Self {
        self.semantics.lock().label = Some(label.into());
        self.reload_node_info();
        self
    }

    /// Declare the supplementary spoken hint.
    pub fn set_hint(&self, hint: impl Into<String>) -> &Self {
        self.semantics.lock().hint = Some(hint.into());
        self.reload_node_info();
        self
    }

    /// Declare the widget role advertised to assistive technology.
    pub fn set_role(&self, role: AccessibleRole) -> &Self {
        self.semantics.lock().role = Some(role);
        self.reload_node_info();
        self
    }

    /// Declare the view's position within its collection.
    pub fn set_item_index(&self, index: usize) -> &Self {
        self.semantics.lock().item_index = Some(index);
        self.reload_node_info();
        self
    }

    /// Declare the size of the view's collection.
    pub fn set_item_count(&self, count: usize) -> &Self {
        self.semantics.lock().item_count = Some(count);
        self.reload_node_info();
        self
    }

    /// Ask the host to recompute the view's accessibility description.
    fn reload_node_info(&self) {
        tracing::trace!(
            target: "canopy::node_info",
            view = ?self.view.view_id(),
            "requesting node-info refresh"
        );
        self.view.request_node_info();
    }
}

/// Handle equality: two managers are equal when they share one record.
impl PartialEq for NodeInfoManager {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NodeInfoManager {}

impl fmt::Debug for NodeInfoManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeInfoManager")
            .field("view", &self.view.view_id())
            .field("semantics", &*self.semantics.lock())
            .finish()
    }
}

static_assertions::assert_impl_all!(NodeInfoManager: Send, Sync, Clone);

/// Copy every present record field onto the host's info object.
///
/// Runs inside the installed callback, after any previously registered
/// callback has had its turn.
fn apply_semantics(semantics: &Semantics, view: &dyn HostView, info: &mut dyn NodeInfo) {
    if let Some(checkable) = semantics.checkable {
        info.set_checkable(checkable);
    }
    if let Some(checked) = semantics.checked {
        info.set_checked(checked);
    }
    if let Some(selected) = semantics.selected {
        info.set_selected(selected);
    }
    if let Some(heading) = semantics.heading {
        info.set_heading(heading);
    }
    if let Some(expanded) = semantics.expanded {
        // Exactly one of the pair is exposed: collapse while expanded,
        // expand while collapsed.
        if expanded {
            info.add_action(Action::Collapse);
        } else {
            info.add_action(Action::Expand);
        }
    }
    if let Some(label) = &semantics.label {
        info.set_label(label);
    }
    if let Some(hint) = &semantics.hint {
        info.set_hint(hint);
    }
    if let Some(role) = semantics.role {
        info.set_class_name(role.class_name());
        if role == AccessibleRole::Tab {
            info.set_role_description(&view.string_resource(StringResource::TabRoleDescription));
            // Tabs are not checkable widgets, whatever the record says.
            info.set_checkable(false);
            info.set_checked(false);

            if let (Some(index), Some(count), Some(selected)) =
                (semantics.item_index, semantics.item_count, semantics.selected)
            {
                info.set_collection_info(
                    CollectionInfo::new(1, count).with_selection_mode(SelectionMode::Single),
                );
                info.set_collection_item_info(
                    CollectionItemInfo::new(0, index).with_selected(selected),
                );
                if selected {
                    // A selected tab is not reactivated by clicking.
                    info.remove_action(Action::Click);
                    info.set_clickable(false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingNodeInfo, TestView};

    #[test]
    fn test_unset_fields_leave_info_untouched() {
        let view = TestView::new();
        let _manager = NodeInfoManager::new(view.clone());

        let info = view.inspect();
        assert!(info.is_untouched());
    }

    #[test]
    fn test_present_fields_are_copied() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_checkable(true)
            .set_checked(false)
            .set_heading(true)
            .set_label("Accept terms")
            .set_hint("Double-tap to toggle");

        let info = view.inspect();
        assert_eq!(info.checkable, Some(true));
        assert_eq!(info.checked, Some(false));
        assert_eq!(info.heading, Some(true));
        assert_eq!(info.label.as_deref(), Some("Accept terms"));
        assert_eq!(info.hint.as_deref(), Some("Double-tap to toggle"));
        // Fields that were never set stay at the host default.
        assert_eq!(info.selected, None);
        assert_eq!(info.class_name, None);
    }

    #[test]
    fn test_expanded_exposes_exactly_one_action() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());

        manager.set_expanded(true);
        let info = view.inspect();
        assert_eq!(info.actions, vec![Action::Collapse]);

        manager.set_expanded(false);
        let info = view.inspect();
        assert_eq!(info.actions, vec![Action::Expand]);
    }

    #[test]
    fn test_initial_record_applies() {
        let view = TestView::new();
        let semantics = Semantics::new()
            .with_role(AccessibleRole::Switch)
            .with_checked(true)
            .with_label("Wi-Fi");
        let _manager = NodeInfoManager::with_semantics(view.clone(), semantics);

        // Construction requests one refresh so the host picks up the record.
        assert_eq!(view.refresh_count(), 1);

        let info = view.inspect();
        assert_eq!(info.class_name.as_deref(), Some("android.widget.Switch"));
        assert_eq!(info.checked, Some(true));
        assert_eq!(info.label.as_deref(), Some("Wi-Fi"));
    }

    #[test]
    fn test_tab_forces_checkable_and_checked_off() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_checkable(true)
            .set_checked(true)
            .set_role(AccessibleRole::Tab);

        let info = view.inspect();
        assert_eq!(info.checkable, Some(false));
        assert_eq!(info.checked, Some(false));
        assert_eq!(
            info.class_name.as_deref(),
            Some("com.google.android.material.tabs.TabLayout$Tab")
        );
        assert_eq!(info.role_description.as_deref(), Some("Tab"));
    }

    #[test]
    fn test_selected_tab_declares_collection_and_drops_click() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_role(AccessibleRole::Tab)
            .set_item_index(0)
            .set_item_count(3)
            .set_selected(true);

        let info = view.inspect();
        assert_eq!(
            info.collection_info,
            Some(CollectionInfo::new(1, 3).with_selection_mode(SelectionMode::Single))
        );
        assert_eq!(
            info.collection_item_info,
            Some(CollectionItemInfo::new(0, 0).with_selected(true))
        );
        assert_eq!(info.removed_actions, vec![Action::Click]);
        assert_eq!(info.clickable, Some(false));
    }

    #[test]
    fn test_unselected_tab_keeps_click() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_role(AccessibleRole::Tab)
            .set_item_index(1)
            .set_item_count(3)
            .set_selected(false);

        let info = view.inspect();
        assert_eq!(
            info.collection_item_info,
            Some(CollectionItemInfo::new(0, 1))
        );
        assert!(info.removed_actions.is_empty());
        assert_eq!(info.clickable, None);
    }

    #[test]
    fn test_tab_without_item_count_skips_collection_metadata() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_role(AccessibleRole::Tab)
            .set_item_index(0)
            .set_selected(true);

        let info = view.inspect();
        assert_eq!(info.collection_info, None);
        assert_eq!(info.collection_item_info, None);
        assert!(info.removed_actions.is_empty());
        assert_eq!(info.clickable, None);
    }

    #[test]
    fn test_previous_callback_runs_first() {
        let view = TestView::new();
        view.set_node_info_callback(Box::new(|_, info| {
            info.add_action(Action::Click);
            info.set_label("host default");
            info.set_selected(true);
        }));

        let manager = NodeInfoManager::new(view.clone());
        manager.set_label("annotated");

        let info = view.inspect();
        // The record overwrites the label, but everything else the prior
        // callback set survives.
        assert_eq!(info.label.as_deref(), Some("annotated"));
        assert_eq!(info.selected, Some(true));
        assert_eq!(info.actions, vec![Action::Click]);
    }

    #[test]
    fn test_selected_tab_removes_click_added_by_previous_callback() {
        let view = TestView::new();
        view.set_node_info_callback(Box::new(|_, info| {
            info.add_action(Action::Click);
            info.set_clickable(true);
        }));

        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_role(AccessibleRole::Tab)
            .set_item_index(2)
            .set_item_count(3)
            .set_selected(true);

        let info = view.inspect();
        assert!(info.actions.is_empty());
        assert_eq!(info.removed_actions, vec![Action::Click]);
        assert_eq!(info.clickable, Some(false));
    }

    #[test]
    fn test_each_setter_requests_one_refresh() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        assert_eq!(view.refresh_count(), 1);

        manager.set_label("a").set_hint("b").set_heading(true);
        assert_eq!(view.refresh_count(), 4);

        // No inspection happened, so nothing was materialized yet.
        assert_eq!(view.inspection_count(), 0);
    }

    #[test]
    fn test_setters_are_order_independent_per_field() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        manager
            .set_label("first")
            .set_hint("how to use")
            .set_role(AccessibleRole::Button)
            .set_label("second");

        assert_eq!(
            manager.semantics(),
            Semantics::new()
                .with_label("second")
                .with_hint("how to use")
                .with_role(AccessibleRole::Button)
        );

        let info = view.inspect();
        assert_eq!(info.label.as_deref(), Some("second"));
        assert_eq!(info.hint.as_deref(), Some("how to use"));
        assert_eq!(info.class_name.as_deref(), Some("android.widget.Button"));
    }

    #[test]
    fn test_localized_tab_role_description_is_used() {
        let view = TestView::with_tab_role_description("Registerkarte");
        let manager = NodeInfoManager::new(view.clone());
        manager.set_role(AccessibleRole::Tab);

        let info = view.inspect();
        assert_eq!(info.role_description.as_deref(), Some("Registerkarte"));
    }

    #[test]
    fn test_clones_share_the_record() {
        let view = TestView::new();
        let manager = NodeInfoManager::new(view.clone());
        let alias = manager.clone();
        assert!(manager.ptr_eq(&alias));

        alias.set_checked(true);
        assert_eq!(manager.semantics().checked, Some(true));
    }
}
