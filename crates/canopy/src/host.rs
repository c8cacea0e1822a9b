//! The host view abstraction.

use canopy_core::ViewId;

use crate::info::NodeInfo;

/// Callback invoked by the host whenever it needs an accessibility
/// description of a view.
///
/// The host passes itself and a fresh, mutable info object. Callbacks
/// compose: an installer that wants to preserve previously registered
/// behavior takes the current callback out of the slot first and invokes it
/// before applying its own overrides.
pub type NodeInfoCallback = Box<dyn Fn(&dyn HostView, &mut dyn NodeInfo) + Send + Sync>;

/// Localized strings Canopy pulls from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum StringResource {
    /// The role description announced for a tab item.
    TabRoleDescription,
}

/// A host view that can be annotated with accessibility semantics.
///
/// Implemented by the host toolkit's view wrapper. The trait is the complete
/// surface Canopy needs from a view: a stable identity registered with the
/// [view registry](canopy_core::view_registry), a node-info callback slot,
/// and a way to ask the host for an accessibility refresh.
///
/// # Example
///
/// ```ignore
/// struct MyView {
///     id: ViewId,
///     node_info_callback: Mutex<Option<NodeInfoCallback>>,
/// }
///
/// impl HostView for MyView {
///     fn view_id(&self) -> ViewId {
///         self.id
///     }
///
///     fn take_node_info_callback(&self) -> Option<NodeInfoCallback> {
///         self.node_info_callback.lock().take()
///     }
///
///     fn set_node_info_callback(&self, callback: NodeInfoCallback) {
///         *self.node_info_callback.lock() = Some(callback);
///     }
///
///     fn request_node_info(&self) {
///         // Schedule an accessibility pass with the host toolkit.
///     }
/// }
/// ```
pub trait HostView: Send + Sync {
    /// The view's registered identity.
    fn view_id(&self) -> ViewId;

    /// Take the currently installed node-info callback out of the slot.
    ///
    /// Returns `None` when no callback has been installed. Together with
    /// [`set_node_info_callback`](HostView::set_node_info_callback) this
    /// forms the registration slot: installers capture the taken callback
    /// and delegate to it first.
    fn take_node_info_callback(&self) -> Option<NodeInfoCallback>;

    /// Install a node-info callback, replacing the slot's contents.
    fn set_node_info_callback(&self, callback: NodeInfoCallback);

    /// Ask the host to recompute and re-announce this view's accessibility
    /// description.
    ///
    /// This is an asynchronous hint: the host decides when (and whether) to
    /// invoke the installed callback. The only guarantee is "eventually,
    /// before the next accessibility inspection".
    fn request_node_info(&self);

    /// Look up a localized string from the host's resources.
    ///
    /// The default returns an unlocalized English fallback for hosts
    /// without string resources.
    fn string_resource(&self, resource: StringResource) -> String {
        match resource {
            StringResource::TabRoleDescription => "Tab".to_string(),
        }
    }
}
