//! Per-view manager lookup and caching.

use std::sync::Arc;

use canopy_core::{ViewResult, view_registry};

use crate::host::HostView;
use crate::manager::NodeInfoManager;

/// Reserved tag key under which a view's manager is cached in the registry.
pub const NODE_INFO_TAG: &str = "canopy.node_info";

/// Get the node-info manager for a view, creating it on first access.
///
/// The manager is cached under [`NODE_INFO_TAG`] in the view registry, so
/// every call site for a given view gets handles to the same record and
/// shares mutation history. The first access constructs a manager with an
/// empty record and installs its callback on the view; later accesses
/// return the cached manager unchanged.
///
/// Call from the view's owning thread, like every other view operation.
///
/// # Example
///
/// ```ignore
/// use canopy::{node_info, AccessibleRole};
///
/// node_info(&view)?
///     .set_role(AccessibleRole::Button)
///     .set_label("Save");
/// ```
pub fn node_info<V: HostView + 'static>(view: &Arc<V>) -> ViewResult<NodeInfoManager> {
    let registry = view_registry()?;
    let id = view.view_id();

    if let Some(existing) =
        registry.with_read(|r| r.tag::<NodeInfoManager>(id, NODE_INFO_TAG).map(|m| m.cloned()))?
    {
        return Ok(existing);
    }

    let host: Arc<dyn HostView> = view.clone();
    let manager = NodeInfoManager::new(host);
    registry.set_tag(id, NODE_INFO_TAG, manager.clone())?;
    tracing::debug!(target: "canopy::node_info", view = ?id, "created node-info manager");
    Ok(manager)
}

/// Check whether a manager has been created and cached for a view.
///
/// Returns `true` once [`node_info`] has run for the view. The predicate
/// means what its name says.
pub fn is_node_info_initialized(view: &dyn HostView) -> ViewResult<bool> {
    let registry = view_registry()?;
    registry.with_read(|r| {
        r.tag::<NodeInfoManager>(view.view_id(), NODE_INFO_TAG)
            .map(|tag| tag.is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::ViewError;

    use crate::test_support::TestView;

    fn destroy(view: &dyn HostView) {
        view_registry().unwrap().destroy(view.view_id()).unwrap();
    }

    #[test]
    fn test_first_access_creates_and_caches() {
        let view = TestView::new();
        assert!(!is_node_info_initialized(&*view).unwrap());

        let manager = node_info(&view).unwrap();
        assert!(is_node_info_initialized(&*view).unwrap());
        assert!(manager.semantics().is_empty());
    }

    #[test]
    fn test_repeated_access_returns_same_instance() {
        let view = TestView::new();
        let first = node_info(&view).unwrap();
        let second = node_info(&view).unwrap();
        assert!(first.ptr_eq(&second));

        // Only the first access installed a callback and requested a refresh.
        assert_eq!(view.refresh_count(), 1);
    }

    #[test]
    fn test_mutation_is_visible_across_references() {
        let view = TestView::new();
        node_info(&view).unwrap().set_label("shared");

        let other = node_info(&view).unwrap();
        assert_eq!(other.semantics().label.as_deref(), Some("shared"));

        let info = view.inspect();
        assert_eq!(info.label.as_deref(), Some("shared"));
    }

    #[test]
    fn test_destroyed_view_errors() {
        let view = TestView::new();
        destroy(&*view);

        assert_eq!(node_info(&view), Err(ViewError::InvalidViewId));
        assert_eq!(is_node_info_initialized(&*view), Err(ViewError::InvalidViewId));
    }

    #[test]
    fn test_destroying_view_drops_cached_manager() {
        let view = TestView::new();
        let manager = node_info(&view).unwrap();
        assert!(is_node_info_initialized(&*view).unwrap());

        // The cached handle lives in the view's tags; destruction drops it
        // with the view.
        destroy(&*view);
        assert!(!view_registry().unwrap().contains(manager.view().view_id()));
    }
}
