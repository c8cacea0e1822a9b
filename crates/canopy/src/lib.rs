//! Canopy - declarative accessibility node semantics for host view toolkits.
//!
//! Canopy lets a view's accessibility metadata (checkable/checked state,
//! selection, heading, expansion, role, label, hint, collection position) be
//! declared imperatively and reapplied whenever the host toolkit requests an
//! accessibility snapshot of the view.
//!
//! # Architecture
//!
//! - [`Semantics`]: the per-view record of declared metadata, every field
//!   optional ("unset" and "false" stay distinguishable)
//! - [`NodeInfoManager`]: owns a record, installs a callback into the view's
//!   node-info slot, and offers fluent setters that request a host refresh
//! - [`node_info`]: per-view accessor that creates the manager lazily and
//!   caches it in the view registry, so every call site shares one record
//! - [`HostView`] / [`NodeInfo`]: the traits a host toolkit implements to
//!   plug its views and info objects in
//!
//! Control flow is entirely host-driven: the installed callback runs when
//! the host asks for a description, delegates to any previously installed
//! callback first, then copies the present record fields onto the info
//! object. Setters never materialize anything synchronously.
//!
//! # Example
//!
//! ```ignore
//! use canopy::{node_info, AccessibleRole};
//!
//! // Annotate the second of three tabs.
//! node_info(&view)?
//!     .set_role(AccessibleRole::Tab)
//!     .set_label("Downloads")
//!     .set_selected(false)
//!     .set_item_index(1)
//!     .set_item_count(3);
//! ```

mod accessor;
mod host;
mod info;
mod manager;
mod role;
mod semantics;

#[cfg(test)]
mod test_support;

pub use accessor::{NODE_INFO_TAG, is_node_info_initialized, node_info};
pub use host::{HostView, NodeInfoCallback, StringResource};
pub use info::{CollectionInfo, CollectionItemInfo, NodeInfo, SelectionMode};
pub use manager::NodeInfoManager;
pub use role::AccessibleRole;
pub use semantics::Semantics;

// Re-export the action vocabulary that appears in the NodeInfo surface.
pub use accesskit::Action;

// Re-export core view types that hosts need.
pub use canopy_core::{
    ViewError, ViewId, ViewResult, init_view_registry, view_registry,
};
