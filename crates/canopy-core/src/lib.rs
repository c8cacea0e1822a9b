//! Core systems for Canopy.
//!
//! This crate provides the foundational components of the Canopy
//! accessibility layer:
//!
//! - **View Identity**: Stable [`ViewId`] handles for host views
//! - **View Registry**: Arena-based registry with generic per-view tag storage
//! - **Logging**: `tracing` targets and registry debug formatting
//!
//! Higher layers (the `canopy` crate) build the node-info manager and its
//! per-view cache on top of the registry's tag storage.
//!
//! # Registry Example
//!
//! ```
//! use canopy_core::{init_view_registry, view_registry};
//!
//! init_view_registry();
//! let registry = view_registry().unwrap();
//!
//! let id = registry.register();
//! assert!(registry.contains(id));
//!
//! registry.destroy(id).unwrap();
//! assert!(!registry.contains(id));
//! ```

mod error;
pub mod logging;
pub mod view;

pub use error::{ViewError, ViewResult};
pub use logging::{RegistryDebug, RegistryFormatOptions};
pub use view::{
    SharedViewRegistry, ViewId, ViewRegistry, init_view_registry, view_registry,
};
