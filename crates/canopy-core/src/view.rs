//! View identity and registry for Canopy.
//!
//! Hosts embedding Canopy register each of their views here once, and get back
//! a [`ViewId`]: a stable handle that stays valid for the view's attachment
//! lifetime. Alongside identity, the registry offers generic per-view tag
//! storage — the side-table under which higher layers cache per-view state
//! (Canopy's node-info manager lives under a reserved tag key).
//!
//! # Key Types
//!
//! - [`ViewId`] - Unique stable identifier for each registered view
//! - [`ViewRegistry`] - Central registry managing view data and tags
//! - [`SharedViewRegistry`] - Thread-safe wrapper around [`ViewRegistry`]
//!
//! # Example
//!
//! ```
//! use canopy_core::{init_view_registry, view_registry};
//!
//! init_view_registry();
//! let registry = view_registry().unwrap();
//!
//! let id = registry.register();
//! registry.set_view_name(id, "tab-strip".to_string()).unwrap();
//! registry.set_tag(id, "demo.counter", 3usize).unwrap();
//!
//! let count = registry.with_read(|r| r.tag::<usize>(id, "demo.counter").ok().flatten().copied());
//! assert_eq!(count, Some(3));
//! ```

use std::any::Any;
use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};
use slotmap::{SlotMap, new_key_type};

use crate::error::{ViewError, ViewResult};

new_key_type! {
    /// A unique identifier for a view in the registry.
    ///
    /// `ViewId`s are stable handles that remain valid until the view is
    /// destroyed. Destroyed IDs are never reused for a live lookup: the
    /// slot generation changes on reuse.
    pub struct ViewId;
}

impl ViewId {
    /// Convert the ViewId to a raw u64 value.
    ///
    /// This is useful for interop with host toolkits that key views by a
    /// numeric handle. The raw value can be converted back using
    /// [`ViewId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a ViewId from a raw u64 value.
    ///
    /// Note: This does not check if the view exists in the registry.
    #[inline]
    pub fn from_raw(raw: u64) -> Option<Self> {
        let key_data = slotmap::KeyData::from_ffi(raw);
        Some(Self::from(key_data))
    }
}

/// Internal data stored in the registry for each view.
struct ViewData {
    /// Human-readable name for debugging and log output.
    name: String,
    /// Generic tag storage (type-erased), keyed by reserved string keys.
    tags: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ViewData {
    fn new() -> Self {
        Self {
            name: String::new(),
            tags: HashMap::new(),
        }
    }
}

/// The central registry that manages all registered views.
///
/// Uses arena-based storage via SlotMap for stable view IDs. The registry
/// does not model the host's view hierarchy; it only tracks identity and
/// per-view tags.
///
/// # Related Types
///
/// - [`SharedViewRegistry`] - Thread-safe wrapper for concurrent access
/// - [`ViewId`] - Keys into this registry
/// - [`view_registry`] - Access the singleton instance
pub struct ViewRegistry {
    views: SlotMap<ViewId, ViewData>,
}

impl ViewRegistry {
    /// Create a new empty view registry.
    pub fn new() -> Self {
        Self {
            views: SlotMap::with_key(),
        }
    }

    /// Register a new view and return its ID.
    pub fn register(&mut self) -> ViewId {
        let id = self.views.insert(ViewData::new());
        tracing::trace!(target: "canopy_core::view", ?id, "registered view");
        id
    }

    /// Remove a view and all its tags from the registry.
    ///
    /// Dropping the tags releases anything cached under them, which is how
    /// per-view state tied to the attachment lifetime ends.
    pub fn destroy(&mut self, id: ViewId) -> ViewResult<()> {
        let data = self.views.remove(id).ok_or(ViewError::InvalidViewId)?;
        tracing::trace!(target: "canopy_core::view", ?id, tag_count = data.tags.len(), "destroyed view");
        Ok(())
    }

    /// Check if a view exists in the registry.
    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// Get the view's name.
    pub fn view_name(&self, id: ViewId) -> ViewResult<&str> {
        self.views
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ViewError::InvalidViewId)
    }

    /// Set the view's name.
    pub fn set_view_name(&mut self, id: ViewId, name: String) -> ViewResult<()> {
        self.views
            .get_mut(id)
            .map(|d| d.name = name)
            .ok_or(ViewError::InvalidViewId)
    }

    /// Set a tag on a view, replacing any previous value under the same key.
    pub fn set_tag<T: Any + Send + Sync>(
        &mut self,
        id: ViewId,
        key: impl Into<String>,
        value: T,
    ) -> ViewResult<()> {
        let data = self.views.get_mut(id).ok_or(ViewError::InvalidViewId)?;
        data.tags.insert(key.into(), Box::new(value));
        Ok(())
    }

    /// Get a tag from a view.
    ///
    /// Returns `Ok(None)` when no tag is stored under the key or the stored
    /// value has a different type.
    pub fn tag<T: Any>(&self, id: ViewId, key: &str) -> ViewResult<Option<&T>> {
        let data = self.views.get(id).ok_or(ViewError::InvalidViewId)?;
        Ok(data.tags.get(key).and_then(|v| v.downcast_ref::<T>()))
    }

    /// Remove a tag from a view, returning the stored value if present.
    pub fn remove_tag(
        &mut self,
        id: ViewId,
        key: &str,
    ) -> ViewResult<Option<Box<dyn Any + Send + Sync>>> {
        let data = self.views.get_mut(id).ok_or(ViewError::InvalidViewId)?;
        Ok(data.tags.remove(key))
    }

    /// Get all tag keys for a view.
    pub fn tag_names(&self, id: ViewId) -> ViewResult<Vec<&str>> {
        let data = self.views.get(id).ok_or(ViewError::InvalidViewId)?;
        Ok(data.tags.keys().map(|s| s.as_str()).collect())
    }

    /// Get the number of registered views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Iterate over all registered view IDs.
    pub fn view_ids(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.keys()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`ViewRegistry`].
///
/// Provides concurrent read access with exclusive write access via `RwLock`.
/// Hosts drive Canopy from the view-owning thread; the lock exists so test
/// harnesses and debug tooling can inspect the registry from elsewhere.
pub struct SharedViewRegistry {
    inner: RwLock<ViewRegistry>,
}

impl SharedViewRegistry {
    /// Create a new shared view registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ViewRegistry::new()),
        }
    }

    /// Register a new view.
    pub fn register(&self) -> ViewId {
        self.inner.write().register()
    }

    /// Destroy a view and its tags.
    pub fn destroy(&self, id: ViewId) -> ViewResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if a view exists.
    pub fn contains(&self, id: ViewId) -> bool {
        self.inner.read().contains(id)
    }

    /// Get the view's name.
    pub fn view_name(&self, id: ViewId) -> ViewResult<String> {
        self.inner.read().view_name(id).map(|s| s.to_string())
    }

    /// Set the view's name.
    pub fn set_view_name(&self, id: ViewId, name: String) -> ViewResult<()> {
        self.inner.write().set_view_name(id, name)
    }

    /// Set a tag on a view.
    pub fn set_tag<T: Any + Send + Sync>(
        &self,
        id: ViewId,
        key: impl Into<String>,
        value: T,
    ) -> ViewResult<()> {
        self.inner.write().set_tag(id, key, value)
    }

    /// Remove a tag from a view.
    pub fn remove_tag(
        &self,
        id: ViewId,
        key: &str,
    ) -> ViewResult<Option<Box<dyn Any + Send + Sync>>> {
        self.inner.write().remove_tag(id, key)
    }

    /// Get the number of registered views.
    pub fn view_count(&self) -> usize {
        self.inner.read().view_count()
    }

    /// Access the registry with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ViewRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SharedViewRegistry: Send, Sync);

/// Global view registry (lazy initialized).
static GLOBAL_REGISTRY: Mutex<Option<SharedViewRegistry>> = Mutex::new(None);

/// Initialize the global view registry.
///
/// Idempotent; hosts call this once during startup before registering views.
pub fn init_view_registry() {
    let mut guard = GLOBAL_REGISTRY.lock();
    if guard.is_none() {
        *guard = Some(SharedViewRegistry::new());
    }
}

/// Get a reference to the global view registry.
///
/// Returns an error if the registry hasn't been initialized.
pub fn view_registry() -> ViewResult<&'static SharedViewRegistry> {
    let guard = GLOBAL_REGISTRY.lock();
    if guard.is_some() {
        // SAFETY: The Option is Some and is never set back to None, and the
        // static is never moved or deallocated once initialized.
        Ok(unsafe {
            let ptr = guard.as_ref().unwrap() as *const SharedViewRegistry;
            &*ptr
        })
    } else {
        Err(ViewError::RegistryNotInitialized)
    }
}
