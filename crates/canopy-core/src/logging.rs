//! Logging and debugging facilities for Canopy.
//!
//! Canopy uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! # Debug Visualization
//!
//! Use [`RegistryDebug`] to dump the registered views and their tags:
//!
//! ```ignore
//! use canopy_core::logging::RegistryDebug;
//!
//! let debug = RegistryDebug::new();
//! println!("{}", debug.format_views().unwrap());
//! ```

use std::fmt::Write as FmtWrite;

use crate::error::ViewResult;
use crate::view::view_registry;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "canopy_core";
    /// View registry target.
    pub const VIEW: &str = "canopy_core::view";
    /// Node-info manager target.
    pub const NODE_INFO: &str = "canopy::node_info";
}

/// Configuration for registry debug output.
#[derive(Debug, Clone)]
pub struct RegistryFormatOptions {
    /// Whether to show raw view IDs.
    pub show_ids: bool,
    /// Whether to list tag keys per view.
    pub show_tags: bool,
}

impl Default for RegistryFormatOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            show_tags: false,
        }
    }
}

/// Debug formatter for the global view registry.
///
/// Produces one line per registered view with its name and, optionally, its
/// raw ID and tag keys. Intended for log output and test diagnostics.
pub struct RegistryDebug {
    options: RegistryFormatOptions,
}

impl RegistryDebug {
    /// Create a debug formatter with default options.
    pub fn new() -> Self {
        Self {
            options: RegistryFormatOptions::default(),
        }
    }

    /// Create a debug formatter with custom options.
    pub fn with_options(options: RegistryFormatOptions) -> Self {
        Self { options }
    }

    /// Format all registered views, one per line.
    pub fn format_views(&self) -> ViewResult<String> {
        let registry = view_registry()?;
        registry.with_read(|r| {
            let mut out = String::new();
            for id in r.view_ids() {
                let name = r.view_name(id).unwrap_or_default();
                if name.is_empty() {
                    out.push_str("<unnamed>");
                } else {
                    out.push_str(name);
                }
                if self.options.show_ids {
                    let _ = write!(out, " ({:#x})", id.as_raw());
                }
                if self.options.show_tags {
                    let mut keys = r.tag_names(id).unwrap_or_default();
                    keys.sort_unstable();
                    let _ = write!(out, " [{}]", keys.join(", "));
                }
                out.push('\n');
            }
            Ok(out)
        })
    }
}

impl Default for RegistryDebug {
    fn default() -> Self {
        Self::new()
    }
}
