//! The per-view semantics record.

use crate::role::AccessibleRole;

/// The accessibility semantics declared for one view.
///
/// Every field is optional and independently settable. An absent field means
/// "not specified, inherit the host default" — which is distinct from
/// `false`/`0`, so no field ever defaults to a concrete value.
///
/// The record is a pure value holder with no identity of its own; one record
/// lives behind each [`NodeInfoManager`](crate::NodeInfoManager) and is
/// copied onto the host's info object whenever the host asks for an
/// accessibility snapshot.
///
/// # Example
///
/// ```
/// use canopy::{AccessibleRole, Semantics};
///
/// let semantics = Semantics::new()
///     .with_role(AccessibleRole::Tab)
///     .with_label("Downloads")
///     .with_selected(true)
///     .with_item_index(0)
///     .with_item_count(3);
///
/// assert_eq!(semantics.label.as_deref(), Some("Downloads"));
/// assert_eq!(semantics.checked, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Semantics {
    /// Whether the view supports a checked state.
    pub checkable: Option<bool>,
    /// Whether the view is currently checked.
    pub checked: Option<bool>,
    /// Number of peer items in the view's collection (e.g. tabs in a strip).
    pub item_count: Option<usize>,
    /// This view's position within its collection.
    pub item_index: Option<usize>,
    /// Whether the view is announced as a heading.
    pub heading: Option<bool>,
    /// Whether the view is currently selected.
    pub selected: Option<bool>,
    /// Whether the view is expanded (drives the expand/collapse action).
    pub expanded: Option<bool>,
    /// The accessible name announced for the view.
    pub label: Option<String>,
    /// The widget role advertised to assistive technology.
    pub role: Option<AccessibleRole>,
    /// Supplementary spoken hint.
    pub hint: Option<String>,
}

impl Semantics {
    /// Create an empty record with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set checkable using builder pattern.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = Some(checkable);
        self
    }

    /// Set checked using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Set the collection size using builder pattern.
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    /// Set the collection position using builder pattern.
    pub fn with_item_index(mut self, index: usize) -> Self {
        self.item_index = Some(index);
        self
    }

    /// Set heading using builder pattern.
    pub fn with_heading(mut self, heading: bool) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Set selected using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Set expanded using builder pattern.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the role using builder pattern.
    pub fn with_role(mut self, role: AccessibleRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the hint using builder pattern.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check whether every field is unset.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
