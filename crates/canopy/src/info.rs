//! The host accessibility-info object abstraction.

use accesskit::Action;

/// How items within a collection can be selected.
///
/// Mirrors the three selection modes of host collection descriptors. Only
/// [`SelectionMode::Single`] is produced by the built-in tab handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Items cannot be selected.
    #[default]
    None,
    /// At most one item can be selected at a time.
    Single,
    /// Several items can be selected at once.
    Multiple,
}

/// Descriptor declaring that a view is an enumerable collection of peers.
///
/// A tab strip, for instance, is a single-row collection with one column per
/// tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionInfo {
    /// Number of rows in the collection.
    pub row_count: usize,
    /// Number of columns in the collection.
    pub column_count: usize,
    /// Whether the collection is hierarchical (e.g. a tree).
    pub hierarchical: bool,
    /// How items within the collection are selected.
    pub selection_mode: SelectionMode,
}

impl CollectionInfo {
    /// Create a flat, non-selectable collection descriptor.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            hierarchical: false,
            selection_mode: SelectionMode::None,
        }
    }

    /// Set hierarchical using builder pattern.
    pub fn with_hierarchical(mut self, hierarchical: bool) -> Self {
        self.hierarchical = hierarchical;
        self
    }

    /// Set the selection mode using builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }
}

/// Descriptor declaring one item's position within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionItemInfo {
    /// The item's row.
    pub row_index: usize,
    /// Number of rows the item spans.
    pub row_span: usize,
    /// The item's column.
    pub column_index: usize,
    /// Number of columns the item spans.
    pub column_span: usize,
    /// Whether the item is a heading for its collection.
    pub heading: bool,
    /// Whether the item is currently selected.
    pub selected: bool,
}

impl CollectionItemInfo {
    /// Create a single-cell item descriptor at the given position.
    pub fn new(row_index: usize, column_index: usize) -> Self {
        Self {
            row_index,
            row_span: 1,
            column_index,
            column_span: 1,
            heading: false,
            selected: false,
        }
    }

    /// Set heading using builder pattern.
    pub fn with_heading(mut self, heading: bool) -> Self {
        self.heading = heading;
        self
    }

    /// Set selected using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// The mutable accessibility-info object the host passes into node-info
/// callbacks.
///
/// Hosts implement this for whatever descriptor their accessibility tree
/// hands out. Canopy only ever *writes* through this trait, and only the
/// fields present in the view's [`Semantics`](crate::Semantics) record —
/// everything left untouched keeps the host's own defaults.
///
/// The collection and clickability methods form the extended/compat surface:
/// they default to no-ops so hosts without those descriptors degrade to the
/// base behavior instead of failing.
pub trait NodeInfo {
    /// Set whether the view supports a checked state.
    fn set_checkable(&mut self, checkable: bool);

    /// Set whether the view is currently checked.
    fn set_checked(&mut self, checked: bool);

    /// Set whether the view is currently selected.
    fn set_selected(&mut self, selected: bool);

    /// Set whether the view is announced as a heading.
    fn set_heading(&mut self, heading: bool);

    /// Set the widget class identity string.
    fn set_class_name(&mut self, class_name: &str);

    /// Overwrite the spoken label (content description).
    fn set_label(&mut self, label: &str);

    /// Overwrite the spoken hint.
    fn set_hint(&mut self, hint: &str);

    /// Add a named action to the info's action list.
    fn add_action(&mut self, action: Action);

    /// Remove a named action from the info's action list.
    fn remove_action(&mut self, action: Action);

    /// Set a human-readable role description (compat surface).
    fn set_role_description(&mut self, description: &str) {
        let _ = description;
    }

    /// Set whether the view reacts to clicks (compat surface).
    fn set_clickable(&mut self, clickable: bool) {
        let _ = clickable;
    }

    /// Declare the view as a collection of peer items (compat surface).
    fn set_collection_info(&mut self, info: CollectionInfo) {
        let _ = info;
    }

    /// Declare the view's position within its collection (compat surface).
    fn set_collection_item_info(&mut self, info: CollectionItemInfo) {
        let _ = info;
    }
}
