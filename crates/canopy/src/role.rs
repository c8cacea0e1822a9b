//! Accessibility roles for annotated views.

use accesskit::Role;

/// The accessibility role advertised for an annotated view.
///
/// The role describes the view's purpose to assistive technologies
/// independent of the view's actual implementation class. Each role maps to
/// a host widget class identity string (the Android-style class name the
/// host reports for that widget kind) and to the corresponding AccessKit
/// [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A push button.
    Button,

    /// An on/off switch.
    Switch,

    /// A single tab in a tab strip.
    Tab,

    /// A checkbox that can be checked or unchecked.
    CheckBox,

    /// A radio button (mutually exclusive selection).
    RadioButton,

    /// A two-state toggle button.
    ToggleButton,
}

impl AccessibleRole {
    /// The host widget class identity string for this role.
    ///
    /// Assistive technologies use the class identity to pick announcement
    /// and interaction heuristics, so the strings must match the host's
    /// widget classes exactly.
    pub fn class_name(self) -> &'static str {
        match self {
            AccessibleRole::Button => "android.widget.Button",
            AccessibleRole::Switch => "android.widget.Switch",
            AccessibleRole::Tab => "com.google.android.material.tabs.TabLayout$Tab",
            AccessibleRole::CheckBox => "android.widget.CheckBox",
            AccessibleRole::RadioButton => "android.widget.RadioButton",
            AccessibleRole::ToggleButton => "android.widget.ToggleButton",
        }
    }

    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Button => Role::Button,
            AccessibleRole::Switch => Role::Switch,
            AccessibleRole::Tab => Role::Tab,
            AccessibleRole::CheckBox => Role::CheckBox,
            AccessibleRole::RadioButton => Role::RadioButton,
            AccessibleRole::ToggleButton => Role::ToggleButton,
        }
    }
}

impl From<AccessibleRole> for Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}
