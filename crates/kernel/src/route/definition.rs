//! Route and breadcrumb value types.

use serde::{Deserialize, Serialize};

/// A navigable location in the application.
///
/// Routes are immutable once registered. `parent` stores the parent's id
/// rather than a reference; the registry resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    /// Unique identifier (e.g., "new-order")
    pub id: String,
    /// URL-like path (e.g., "/orders/new")
    pub path: String,
    /// Human-readable label
    pub name: String,
    /// Helper text shown as a tooltip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon name for navigation menus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Parent route id for breadcrumb hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Whether this appears in primary navigation
    #[serde(default)]
    pub show_in_navigation: bool,
    /// Whether a signed-in session is needed (enforced by the navigator)
    #[serde(default)]
    pub requires_auth: bool,
}

impl Route {
    /// Create a top-level route with no description, icon or flags.
    pub fn new(id: impl Into<String>, path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            name: name.into(),
            description: None,
            icon: None,
            parent: None,
            show_in_navigation: false,
            requires_auth: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the parent route id.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Show in primary navigation.
    pub fn in_navigation(mut self) -> Self {
        self.show_in_navigation = true;
        self
    }

    /// Require an authenticated session.
    pub fn with_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// True if the route has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Id of the route this crumb points at.
    pub id: String,
    pub name: String,
    pub path: String,
    /// True only for the last crumb (the route being viewed).
    pub current: bool,
}

impl BreadcrumbItem {
    pub(crate) fn from_route(route: &Route, current: bool) -> Self {
        Self {
            id: route.id.clone(),
            name: route.name.clone(),
            path: route.path.clone(),
            current,
        }
    }
}
