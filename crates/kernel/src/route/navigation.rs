//! Primary navigation and dashboard quick actions.

use serde::Serialize;

use super::{Route, RouteError, RouteId, RouteRegistry};

/// A dashboard shortcut bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub route: RouteId,
}

/// Shortcuts shown on the dashboard, in display order.
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "new-order",
        name: "New Order",
        icon: "plus",
        route: RouteId::NewOrder,
    },
    QuickAction {
        id: "add-item",
        name: "Add Item",
        icon: "package",
        route: RouteId::AddItem,
    },
    QuickAction {
        id: "receipt-templates",
        name: "Receipt Setup",
        icon: "file-text",
        route: RouteId::ReceiptTemplates,
    },
];

impl RouteRegistry {
    /// Routes flagged for primary navigation, in registration order.
    pub fn navigation_routes(&self) -> Vec<&Route> {
        self.iter().filter(|route| route.show_in_navigation).collect()
    }

    /// Resolve every quick action to its target route.
    ///
    /// Fails if the registry was loaded from a manifest that dropped one of
    /// the built-in targets.
    pub fn quick_action_routes(&self) -> Result<Vec<(&'static QuickAction, &Route)>, RouteError> {
        QUICK_ACTIONS
            .iter()
            .map(|action| {
                self.get_route(action.route.as_str())
                    .map(|route| (action, route))
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn navigation_filters_and_keeps_order() {
        let registry = RouteRegistry::from_routes(vec![
            Route::new("b", "/b", "B").in_navigation(),
            Route::new("hidden", "/hidden", "Hidden"),
            Route::new("a", "/a", "A").in_navigation(),
            Route::new("child", "/a/child", "Child").with_parent("a").in_navigation(),
        ])
        .unwrap();

        let ids: Vec<_> = registry
            .navigation_routes()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "child"]);
    }

    #[test]
    fn navigation_of_hidden_only_registry_is_empty() {
        let registry = RouteRegistry::from_routes(vec![Route::new("x", "/x", "X")]).unwrap();
        assert!(registry.navigation_routes().is_empty());
    }

    #[test]
    fn quick_actions_fail_on_missing_target() {
        let registry =
            RouteRegistry::from_routes(vec![Route::new("dashboard", "/", "Dashboard")]).unwrap();

        assert_eq!(
            registry.quick_action_routes().unwrap_err(),
            RouteError::unknown_route("new-order")
        );
    }
}
