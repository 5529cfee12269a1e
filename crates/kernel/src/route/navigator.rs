//! Current-view bookkeeping for the application shell.
//!
//! The navigator tracks which route is on screen. Screens move between
//! routes by id; "back" climbs to the parent route; anything that cannot be
//! resolved lands on the default route rather than failing the render.

use tracing::{debug, warn};

use super::{BreadcrumbItem, Route, RouteError, RouteRegistry};

/// Tracks the route currently on screen.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    registry: &'a RouteRegistry,
    default_route: &'a Route,
    current: &'a Route,
}

impl<'a> Navigator<'a> {
    /// Create a navigator positioned on `default_route`.
    pub fn new(registry: &'a RouteRegistry, default_route: &str) -> Result<Self, RouteError> {
        let default_route = registry.get_route(default_route)?;
        Ok(Self {
            registry,
            default_route,
            current: default_route,
        })
    }

    /// The route on screen.
    pub fn current(&self) -> &'a Route {
        self.current
    }

    /// The route used for fallbacks and resets.
    pub fn default_route(&self) -> &'a Route {
        self.default_route
    }

    /// Move to `id`.
    ///
    /// On error the current route is left unchanged.
    pub fn navigate(&mut self, id: &str, authenticated: bool) -> Result<&'a Route, RouteError> {
        let route = self.registry.get_route(id)?;
        self.enter(route, authenticated)
    }

    fn enter(&mut self, route: &'a Route, authenticated: bool) -> Result<&'a Route, RouteError> {
        if route.requires_auth && !authenticated {
            return Err(RouteError::AuthRequired {
                id: route.id.clone(),
            });
        }

        debug!(from = %self.current.id, to = %route.id, "navigate");
        self.current = route;
        Ok(route)
    }

    /// Move to `candidate`, landing on the default route if it is unknown
    /// or not accessible.
    pub fn navigate_or_fallback(&mut self, candidate: &str, authenticated: bool) -> &'a Route {
        match self.navigate(candidate, authenticated) {
            Ok(route) => route,
            Err(e) => {
                warn!(
                    route = %candidate,
                    fallback = %self.default_route.id,
                    error = %e,
                    "navigation failed; using default route"
                );
                self.current = self.default_route;
                self.current
            }
        }
    }

    /// Move to the current route's parent. A root route stays put.
    pub fn back(&mut self) -> &'a Route {
        if let Ok(Some(parent)) = self.registry.parent_of(&self.current.id) {
            self.current = parent;
        }
        self.current
    }

    /// Follow a breadcrumb link.
    ///
    /// The current crumb is not a link; following it changes nothing.
    pub fn follow_breadcrumb(
        &mut self,
        item: &BreadcrumbItem,
        authenticated: bool,
    ) -> Result<&'a Route, RouteError> {
        match self.registry.breadcrumb_target(item)? {
            Some(route) => self.enter(route, authenticated),
            None => Ok(self.current),
        }
    }

    /// Breadcrumb trail of the current route.
    pub fn breadcrumbs(&self) -> Result<Vec<BreadcrumbItem>, RouteError> {
        self.registry.generate_breadcrumbs(&self.current.id)
    }

    /// Return to the default route.
    pub fn reset(&mut self) -> &'a Route {
        self.current = self.default_route;
        self.current
    }
}
