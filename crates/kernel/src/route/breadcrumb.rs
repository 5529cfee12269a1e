//! Breadcrumb trail resolution.
//!
//! A trail is the chain of ancestors from the root-most route down to the
//! route being viewed. Trails are recomputed on every call and owned by the
//! caller.

use super::{BreadcrumbItem, Route, RouteError, RouteRegistry};

impl RouteRegistry {
    /// Build the breadcrumb trail for `current_id`, root first.
    ///
    /// The last item is the current route and the only one with
    /// `current == true`. A route without a parent yields a single item;
    /// whether to render such a trail is up to the caller.
    ///
    /// # Errors
    /// - [`RouteError::UnknownRoute`] if `current_id` is not registered
    /// - [`RouteError::MissingParent`] / [`RouteError::CircularParent`] if
    ///   the parent chain is malformed
    pub fn generate_breadcrumbs(&self, current_id: &str) -> Result<Vec<BreadcrumbItem>, RouteError> {
        let chain = self.ancestry(current_id)?;
        let last = chain.len() - 1;

        Ok(chain
            .into_iter()
            .rev()
            .enumerate()
            .map(|(index, route)| BreadcrumbItem::from_route(route, index == last))
            .collect())
    }

    /// Resolve the route a breadcrumb click should navigate to.
    ///
    /// Returns `Ok(None)` for the current crumb, which is not a link.
    /// Otherwise the crumb's id is used, falling back to its path for
    /// crumbs whose id is no longer registered.
    pub fn breadcrumb_target(&self, item: &BreadcrumbItem) -> Result<Option<&Route>, RouteError> {
        if item.current {
            return Ok(None);
        }

        match self.get_route(&item.id) {
            Ok(route) => Ok(Some(route)),
            Err(_) => self.route_for_path(&item.path).map(Some),
        }
    }
}
