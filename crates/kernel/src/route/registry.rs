//! Route registry - holds the canonical set of routes.
//!
//! Routes live in an insertion-ordered arena. Ids, paths and parent links
//! are indexed once at construction; every lookup afterwards is a read.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{Route, RouteError};

/// Registry of all routes known to the application.
///
/// Immutable after construction and `Send + Sync`, so a single instance can
/// be built at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    /// All routes, in registration order
    routes: Vec<Route>,
    /// Route id -> arena index
    by_id: HashMap<String, usize>,
    /// Route path -> arena index
    by_path: HashMap<String, usize>,
    /// Parent id -> child arena indices, in registration order
    children: HashMap<String, Vec<usize>>,
}

impl RouteRegistry {
    /// Build a registry and run the validation pass.
    ///
    /// Rejects duplicate ids, duplicate paths, parents that are not
    /// registered and parent cycles.
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, RouteError> {
        let registry = Self::index(routes)?;
        registry.validate()?;

        debug!(
            routes = registry.len(),
            roots = registry.roots().len(),
            "built route registry"
        );
        Ok(registry)
    }

    /// Index routes without checking parent links.
    pub(crate) fn index(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut by_id = HashMap::with_capacity(routes.len());
        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(routes.len());
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            if by_id.insert(route.id.clone(), idx).is_some() {
                return Err(RouteError::DuplicateRoute {
                    id: route.id.clone(),
                });
            }

            if let Some(&first) = by_path.get(&route.path) {
                return Err(RouteError::DuplicatePath {
                    path: route.path.clone(),
                    first: routes[first].id.clone(),
                    second: route.id.clone(),
                });
            }
            by_path.insert(route.path.clone(), idx);

            if let Some(ref parent) = route.parent {
                children.entry(parent.clone()).or_default().push(idx);
            }
        }

        Ok(Self {
            routes,
            by_id,
            by_path,
            children,
        })
    }

    /// Walk every route's parent chain once.
    pub fn validate(&self) -> Result<(), RouteError> {
        for route in &self.routes {
            self.ancestry(&route.id)?;
        }
        Ok(())
    }

    /// The route followed by its ancestors, leaf first.
    ///
    /// Bounded by the route count: a revisited id is reported as
    /// [`RouteError::CircularParent`] instead of looping.
    pub(crate) fn ancestry(&self, id: &str) -> Result<Vec<&Route>, RouteError> {
        let mut current = self.get_route(id)?;
        let mut chain = vec![current];
        let mut visited: HashSet<&str> = HashSet::from([current.id.as_str()]);

        while let Some(parent_id) = current.parent.as_deref() {
            if visited.contains(parent_id) {
                let ids: Vec<&str> = chain.iter().map(|r| r.id.as_str()).collect();
                return Err(RouteError::circular(&ids, parent_id));
            }

            let parent = self
                .lookup(parent_id)
                .ok_or_else(|| RouteError::MissingParent {
                    route: current.id.clone(),
                    parent: parent_id.to_string(),
                })?;

            visited.insert(parent_id);
            chain.push(parent);
            current = parent;
        }

        Ok(chain)
    }

    fn lookup(&self, id: &str) -> Option<&Route> {
        self.by_id.get(id).map(|&idx| &self.routes[idx])
    }

    /// Get a route by its id.
    pub fn get_route(&self, id: &str) -> Result<&Route, RouteError> {
        self.lookup(id).ok_or_else(|| RouteError::unknown_route(id))
    }

    /// Check whether an untrusted string names a registered route.
    pub fn is_valid_route(&self, candidate: &str) -> bool {
        self.by_id.contains_key(candidate)
    }

    /// Get a route's path.
    pub fn route_path(&self, id: &str) -> Result<&str, RouteError> {
        self.get_route(id).map(|route| route.path.as_str())
    }

    /// Find the route declaring `path`.
    pub fn route_for_path(&self, path: &str) -> Result<&Route, RouteError> {
        self.by_path
            .get(path)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| RouteError::unknown_path(path))
    }

    /// Get a route's parent, if it has one.
    pub fn parent_of(&self, id: &str) -> Result<Option<&Route>, RouteError> {
        let route = self.get_route(id)?;
        match route.parent.as_deref() {
            Some(parent_id) => self.get_route(parent_id).map(Some),
            None => Ok(None),
        }
    }

    /// Get the direct children of a route, in registration order.
    pub fn children_of(&self, id: &str) -> Result<Vec<&Route>, RouteError> {
        self.get_route(id)?;
        Ok(self
            .children
            .get(id)
            .map(|indices| indices.iter().map(|&idx| &self.routes[idx]).collect())
            .unwrap_or_default())
    }

    /// Get top-level routes (no parent), in registration order.
    pub fn roots(&self) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.is_root()).collect()
    }

    /// Iterate over all routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Get route count.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn shop() -> Vec<Route> {
        vec![
            Route::new("home", "/", "Home").in_navigation(),
            Route::new("catalog", "/catalog", "Catalog").in_navigation(),
            Route::new("product", "/catalog/product", "Product").with_parent("catalog"),
            Route::new("review", "/catalog/product/review", "Review").with_parent("product"),
            Route::new("variant", "/catalog/variant", "Variant").with_parent("catalog"),
        ]
    }

    #[test]
    fn lookup_by_id_and_path() {
        let registry = RouteRegistry::from_routes(shop()).unwrap();

        assert_eq!(registry.get_route("product").unwrap().name, "Product");
        assert_eq!(registry.route_path("review").unwrap(), "/catalog/product/review");
        assert_eq!(registry.route_for_path("/catalog").unwrap().id, "catalog");
        assert!(registry.is_valid_route("variant"));
        assert!(!registry.is_valid_route("Variant"));
    }

    #[test]
    fn unknown_lookups_fail() {
        let registry = RouteRegistry::from_routes(shop()).unwrap();

        assert_eq!(
            registry.get_route("cart").unwrap_err(),
            RouteError::unknown_route("cart")
        );
        assert_eq!(
            registry.route_for_path("/cart").unwrap_err(),
            RouteError::unknown_path("/cart")
        );
        assert!(registry.children_of("cart").is_err());
    }

    #[test]
    fn parent_and_children() {
        let registry = RouteRegistry::from_routes(shop()).unwrap();

        assert_eq!(registry.parent_of("review").unwrap().unwrap().id, "product");
        assert!(registry.parent_of("home").unwrap().is_none());

        let children: Vec<_> = registry
            .children_of("catalog")
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(children, vec!["product", "variant"]);
        assert!(registry.children_of("review").unwrap().is_empty());
    }

    #[test]
    fn roots_keep_registration_order() {
        let registry = RouteRegistry::from_routes(shop()).unwrap();
        let roots: Vec<_> = registry.roots().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(roots, vec!["home", "catalog"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut routes = shop();
        routes.push(Route::new("home", "/home-again", "Home again"));

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert_eq!(err, RouteError::DuplicateRoute { id: "home".into() });
    }

    #[test]
    fn duplicate_path_rejected() {
        let mut routes = shop();
        routes.push(Route::new("shop", "/catalog", "Shop"));

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "/catalog".into(),
                first: "catalog".into(),
                second: "shop".into(),
            }
        );
    }

    #[test]
    fn missing_parent_rejected() {
        let mut routes = shop();
        routes.push(Route::new("orphan", "/orphan", "Orphan").with_parent("ghost"));

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingParent {
                route: "orphan".into(),
                parent: "ghost".into(),
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn self_parent_rejected() {
        let routes = vec![Route::new("loop", "/loop", "Loop").with_parent("loop")];

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert_eq!(err, RouteError::circular(&["loop"], "loop"));
    }

    #[test]
    fn indirect_cycle_rejected() {
        let routes = vec![
            Route::new("a", "/a", "A").with_parent("c"),
            Route::new("b", "/b", "B").with_parent("a"),
            Route::new("c", "/c", "C").with_parent("b"),
        ];

        let err = RouteRegistry::from_routes(routes).unwrap_err();
        assert!(matches!(err, RouteError::CircularParent { .. }));
        assert!(err.to_string().contains("a -> c -> b -> a"));
    }

    #[test]
    fn cycle_unreachable_from_roots_still_rejected() {
        let mut routes = shop();
        routes.push(Route::new("x", "/x", "X").with_parent("y"));
        routes.push(Route::new("y", "/y", "Y").with_parent("x"));

        assert!(RouteRegistry::from_routes(routes).is_err());
    }

    #[test]
    fn ancestry_is_leaf_first() {
        let registry = RouteRegistry::from_routes(shop()).unwrap();
        let ids: Vec<_> = registry
            .ancestry("review")
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["review", "product", "catalog"]);
    }

    #[test]
    fn empty_registry() {
        let registry = RouteRegistry::from_routes(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.roots().is_empty());
    }
}
