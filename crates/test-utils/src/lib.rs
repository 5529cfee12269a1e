#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Orderlee test utilities.
//!
//! Helpers for integration testing: route fixtures, breadcrumb trail
//! assertions and a recording mock of the backend API.

use orderlee_kernel::{Route, RouteRegistry};

/// Build a validated registry, panicking on malformed input.
pub fn registry(routes: Vec<Route>) -> RouteRegistry {
    RouteRegistry::from_routes(routes).expect("test routes should form a valid registry")
}

/// A linear chain of routes: each id is the parent of the next.
///
/// Paths nest the ids, so `chain(&["a", "b"])` yields `/a` and `/a/b`.
pub fn chain(ids: &[&str]) -> Vec<Route> {
    let mut routes: Vec<Route> = Vec::with_capacity(ids.len());
    let mut path = String::new();

    for id in ids {
        path.push('/');
        path.push_str(id);

        let mut route = Route::new(*id, path.clone(), title_case(id));
        if let Some(parent) = routes.last() {
            route = route.with_parent(parent.id.clone());
        }
        routes.push(route);
    }

    routes
}

/// Two small trees plus a standalone root, with mixed navigation flags.
///
/// ```text
/// store*            help
/// ├── stock
/// │   └── restock
/// └── sales*
/// ```
pub fn forest() -> Vec<Route> {
    vec![
        Route::new("store", "/store", "Store").in_navigation(),
        Route::new("stock", "/store/stock", "Stock").with_parent("store"),
        Route::new("restock", "/store/stock/restock", "Restock")
            .with_parent("stock")
            .with_auth(),
        Route::new("sales", "/store/sales", "Sales")
            .with_parent("store")
            .in_navigation(),
        Route::new("help", "/help", "Help"),
    ]
}

fn title_case(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assertion helpers for breadcrumb trails.
pub mod assert {
    use orderlee_kernel::{BreadcrumbItem, RouteRegistry};

    /// Ids of a trail, root first.
    pub fn trail_ids(trail: &[BreadcrumbItem]) -> Vec<&str> {
        trail.iter().map(|b| b.id.as_str()).collect()
    }

    /// Assert the structural properties every trail must have:
    /// non-empty, only the last item current, and each item the parent of
    /// the next.
    pub fn well_formed_trail(registry: &RouteRegistry, trail: &[BreadcrumbItem]) {
        assert!(!trail.is_empty(), "trail should never be empty");

        let last = trail.len() - 1;
        for (index, crumb) in trail.iter().enumerate() {
            assert_eq!(
                crumb.current,
                index == last,
                "crumb '{}' at {index} has current={}",
                crumb.id,
                crumb.current
            );

            let route = registry.get_route(&crumb.id).unwrap();
            assert_eq!(crumb.name, route.name);
            assert_eq!(crumb.path, route.path);
        }

        for pair in trail.windows(2) {
            let child = registry.get_route(&pair[1].id).unwrap();
            assert_eq!(
                child.parent.as_deref(),
                Some(pair[0].id.as_str()),
                "'{}' should be the parent of '{}'",
                pair[0].id,
                pair[1].id
            );
        }

        let root = registry.get_route(&trail[0].id).unwrap();
        assert!(root.is_root(), "trail should start at a root, got '{}'", root.id);
    }
}

/// A recording stand-in for the backend API.
pub mod mock_api {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
    use axum::response::{IntoResponse, Response};
    use serde_json::Value;

    /// A request received by the mock.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: String,
        /// Path plus query string, e.g. `/orders/3/status?status=SHIPPED`.
        pub target: String,
        pub authorization: Option<String>,
        pub body: String,
    }

    impl RecordedRequest {
        /// The body parsed as JSON (`Null` when empty).
        pub fn json(&self) -> Value {
            if self.body.is_empty() {
                Value::Null
            } else {
                serde_json::from_str(&self.body).unwrap()
            }
        }
    }

    /// Canned responses keyed by `"METHOD /path?query"`.
    ///
    /// Unmatched requests get a 404 with a JSON `message`.
    #[derive(Debug, Clone, Default)]
    pub struct MockApi {
        responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl MockApi {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer `method target` with a JSON body.
        pub fn respond(self, method: &str, target: &str, status: u16, body: Value) -> Self {
            self.respond_raw(method, target, status, &body.to_string())
        }

        /// Answer `method target` with a literal body.
        pub fn respond_raw(self, method: &str, target: &str, status: u16, body: &str) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(format!("{method} {target}"), (status, body.to_string()));
            self
        }

        /// Serve on an ephemeral localhost port and return the base URL.
        pub async fn spawn(&self) -> String {
            let app = Router::new().fallback(handle).with_state(self.clone());
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("failed to bind mock API listener");
            let addr = listener.local_addr().unwrap();

            tokio::spawn(async move {
                axum::serve(listener, app).await.ok();
            });

            format!("http://{addr}")
        }

        /// Requests received so far, in arrival order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// The single request received, panicking if there were more or fewer.
        pub fn only_request(&self) -> RecordedRequest {
            let requests = self.requests();
            assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
            requests[0].clone()
        }
    }

    /// Accept connections but never answer, for exercising timeouts.
    pub async fn spawn_unresponsive() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind listener");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        format!("http://{addr}")
    }

    async fn handle(
        State(mock): State<MockApi>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: String,
    ) -> Response {
        let target = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), |pq| pq.as_str().to_string());

        mock.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            target: target.clone(),
            authorization: headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });

        let canned = mock
            .responses
            .lock()
            .unwrap()
            .get(&format!("{method} {target}"))
            .cloned();

        match canned {
            Some((status, body)) => (
                StatusCode::from_u16(status).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            None => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
                serde_json::json!({"message": format!("no mock for {method} {target}")})
                    .to_string(),
            )
                .into_response(),
        }
    }
}
