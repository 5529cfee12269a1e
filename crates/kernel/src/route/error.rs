//! Route registry error types.
//!
//! Every error names the offending route id or path so that a broken
//! manifest can be fixed without a debugger.

use thiserror::Error;

/// Errors raised while building or querying a [`RouteRegistry`](super::RouteRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Lookup with an identifier that is not registered.
    #[error("unknown route '{id}'")]
    UnknownRoute { id: String },

    /// Reverse lookup with a path that no route declares.
    #[error("no route is registered for path '{path}'")]
    UnknownPath { path: String },

    /// A route names a parent that is not registered.
    #[error("route '{route}': parent '{parent}' is not registered")]
    MissingParent { route: String, parent: String },

    /// Following parent links revisits a route.
    #[error("circular parent chain detected: {cycle}")]
    CircularParent { cycle: String },

    /// Two routes share an identifier.
    #[error("route '{id}' is registered more than once")]
    DuplicateRoute { id: String },

    /// Two routes share a path, which would make the reverse index ambiguous.
    #[error("path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Navigation to a route that requires an authenticated session.
    #[error("route '{id}' requires authentication")]
    AuthRequired { id: String },

    /// A route manifest could not be parsed.
    #[error("route manifest {source_path}: {details}")]
    InvalidManifest {
        source_path: String,
        details: String,
    },

    /// A route manifest file could not be read.
    #[error("route manifest {source_path}: {details}")]
    ManifestUnreadable {
        source_path: String,
        details: String,
    },
}

impl RouteError {
    /// Create an unknown route error.
    pub fn unknown_route(id: impl Into<String>) -> Self {
        Self::UnknownRoute { id: id.into() }
    }

    /// Create an unknown path error.
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath { path: path.into() }
    }

    /// Create a circular parent error from the visited chain.
    ///
    /// The chain is rendered leaf-first and closed with the revisited id,
    /// e.g. `a -> b -> a`.
    pub fn circular(chain: &[&str], revisited: &str) -> Self {
        let mut parts: Vec<&str> = chain.to_vec();
        parts.push(revisited);
        Self::CircularParent {
            cycle: parts.join(" -> "),
        }
    }

    /// True for errors caused by a badly authored registry rather than by
    /// the caller's input.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingParent { .. }
                | Self::CircularParent { .. }
                | Self::DuplicateRoute { .. }
                | Self::DuplicatePath { .. }
                | Self::InvalidManifest { .. }
        )
    }
}
