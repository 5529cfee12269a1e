//! Route system for screen navigation.
//!
//! Routes come from the built-in table or a TOML manifest and provide:
//! - Lookups by id and by path
//! - Breadcrumb trails following parent links
//! - The primary navigation list and dashboard quick actions
//! - A navigator tracking the route on screen

mod breadcrumb;
mod builtin;
mod definition;
mod error;
mod id;
mod manifest;
mod navigation;
mod navigator;
mod registry;

pub use builtin::builtin_routes;
pub use definition::{BreadcrumbItem, Route};
pub use error::RouteError;
pub use id::RouteId;
pub use navigation::{QUICK_ACTIONS, QuickAction};
pub use navigator::Navigator;
pub use registry::RouteRegistry;
