//! Orderlee Kernel Library
//!
//! Route registry and navigation, the backend API client and pricing
//! helpers shared by the Orderlee front ends. The `orderlee` binary exposes
//! them on the command line.

pub mod cli;
pub mod client;
pub mod config;
pub mod pricing;
pub mod route;

pub use client::{ApiClient, ApiError, AuthSession};
pub use config::Config;
pub use route::{BreadcrumbItem, Navigator, Route, RouteError, RouteId, RouteRegistry};
