//! Client for the Orderlee backend REST API.
//!
//! - [`ApiClient`] - JSON request wrapper with bearer-token handling
//! - [`AuthSession`] - login/signup/logout on top of the client
//! - [`PaymentProcessor`] - payment intents for logistics bookings
//! - [`TokenStore`] - where the bearer token is kept between runs

mod api;
mod auth;
mod endpoints;
mod error;
pub mod models;
mod payment;
mod token;

pub use api::ApiClient;
pub use auth::AuthSession;
pub use error::ApiError;
pub use payment::{
    ApiPaymentProcessor, PaymentOutcome, PaymentProcessor, intent_id_from_secret,
    process_logistics_payment,
};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
