//! Sign-in state on top of the API client.

use serde_json::Value;
use tracing::{info, warn};

use super::models::{AuthResponse, SignupRequest};
use super::{ApiClient, ApiError};

/// Login, signup and logout with the token lifecycle applied.
#[derive(Debug, Clone)]
pub struct AuthSession {
    client: ApiClient,
}

impl AuthSession {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// True if a bearer token is held. The token may still be rejected.
    pub fn is_authenticated(&self) -> bool {
        self.client.has_token()
    }

    /// Sign in and keep the issued token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let auth = self.client.login(email, password).await?;
        self.client.set_token(&auth.access_token)?;
        info!(user_id = ?auth.user_id, "signed in");
        Ok(auth)
    }

    /// Create an account and keep the issued token.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let auth = self.client.signup(request).await?;
        self.client.set_token(&auth.access_token)?;
        info!(user_id = ?auth.user_id, "account created");
        Ok(auth)
    }

    /// Forget the token.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.client.clear_token()?;
        info!("signed out");
        Ok(())
    }

    /// Check a stored token by fetching the current user.
    ///
    /// Returns `Ok(None)` without a token. A token the backend rejects (401
    /// or 403) is cleared; any other failure is returned and leaves the
    /// token alone.
    pub async fn restore(&self) -> Result<Option<Value>, ApiError> {
        if !self.client.has_token() {
            return Ok(None);
        }

        match self.client.current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => {
                warn!(error = %e, "stored token rejected; clearing");
                self.client.clear_token()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
