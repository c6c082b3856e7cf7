//! Session context
//!
//! An explicit, passed-in session object replaces ambient auth state: it is
//! created once at login (or from the environment for the CLI), injected
//! into the HTTP client, and dropped at logout. No component reads tokens
//! from anywhere else.

use std::env;

use crate::error::AppError;
use crate::models::Role;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Authenticated user context for one login session.
#[derive(Clone, Debug)]
pub struct Session {
    pub api_base_url: String,
    /// Bearer token sent on every request. Expiry is not pre-checked; the
    /// backend rejects stale tokens with a 401 the caller surfaces.
    pub token: String,
    pub user_id: i64,
    pub display_name: String,
    pub role: Role,
}

impl Session {
    pub fn new(
        api_base_url: String,
        token: String,
        user_id: i64,
        display_name: String,
        role: Role,
    ) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token,
            user_id,
            display_name,
            role,
        }
    }

    /// Build a session from environment variables: LEXDOC_API_URL (optional,
    /// defaults to localhost), LEXDOC_TOKEN, LEXDOC_USER_ID, LEXDOC_USER_NAME,
    /// LEXDOC_ROLE.
    pub fn from_env() -> Result<Self, AppError> {
        let api_base_url =
            env::var("LEXDOC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let token = require_env("LEXDOC_TOKEN")?;
        let user_id = require_env("LEXDOC_USER_ID")?
            .parse::<i64>()
            .map_err(|e| AppError::InvalidInput(format!("LEXDOC_USER_ID: {}", e)))?;
        let display_name =
            env::var("LEXDOC_USER_NAME").unwrap_or_else(|_| format!("user-{}", user_id));
        let role = require_env("LEXDOC_ROLE")?
            .parse::<Role>()
            .map_err(AppError::InvalidInput)?;

        Ok(Self::new(api_base_url, token, user_id, display_name, role))
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::InvalidInput(format!("Missing environment variable: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let s = Session::new(
            "http://api.example.com/".to_string(),
            "tok".to_string(),
            7,
            "Jane".to_string(),
            Role::Client,
        );
        assert_eq!(s.api_base_url, "http://api.example.com");
    }
}
