use std::collections::HashSet;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use storage::{Database, repository::settings::SettingsRepository};

use crate::error::WebError;

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Everything needed to decide whether a request may use admin routes.
#[derive(Clone)]
pub struct AdminAuth {
    pub db: Database,
    pub api_keys: ApiKeys,
}

impl AdminAuth {
    pub fn new(db: Database, api_keys: ApiKeys) -> Self {
        Self { db, api_keys }
    }

    /// With no API key and no admin PIN configured, admin routes are open.
    pub fn authorize(&self, token: Option<&str>, admin_pin: Option<&str>) -> bool {
        if self.api_keys.is_empty() && admin_pin.is_none() {
            return true;
        }

        match token {
            Some(token) => self.api_keys.is_valid(token) || admin_pin == Some(token),
            None => false,
        }
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

pub async fn require_admin(
    State(auth): State<AdminAuth>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let admin_pin = SettingsRepository::new(auth.db.pool()).admin_pin().await?;

    if auth.authorize(bearer_token(&req), admin_pin.as_deref()) {
        Ok(next.run(req).await)
    } else {
        tracing::warn!("Rejected admin request to {}", req.uri().path());
        Err(WebError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn auth(keys: &str) -> AdminAuth {
        AdminAuth::new(
            Database::in_memory().await.unwrap(),
            ApiKeys::from_comma_separated(keys),
        )
    }

    #[test]
    fn test_api_keys_parsing() {
        let keys = ApiKeys::from_comma_separated(" alpha, ,beta ,");
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(ApiKeys::from_comma_separated("").is_empty());
    }

    #[tokio::test]
    async fn test_open_when_nothing_configured() {
        let auth = auth("").await;
        assert!(auth.authorize(None, None));
        assert!(auth.authorize(Some("anything"), None));
    }

    #[tokio::test]
    async fn test_pin_or_api_key_required_once_configured() {
        let auth = auth("secret-key").await;
        assert!(!auth.authorize(None, Some("1234")));
        assert!(!auth.authorize(Some("wrong"), Some("1234")));
        assert!(auth.authorize(Some("1234"), Some("1234")));
        assert!(auth.authorize(Some("secret-key"), Some("1234")));
        assert!(auth.authorize(Some("secret-key"), None));
        assert!(!auth.authorize(None, None));
    }
}
