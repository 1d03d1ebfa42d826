//! Configuration read from the process environment.

use crate::client::TRANSACTIONS_PATH;
use crate::types::{CurrentUser, SplitError};

/// Base URL of the split backend.
pub const BACKEND_URL_VAR: &str = "SPLIT_BACKEND_URL";
/// Optional `Cookie` header value carrying the session.
pub const SESSION_COOKIE_VAR: &str = "SPLIT_SESSION_COOKIE";
/// Optional username of the signed-in user.
pub const USERNAME_VAR: &str = "SPLIT_USERNAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
    pub session_cookie: Option<String>,
    pub username: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, SplitError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SplitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend_url = read(BACKEND_URL_VAR).ok_or(SplitError::MissingConfig(BACKEND_URL_VAR))?;
        if !backend_url.starts_with("http://") && !backend_url.starts_with("https://") {
            return Err(SplitError::InvalidConfig(format!(
                "{BACKEND_URL_VAR} must be an http(s) URL, got {backend_url}"
            )));
        }

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            session_cookie: read(SESSION_COOKIE_VAR),
            username: read(USERNAME_VAR),
        })
    }

    pub fn transactions_url(&self) -> String {
        format!("{}{}", self.backend_url, TRANSACTIONS_PATH)
    }

    /// The user supplied by the session environment, if any.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.username.as_deref().map(CurrentUser::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_transactions_url_ignores_trailing_slash() {
        let config = Config::from_lookup(lookup(&[(BACKEND_URL_VAR, "https://split.example/")])).unwrap();
        assert_eq!(
            config.transactions_url(),
            "https://split.example/api/v1/transactions"
        );
        assert_eq!(config.session_cookie, None);
        assert_eq!(config.current_user(), None);
    }

    #[test]
    fn test_missing_backend_url() {
        let result = Config::from_lookup(lookup(&[(USERNAME_VAR, "asha")]));
        assert!(matches!(result, Err(SplitError::MissingConfig(BACKEND_URL_VAR))));
    }

    #[test]
    fn test_rejects_non_http_backend_url() {
        let result = Config::from_lookup(lookup(&[(BACKEND_URL_VAR, "split.example")]));
        assert!(matches!(result, Err(SplitError::InvalidConfig(_))));
    }

    #[test]
    fn test_blank_optional_values_are_unset() {
        let config = Config::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "http://localhost:5000"),
            (SESSION_COOKIE_VAR, "token=abc"),
            (USERNAME_VAR, "   "),
        ]))
        .unwrap();
        assert_eq!(config.session_cookie.as_deref(), Some("token=abc"));
        assert_eq!(config.current_user(), None);
    }
}
