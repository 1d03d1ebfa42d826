//! Navigation routes of the dashboard.

const TRANSACTIONS_PREFIX: &str = "/transactions/";
const PAIR_SEPARATOR: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    /// Transactions between the current user and one friend.
    Transactions { user: String, friend: String },
}

impl Route {
    pub fn transactions(user: &str, friend: &str) -> Self {
        Route::Transactions {
            user: user.to_string(),
            friend: friend.to_string(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Transactions { user, friend } => {
                format!("{TRANSACTIONS_PREFIX}{user}{PAIR_SEPARATOR}{friend}")
            }
        }
    }

    /// Inverse of [`Route::path`]. The pair splits at the first `--`.
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/dashboard" || path == "/" {
            return Some(Route::Dashboard);
        }

        let pair = path.strip_prefix(TRANSACTIONS_PREFIX)?;
        let (user, friend) = pair.split_once(PAIR_SEPARATOR)?;
        if user.is_empty() || friend.is_empty() {
            return None;
        }
        Some(Route::transactions(user, friend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_path() {
        let route = Route::transactions("asha", "ravi_k");
        assert_eq!(route.path(), "/transactions/asha--ravi_k");
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
        assert_eq!(
            Route::parse("/transactions/asha--ravi"),
            Some(Route::transactions("asha", "ravi"))
        );
        assert_eq!(Route::parse("/transactions/asha"), None);
        assert_eq!(Route::parse("/transactions/--ravi"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_parse_splits_at_first_separator() {
        assert_eq!(
            Route::parse("/transactions/asha--ravi--k"),
            Some(Route::transactions("asha", "ravi--k"))
        );
    }
}
