//! Route gating for admin pages.

use crate::{AdminSession, KeyValueStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of checking a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteAccess {
    /// Render the requested page.
    Allow,
    /// Navigate to `to`, remembering the page that was requested.
    Redirect { to: String, from: String },
}

/// Decides which routes need admin mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminGuard {
    /// Path prefix of admin pages.
    pub admin_prefix: String,
    /// Where non-admins are sent.
    pub login_path: String,
    /// Where admins land after logging out of an admin page.
    pub home_path: String,
}

impl Default for AdminGuard {
    fn default() -> Self {
        Self {
            admin_prefix: "/admin".to_string(),
            login_path: "/admin-login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

impl AdminGuard {
    /// Whether `path` is an admin page. Matches whole segments, so
    /// `/admin-login` is not protected.
    ///
    /// The login page is never protected, and a root (`"/"`) or empty
    /// prefix protects nothing.
    pub fn is_protected(&self, path: &str) -> bool {
        let prefix = self.admin_prefix.trim_end_matches('/');
        if prefix.is_empty() || self.is_login_page(path) {
            return false;
        }
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }

    fn is_login_page(&self, path: &str) -> bool {
        let page = path.split('?').next().unwrap_or(path);
        page.trim_end_matches('/') == self.login_path.trim_end_matches('/')
    }

    /// Check whether the session may view `path`.
    pub fn check<S: KeyValueStore>(&self, path: &str, session: &AdminSession<S>) -> RouteAccess {
        if !self.is_protected(path) || session.is_admin() {
            return RouteAccess::Allow;
        }
        debug!(path, "admin route requested without admin session");
        RouteAccess::Redirect {
            to: self.login_path.clone(),
            from: path.to_string(),
        }
    }

    /// Where to navigate after logging out while on `current_path`, if anywhere.
    pub fn after_logout(&self, current_path: &str) -> Option<&str> {
        self.is_protected(current_path)
            .then_some(self.home_path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_protected_paths() {
        let guard = AdminGuard::default();
        assert!(guard.is_protected("/admin"));
        assert!(guard.is_protected("/admin/orders"));
        assert!(guard.is_protected("/admin?tab=users"));
        assert!(!guard.is_protected("/admin-login"));
        assert!(!guard.is_protected("/administrator"));
        assert!(!guard.is_protected("/products/1"));
    }

    #[test]
    fn test_non_admin_redirected_with_origin() {
        let guard = AdminGuard::default();
        let session = AdminSession::new(MemoryStore::new());

        assert_eq!(
            guard.check("/admin/invoices", &session),
            RouteAccess::Redirect {
                to: "/admin-login".to_string(),
                from: "/admin/invoices".to_string(),
            }
        );
        assert_eq!(guard.check("/products", &session), RouteAccess::Allow);
    }

    #[test]
    fn test_admin_allowed() {
        let guard = AdminGuard::default();
        let mut session = AdminSession::new(MemoryStore::new());
        session.log_in().unwrap();
        assert_eq!(guard.check("/admin/reports", &session), RouteAccess::Allow);
    }

    #[test]
    fn test_root_prefix_does_not_loop() {
        let guard = AdminGuard {
            admin_prefix: "/".to_string(),
            ..AdminGuard::default()
        };
        let session = AdminSession::new(MemoryStore::new());

        assert!(!guard.is_protected("/admin-login"));
        assert_eq!(guard.check("/admin-login", &session), RouteAccess::Allow);
        assert_eq!(guard.check("/products", &session), RouteAccess::Allow);
    }

    #[test]
    fn test_login_page_under_prefix_is_reachable() {
        let guard = AdminGuard {
            login_path: "/admin/login".to_string(),
            ..AdminGuard::default()
        };
        let session = AdminSession::new(MemoryStore::new());

        assert_eq!(guard.check("/admin/login", &session), RouteAccess::Allow);
        assert_eq!(guard.check("/admin/login?next=/admin", &session), RouteAccess::Allow);
        assert!(matches!(
            guard.check("/admin/orders", &session),
            RouteAccess::Redirect { .. }
        ));
    }

    #[test]
    fn test_after_logout() {
        let guard = AdminGuard::default();
        assert_eq!(guard.after_logout("/admin/settings"), Some("/"));
        assert_eq!(guard.after_logout("/products"), None);
    }
}
