//! Session-scoped flags for the dairy storefront.
//!
//! The storefront keeps one piece of session state outside the cart: whether
//! the visitor is in admin mode. This crate provides:
//!
//! - [`KeyValueStore`]: the string key/value surface (browser local storage
//!   shape), with an in-memory [`MemoryStore`]
//! - [`Cache`]: typed JSON values on top of any store
//! - [`AdminSession`]: the typed admin flag with an explicit setter
//! - [`AdminGuard`]: route gating for `/admin` pages
//!
//! # Example
//!
//! ```
//! use dairy_session::{AdminGuard, AdminSession, MemoryStore, RouteAccess};
//!
//! let mut session = AdminSession::new(MemoryStore::new());
//! let guard = AdminGuard::default();
//!
//! assert!(matches!(guard.check("/admin/orders", &session), RouteAccess::Redirect { .. }));
//!
//! session.log_in().unwrap();
//! assert_eq!(guard.check("/admin/orders", &session), RouteAccess::Allow);
//! ```

mod error;
mod guard;
mod kv;
mod session;

pub use error::SessionError;
pub use guard::{AdminGuard, RouteAccess};
pub use kv::{Cache, KeyValueStore, MemoryStore};
pub use session::{AdminSession, ADMIN_FLAG_KEY};
