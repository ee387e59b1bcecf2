//! The admin session flag.

use crate::{Cache, KeyValueStore, SessionError};
use tracing::{info, warn};

/// Key under which the admin flag is kept.
pub const ADMIN_FLAG_KEY: &str = "isAdmin";

/// Typed access to the session's admin flag.
///
/// Created once at the application root and handed to whatever needs to
/// read or change admin status, instead of each view reading storage.
#[derive(Debug, Clone, Default)]
pub struct AdminSession<S> {
    cache: Cache<S>,
}

impl<S: KeyValueStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            cache: Cache::new(store),
        }
    }

    /// Whether the session is in admin mode.
    ///
    /// Anything other than a stored `true` reads as false, including values
    /// that fail to parse.
    pub fn is_admin(&self) -> bool {
        match self.cache.get::<bool>(ADMIN_FLAG_KEY) {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                warn!(error = %e, key = ADMIN_FLAG_KEY, "unreadable admin flag");
                false
            }
        }
    }

    /// Set or clear the admin flag. Clearing removes the key.
    pub fn set_admin(&mut self, admin: bool) -> Result<(), SessionError> {
        if admin {
            self.cache.set(ADMIN_FLAG_KEY, &true)?;
        } else {
            self.cache.delete(ADMIN_FLAG_KEY)?;
        }
        info!(admin, "admin flag changed");
        Ok(())
    }

    /// Enter admin mode.
    pub fn log_in(&mut self) -> Result<(), SessionError> {
        self.set_admin(true)
    }

    /// Leave admin mode.
    pub fn log_out(&mut self) -> Result<(), SessionError> {
        self.set_admin(false)
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }

    pub fn into_store(self) -> S {
        self.cache.into_inner()
    }
}
