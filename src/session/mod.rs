//! Session service: the single source of truth for the bearer token.
//!
//! Two slots exist, a durable one for "remember me" logins and a shorter-lived
//! one for everything else. Callers never pick a slot when reading; the
//! service answers with whichever token is present, preferring the durable
//! slot. Starting a session writes one slot and clears the other so that at
//! most one token is authoritative.

pub mod guard;
pub mod store;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ClientError;

pub use guard::{GuardState, Navigator, Route, SessionGuard};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

pub const TOKEN_KEY: &str = "token";
pub const REMEMBERED_USER_KEY: &str = "remembered_user";

const SESSION_FILE: &str = "session.json";
const EPHEMERAL_SESSION_FILE: &str = "ephemeral-session.json";
const RUNTIME_DIR_NAME: &str = "marinetracker";

pub struct SessionService {
    durable: Arc<dyn SessionStore>,
    ephemeral: Arc<dyn SessionStore>,
}

impl SessionService {
    pub fn new(durable: Arc<dyn SessionStore>, ephemeral: Arc<dyn SessionStore>) -> Self {
        Self { durable, ephemeral }
    }

    /// Both slots in memory; nothing touches disk
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemorySessionStore::new()),
            Arc::new(MemorySessionStore::new()),
        )
    }

    /// File-backed slots: durable under the config directory, short-lived
    /// under the per-user runtime directory (or the config directory when
    /// there is none).
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        let config_dir = match &config.session.config_dir {
            Some(dir) => dir.clone(),
            None => default_config_dir()?,
        };

        let durable = FileSessionStore::new(config_dir.join(SESSION_FILE));
        let ephemeral = FileSessionStore::new(ephemeral_session_path(
            &config_dir,
            std::env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from),
        ));

        tracing::debug!("Session file at {}", durable.path().display());
        Ok(Self::new(Arc::new(durable), Arc::new(ephemeral)))
    }

    /// Current bearer token from either slot. Unreadable slots count as empty.
    pub fn token(&self) -> Option<String> {
        read_token(self.durable.as_ref(), "durable").or_else(|| read_token(self.ephemeral.as_ref(), "session"))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// True when the active token lives in the durable slot
    pub fn is_persistent(&self) -> bool {
        read_token(self.durable.as_ref(), "durable").is_some()
    }

    /// Store a freshly issued token, replacing any previous one in either slot
    pub fn start(&self, token: &str, persistent: bool) -> Result<(), ClientError> {
        if token.trim().is_empty() {
            return Err(ClientError::storage("Refusing to store an empty session token"));
        }

        if persistent {
            self.durable.set(TOKEN_KEY, token)?;
            self.ephemeral.remove(TOKEN_KEY)?;
        } else {
            self.durable.remove(TOKEN_KEY)?;
            self.ephemeral.set(TOKEN_KEY, token)?;
        }

        tracing::debug!("Session started (persistent: {})", persistent);
        Ok(())
    }

    /// Drop the token from both slots. The remembered user survives.
    pub fn clear(&self) -> Result<(), ClientError> {
        self.durable.remove(TOKEN_KEY)?;
        self.ephemeral.remove(TOKEN_KEY)?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    pub fn remember_user(&self, email: &str) -> Result<(), ClientError> {
        self.durable.set(REMEMBERED_USER_KEY, email)
    }

    pub fn forget_user(&self) -> Result<(), ClientError> {
        self.durable.remove(REMEMBERED_USER_KEY)
    }

    pub fn remembered_user(&self) -> Option<String> {
        self.durable.get(REMEMBERED_USER_KEY).ok().flatten()
    }
}

fn read_token(store: &dyn SessionStore, slot: &str) -> Option<String> {
    match store.get(TOKEN_KEY) {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            tracing::warn!("Ignoring unreadable {} session slot: {}", slot, e);
            None
        }
    }
}

fn default_config_dir() -> Result<PathBuf, ClientError> {
    let home = std::env::var("HOME").map_err(|_| ClientError::config("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("marinetracker"))
}

/// `$XDG_RUNTIME_DIR` is per-user and cleared at logout, which matches a
/// session-only login. Never a shared temp path.
fn ephemeral_session_path(config_dir: &Path, runtime_dir: Option<PathBuf>) -> PathBuf {
    match runtime_dir.filter(|dir| dir.is_absolute()) {
        Some(dir) => dir.join(RUNTIME_DIR_NAME).join(EPHEMERAL_SESSION_FILE),
        None => config_dir.join(EPHEMERAL_SESSION_FILE),
    }
}
