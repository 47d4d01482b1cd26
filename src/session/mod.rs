//! Session Store
//!
//! Holds the current identity and persists it across restarts. There is a
//! single active session; logging in overwrites any prior one without
//! merging. A corrupt or unreadable session file degrades to "no session".

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::domain::User;

const SESSION_FILE: &str = "session.json";

/// Store for the single active session
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// Open the session store, restoring any persisted session
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(SESSION_FILE);
        let current = load_session(&path);

        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// Persist `user` as the current session, replacing any prior one
    pub fn login(&self, user: User) -> User {
        if let Err(e) = self.save(&user) {
            tracing::warn!("Failed to persist session: {}", e);
        }

        let mut current = self.current.write().expect("session lock poisoned");
        *current = Some(user.clone());
        user
    }

    /// Clear the session, in memory and on disk
    pub fn logout(&self) {
        let mut current = self.current.write().expect("session lock poisoned");
        *current = None;
        drop(current);

        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!("Failed to remove session file: {}", e);
            }
        }
    }

    /// The active identity, if any
    pub fn current_user(&self) -> Option<User> {
        self.current.read().expect("session lock poisoned").clone()
    }

    fn save(&self, user: &User) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)
    }
}

/// Load the persisted session; anything unreadable means no session
fn load_session(path: &Path) -> Option<User> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return None,
    };

    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Discarding corrupt session file: {}", e);
            None
        }
    }
}
