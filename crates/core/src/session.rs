//! Per-sender session mode: which accounting context an administrator's
//! messages are recorded under.
//!
//! The store is keyed by sender and injected into the interpreter; there is
//! no ambient global. State lives for the process lifetime only; every sender
//! starts over as `Personal` after a restart.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::routing::Directory;

/// The active accounting context for a sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    #[default]
    Personal,
    Partnership,
    RentalIncome,
}

impl SessionMode {
    /// Parse a single-letter mode command. The body must be exactly the
    /// letter (after trimming), case-insensitive; anything else is ordinary
    /// message content.
    pub fn from_command(body: &str) -> Option<SessionMode> {
        match body.trim().to_ascii_uppercase().as_str() {
            "P" => Some(SessionMode::Personal),
            "S" => Some(SessionMode::Partnership),
            "A" => Some(SessionMode::RentalIncome),
            _ => None,
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Personal => write!(f, "PERSONAL"),
            SessionMode::Partnership => write!(f, "COMPARTIDO"),
            SessionMode::RentalIncome => write!(f, "ARRIENDOS"),
        }
    }
}

/// In-memory store: sender -> active mode. Concurrent senders mutate
/// independent keys; one lock is enough.
#[derive(Default)]
pub struct SessionStore {
    modes: RwLock<HashMap<String, SessionMode>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode for a sender. No entry means `Personal`.
    pub async fn get(&self, sender: &str) -> SessionMode {
        self.modes
            .read()
            .await
            .get(sender)
            .copied()
            .unwrap_or_default()
    }

    /// Set a sender's mode. Admin gating happens in the interpreter; the
    /// store itself is policy-free.
    pub async fn set(&self, sender: &str, mode: SessionMode) {
        self.modes.write().await.insert(sender.to_string(), mode);
    }

    /// True while any administrator's current mode is `RentalIncome`. This is
    /// what arms the rental receipt intake for the rental-authorized sender.
    pub async fn rental_active(&self, directory: &Directory) -> bool {
        let modes = self.modes.read().await;
        directory
            .admins()
            .any(|admin| modes.get(admin) == Some(&SessionMode::RentalIncome))
    }
}
