//! Per-visit chat sessions for the multi-turn generation mode.
//!
//! A session holds the turn history exchanged with the model for one user
//! visit. The history is a bounded sliding window: once it exceeds
//! `MAX_SESSION_TURNS` it is trimmed from the front in whole user/model
//! pairs, so long visits never accumulate unbounded context. Context does
//! not persist across unrelated topics — the client resets the session
//! (DELETE) when the topic changes.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::llm_client::Turn;

/// Max turns retained per session. Trimming drops the oldest user/model
/// pair, keeping the window aligned on exchange boundaries.
pub const MAX_SESSION_TURNS: usize = 20;

/// In-memory session store, keyed by per-visit UUID. Sessions are created
/// lazily on the first generate call that arrives without a known id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Vec<Turn>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the turn history for `id`, creating an empty session if the
    /// id is unknown (or `None`). The returned id identifies the visit.
    pub async fn history(&self, id: Option<Uuid>) -> (Uuid, Vec<Turn>) {
        let mut sessions = self.sessions.lock().await;
        match id {
            Some(id) if sessions.contains_key(&id) => (id, sessions[&id].clone()),
            _ => {
                let id = Uuid::new_v4();
                sessions.insert(id, Vec::new());
                (id, Vec::new())
            }
        }
    }

    /// Commits one completed exchange. Called only after a successful
    /// generation — a failed call leaves the session exactly as it was.
    pub async fn commit_exchange(&self, id: Uuid, prompt: String, reply: String) {
        let mut sessions = self.sessions.lock().await;
        let turns = sessions.entry(id).or_default();
        turns.push(Turn::user(prompt));
        turns.push(Turn::model(reply));
        while turns.len() > MAX_SESSION_TURNS {
            // Drop the oldest exchange, not a lone half-turn
            turns.drain(..2);
        }
    }

    /// Explicit context reset. Returns false if the session was unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.lock().await.remove(&id).is_some()
    }
}
