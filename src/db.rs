use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::session::Session;
use crate::models::teacher::Teacher;
use crate::models::token::AuthToken;
use crate::models::user::UserRecord;

/// The in-memory tables of the reference backend.
///
/// Ids are allocated from per-table counters and never reused.
#[derive(Default)]
pub struct Tables {
    pub users: BTreeMap<u64, UserRecord>,
    pub sessions: BTreeMap<u64, Session>,
    pub teachers: BTreeMap<u64, Teacher>,
    /// Issued bearer tokens, keyed by the hex SHA-256 of the token.
    pub tokens: HashMap<String, AuthToken>,
    last_user_id: u64,
    last_session_id: u64,
    last_teacher_id: u64,
}

impl Tables {
    pub fn next_user_id(&mut self) -> u64 {
        self.last_user_id += 1;
        self.last_user_id
    }

    pub fn next_session_id(&mut self) -> u64 {
        self.last_session_id += 1;
        self.last_session_id
    }

    pub fn next_teacher_id(&mut self) -> u64 {
        self.last_teacher_id += 1;
        self.last_teacher_id
    }
}

/// A shared handle to the tables.
pub type Db = Arc<RwLock<Tables>>;

/// Creates an empty store.
pub fn create_db() -> Db {
    Arc::new(RwLock::new(Tables::default()))
}
