pub mod models;
pub mod queries;
pub mod seed;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use indexmap::IndexMap;
use tracing::info;
use uuid::Uuid;

use wedding_types::models::{Guest, Invitation, Rsvp, User};

use crate::models::GuestKey;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("an invitation for username '{0}' already exists")]
    UsernameTaken(String),
    #[error("invitation {invitation_id} already has a guest named '{first_name}'")]
    DuplicateGuest {
        invitation_id: Uuid,
        first_name: String,
    },
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// In-memory store for users, invitations, guests and RSVPs.
///
/// Each collection sits behind its own lock and every operation holds at most
/// one of them, so operations are atomic per collection and never deadlock.
/// Nothing survives a restart.
#[derive(Default)]
pub struct Database {
    users: Mutex<IndexMap<Uuid, User>>,
    invitations: Mutex<HashMap<String, Invitation>>,
    guests: Mutex<IndexMap<GuestKey, Guest>>,
    rsvps: Mutex<IndexMap<Uuid, Rsvp>>,
}

impl Database {
    /// A store holding the sample invitation and its guests.
    pub fn new() -> Result<Self> {
        let db = Self::empty();
        seed::run(&db)?;
        Ok(db)
    }

    pub fn empty() -> Self {
        info!("In-memory store created");
        Self::default()
    }

    fn users(&self) -> Result<MutexGuard<'_, IndexMap<Uuid, User>>> {
        self.users.lock().map_err(|_| StoreError::LockPoisoned("users"))
    }

    fn invitations(&self) -> Result<MutexGuard<'_, HashMap<String, Invitation>>> {
        self.invitations
            .lock()
            .map_err(|_| StoreError::LockPoisoned("invitations"))
    }

    fn guests(&self) -> Result<MutexGuard<'_, IndexMap<GuestKey, Guest>>> {
        self.guests.lock().map_err(|_| StoreError::LockPoisoned("guests"))
    }

    fn rsvps(&self) -> Result<MutexGuard<'_, IndexMap<Uuid, Rsvp>>> {
        self.rsvps.lock().map_err(|_| StoreError::LockPoisoned("rsvps"))
    }
}
