//! Directory Service
//!
//! Single source of truth for user and room existence. One
//! `parking_lot::Mutex` guards the user map, room map and display-name
//! reservation set; every structural read and write goes through it.
//!
//! Critical sections are short and never suspend: the only channel
//! operations performed under the lock are non-blocking broadcast sends,
//! so no slow subscriber can stall a lock holder.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};

use crate::domain::{Room, User, UserId};
use crate::shared::snowflake::SnowflakeGenerator;

/// Typed failures of the message engine. Returned as data, never used for
/// control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("room {0} not found")]
    RoomNotFound(String),

    #[error("display name {0} is already taken")]
    DuplicateDisplayName(String),

    #[error("user {0} is already a member of room {1}")]
    AlreadyMember(UserId, String),
}

/// Immutable view of a registered user, safe to hand out of the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// The maps behind the directory lock.
pub(crate) struct DirectoryInner {
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) rooms: HashMap<String, Room>,
    pub(crate) display_names: HashSet<String>,
}

/// Canonical user/room registry.
///
/// Not a process-wide singleton: tests and the application each build their
/// own instance and share it via `Arc`.
pub struct Directory {
    inner: Mutex<DirectoryInner>,
    ids: Arc<SnowflakeGenerator>,
    mailbox_capacity: usize,
    signal_capacity: usize,
}

impl Directory {
    pub fn new(ids: Arc<SnowflakeGenerator>, mailbox_capacity: usize, signal_capacity: usize) -> Self {
        Self {
            inner: Mutex::new(DirectoryInner {
                users: HashMap::new(),
                rooms: HashMap::new(),
                display_names: HashSet::new(),
            }),
            ids,
            mailbox_capacity,
            signal_capacity,
        }
    }

    /// Acquire the directory lock. Publisher and multiplexer use this to
    /// keep their snapshot-and-subscribe steps atomic with directory
    /// mutation.
    pub(crate) fn lock(&self) -> MutexGuard<'_, DirectoryInner> {
        self.inner.lock()
    }

    /// Register a new user. Uniqueness check and name reservation are one
    /// atomic step under the lock; the generated id is collision-checked
    /// against the user map, not just assumed unique.
    pub fn register(&self, display_name: &str) -> Result<UserProfile, ChatError> {
        let mut inner = self.inner.lock();
        if !inner.display_names.insert(display_name.to_string()) {
            return Err(ChatError::DuplicateDisplayName(display_name.to_string()));
        }

        let mut id = self.ids.generate();
        while inner.users.contains_key(&id) {
            id = self.ids.generate();
        }

        let user = User::new(id, display_name, self.mailbox_capacity);
        let profile = UserProfile {
            id,
            display_name: user.display_name.clone(),
            created_at: user.created_at,
        };
        inner.users.insert(id, user);

        tracing::info!(user_id = id, display_name, "user registered");
        Ok(profile)
    }

    /// Look up a user by id.
    pub fn user_profile(&self, user_id: UserId) -> Result<UserProfile, ChatError> {
        let inner = self.inner.lock();
        let user = inner
            .users
            .get(&user_id)
            .ok_or(ChatError::UserNotFound(user_id))?;
        Ok(UserProfile {
            id: user.id,
            display_name: user.display_name.clone(),
            created_at: user.created_at,
        })
    }

    /// Names of the rooms a user has joined, in join order.
    pub fn user_rooms(&self, user_id: UserId) -> Result<Vec<String>, ChatError> {
        let inner = self.inner.lock();
        let user = inner
            .users
            .get(&user_id)
            .ok_or(ChatError::UserNotFound(user_id))?;
        Ok(user.room_memberships.clone())
    }

    /// Join a room, creating it with the joiner as sole member if it does
    /// not exist yet. Creation and first-member insertion are atomic to any
    /// concurrent reader. Returns the updated member list.
    pub fn join_room(&self, user_id: UserId, room_name: &str) -> Result<Vec<String>, ChatError> {
        let mut inner = self.inner.lock();
        let DirectoryInner { users, rooms, .. } = &mut *inner;

        let user = users
            .get_mut(&user_id)
            .ok_or(ChatError::UserNotFound(user_id))?;

        match rooms.entry(room_name.to_string()) {
            Entry::Occupied(mut entry) => {
                let room = entry.get_mut();
                if room.members.contains(&user_id) {
                    return Err(ChatError::AlreadyMember(user_id, room_name.to_string()));
                }
                room.members.push(user_id);
                user.room_memberships.push(room_name.to_string());
                room.record_membership_change();
                tracing::info!(user_id, room = room_name, "user joined existing room");
                Ok(room.member_ids())
            }
            Entry::Vacant(entry) => {
                let mut room = Room::new(room_name, self.signal_capacity);
                room.members.push(user_id);
                user.room_memberships.push(room_name.to_string());
                let room = entry.insert(room);
                tracing::info!(user_id, room = room_name, "room created with first member");
                Ok(room.member_ids())
            }
        }
    }

    /// All known room names. Order is not guaranteed across calls.
    pub fn list_rooms(&self) -> Vec<String> {
        let inner = self.inner.lock();
        inner.rooms.keys().cloned().collect()
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.inner.lock().users.len()
    }

    /// Number of existing rooms.
    pub fn room_count(&self) -> usize {
        self.inner.lock().rooms.len()
    }
}
