//! Data access layer for users and entries.
//!
//! Every lookup is a linear scan over the in-memory document.

use std::path::{Path, PathBuf};

use crate::auth::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::{now_timestamp, Document, Entry, EntryChanges, NewEntry, User};

/// Owner of the in-memory storage document and its backing file.
#[derive(Debug)]
pub struct UserManager {
    data_file: PathBuf,
    data: Document,
}

impl UserManager {
    /// Load the storage file, starting empty if it does not exist.
    pub fn open(data_file: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_file = data_file.into();
        let data = super::load_document(&data_file)?;
        tracing::info!(
            "Loaded {} users and {} entries from {:?}",
            data.users.len(),
            data.entries.len(),
            data_file
        );
        Ok(Self { data_file, data })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Read-only view of the whole document.
    pub fn document(&self) -> &Document {
        &self.data
    }

    /// Write the whole document back to the storage file.
    pub fn save_data(&self) -> Result<(), AppError> {
        super::persist_document(&self.data_file, &self.data)?;
        tracing::debug!("Persisted storage document to {:?}", self.data_file);
        Ok(())
    }

    // ==================== USER OPERATIONS ====================

    pub fn user_exists(&self, username: &str) -> bool {
        self.data.users.contains_key(username)
    }

    /// Stored PHC string for `username`, if registered.
    pub fn stored_password_hash(&self, username: &str) -> Option<&str> {
        self.data
            .users
            .get(username)
            .map(|user| user.password_hash.as_str())
    }

    /// Register a new user. Fails with a conflict if the username is taken.
    ///
    /// Hashes inline; async callers hash off the runtime and use [`Self::insert_user`].
    #[allow(dead_code)]
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<(), AppError> {
        if self.user_exists(username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        self.insert_user(username, hash_password(password)?)
    }

    /// Register a user whose password was already hashed by the caller.
    pub fn insert_user(&mut self, username: &str, password_hash: String) -> Result<(), AppError> {
        if self.user_exists(username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let user = User {
            password_hash,
            created_at: now_timestamp(),
        };
        self.data.users.insert(username.to_string(), user);
        self.save_data()?;

        tracing::info!("Created user {}", username);
        Ok(())
    }

    /// True only if the user exists and the password matches the stored hash.
    ///
    /// Verifies inline; async callers read [`Self::stored_password_hash`] and verify off
    /// the runtime.
    #[allow(dead_code)]
    pub fn authenticate_user(&self, username: &str, password: &str) -> Result<bool, AppError> {
        match self.stored_password_hash(username) {
            Some(hash) => verify_password(hash, password),
            None => {
                tracing::debug!("Login attempt for unknown user {}", username);
                Ok(false)
            }
        }
    }

    // ==================== ENTRY OPERATIONS ====================

    /// Append an entry with id `max(existing) + 1` (1 when empty) and return the id.
    pub fn add_entry(&mut self, new_entry: NewEntry) -> Result<u64, AppError> {
        let id = self.next_entry_id()?;

        self.data.entries.push(Entry {
            id,
            title: new_entry.title,
            content: new_entry.content,
            date: new_entry.date.unwrap_or_else(now_timestamp),
            tags: new_entry.tags,
            is_private: new_entry.is_private,
        });
        self.save_data()?;

        tracing::info!("Added entry {}", id);
        Ok(id)
    }

    fn next_entry_id(&self) -> Result<u64, AppError> {
        match self.data.entries.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| AppError::Storage(format!("Entry id space exhausted at {}", max))),
        }
    }

    /// Entries sorted by date descending, optionally filtered by tag and truncated.
    ///
    /// An empty tag filter and a zero limit are both treated as absent.
    pub fn get_entries(&self, tag_filter: Option<&str>, limit: Option<usize>) -> Vec<Entry> {
        let tag_filter = tag_filter.filter(|t| !t.is_empty());

        let entries = self
            .data
            .entries
            .iter()
            .filter(|e| tag_filter.map_or(true, |tag| e.has_tag(tag)))
            .cloned()
            .collect();

        newest_first(entries, limit)
    }

    /// Entries whose title or content contains `query`, ignoring case.
    pub fn search_entries(&self, query: &str) -> Vec<Entry> {
        let entries = self
            .data
            .entries
            .iter()
            .filter(|e| e.matches_text(query))
            .cloned()
            .collect();

        newest_first(entries, None)
    }

    pub fn get_entry_by_id(&self, entry_id: u64) -> Option<&Entry> {
        self.data.entries.iter().find(|e| e.id == entry_id)
    }

    /// Overwrite title, content, tags and privacy flag of an existing entry.
    pub fn update_entry(&mut self, entry_id: u64, changes: EntryChanges) -> Result<&Entry, AppError> {
        let index = self
            .position(entry_id)
            .ok_or_else(|| AppError::NotFound("Failed to update entry".to_string()))?;

        self.data.entries[index].apply(changes);
        self.save_data()?;

        tracing::info!("Updated entry {}", entry_id);
        Ok(&self.data.entries[index])
    }

    pub fn delete_entry(&mut self, entry_id: u64) -> Result<(), AppError> {
        let index = self
            .position(entry_id)
            .ok_or_else(|| AppError::NotFound("Failed to delete entry".to_string()))?;

        self.data.entries.remove(index);
        self.save_data()?;

        tracing::info!("Deleted entry {}", entry_id);
        Ok(())
    }

    fn position(&self, entry_id: u64) -> Option<usize> {
        self.data.entries.iter().position(|e| e.id == entry_id)
    }
}

/// Stable sort by date string, newest first, then truncate.
fn newest_first(mut entries: Vec<Entry>, limit: Option<usize>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit.filter(|n| *n > 0) {
        entries.truncate(limit);
    }
    entries
}
