//! Storage document holding every user and entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Entry, User};

/// The root document persisted to the storage file.
///
/// Entries carry no owner: every logged-in user sees every entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: BTreeMap<String, User>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}
