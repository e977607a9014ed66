//! Data models for the diary application.
//!
//! These models define the on-disk storage format as well as the request bodies.

mod document;
mod entry;
mod user;

pub use document::*;
pub use entry::*;
pub use user::*;

/// Timestamp layout used for user creation and entry dates.
///
/// Lexicographic order of formatted strings matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
