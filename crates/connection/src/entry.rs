//! Directory entry types returned by a device listing call.

use serde::{Deserialize, Serialize};

/// Type of a remote filesystem entry.
///
/// This is a closed set: a connection implementation must map whatever type
/// codes its wire protocol carries onto one of these variants before handing
/// entries to the explorer. Anything it cannot classify is [`EntryType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Other (device node, socket, symlink, unknown type code).
    Other,
}

/// A single remote filesystem entry from a directory listing.
///
/// Only the connection constructs these; the explorer treats them as
/// immutable facts about the remote filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Full remote path of the entry.
    pub path: String,
    /// Entry type.
    pub entry_type: EntryType,
}

impl DirEntry {
    /// Create an entry for a remote path.
    pub fn new(path: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            path: path.into(),
            entry_type,
        }
    }

    /// Basename of the entry path, suitable as a display label.
    ///
    /// Falls back to the full path when the basename is empty (the root
    /// path `/`, a trailing separator, or malformed input), so the result
    /// is never an empty string for a non-empty path.
    pub fn file_name(&self) -> &str {
        let name = self
            .path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str());
        if name.is_empty() {
            self.path.as_str()
        } else {
            name
        }
    }
}
