//! Line records and their identities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Author tag conventionally used for edits made by the interactive (human) actor.
pub const AUTHOR_USER: &str = "user";
/// Author tag conventionally used for edits made by the autonomous agent.
pub const AUTHOR_AGENT: &str = "agent";

/// Opaque, never-reused identifier of a line.
///
/// Identifiers are minted by [`LineIdGenerator`](crate::LineIdGenerator) when a line is created
/// and stay attached to that line until it is deleted. Callers should treat the contents as an
/// opaque string.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Wrap an existing identifier string (e.g. one received back from an agent).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single line of a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Stable identity, assigned once at creation.
    pub id: LineId,
    /// Line content, without the separator.
    pub content: String,
    /// Tag of the actor that last wrote this line.
    pub author: String,
    /// Time of the last write to this line.
    pub modified_at: DateTime<Utc>,
}

impl Line {
    pub(crate) fn new(id: LineId, content: String, author: String) -> Self {
        Self {
            id,
            content,
            author,
            modified_at: Utc::now(),
        }
    }

    /// Overwrite content and author in place, keeping the identity.
    pub(crate) fn rewrite(&mut self, content: String, author: String) {
        self.content = content;
        self.author = author;
        self.modified_at = Utc::now();
    }
}
