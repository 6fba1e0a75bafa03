//! Line-level change sets.
//!
//! A [`ChangeSet`] answers "what happened to the document since this [`Snapshot`] was taken",
//! expressed in terms of line identities rather than character offsets. It is what an agent reads
//! after a long-running turn to fold the human's interim edits into its own work.
//!
//! Ordering contract:
//! - `Insert`/`Update` entries come first, in current-document order.
//! - `Delete` entries follow, in the order the deleted lines occupied in the snapshot.
//!
//! Moves are not a change type. A line that only moved produces nothing; a line that moved and
//! was edited produces a single `Update`.

use crate::line::{Line, LineId};
use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Kind of a single [`Change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// The line did not exist in the snapshot.
    Insert,
    /// The line existed in the snapshot and its content differs.
    Update,
    /// The line existed in the snapshot and is gone now.
    Delete,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// A single line-level change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// What happened to the line.
    pub kind: ChangeKind,
    /// Identity of the affected line.
    pub line_id: LineId,
    /// Current index of the line; `None` for deletes.
    pub line_index: Option<usize>,
    /// Current content (for deletes: the content captured in the snapshot).
    pub content: String,
    /// Current author (for deletes: the author captured in the snapshot).
    pub author: String,
}

/// Ordered list of changes between two document versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Version of the snapshot the changes are relative to.
    pub from_version: u64,
    /// Version of the document the changes lead to.
    pub to_version: u64,
    /// Changes, inserts/updates first then deletes.
    pub changes: Vec<Change>,
}

impl ChangeSet {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of `Insert` entries.
    pub fn inserted(&self) -> usize {
        self.count(ChangeKind::Insert)
    }

    /// Number of `Update` entries.
    pub fn updated(&self) -> usize {
        self.count(ChangeKind::Update)
    }

    /// Number of `Delete` entries.
    pub fn deleted(&self) -> usize {
        self.count(ChangeKind::Delete)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Short human-readable summary, e.g. `"2 lines added, 1 line modified"`.
    ///
    /// Returns `"No changes"` for an empty change set.
    pub fn summary(&self) -> String {
        let parts: Vec<String> = [
            (self.inserted(), "added"),
            (self.updated(), "modified"),
            (self.deleted(), "deleted"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, verb)| format!("{n} {} {verb}", if n == 1 { "line" } else { "lines" }))
        .collect();

        if parts.is_empty() {
            "No changes".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Compute the changes that turn `snapshot` into `current`.
///
/// `to_version` is recorded as the change set's target version. Runs in `O(n + m)` using hash
/// lookups over line identities.
pub fn diff(snapshot: &Snapshot, current: &[Line], to_version: u64) -> ChangeSet {
    let before: HashMap<&str, &str> = snapshot
        .lines()
        .iter()
        .map(|l| (l.id.as_str(), l.content.as_str()))
        .collect();
    let mut present: HashSet<&str> = HashSet::with_capacity(current.len());
    let mut changes = Vec::new();

    for (index, line) in current.iter().enumerate() {
        let kind = match before.get(line.id.as_str()) {
            Some(old) if *old == line.content => None,
            Some(_) => Some(ChangeKind::Update),
            None => Some(ChangeKind::Insert),
        };
        present.insert(line.id.as_str());

        if let Some(kind) = kind {
            changes.push(Change {
                kind,
                line_id: line.id.clone(),
                line_index: Some(index),
                content: line.content.clone(),
                author: line.author.clone(),
            });
        }
    }

    changes.extend(
        snapshot
            .lines()
            .iter()
            .filter(|l| !present.contains(l.id.as_str()))
            .map(|l| Change {
                kind: ChangeKind::Delete,
                line_id: l.id.clone(),
                line_index: None,
                content: l.content.clone(),
                author: l.author.clone(),
            }),
    );

    ChangeSet {
        from_version: snapshot.version(),
        to_version,
        changes,
    }
}
