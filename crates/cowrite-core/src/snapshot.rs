//! Point-in-time document captures.
//!
//! A [`Snapshot`] is the baseline an actor holds while it works "offline" (e.g. while an agent
//! waits on a model response). It is an owned copy: holding one never blocks writers, and taking
//! one is not a mutation.

use crate::line::{Line, LineId};
use serde::{Deserialize, Serialize};

/// One line as captured in a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    /// Line identity at capture time.
    pub id: LineId,
    /// Line content at capture time.
    pub content: String,
    /// Author tag at capture time.
    pub author: String,
}

impl From<&Line> for SnapshotLine {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id.clone(),
            content: line.content.clone(),
            author: line.author.clone(),
        }
    }
}

/// Immutable copy of a document's lines at a given version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    version: u64,
    lines: Vec<SnapshotLine>,
}

impl Snapshot {
    pub(crate) fn capture(version: u64, lines: &[Line]) -> Self {
        Self {
            version,
            lines: lines.iter().map(SnapshotLine::from).collect(),
        }
    }

    /// Document version at capture time.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Captured lines, in document order.
    pub fn lines(&self) -> &[SnapshotLine] {
        &self.lines
    }

    /// Number of captured lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Captured text, joined with `'\n'`.
    pub fn text(&self) -> String {
        crate::text::join_lines(self.lines.iter().map(|l| l.content.as_str()))
    }
}
