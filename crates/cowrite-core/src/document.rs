//! Document Store
//!
//! The shared, line-addressed document that both actors edit.
//!
//! # Overview
//!
//! A [`Document`] owns an ordered sequence of [`Line`]s and a version counter, guarded together by
//! a single reader/writer lock:
//!
//! - **Reads** (`get_line`, `lines`, `text`, `snapshot`, ...) take the shared lock and may run
//!   concurrently with each other.
//! - **Mutations** (`insert_*`, `update_*`, `delete_*`, `replace`) take the exclusive lock for their
//!   full duration and bump the version by exactly one on success.
//! - **Lookups that miss** (unknown id, out-of-range index) return `false`/`None` and leave both the
//!   lines and the version untouched.
//!
//! Every method takes `&self`; share a document between threads with [`SharedDocument`].
//!
//! # Example
//!
//! ```rust
//! use cowrite_core::{AUTHOR_AGENT, AUTHOR_USER, ChangeKind, Document};
//!
//! let doc = Document::from_text("A\nB\nC", AUTHOR_USER);
//! let a = doc.get_line(0).unwrap();
//!
//! // The agent captures a baseline before it starts thinking...
//! let snapshot = doc.snapshot();
//!
//! // ...meanwhile the human keeps typing.
//! doc.update_by_id(&a.id, "A2", AUTHOR_USER);
//! doc.insert_after_index(-1, "header", AUTHOR_USER);
//!
//! // The agent learns what happened in the interim.
//! let changes = doc.compute_changes(&snapshot);
//! assert_eq!(changes.changes[0].kind, ChangeKind::Insert);
//! assert_eq!(changes.changes[1].kind, ChangeKind::Update);
//! assert_eq!(doc.summarize_changes(&snapshot), "1 line added, 1 line modified");
//!
//! doc.insert_after_id(&a.id, "agent note", AUTHOR_AGENT);
//! assert_eq!(doc.text(), "header\nA2\nagent note\nB\nC");
//! ```

use crate::changes::{self, ChangeSet};
use crate::config::DocumentConfig;
use crate::id::LineIdGenerator;
use crate::line::Line;
use crate::line_ending::LineEnding;
use crate::search::{LineMatch, LineMatcher, SearchError, SearchOptions};
use crate::snapshot::Snapshot;
use crate::text::{join_lines, split_lines};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

/// A document shared between actors.
pub type SharedDocument = Arc<Document>;

/// Document counters, captured together under one read lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentState {
    /// Number of lines.
    pub line_count: usize,
    /// Total character count of the canonical text (separators included).
    pub char_count: usize,
    /// Total byte count of the canonical text (separators included).
    pub byte_count: usize,
    /// Document version number (incremented after each modification).
    pub version: u64,
}

#[derive(Debug)]
struct Inner {
    lines: Vec<Line>,
    version: u64,
    line_ending: LineEnding,
}

impl Inner {
    fn position_of(&self, id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.id.as_str() == id)
    }

    fn bump(&mut self) -> u64 {
        self.version += 1;
        self.version
    }
}

/// Concurrent, line-addressed document.
///
/// See the [module documentation](self) for the locking and versioning contract.
#[derive(Debug)]
pub struct Document {
    inner: RwLock<Inner>,
    ids: LineIdGenerator,
}

impl Document {
    /// Create an empty document (zero lines, version 0).
    pub fn empty() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    /// Create an empty document with an explicit configuration.
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            inner: RwLock::new(Inner {
                lines: Vec::new(),
                version: 0,
                line_ending: config.line_ending,
            }),
            ids: LineIdGenerator::new(config.id_strategy),
        }
    }

    /// Build a document from text, one line per `'\n'`-separated segment.
    ///
    /// Every line gets a fresh identity, `author` and the current time. `""` yields zero lines.
    pub fn from_text(text: &str, author: &str) -> Self {
        Self::from_text_with_config(text, author, DocumentConfig::default())
    }

    /// Build a document from text with an explicit configuration.
    pub fn from_text_with_config(text: &str, author: &str, config: DocumentConfig) -> Self {
        let doc = Self::with_config(config);
        let lines = doc.build_lines(text, author);
        doc.inner.write().lines = lines;
        doc
    }

    /// Build a document from file contents.
    ///
    /// CRLF line endings are normalized to LF, and the detected ending is remembered for
    /// [`text_for_saving`](Self::text_for_saving).
    pub fn load(text: &str, author: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        Self::from_text_with_config(
            &LineEnding::normalize(text),
            author,
            DocumentConfig {
                line_ending,
                ..DocumentConfig::default()
            },
        )
    }

    fn build_lines(&self, text: &str, author: &str) -> Vec<Line> {
        split_lines(text)
            .into_iter()
            .map(|content| Line::new(self.ids.next_id(), content.to_string(), author.to_string()))
            .collect()
    }

    /// Current version number.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Returns `true` if any mutation happened since `version` was observed.
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version() != version
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.inner.read().lines.len()
    }

    /// Line counters and version, read consistently.
    pub fn state(&self) -> DocumentState {
        let inner = self.inner.read();
        let separators = inner.lines.len().saturating_sub(1);
        DocumentState {
            line_count: inner.lines.len(),
            char_count: inner
                .lines
                .iter()
                .map(|l| l.content.chars().count())
                .sum::<usize>()
                + separators,
            byte_count: inner.lines.iter().map(|l| l.content.len()).sum::<usize>() + separators,
            version: inner.version,
        }
    }

    /// Copy of the line at `index`, if any.
    pub fn get_line(&self, index: usize) -> Option<Line> {
        self.inner.read().lines.get(index).cloned()
    }

    /// Copy of the line with identity `id`, along with its current index.
    pub fn get_line_by_id(&self, id: impl AsRef<str>) -> Option<(Line, usize)> {
        let inner = self.inner.read();
        let index = inner.position_of(id.as_ref())?;
        Some((inner.lines[index].clone(), index))
    }

    /// Independent copy of every line.
    pub fn lines(&self) -> Vec<Line> {
        self.inner.read().lines.clone()
    }

    /// Canonical text: line contents joined with `'\n'`.
    pub fn text(&self) -> String {
        join_lines(self.inner.read().lines.iter().map(|l| l.content.as_str()))
    }

    /// Preferred line ending for saving this document.
    pub fn line_ending(&self) -> LineEnding {
        self.inner.read().line_ending
    }

    /// Override the preferred line ending. Does not change the version.
    pub fn set_line_ending(&self, line_ending: LineEnding) {
        self.inner.write().line_ending = line_ending;
    }

    /// Canonical text converted to the preferred line ending.
    pub fn text_for_saving(&self) -> String {
        let inner = self.inner.read();
        let text = join_lines(inner.lines.iter().map(|l| l.content.as_str()));
        inner.line_ending.apply_to_text(&text)
    }

    /// Insert a new line right after `after_index`.
    ///
    /// `-1` (or any negative value) inserts at the head; any index at or past the last line
    /// appends at the tail. Always succeeds.
    pub fn insert_after_index(
        &self,
        after_index: isize,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Line {
        let line = Line::new(self.ids.next_id(), content.into(), author.into());

        let mut inner = self.inner.write();
        let len = inner.lines.len();
        let index = usize::try_from(after_index)
            .map(|i| i.saturating_add(1).min(len))
            .unwrap_or(0);
        inner.lines.insert(index, line.clone());
        let version = inner.bump();

        trace!(op = "insert", line_id = %line.id, index, version);
        line
    }

    /// Insert a new line right after the line with identity `after_id`.
    ///
    /// An empty or unknown `after_id` appends at the tail. Always succeeds.
    pub fn insert_after_id(
        &self,
        after_id: impl AsRef<str>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Line {
        let line = Line::new(self.ids.next_id(), content.into(), author.into());
        let after_id = after_id.as_ref();

        let mut inner = self.inner.write();
        let index = match after_id {
            "" => inner.lines.len(),
            id => inner
                .position_of(id)
                .map_or(inner.lines.len(), |i| i + 1),
        };
        inner.lines.insert(index, line.clone());
        let version = inner.bump();

        trace!(op = "insert", line_id = %line.id, index, version);
        line
    }

    /// Overwrite the content and author of the line at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn update_by_index(
        &self,
        index: usize,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> bool {
        let mut inner = self.inner.write();
        let Some(line) = inner.lines.get_mut(index) else {
            return false;
        };
        line.rewrite(content.into(), author.into());
        let line_id = line.id.clone();
        let version = inner.bump();

        trace!(op = "update", %line_id, index, version);
        true
    }

    /// Overwrite the content and author of the line with identity `id`.
    ///
    /// Returns `false` (and changes nothing) if no such line exists.
    pub fn update_by_id(
        &self,
        id: impl AsRef<str>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> bool {
        let mut inner = self.inner.write();
        let Some(index) = inner.position_of(id.as_ref()) else {
            return false;
        };
        inner.lines[index].rewrite(content.into(), author.into());
        let version = inner.bump();

        trace!(op = "update", line_id = id.as_ref(), index, version);
        true
    }

    /// Delete the line at `index`.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn delete_by_index(&self, index: usize) -> bool {
        let mut inner = self.inner.write();
        if index >= inner.lines.len() {
            return false;
        }
        let line = inner.lines.remove(index);
        let version = inner.bump();

        trace!(op = "delete", line_id = %line.id, index, version);
        true
    }

    /// Delete the line with identity `id`.
    ///
    /// Returns `false` (and changes nothing) if no such line exists.
    pub fn delete_by_id(&self, id: impl AsRef<str>) -> bool {
        let mut inner = self.inner.write();
        let Some(index) = inner.position_of(id.as_ref()) else {
            return false;
        };
        inner.lines.remove(index);
        let version = inner.bump();

        trace!(op = "delete", line_id = id.as_ref(), index, version);
        true
    }

    /// Replace the whole document with `text`.
    ///
    /// Every line is recreated with a fresh identity, so per-line change tracking does not
    /// carry across this call: a later diff reports all old lines deleted and all new lines
    /// inserted. The version advances by exactly one, even when `text` is empty.
    pub fn replace(&self, text: &str, author: &str) {
        let lines = self.build_lines(text, author);
        let line_count = lines.len();

        let mut inner = self.inner.write();
        inner.lines = lines;
        let version = inner.bump();

        trace!(op = "replace", line_count, version);
    }

    /// Capture the current lines and version.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read();
        Snapshot::capture(inner.version, &inner.lines)
    }

    /// Changes between `snapshot` and the current document.
    ///
    /// See [`changes`](crate::changes) for the ordering contract.
    pub fn compute_changes(&self, snapshot: &Snapshot) -> ChangeSet {
        let set = {
            let inner = self.inner.read();
            changes::diff(snapshot, &inner.lines, inner.version)
        };

        debug!(
            from_version = set.from_version,
            to_version = set.to_version,
            inserted = set.inserted(),
            updated = set.updated(),
            deleted = set.deleted(),
            "computed changes"
        );
        set
    }

    /// Human-readable summary of [`compute_changes`](Self::compute_changes).
    pub fn summarize_changes(&self, snapshot: &Snapshot) -> String {
        self.compute_changes(snapshot).summary()
    }

    /// Lines written strictly after `since`, in document order.
    ///
    /// A non-empty `author_filter` additionally restricts the result to that author.
    pub fn get_lines_modified_since(&self, since: DateTime<Utc>, author_filter: &str) -> Vec<Line> {
        self.inner
            .read()
            .lines
            .iter()
            .filter(|l| l.modified_at > since)
            .filter(|l| author_filter.is_empty() || l.author == author_filter)
            .cloned()
            .collect()
    }

    /// Lines whose content matches `query`, in document order.
    pub fn find_lines(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<LineMatch>, SearchError> {
        let Some(matcher) = LineMatcher::new(query, options)? else {
            return Ok(Vec::new());
        };

        Ok(self
            .inner
            .read()
            .lines
            .iter()
            .enumerate()
            .filter(|(_, l)| matcher.is_match(&l.content))
            .map(|(index, l)| LineMatch {
                index,
                line: l.clone(),
            })
            .collect())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
