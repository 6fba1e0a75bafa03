#![warn(missing_docs)]
//! Cowrite Core - Concurrent Line-Addressed Document Engine
//!
//! # Overview
//!
//! `cowrite-core` is the shared document at the center of a human + agent co-editing session.
//! An interactive input handler and an autonomous agent both edit the same [`Document`]
//! concurrently; the agent takes a [`Snapshot`] before it starts composing a batch of edits and
//! later asks for a [`ChangeSet`] to see exactly what the human changed in the meantime.
//!
//! It does not render, persist, decode keystrokes, or talk to a model provider. Those are
//! collaborators built on top of the plain-text boundary ([`Document::text`] /
//! [`Document::from_text`]).
//!
//! # Core Features
//!
//! - **Stable Line Identity**: every line carries a [`LineId`] that survives reordering and
//!   concurrent edits, and is never reused after deletion
//! - **Serialized Mutation**: one reader/writer lock around lines + version, no torn reads
//! - **Version Counter**: +1 per successful mutation, unchanged on a miss
//! - **Snapshot Diffing**: `O(n + m)` identity-based change sets with a deterministic order
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Input handler          Agent driver        │  ← Actors (external)
//! ├─────────────────────────────────────────────┤
//! │  Document Store (RwLock<lines + version>)   │  ← Public API
//! ├──────────────────────┬──────────────────────┤
//! │  Snapshot & Diff     │  Search              │  ← Read-side views
//! ├──────────────────────┴──────────────────────┤
//! │  Identity Generator                         │  ← Line identities
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use cowrite_core::{AUTHOR_AGENT, AUTHOR_USER, ChangeKind, Document, SharedDocument};
//! use std::sync::Arc;
//!
//! let doc: SharedDocument = Arc::new(Document::from_text("A\nB\nC", AUTHOR_USER));
//! let snapshot = doc.snapshot();
//!
//! let human = {
//!     let doc = Arc::clone(&doc);
//!     std::thread::spawn(move || doc.delete_by_index(2))
//! };
//! assert!(human.join().unwrap());
//!
//! let changes = doc.compute_changes(&snapshot);
//! assert_eq!(changes.len(), 1);
//! assert_eq!(changes.changes[0].kind, ChangeKind::Delete);
//! assert_eq!(changes.changes[0].content, "C");
//!
//! doc.insert_after_index(1, "agent line", AUTHOR_AGENT);
//! assert_eq!(doc.text(), "A\nB\nagent line");
//! ```
//!
//! # Module Description
//!
//! - [`document`] - Document Store
//! - [`id`] - Line identity generation
//! - [`snapshot`] - Point-in-time captures
//! - [`changes`] - Change sets and the diff algorithm
//! - [`search`] - Locating lines by content
//! - [`config`] - Document configuration
//! - [`line_ending`] - LF/CRLF handling for persistence collaborators
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`trace` per mutation, `debug` per computed change set) and
//! never installs a subscriber.

pub mod changes;
pub mod config;
pub mod document;
pub mod id;
pub mod line;
pub mod line_ending;
pub mod search;
pub mod snapshot;
mod text;

pub use changes::{Change, ChangeKind, ChangeSet};
pub use config::{ConfigError, DocumentConfig};
pub use document::{Document, DocumentState, SharedDocument};
pub use id::{IdStrategy, LineIdGenerator};
pub use line::{AUTHOR_AGENT, AUTHOR_USER, Line, LineId};
pub use line_ending::LineEnding;
pub use search::{LineMatch, SearchError, SearchOptions};
pub use snapshot::{Snapshot, SnapshotLine};
