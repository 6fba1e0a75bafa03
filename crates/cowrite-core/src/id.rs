//! Line identity generation.
//!
//! Diff correctness depends on one property only: an identifier is never handed out twice by the
//! same generator, even after the line that carried it is deleted. Both strategies below satisfy
//! that; they differ in readability and cross-process uniqueness.

use crate::line::LineId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// How a [`LineIdGenerator`] mints identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs.
    #[default]
    Uuid,
    /// `"{prefix}{n}"` with `n` counting up from 1.
    Sequential {
        /// Text prepended to every counter value.
        #[serde(default)]
        prefix: String,
    },
}

/// Produces unique [`LineId`]s.
///
/// The generator is internally synchronized, so a document can mint ids before taking its write
/// lock.
#[derive(Debug)]
pub struct LineIdGenerator {
    strategy: IdStrategy,
    counter: AtomicU64,
}

impl LineIdGenerator {
    /// Create a generator for `strategy`.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            counter: AtomicU64::new(0),
        }
    }

    /// The strategy this generator was built with.
    pub fn strategy(&self) -> &IdStrategy {
        &self.strategy
    }

    /// Mint a fresh identifier.
    pub fn next_id(&self) -> LineId {
        match &self.strategy {
            IdStrategy::Uuid => LineId::new(Uuid::new_v4().to_string()),
            IdStrategy::Sequential { prefix } => {
                let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
                LineId::new(format!("{prefix}{n}"))
            }
        }
    }
}

impl Default for LineIdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
