//! Simulates one agent turn racing a human typist on a shared document.
//!
//! Run with `RUST_LOG=cowrite_core=trace` to see every mutation.

use cowrite_core::{AUTHOR_AGENT, AUTHOR_USER, ChangeKind, Document, SharedDocument};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let doc: SharedDocument = Arc::new(Document::from_text(
        "# Notes\n- buy milk\n- call bob",
        AUTHOR_USER,
    ));

    // The agent captures its baseline and starts "thinking".
    let snapshot = doc.snapshot();

    let human = {
        let doc = Arc::clone(&doc);
        thread::spawn(move || {
            doc.update_by_index(1, "- buy oat milk", AUTHOR_USER);
            thread::sleep(Duration::from_millis(10));
            doc.insert_after_index(2, "- water plants", AUTHOR_USER);
        })
    };
    thread::sleep(Duration::from_millis(30));
    human.join().expect("human thread panicked");

    // The agent comes back and reconciles before writing.
    let changes = doc.compute_changes(&snapshot);
    println!(
        "while the agent was thinking (v{} -> v{}): {}",
        changes.from_version,
        changes.to_version,
        changes.summary()
    );
    for change in &changes.changes {
        println!("  {:<6} {:?}", change.kind, change.content);
    }

    let anchor = changes
        .changes
        .iter()
        .rev()
        .find(|c| c.kind == ChangeKind::Insert)
        .map(|c| c.line_id.clone())
        .unwrap_or_default();
    doc.insert_after_id(&anchor, "- (agent) reply to bob's email", AUTHOR_AGENT);

    println!("\n{}", doc.text());
}
