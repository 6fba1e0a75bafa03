use cowrite_core::{AUTHOR_AGENT, AUTHOR_USER, Document};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (cowrite-core benchmark line)\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_large_document_load(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("large_document_load/50k_lines", |b| {
        b.iter(|| {
            let doc = Document::from_text(black_box(&text), AUTHOR_USER);
            black_box(doc.line_count());
        })
    });
}

fn bench_snapshot_and_diff(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("snapshot_diff/50k_lines_100_edits", |b| {
        b.iter_batched(
            || {
                let doc = Document::from_text(&text, AUTHOR_USER);
                let snapshot = doc.snapshot();
                for i in 0..100 {
                    doc.update_by_index(i * 400, "edited", AUTHOR_USER);
                }
                (doc, snapshot)
            },
            |(doc, snapshot)| {
                black_box(doc.compute_changes(&snapshot));
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_insert_after_id(c: &mut Criterion) {
    let text = large_text(50_000);
    c.bench_function("insert_after_id/100_inserts_mid_document", |b| {
        b.iter_batched(
            || {
                let doc = Document::from_text(&text, AUTHOR_USER);
                let anchor = doc.get_line(25_000).map(|l| l.id).unwrap_or_default();
                (doc, anchor)
            },
            |(doc, anchor)| {
                for _ in 0..100 {
                    doc.insert_after_id(&anchor, "x", AUTHOR_AGENT);
                }
                black_box(doc.version());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_large_document_load,
    bench_snapshot_and_diff,
    bench_insert_after_id
);
criterion_main!(benches);
