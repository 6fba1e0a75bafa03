use cowrite_core::{AUTHOR_AGENT, AUTHOR_USER, Document, SearchError, SearchOptions};

const SOURCE: &str = "use std::io;\n\nfn main() {\n    let mainline = 1;\n}\n\nfn helper() {}";

#[test]
fn test_find_lines_plain() {
    let doc = Document::from_text(SOURCE, AUTHOR_USER);
    let hits = doc.find_lines("fn ", SearchOptions::default()).unwrap();

    let indices: Vec<usize> = hits.iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![2, 6]);
    assert_eq!(hits[0].line.content, "fn main() {");
}

#[test]
fn test_find_lines_whole_word() {
    let doc = Document::from_text(SOURCE, AUTHOR_USER);
    let options = SearchOptions {
        whole_word: true,
        ..SearchOptions::default()
    };

    let hits = doc.find_lines("main", options).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 2);
}

#[test]
fn test_find_lines_regex_then_insert_after_hit() {
    let doc = Document::from_text(SOURCE, AUTHOR_USER);
    let options = SearchOptions {
        regex: true,
        ..SearchOptions::default()
    };

    let hits = doc.find_lines(r"^fn \w+\(\)", options).unwrap();
    assert_eq!(hits.len(), 2);

    let anchor = &hits[0].line.id;
    doc.insert_after_id(anchor, "    // agent: entry point", AUTHOR_AGENT);
    assert_eq!(doc.get_line(3).unwrap().content, "    // agent: entry point");
}

#[test]
fn test_find_lines_empty_query_and_bad_regex() {
    let doc = Document::from_text(SOURCE, AUTHOR_USER);
    assert!(doc.find_lines("", SearchOptions::default()).unwrap().is_empty());

    let options = SearchOptions {
        regex: true,
        ..SearchOptions::default()
    };
    let err = doc.find_lines("fn (", options).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRegex(_)));
}

#[test]
fn test_find_lines_is_read_only() {
    let doc = Document::from_text(SOURCE, AUTHOR_USER);
    let _ = doc.find_lines("fn", SearchOptions::default()).unwrap();
    assert_eq!(doc.version(), 0);
}
