/// Split document text into line contents.
///
/// `str::split('\n')` preserves trailing empty segments (N separators => N+1 lines), which keeps
/// `join_lines(split_lines(t)) == t` for every non-empty `t`. The empty string is the one special
/// case: it maps to a zero-line document rather than a single empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Join line contents with `'\n'`, in order.
pub(crate) fn join_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(join_lines(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_trailing_separator_yields_empty_last_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(join_lines(split_lines("a\n\nb\n")), "a\n\nb\n");
    }

    #[test]
    fn test_carriage_returns_are_content() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }
}
