//! Property-based tests for shell escaping.

use std::path::PathBuf;

use dupescan::output::escape_posix;
use proptest::prelude::*;

/// Undo single-quote shell escaping: the inverse of `escape_posix`.
fn unescape_posix(escaped: &str) -> String {
    assert!(escaped.starts_with('\'') && escaped.ends_with('\''));
    let inner = &escaped[1..escaped.len() - 1];
    inner.replace("'\\''", "'")
}

/// Simulate POSIX shell tokenization of a single-quoted word sequence.
///
/// Walks the escaped string the way a shell would: inside single quotes
/// everything is literal; `\'` outside quotes is a literal quote. Returns
/// the single argument the shell would produce, or None if quoting is
/// unbalanced or more than one argument results.
fn shell_parse_single_argument(input: &str) -> Option<String> {
    let mut arg = String::new();
    let mut chars = input.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match (in_quotes, c) {
            (true, '\'') => in_quotes = false,
            (true, c) => arg.push(c),
            (false, '\'') => in_quotes = true,
            (false, '\\') => arg.push(chars.next()?),
            (false, ' ') => return None, // would split into a second argument
            (false, c) => arg.push(c),
        }
    }

    if in_quotes {
        None
    } else {
        Some(arg)
    }
}

proptest! {
    #[test]
    fn escaping_round_trips(s in "[ -~]{1,60}") {
        let path = PathBuf::from(&s);
        let escaped = escape_posix(&path);
        prop_assert_eq!(unescape_posix(&escaped), s);
    }

    #[test]
    fn shell_sees_exactly_the_original_path(s in "[ -~]{1,60}") {
        let path = PathBuf::from(&s);
        let escaped = escape_posix(&path);
        let parsed = shell_parse_single_argument(&escaped);
        prop_assert_eq!(parsed, Some(s));
    }

    #[test]
    fn quote_heavy_paths_stay_single_arguments(s in "[' a-z]{1,40}") {
        let path = PathBuf::from(&s);
        let escaped = escape_posix(&path);
        let parsed = shell_parse_single_argument(&escaped);
        prop_assert_eq!(parsed, Some(s));
    }
}
