//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Returns a sub-slice of the original string. If the string has no more
/// than `max_chars` characters, the entire string is returned unchanged.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_chars("running shoes", 7), "running");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_chars("ok", 10), "ok");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        // 'あ' is 3 bytes but 1 character
        let s = "ああああ";
        assert_eq!(truncate_chars(s, 2), "ああ");
        assert_eq!(truncate_chars(s, 4), s);
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_chars("", 5), "");
    }
}
