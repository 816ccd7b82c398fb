const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `max_length` characters, marking the cut with `...`.
///
/// Lengths are counted in `char`s so the cut never lands inside a code point.
/// When `max_length` is too small to hold the marker, the text is cut without one.
pub fn shape(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let marker_len = ELLIPSIS.chars().count();
    if max_length < marker_len {
        return text.chars().take(max_length).collect();
    }

    let mut shaped: String = text.chars().take(max_length - marker_len).collect();
    shaped.push_str(ELLIPSIS);
    shaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(shape("Acme Co", 1000), "Acme Co");
        assert_eq!(shape("", 10), "");
    }

    #[test]
    fn test_text_at_limit_is_unchanged() {
        let text = "a".repeat(1000);
        assert_eq!(shape(&text, 1000), text);
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let text = "abcdefghij";
        assert_eq!(shape(text, 8), "abcde...");
        assert_eq!(shape(text, 8).chars().count(), 8);
    }

    #[test]
    fn test_output_never_exceeds_limit() {
        let text = "The quick brown fox jumps over the lazy dog";
        for limit in 0..=text.len() + 2 {
            assert!(shape(text, limit).chars().count() <= limit);
        }
    }

    #[test]
    fn test_tiny_limits_drop_the_marker() {
        assert_eq!(shape("abcdef", 2), "ab");
        assert_eq!(shape("abcdef", 0), "");
        assert_eq!(shape("abcdef", 3), "...");
    }

    #[test]
    fn test_multibyte_text_is_cut_on_char_boundaries() {
        let text = "☕".repeat(1200);
        let shaped = shape(&text, 1000);
        assert_eq!(shaped.chars().count(), 1000);
        assert!(shaped.starts_with(&"☕".repeat(997)));
        assert!(shaped.ends_with("..."));
    }
}
