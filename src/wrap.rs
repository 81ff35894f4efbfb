use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WrapError {
    #[error("line width must be at least 1 character")]
    InvalidWidth,
}

/// Wrap `text` into lines of at most `max_width` characters.
///
/// Explicit newlines are hard breaks and take priority over width. Within a
/// window of `max_width` characters the break goes at the last space; a run
/// of non-space characters longer than the window is cut at exactly
/// `max_width` characters. Exactly one separator character (the space or
/// newline broken on) is consumed per break; all other whitespace is kept.
///
/// Width is counted in `char`s, not bytes or display columns.
pub fn wrap(text: &str, max_width: usize) -> Result<Vec<String>, WrapError> {
    if max_width == 0 {
        return Err(WrapError::InvalidWidth);
    }

    let mut lines = Vec::new();
    let mut rest = text;

    loop {
        // Byte offset just past the first `max_width` chars of `rest`.
        let window_end = rest
            .char_indices()
            .nth(max_width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        // Everything left fits on one line and holds no hard break.
        if window_end == rest.len() && !rest.contains('\n') {
            break;
        }

        let window = &rest[..window_end];

        if let Some(nl) = window.find('\n') {
            lines.push(rest[..nl].to_string());
            rest = &rest[nl + 1..];
        } else if let Some(sp) = window.rfind(' ') {
            lines.push(rest[..sp].to_string());
            rest = &rest[sp + 1..];
        } else {
            // Unbroken run at least as long as the window: hard cut.
            lines.push(window.to_string());
            rest = &rest[window_end..];
        }
    }

    // The final segment is dropped when empty, so text ending exactly on a
    // break boundary does not produce a spurious trailing line.
    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, width: usize, expected: &[&str]) {
        assert_eq!(wrap(input, width).unwrap(), expected);
    }

    #[test]
    fn test_short_text_is_untouched() {
        check("hi", 100, &["hi"]);
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        check("", 10, &[]);
    }

    #[test]
    fn test_breaks_at_last_space_in_window() {
        check("hello world foo", 8, &["hello", "world", "foo"]);
    }

    #[test]
    fn test_newline_breaks_even_when_text_fits() {
        check("ab\ncd", 10, &["ab", "cd"]);
    }

    #[test]
    fn test_newline_takes_priority_over_space() {
        // The window holds both; the newline wins.
        check("a b\nc d", 7, &["a b", "c d"]);
    }

    #[test]
    fn test_hard_cut_mid_word() {
        check("abcdefghij", 5, &["abcde", "fghij"]);
    }

    #[test]
    fn test_hard_cut_repeats_for_very_long_words() {
        check("abcdefghijklm", 5, &["abcde", "fghij", "klm"]);
    }

    #[test]
    fn test_exact_width_fits_on_one_line() {
        check("abcde", 5, &["abcde"]);
    }

    #[test]
    fn test_trailing_newline_produces_no_empty_line() {
        check("hello\n", 10, &["hello"]);
    }

    #[test]
    fn test_text_ending_on_space_break() {
        // "hello " is six chars against width five: break consumes the space.
        check("hello fghij", 11, &["hello fghij"]);
        check("hello fghij", 10, &["hello", "fghij"]);
    }

    #[test]
    fn test_lone_space_between_newlines_is_kept() {
        check("a\n \nb", 10, &["a", " ", "b"]);
    }

    #[test]
    fn test_consecutive_newlines_yield_empty_lines() {
        check("a\n\nb", 10, &["a", "", "b"]);
    }

    #[test]
    fn test_width_one() {
        // The space window breaks at its own space, leaving an empty line.
        check("ab c", 1, &["a", "b", "", "c"]);
    }

    #[test]
    fn test_all_spaces_input() {
        // First window breaks at its last space; the remainder fits whole.
        check("          ", 5, &["    ", "     "]);
    }

    #[test]
    fn test_all_newlines_input() {
        check("\n\n\n", 5, &["", "", ""]);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        check("héllo wörld", 6, &["héllo", "wörld"]);
        check("ééééé", 3, &["ééé", "éé"]);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert_eq!(wrap("anything", 0), Err(WrapError::InvalidWidth));
    }

    #[test]
    fn test_idempotent() {
        let text = "the quick brown fox\njumps over the lazy dog";
        assert_eq!(wrap(text, 9).unwrap(), wrap(text, 9).unwrap());
    }

    #[test]
    fn test_every_line_within_width() {
        let text = "one two three four five six seven\n\neight nine supercalifragilistic ten";
        for width in 1..20 {
            for line in wrap(text, width).unwrap() {
                assert!(
                    line.chars().count() <= width,
                    "line {:?} exceeds width {}",
                    line,
                    width
                );
            }
        }
    }

    #[test]
    fn test_round_trip_preserves_non_whitespace_content() {
        let text = "pack my box  with\nfive dozen liquor jugs";
        for width in 1..30 {
            let wrapped: String = wrap(text, width).unwrap().concat();
            let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let output: String = wrapped.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(original, output, "content drifted at width {}", width);
        }
    }
}
