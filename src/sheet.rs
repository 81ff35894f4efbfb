use unicode_width::UnicodeWidthChar;

/// One row of a rendered worksheet: a line to trace, or a blank rule row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SheetLine {
    Text(String),
    Blank,
}

/// Group wrapped lines into worksheet rows: each text line is followed by
/// `blank_lines` rule rows, and one extra rule row closes the document.
/// Empty input produces an empty sheet (nothing to practice, nothing to rule).
pub fn build_sheet(lines: &[String], blank_lines: usize) -> Vec<SheetLine> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut sheet = Vec::with_capacity(lines.len() * (blank_lines + 1) + 1);
    for line in lines {
        sheet.push(SheetLine::Text(line.clone()));
        for _ in 0..blank_lines {
            sheet.push(SheetLine::Blank);
        }
    }
    sheet.push(SheetLine::Blank);
    sheet
}

/// Plain-text rendering: blank rows become empty lines.
pub fn sheet_to_text(sheet: &[SheetLine]) -> String {
    let rows: Vec<&str> = sheet
        .iter()
        .map(|row| match row {
            SheetLine::Text(line) => line.as_str(),
            SheetLine::Blank => "",
        })
        .collect();
    rows.join("\n")
}

pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum()
}

/// Longest prefix of `s` that fits in `width_cols` display columns.
pub fn truncate_columns(s: &str, width_cols: usize) -> &str {
    let mut used = 0usize;
    for (i, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width_cols {
            return &s[..i];
        }
        used += w;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sheet_interleaves_blank_rows() {
        let sheet = build_sheet(&lines(&["alpha", "beta"]), 2);
        assert_eq!(
            sheet,
            vec![
                SheetLine::Text("alpha".into()),
                SheetLine::Blank,
                SheetLine::Blank,
                SheetLine::Text("beta".into()),
                SheetLine::Blank,
                SheetLine::Blank,
                SheetLine::Blank, // closing rule row
            ]
        );
    }

    #[test]
    fn test_zero_blank_lines_still_closes_the_sheet() {
        let sheet = build_sheet(&lines(&["alpha"]), 0);
        assert_eq!(
            sheet,
            vec![SheetLine::Text("alpha".into()), SheetLine::Blank]
        );
    }

    #[test]
    fn test_empty_input_produces_empty_sheet() {
        assert!(build_sheet(&[], 3).is_empty());
    }

    #[test]
    fn test_sheet_to_text() {
        let sheet = build_sheet(&lines(&["one", "two"]), 1);
        assert_eq!(sheet_to_text(&sheet), "one\n\ntwo\n\n");
    }

    #[test]
    fn test_truncate_columns_respects_wide_chars() {
        assert_eq!(truncate_columns("abcdef", 3), "abc");
        assert_eq!(truncate_columns("ab", 10), "ab");
        // A fullwidth char is two columns and never split in half.
        assert_eq!(truncate_columns("a漢b", 2), "a");
        assert_eq!(truncate_columns("a漢b", 3), "a漢");
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("漢字"), 4);
        assert_eq!(display_width(""), 0);
    }
}
