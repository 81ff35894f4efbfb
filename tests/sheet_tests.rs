use copybook::sheet::{build_sheet, sheet_to_text, SheetLine};
use copybook::wrap::wrap;

#[test]
fn test_wrapped_text_renders_as_traceable_rows() {
    let lines = wrap("hello world foo", 8).unwrap();
    let sheet = build_sheet(&lines, 1);

    // Three text rows, a rule row after each, one closing rule row
    assert_eq!(sheet.len(), 7);
    let text_rows = sheet
        .iter()
        .filter(|row| matches!(row, SheetLine::Text(_)))
        .count();
    assert_eq!(text_rows, 3);
    assert_eq!(sheet.last(), Some(&SheetLine::Blank));
}

#[test]
fn test_plain_text_rendering_matches_row_layout() {
    let lines = wrap("ab\ncd", 10).unwrap();
    let sheet = build_sheet(&lines, 2);
    assert_eq!(sheet_to_text(&sheet), "ab\n\n\ncd\n\n\n\n");
}

#[test]
fn test_empty_text_renders_nothing() {
    let lines = wrap("", 45).unwrap();
    assert!(build_sheet(&lines, 3).is_empty());
}

#[test]
fn test_blank_rows_scale_with_the_setting() {
    let lines = wrap("one two", 3).unwrap();
    for blanks in 0..5 {
        let sheet = build_sheet(&lines, blanks);
        assert_eq!(sheet.len(), lines.len() * (blanks + 1) + 1);
    }
}
