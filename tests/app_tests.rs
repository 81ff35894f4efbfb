use copybook::app::{App, InputMode};
use copybook::config::Settings;
use copybook::sheet::SheetLine;

fn app_with_text(text: &str) -> App {
    let mut app = App::new(Settings::default());
    app.text = text.to_string();
    app.regenerate();
    app
}

#[test]
fn test_app_creation() {
    let app = App::new(Settings::default());
    assert_eq!(app.text, "");
    assert!(app.wrapped.is_empty());
    assert!(app.sheet.is_empty());
    assert_eq!(app.scroll, 0);
    assert!(matches!(app.input_mode, InputMode::Normal));
    assert!(!app.is_modified);
    assert_eq!(app.settings, Settings::default());
}

#[test]
fn test_regenerate_wraps_text() {
    let mut app = App::new(Settings::default());
    app.settings.max_characters = 8;
    app.text = "hello world foo".to_string();
    app.regenerate();
    assert_eq!(app.wrapped, vec!["hello", "world", "foo"]);
}

#[test]
fn test_regenerate_trims_surrounding_whitespace() {
    let app = app_with_text("  hi  \n");
    assert_eq!(app.wrapped, vec!["hi"]);
}

#[test]
fn test_sheet_follows_blank_lines_setting() {
    let mut app = App::new(Settings::default());
    app.settings.blank_lines = 2;
    app.text = "hi".to_string();
    app.regenerate();
    assert_eq!(
        app.sheet,
        vec![
            SheetLine::Text("hi".to_string()),
            SheetLine::Blank,
            SheetLine::Blank,
            SheetLine::Blank,
        ]
    );
}

#[test]
fn test_set_width_command_rewraps() {
    let mut app = app_with_text("hello world foo");
    assert_eq!(app.wrapped.len(), 1);

    app.command_buffer = "set width=8".to_string();
    let quit = app.execute_command();

    assert!(!quit);
    assert_eq!(app.settings.max_characters, 8);
    assert_eq!(app.wrapped, vec!["hello", "world", "foo"]);
}

#[test]
fn test_set_command_rejects_zero_width() {
    let mut app = App::new(Settings::default());
    app.command_buffer = "set width=0".to_string();
    app.execute_command();
    assert_eq!(app.settings.max_characters, 45);
    assert!(app.status_message.contains("at least 1"));
}

#[test]
fn test_set_command_rejects_unknown_option() {
    let mut app = App::new(Settings::default());
    app.command_buffer = "set margin=3".to_string();
    app.execute_command();
    assert!(app.status_message.contains("Unknown option"));
}

#[test]
fn test_font_command() {
    let mut app = App::new(Settings::default());
    app.command_buffer = "font Rochester".to_string();
    app.execute_command();
    assert_eq!(app.settings.font_family, "Rochester");

    app.command_buffer = "font Wingdings".to_string();
    app.execute_command();
    assert_eq!(app.settings.font_family, "Rochester");
    assert!(app.status_message.contains("Unknown font"));
}

#[test]
fn test_quit_command_guards_unsaved_changes() {
    let mut app = App::new(Settings::default());
    app.is_modified = true;

    app.command_buffer = "q".to_string();
    assert!(!app.execute_command());
    assert!(app.status_message.contains("No write"));

    app.command_buffer = "q!".to_string();
    assert!(app.execute_command());
}

#[test]
fn test_quit_command_with_clean_buffer() {
    let mut app = App::new(Settings::default());
    app.command_buffer = "q".to_string();
    assert!(app.execute_command());
}

#[test]
fn test_unknown_command_reports() {
    let mut app = App::new(Settings::default());
    app.command_buffer = "frobnicate".to_string();
    assert!(!app.execute_command());
    assert!(app.status_message.contains("Not a command"));
}

#[test]
fn test_save_without_file_name_fails() {
    let mut app = app_with_text("hi");
    assert!(app.save_file().is_err());
}

#[test]
fn test_insert_and_backspace() {
    let mut app = App::new(Settings::default());
    app.insert_char('h');
    app.insert_char('i');
    assert_eq!(app.text, "hi");
    assert_eq!(app.cursor_col, 2);
    assert_eq!(app.wrapped, vec!["hi"]);

    app.insert_newline();
    app.insert_char('x');
    assert_eq!(app.text, "hi\nx");
    assert_eq!(app.cursor_line, 1);
    assert_eq!(app.cursor_col, 1);

    app.backspace();
    assert_eq!(app.text, "hi\n");
    // Trailing newline trims away before wrapping
    assert_eq!(app.wrapped, vec!["hi"]);

    app.backspace();
    assert_eq!(app.text, "hi");
    assert_eq!(app.cursor_line, 0);
    assert_eq!(app.cursor_col, 2);
}

#[test]
fn test_insert_text_with_newlines_moves_cursor() {
    let mut app = App::new(Settings::default());
    app.insert_text("ab\ncd");
    assert_eq!(app.text, "ab\ncd");
    assert_eq!(app.cursor_line, 1);
    assert_eq!(app.cursor_col, 2);
}

#[test]
fn test_insert_text_mid_line() {
    let mut app = app_with_text("hello");
    app.cursor_col = 2;
    app.insert_text("XY");
    assert_eq!(app.text, "heXYllo");
    assert_eq!(app.cursor_col, 4);
}

#[test]
fn test_delete_char_joins_lines() {
    let mut app = app_with_text("ab\ncd");
    app.cursor_line = 0;
    app.cursor_col = 2;
    app.delete_char();
    assert_eq!(app.text, "abcd");
}

#[test]
fn test_cursor_movement_clamps_to_line_ends() {
    let mut app = app_with_text("ab\nlonger");
    app.cursor_line = 1;
    app.cursor_col = 6;
    app.move_cursor_up();
    assert_eq!(app.cursor_line, 0);
    assert_eq!(app.cursor_col, 2);

    app.move_cursor_right();
    assert_eq!((app.cursor_line, app.cursor_col), (1, 0));
    app.move_cursor_left();
    assert_eq!((app.cursor_line, app.cursor_col), (0, 2));
}

#[test]
fn test_vim_gg_scrolls_to_top() {
    let mut app = App::new(Settings::default());
    app.max_scroll = 10;
    app.scroll = 5;
    assert!(!app.handle_vim_input('g'));
    assert!(app.handle_vim_input('g'));
    assert_eq!(app.scroll, 0);
    assert!(app.vim_buffer.is_empty());
}

#[test]
fn test_scroll_bounds() {
    let mut app = App::new(Settings::default());
    app.max_scroll = 3;
    app.scroll_down(10);
    assert_eq!(app.scroll, 3);
    app.scroll_up(1);
    assert_eq!(app.scroll, 2);
    app.scroll_to_top();
    assert_eq!(app.scroll, 0);
    app.scroll_to_bottom();
    assert_eq!(app.scroll, 3);
}

#[test]
fn test_font_cycle_walks_the_table() {
    let mut app = App::new(Settings::default());
    assert_eq!(app.settings.font_family, "HomemadeApple");
    app.cycle_font();
    assert_eq!(app.settings.font_family, "Dawning_of_a_New_Day");
    app.cycle_font();
    app.cycle_font();
    app.cycle_font();
    assert_eq!(app.settings.font_family, "HomemadeApple");
}

#[test]
fn test_adjustments_clamp() {
    let mut app = App::new(Settings::default());
    app.adjust_blank_lines(-5);
    assert_eq!(app.settings.blank_lines, 0);
    app.adjust_max_characters(-100);
    assert_eq!(app.settings.max_characters, 1);
    app.adjust_darkness(50);
    assert_eq!(app.settings.darkness, 100);
    app.adjust_darkness(-200);
    assert_eq!(app.settings.darkness, 1);
    app.adjust_word_spacing(-100);
    assert_eq!(app.settings.word_spacing, 0);
}

#[test]
fn test_adjusting_width_rewraps_immediately() {
    let mut app = app_with_text("aaa bbb");
    app.adjust_max_characters(-41); // 45 -> 4
    assert_eq!(app.wrapped, vec!["aaa", "bbb"]);
}

#[test]
fn test_export_pdf_with_empty_sheet_fails() {
    let app = App::new(Settings::default());
    assert!(app.export_pdf(None).is_err());
}
