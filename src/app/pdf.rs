use super::App;
use crate::config::FontSpec;
use crate::sheet::SheetLine;
use printpdf::*;
use std::fs;
use std::path::PathBuf;

const MM_PER_PT: f32 = 0.352_778;

impl App {
    /// Export the current worksheet to a paginated PDF.
    pub fn export_pdf(&self, path: Option<PathBuf>) -> Result<String, String> {
        if self.sheet.is_empty() {
            return Err("Nothing to export".to_string());
        }

        let pdf_path = path.unwrap_or_else(|| self.default_pdf_path());
        let font = self.settings.font();

        let mut doc = PdfDocument::new("Handwriting Worksheet");

        // A4 portrait
        let page_width = Mm(210.0);
        let page_height = Mm(297.0);
        let margin_left = Mm(20.0);
        let margin_top = Mm(20.0);

        let row_advance = Mm(font.advance_pt() * MM_PER_PT);
        // A text row sits tighter on its rule rows than rule rows on each other
        let text_advance = Mm((font.advance_pt() - font.tighten_pt) * MM_PER_PT);

        // Ink grey from darkness: 100 is full black
        let level = 1.0 - f32::from(self.settings.darkness) / 100.0;
        let ink = Color::Rgb(Rgb::new(level, level, level, None));
        let rule_grey = Color::Rgb(Rgb::new(0.78, 0.78, 0.78, None));
        let rule_text = "_".repeat(self.settings.max_characters);

        let mut all_pages: Vec<PdfPage> = Vec::new();
        let mut current_page_ops: Vec<Op> = Vec::new();
        let mut current_y = page_height - margin_top;

        for row in &self.sheet {
            if current_y < Mm(30.0) {
                let page = PdfPage::new(page_width, page_height, current_page_ops.clone());
                all_pages.push(page);
                current_page_ops.clear();
                current_y = page_height - margin_top;
            }

            match row {
                SheetLine::Text(line) => {
                    if !line.is_empty() {
                        write_row(
                            &mut current_page_ops,
                            font,
                            &ink,
                            Point::new(margin_left, current_y),
                            spaced_items(line, self.settings.word_spacing, font),
                        );
                    }
                    current_y = current_y - text_advance;
                }
                SheetLine::Blank => {
                    write_row(
                        &mut current_page_ops,
                        font,
                        &rule_grey,
                        Point::new(margin_left, current_y),
                        vec![TextItem::Text(rule_text.clone())],
                    );
                    current_y = current_y - row_advance;
                }
            }
        }

        if !current_page_ops.is_empty() {
            let page = PdfPage::new(page_width, page_height, current_page_ops);
            all_pages.push(page);
        }

        let mut _warnings = Vec::new();
        let pdf_bytes = doc
            .with_pages(all_pages)
            .save(&PdfSaveOptions::default(), &mut _warnings);

        fs::write(&pdf_path, pdf_bytes)
            .map_err(|e| format!("Failed to write PDF file: {}", e))?;

        Ok(pdf_path.to_string_lossy().to_string())
    }

    fn default_pdf_path(&self) -> PathBuf {
        if let Some(current_path) = &self.file_path {
            current_path.with_extension("pdf")
        } else {
            let stamp = chrono::Local::now().format("%Y%m%d");
            PathBuf::from(format!("worksheet-{}.pdf", stamp))
        }
    }
}

fn write_row(ops: &mut Vec<Op>, font: &FontSpec, color: &Color, pos: Point, items: Vec<TextItem>) {
    ops.push(Op::SaveGraphicsState);
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor { pos });
    ops.push(Op::SetFontSizeBuiltinFont {
        size: Pt(font.size_pt),
        font: font.builtin.clone(),
    });
    ops.push(Op::SetFillColor { col: color.clone() });
    ops.push(Op::WriteTextBuiltinFont {
        items,
        font: font.builtin.clone(),
    });
    ops.push(Op::EndTextSection);
    ops.push(Op::RestoreGraphicsState);
}

/// Build the text items for one line, widening the gap after each space by
/// the word-spacing setting. TJ offsets count thousandths of the font size;
/// negative values push the following glyphs right.
fn spaced_items(line: &str, word_spacing: usize, font: &FontSpec) -> Vec<TextItem> {
    let extra_pt = word_spacing as f32 * 0.75; // CSS px at 96dpi to pt
    if word_spacing == 0 {
        return vec![TextItem::Text(line.to_string())];
    }
    let offset = -(extra_pt * 1000.0 / font.size_pt);

    let words: Vec<&str> = line.split(' ').collect();
    let mut items = Vec::with_capacity(words.len() * 2);
    for (i, word) in words.iter().enumerate() {
        if i + 1 < words.len() {
            items.push(TextItem::Text(format!("{} ", word)));
            items.push(TextItem::Offset(offset));
        } else {
            items.push(TextItem::Text((*word).to_string()));
        }
    }
    items
}
