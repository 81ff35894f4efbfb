use printpdf::BuiltinFont;

/// One handwriting font preset. Cosmetic only: presets never influence how
/// text is wrapped, only how a worksheet is drawn.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub name: &'static str,
    /// Text size on paper, in points (presets were authored at a 12pt em).
    pub size_pt: f32,
    /// Row advance as a multiple of `size_pt`.
    pub line_height: f32,
    /// Points shaved off the advance between a text row and its rule rows,
    /// pulling the first rule up under the written line.
    pub tighten_pt: f32,
    /// Stand-in face for PDF output; the PDF builtins need no embedding.
    pub builtin: BuiltinFont,
}

pub const FONTS: [FontSpec; 4] = [
    FontSpec {
        name: "HomemadeApple",
        size_pt: 18.0,
        line_height: 1.8,
        tighten_pt: 11.25,
        builtin: BuiltinFont::TimesItalic,
    },
    FontSpec {
        name: "Dawning_of_a_New_Day",
        size_pt: 24.0,
        line_height: 1.1,
        tighten_pt: 4.5,
        builtin: BuiltinFont::HelveticaOblique,
    },
    FontSpec {
        name: "AlexBrush",
        size_pt: 24.0,
        line_height: 1.1,
        tighten_pt: 7.5,
        builtin: BuiltinFont::TimesItalic,
    },
    FontSpec {
        name: "Rochester",
        size_pt: 24.0,
        line_height: 1.05,
        tighten_pt: 2.25,
        builtin: BuiltinFont::TimesRoman,
    },
];

impl FontSpec {
    pub fn by_name(name: &str) -> Option<&'static FontSpec> {
        FONTS.iter().find(|f| f.name == name)
    }

    /// Preset used when a configured name matches nothing.
    pub fn fallback() -> &'static FontSpec {
        &FONTS[0]
    }

    /// Row advance in points for one worksheet row.
    pub fn advance_pt(&self) -> f32 {
        self.size_pt * self.line_height
    }
}
