mod fonts;
mod settings;

pub use fonts::{FontSpec, FONTS};
pub use settings::Settings;
