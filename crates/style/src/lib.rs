pub mod dimension;
pub mod error;
pub mod font;
pub mod presets;
pub mod stylesheet;
pub mod text;

pub use dimension::{Margins, PageSize};
pub use error::StyleParseError;
pub use font::{FontStyle, FontWeight};
pub use presets::{SKILL_PALETTE, names};
pub use stylesheet::{ElementStyle, PageLayout, Stylesheet};
pub use text::TextAlign;
