//! Turns resume and cover letter documents into content blocks, and content
//! blocks into positioned page elements.

pub mod blocks;
pub mod cover_letter;
pub mod elements;
pub mod engine;
pub mod metrics;
pub mod resume;
pub mod skills;
pub mod style;
pub mod wrap;

pub use self::blocks::{ContentBlock, GridBlock, GridCell, GridRow, RuleBlock, TextBlock};
pub use self::cover_letter::{LetterHeader, cover_letter_blocks};
pub use self::elements::{LayoutElement, Page, PositionedElement, TextElement, TextLine};
pub use self::engine::{LayoutEngine, paginate};
pub use self::metrics::FontFace;
pub use self::resume::resume_blocks;
pub use self::skills::pack_skill_tags;
pub use self::style::ComputedStyle;
