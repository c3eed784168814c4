//! Line rendering: templates decide the columns, the color formatter tints console lines.

mod color;
mod format;

pub use color::ColorFormatter;
pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
