mod enums;
mod style;

pub use enums::{Display, Tag};
pub use style::Style;
