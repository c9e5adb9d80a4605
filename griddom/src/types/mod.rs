mod enums;
mod style;

pub use enums::{Cursor, Role, Size};
pub use style::Style;
