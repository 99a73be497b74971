//! Domain entities - Core business objects with identity

mod category;
mod question;

pub use category::{
    sort_categories, Category, CategoryStyle, Fill, FillType, DEFAULT_BORDER_COLOR,
    DEFAULT_BORDER_WIDTH, DEFAULT_GRADIENT_ANGLE, DEFAULT_TEXT_COLOR,
};
pub use question::Question;
