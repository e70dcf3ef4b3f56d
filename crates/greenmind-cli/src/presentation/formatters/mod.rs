pub mod bar;
pub mod number;
pub mod style;

pub use bar::efficiency_bar;
pub use number::{format_grams, format_liters, format_quantity, format_tokens};
pub use style::paint;
