pub mod comparison;
pub mod error;
pub mod model;
pub mod rating;
pub mod recommendation;

pub use comparison::*;
pub use error::{Error, Result};
pub use model::*;
pub use rating::*;
pub use recommendation::*;
