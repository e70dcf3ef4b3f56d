pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::Catalog;
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
