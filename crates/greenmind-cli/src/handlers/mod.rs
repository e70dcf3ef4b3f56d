mod context;

pub mod compare;
pub mod estimate;
pub mod guidance;
pub mod init;
pub mod models;
pub mod recommend;

pub use context::HandlerContext;
