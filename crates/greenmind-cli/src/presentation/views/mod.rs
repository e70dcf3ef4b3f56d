pub mod comparison;
pub mod guidance;
pub mod impact;
pub mod init;
pub mod model;
pub mod recommendation;
