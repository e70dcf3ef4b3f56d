// Command surface for the footprint tables.
//
// Handlers own no logic beyond wiring: the catalog comes from greenmind-runtime,
// calculations from greenmind-engine, and everything printed goes through the
// presentation layer (presenter -> view model -> renderer).

mod args;
mod commands;
mod handlers;
mod hints;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ViewModeArgs};
pub use commands::run;
pub use logging::init_logging;
