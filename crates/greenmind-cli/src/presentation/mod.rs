//! # Presentation Layer
//!
//! Everything the CLI prints flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> stdout
//!                   (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** `co2_grams: 0.65`, never `"0.65g"`. JSON output is an API.
//! * **ViewMode is density, not shape.** Minimal = names/ids only, Compact = one line per item,
//!   Standard = tables (default), Verbose = every field.
//! * **JSON ignores ViewMode.** `--format json` always dumps the complete envelope.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Pick a badge or suggest a next command | `presenters/` |
//! | Change layout or colors | `views/` |
//! | Format a number as `0.65g` | `formatters/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode, ViewOptions},
};
