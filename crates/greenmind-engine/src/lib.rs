// Engine module - pure computations over footprint tables
// Nothing here performs I/O; tables are injected by the caller (runtime catalog or tests)

pub mod calculator;
pub mod catalog;
pub mod estimator;
pub mod ranker;
pub mod recommendations;

pub use calculator::{CalculatorField, CalculatorInput};
pub use estimator::{ImpactEstimator, TokenApproximation};
pub use ranker::{ComparisonRanker, best_choice, rank};
