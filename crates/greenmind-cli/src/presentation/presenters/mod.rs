pub mod comparison;
pub mod guidance;
pub mod impact;
pub mod init;
pub mod model;
pub mod recommendation;

pub use comparison::present_comparison;
pub use guidance::present_guidance;
pub use impact::{present_calculator_pending, present_impact};
pub use init::present_init;
pub use model::present_model_list;
pub use recommendation::present_recommendations;
