pub mod common;
pub mod comparison;
pub mod guidance;
pub mod impact;
pub mod init;
pub mod model;
pub mod recommendation;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use comparison::{ComparisonEntryViewModel, ComparisonViewModel};
pub use guidance::GuidanceViewModel;
pub use impact::{CalculatorPendingViewModel, ImpactViewModel};
pub use init::InitViewModel;
pub use model::{ModelEntryViewModel, ModelListViewModel};
pub use recommendation::{
    RecommendationCategoryViewModel, RecommendationListViewModel, RecommendationViewModel,
};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to the view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, options: common::ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
