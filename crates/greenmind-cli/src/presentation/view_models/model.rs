use greenmind_types::EfficiencyGrade;
use serde::Serialize;
use std::fmt;

use super::CreateView;
use super::common::ViewOptions;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ModelListViewModel {
    pub token_ratio: f64,
    pub models: Vec<ModelEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ModelEntryViewModel {
    pub id: String,
    pub name: String,
    /// Grams per token
    pub co2_per_token: f64,
    /// Liters per token
    pub water_per_token: f64,
    pub efficiency: u8,
    pub grade: EfficiencyGrade,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ModelListViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::model::ModelListView;
        Box::new(ModelListView::new(self, options))
    }
}
