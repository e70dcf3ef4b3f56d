use greenmind_types::{CostTier, EfficiencyGrade, PerformanceTier, SortDirection, SortKey};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;
use super::common::ViewOptions;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ComparisonViewModel {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    pub entries: Vec<ComparisonEntryViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonEntryViewModel {
    /// 1-based position after ranking
    pub rank: usize,
    pub name: String,
    /// Grams per 1000 tokens
    pub co2_grams: f64,
    /// Millilitres per 1000 tokens
    pub water_ml: f64,
    pub efficiency: u8,
    pub grade: EfficiencyGrade,
    pub cost: CostTier,
    pub performance: PerformanceTier,
    pub best_choice: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ComparisonViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::comparison::ComparisonView;
        Box::new(ComparisonView::new(self, options))
    }
}
