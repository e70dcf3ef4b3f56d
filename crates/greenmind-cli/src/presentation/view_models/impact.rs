use greenmind_types::ImpactVerdict;
use serde::Serialize;
use std::fmt;

use super::CreateView;
use super::common::ViewOptions;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Result of a completed calculation. Figures are unrounded.
#[derive(Debug, Serialize)]
pub struct ImpactViewModel {
    pub model_id: String,
    pub model_name: String,
    pub prompt_words: u32,
    pub daily_usage: u32,
    pub tokens_per_prompt: f64,
    pub co2_grams: f64,
    pub water_liters: f64,
    pub efficiency: u8,
    pub efficiency_pct: u8,
    pub verdict: ImpactVerdict,
    pub verdict_message: String,
}

/// Calculator invoked before every input was supplied
#[derive(Debug, Serialize)]
pub struct CalculatorPendingViewModel {
    pub missing_fields: Vec<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ImpactViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::impact::ImpactView;
        Box::new(ImpactView::new(self, options))
    }
}

impl CreateView for CalculatorPendingViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::impact::CalculatorPendingView;
        Box::new(CalculatorPendingView::new(self, options))
    }
}
