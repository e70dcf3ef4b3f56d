use greenmind_types::{Difficulty, ImpactLevel, PotentialImpact};
use serde::Serialize;
use std::fmt;

use super::CreateView;
use super::common::ViewOptions;

#[derive(Debug, Serialize)]
pub struct RecommendationListViewModel {
    pub categories: Vec<RecommendationCategoryViewModel>,
    pub potential_impact: PotentialImpact,
}

#[derive(Debug, Serialize)]
pub struct RecommendationCategoryViewModel {
    pub slug: String,
    pub title: String,
    pub items: Vec<RecommendationViewModel>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationViewModel {
    pub title: String,
    pub description: String,
    pub impact: ImpactLevel,
    pub difficulty: Difficulty,
    pub savings: String,
    pub time_to_implement: String,
}

impl CreateView for RecommendationListViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::recommendation::RecommendationListView;
        Box::new(RecommendationListView::new(self, options))
    }
}
