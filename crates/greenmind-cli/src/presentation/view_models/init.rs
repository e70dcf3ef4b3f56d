use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;
use super::common::ViewOptions;

#[derive(Debug, Serialize)]
pub struct InitViewModel {
    pub config_path: PathBuf,
    pub overwritten: bool,
    pub model_count: usize,
    pub comparison_count: usize,
    pub token_ratio: f64,
}

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitView;
        Box::new(InitView::new(self, options))
    }
}
