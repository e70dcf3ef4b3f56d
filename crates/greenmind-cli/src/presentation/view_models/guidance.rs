use serde::Serialize;
use std::fmt;

use super::CreateView;
use super::common::ViewOptions;

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: Option<String>,
    pub config_exists: bool,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::guidance::GuidanceView;
        Box::new(GuidanceView::new(self, options))
    }
}
