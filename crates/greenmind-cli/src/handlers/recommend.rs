use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use greenmind_engine::recommendations::{
    CATEGORIES, POTENTIAL_IMPACT, category_slugs, find_category,
};
use greenmind_types::RecommendationCategory;

pub fn handle(
    category: Option<String>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let selected: Vec<&RecommendationCategory> = match category.as_deref() {
        Some(slug) => match find_category(slug) {
            Some(found) => vec![found],
            None => anyhow::bail!(
                "Unknown category '{}'. Valid categories: {}",
                slug,
                category_slugs().join(", ")
            ),
        },
        None => CATEGORIES.iter().collect(),
    };

    let view_model =
        presenters::present_recommendations(&selected, POTENTIAL_IMPACT, category.is_some());
    ctx.render(view_model)
}
