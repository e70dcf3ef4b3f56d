use crate::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, RecommendationCategoryViewModel,
    RecommendationListViewModel, RecommendationViewModel, StatusBadge,
};
use greenmind_types::{PotentialImpact, RecommendationCategory};

pub fn present_recommendations(
    categories: &[&RecommendationCategory],
    potential_impact: PotentialImpact,
    filtered: bool,
) -> CommandResultViewModel<RecommendationListViewModel> {
    let categories: Vec<RecommendationCategoryViewModel> = categories
        .iter()
        .map(|category| RecommendationCategoryViewModel {
            slug: category.slug.to_string(),
            title: category.title.to_string(),
            items: category
                .items
                .iter()
                .map(|item| RecommendationViewModel {
                    title: item.title.to_string(),
                    description: item.description.to_string(),
                    impact: item.impact,
                    difficulty: item.difficulty,
                    savings: item.savings.to_string(),
                    time_to_implement: item.time_to_implement.to_string(),
                })
                .collect(),
        })
        .collect();

    let item_count: usize = categories.iter().map(|c| c.items.len()).sum();
    let content = RecommendationListViewModel {
        categories,
        potential_impact,
    };

    let result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("{} recommendation(s)", item_count)));

    if filtered {
        result.with_suggestion(Guidance::new("See every category").with_command(cmd::RECOMMEND))
    } else {
        result.with_suggestion(
            Guidance::new("Compare models by emissions").with_command(cmd::COMPARE_BY_CO2),
        )
    }
}
