use crate::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ModelEntryViewModel, ModelListViewModel, StatusBadge,
};
use greenmind_engine::TokenApproximation;
use greenmind_types::{EfficiencyGrade, ModelProfile};

pub fn present_model_list(
    profiles: &[ModelProfile],
    tokens: TokenApproximation,
) -> CommandResultViewModel<ModelListViewModel> {
    let models = profiles
        .iter()
        .map(|profile| ModelEntryViewModel {
            id: profile.id.clone(),
            name: profile.label().to_string(),
            co2_per_token: profile.co2_per_token,
            water_per_token: profile.water_per_token,
            efficiency: profile.efficiency,
            grade: EfficiencyGrade::from_score(profile.efficiency),
        })
        .collect();

    let content = ModelListViewModel {
        token_ratio: tokens.ratio(),
        models,
    };

    let result = CommandResultViewModel::new(content);

    match profiles.first() {
        None => result
            .with_badge(StatusBadge::info("No models configured"))
            .with_suggestion(
                Guidance::new("Write a config file with the built-in tables").with_command(cmd::INIT),
            ),
        Some(first) => result
            .with_badge(StatusBadge::success(format!("{} model(s)", profiles.len())))
            .with_suggestion(
                Guidance::new("Estimate a model's daily footprint")
                    .with_command(fmt::estimate_for(&first.id)),
            ),
    }
}
