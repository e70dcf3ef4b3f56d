use crate::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CalculatorPendingViewModel, CommandResultViewModel, Guidance, ImpactViewModel, StatusBadge,
};
use greenmind_engine::{CalculatorField, TokenApproximation};
use greenmind_types::{ImpactResult, ImpactVerdict, ModelProfile, efficiency_fill_pct};

pub fn present_impact(
    profile: &ModelProfile,
    prompt_words: u32,
    daily_usage: u32,
    tokens: TokenApproximation,
    impact: ImpactResult,
) -> CommandResultViewModel<ImpactViewModel> {
    let verdict = ImpactVerdict::from_score(impact.efficiency);

    let content = ImpactViewModel {
        model_id: profile.id.clone(),
        model_name: profile.label().to_string(),
        prompt_words,
        daily_usage,
        tokens_per_prompt: tokens.tokens_for(prompt_words),
        co2_grams: impact.co2,
        water_liters: impact.water,
        efficiency: impact.efficiency,
        efficiency_pct: efficiency_fill_pct(impact.efficiency),
        verdict,
        verdict_message: verdict.message().to_string(),
    };

    let result = CommandResultViewModel::new(content);

    match verdict {
        ImpactVerdict::Efficient => result
            .with_badge(StatusBadge::success("Efficient choice"))
            .with_suggestion(Guidance::new("See how other models rank").with_command(cmd::COMPARE)),
        ImpactVerdict::Moderate | ImpactVerdict::HighImpact => {
            let label = if verdict == ImpactVerdict::Moderate {
                "Moderate impact"
            } else {
                "High impact"
            };
            result
                .with_badge(StatusBadge::warning(label))
                .with_suggestion(
                    Guidance::new("Find a model with lower emissions")
                        .with_command(cmd::COMPARE_BY_CO2),
                )
                .with_suggestion(
                    Guidance::new("Browse eco-friendly alternatives")
                        .with_command(fmt::recommend_category("eco-models")),
                )
        }
    }
}

pub fn present_calculator_pending(
    missing: &[CalculatorField],
) -> CommandResultViewModel<CalculatorPendingViewModel> {
    let content = CalculatorPendingViewModel {
        missing_fields: missing.iter().map(ToString::to_string).collect(),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::warning("Missing input"))
        .with_suggestion(Guidance::new("Example").with_command(cmd::ESTIMATE_EXAMPLE))
        .with_suggestion(Guidance::new("List valid model ids").with_command(cmd::MODELS))
}
