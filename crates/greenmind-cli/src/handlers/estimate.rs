use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use greenmind_engine::CalculatorInput;
use greenmind_runtime::Catalog;

pub fn handle(
    catalog: &Catalog,
    input: CalculatorInput,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let (Some(model_id), Some(words), Some(usage)) =
        (input.model_id(), input.prompt_words, input.daily_usage)
    else {
        let missing = input.missing_fields();
        log::debug!("estimate: waiting on {} field(s)", missing.len());
        return ctx.render(presenters::present_calculator_pending(&missing));
    };

    let estimator = catalog.estimator();
    let (Some(profile), Some(impact)) = (estimator.profile(model_id), input.submit(&estimator))
    else {
        anyhow::bail!(
            "Unknown model '{}'. Valid models: {}",
            model_id,
            catalog.model_ids().join(", ")
        );
    };

    let view_model = presenters::present_impact(
        profile,
        words,
        usage,
        estimator.token_approximation(),
        impact,
    );
    ctx.render(view_model)
}
