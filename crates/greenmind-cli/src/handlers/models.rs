use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use greenmind_runtime::Catalog;

pub fn handle(catalog: &Catalog, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let view_model =
        presenters::present_model_list(catalog.profiles(), catalog.token_approximation());
    ctx.render(view_model)
}
