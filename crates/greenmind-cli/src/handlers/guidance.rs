use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format, &ViewModeArgs::default());
    ctx.render(presenters::present_guidance(config_path))
}
