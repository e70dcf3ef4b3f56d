use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::Result;
use greenmind_runtime::{Config, Error};
use std::path::Path;

pub fn handle(config_path: &Path, force: bool, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format, &ViewModeArgs::default());

    let overwritten = config_path.exists();
    let config = Config::template();

    match config.create_at(config_path, force) {
        Ok(()) => {}
        Err(Error::AlreadyExists(path)) => anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite it",
            path.display()
        ),
        Err(err) => return Err(err.into()),
    }

    log::debug!("init: wrote template to {}", config_path.display());
    ctx.render(presenters::present_init(config_path, &config, overwritten))
}
