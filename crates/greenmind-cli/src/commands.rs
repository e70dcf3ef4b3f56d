use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use greenmind_engine::CalculatorInput;
use greenmind_runtime::{Catalog, Config, resolve_config_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        // Guidance still works when no config location can be determined
        let config_path = resolve_config_path(cli.config.as_deref()).ok();
        return handlers::guidance::handle(config_path.as_deref(), cli.format);
    };

    let config_path = resolve_config_path(cli.config.as_deref())?;
    log::debug!("config path: {}", config_path.display());

    match command {
        Commands::Init { force } => {
            log::debug!("dispatch: init (force={})", force);
            handlers::init::handle(&config_path, force, cli.format)
        }

        Commands::Models { view_mode } => {
            log::debug!("dispatch: models");
            let catalog = load_catalog(&config_path)?;
            handlers::models::handle(&catalog, cli.format, &view_mode)
        }

        Commands::Estimate {
            model,
            words,
            usage,
            view_mode,
        } => {
            log::debug!("dispatch: estimate");
            let catalog = load_catalog(&config_path)?;
            let input = CalculatorInput::new(model, words, usage);
            handlers::estimate::handle(&catalog, input, cli.format, &view_mode)
        }

        Commands::Compare {
            sort,
            export,
            view_mode,
        } => {
            log::debug!("dispatch: compare --sort {}", sort);
            let catalog = load_catalog(&config_path)?;
            handlers::compare::handle(&catalog, sort.into(), export, cli.format, &view_mode)
        }

        Commands::Recommend {
            category,
            view_mode,
        } => {
            log::debug!("dispatch: recommend");
            handlers::recommend::handle(category, cli.format, &view_mode)
        }
    }
}

fn load_catalog(config_path: &Path) -> Result<Catalog> {
    let config = Config::load_from(config_path)?;
    Ok(Catalog::from_config(&config)?)
}
