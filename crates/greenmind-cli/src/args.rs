use crate::types::{LogLevel, OutputFormat, SortBy};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "greenmind")]
#[command(about = "Estimate and compare the environmental footprint of AI models", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Configuration file (default: $GREENMIND_CONFIG or the user config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the models the calculator knows about
    Models {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Estimate daily CO2 and water use for a model
    Estimate {
        #[arg(long, help = "Model id (see `greenmind models`)")]
        model: Option<String>,

        #[arg(
            long,
            help = "Average prompt length in words",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        words: Option<u32>,

        #[arg(
            long,
            help = "Prompts sent per day",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        usage: Option<u32>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Rank models by efficiency, CO2 or water
    Compare {
        #[arg(long, default_value = "efficiency")]
        sort: SortBy,

        #[arg(long, help = "Also write the ranked table to a CSV file")]
        export: Option<PathBuf>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Show ways to reduce AI footprint
    Recommend {
        #[arg(long, help = "Only show one category (eco-models, usage, alternatives)")]
        category: Option<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Write an editable config file containing the built-in tables
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (names only, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per item)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
