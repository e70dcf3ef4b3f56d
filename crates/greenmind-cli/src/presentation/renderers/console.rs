use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::Style;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::presentation::formatters::paint;
use crate::presentation::view_models::common::{OutputFormat, ViewMode, ViewOptions};
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: ViewOptions,
}

impl ConsoleRenderer {
    /// Colors only when stdout is a terminal and `NO_COLOR` is unset
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        let enable_color =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self::with_options(format, ViewOptions::new(mode, enable_color))
    }

    pub fn with_options(format: OutputFormat, options: ViewOptions) -> Self {
        Self { format, options }
    }

    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            return Ok(json);
        }

        let color = self.options.enable_color;
        let minimal = self.options.mode == ViewMode::Minimal;
        let mut out = String::new();

        if let Some(badge) = result.badge.as_ref().filter(|_| !minimal) {
            writeln!(
                out,
                "{} {}",
                badge.icon(),
                paint(&badge.label, Style::new().bold(), color)
            )?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() && !minimal {
            writeln!(out)?;
            writeln!(out, "{}", paint("💡 Tips:", Style::new().yellow().bold(), color))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", paint(cmd, Style::new().cyan(), color))?;
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.render_to_string(&result)?);
        Ok(())
    }
}
