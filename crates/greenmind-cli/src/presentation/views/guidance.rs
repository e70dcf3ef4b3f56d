use std::fmt;

use owo_colors::Style;

use crate::presentation::formatters::paint;
use crate::presentation::view_models::GuidanceViewModel;
use crate::presentation::view_models::common::ViewOptions;

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    options: ViewOptions,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(
            f,
            "{} - AI environmental impact analyzer",
            paint("greenmind", Style::new().green().bold(), color)
        )?;
        writeln!(f)?;
        writeln!(f, "Quick commands:")?;
        writeln!(f, "  greenmind models                                   # Models and per-token coefficients")?;
        writeln!(f, "  greenmind estimate --model ID --words N --usage N  # Daily CO2 and water estimate")?;
        writeln!(f, "  greenmind compare --sort efficiency|co2|water      # Rank models")?;
        writeln!(f, "  greenmind recommend                                # Ways to cut your footprint")?;
        writeln!(f)?;

        match (&self.data.config_path, self.data.config_exists) {
            (Some(path), true) => writeln!(f, "Using config: {}", path)?,
            (Some(path), false) => {
                writeln!(f, "Using built-in tables (no config at {})", path)?;
                writeln!(f, "  greenmind init                                     # Write an editable copy")?;
            }
            (None, _) => writeln!(f, "Using built-in tables")?,
        }

        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  greenmind --help")
    }
}
