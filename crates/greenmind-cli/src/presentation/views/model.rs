use std::fmt;

use owo_colors::Style;

use crate::presentation::formatters::{efficiency_bar, format_quantity, paint};
use crate::presentation::view_models::ModelListViewModel;
use crate::presentation::view_models::common::{ViewMode, ViewOptions};

// --------------------------------------------------------
// Model List View
// --------------------------------------------------------

pub struct ModelListView<'a> {
    data: &'a ModelListViewModel,
    options: ViewOptions,
}

impl<'a> ModelListView<'a> {
    pub fn new(data: &'a ModelListViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for model in &self.data.models {
            writeln!(f, "{}", model.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for model in &self.data.models {
            writeln!(f, "{} ({}) {}/10", model.id, model.name, model.efficiency)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(
            f,
            "{:<16} {:<16} {:>12} {:>14} {:>10}",
            "ID", "MODEL", "CO2 g/TOKEN", "WATER L/TOKEN", "EFFICIENCY"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        for model in &self.data.models {
            writeln!(
                f,
                "{} {:<16} {:>12} {:>14} {:>10}",
                paint(format!("{:<16}", model.id), Style::new().cyan(), color),
                model.name,
                format_quantity(model.co2_per_token),
                format_quantity(model.water_per_token),
                format!("{}/10", model.efficiency)
            )?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Token approximation: words × {}",
            self.data.token_ratio
        )?;
        writeln!(f)?;

        for model in &self.data.models {
            writeln!(f, "{} ({})", model.name, model.id)?;
            writeln!(f, "  CO2:        {} g/token", format_quantity(model.co2_per_token))?;
            writeln!(f, "  Water:      {} L/token", format_quantity(model.water_per_token))?;
            writeln!(
                f,
                "  Efficiency: {}/10 {} {}",
                model.efficiency,
                efficiency_bar(model.efficiency),
                model.grade
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ModelListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.models.is_empty() {
            if self.options.mode != ViewMode::Minimal {
                writeln!(f, "No models configured.")?;
            }
            return Ok(());
        }

        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
