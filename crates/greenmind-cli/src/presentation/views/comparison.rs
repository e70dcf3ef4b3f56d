use std::fmt;

use greenmind_types::SortDirection;
use owo_colors::Style;

use crate::presentation::formatters::{efficiency_bar, format_quantity, paint};
use crate::presentation::view_models::ComparisonViewModel;
use crate::presentation::view_models::common::{ViewMode, ViewOptions};

const BEST_MARKER: &str = "★ Best Choice";

pub struct ComparisonView<'a> {
    data: &'a ComparisonViewModel,
    options: ViewOptions,
}

impl<'a> ComparisonView<'a> {
    pub fn new(data: &'a ComparisonViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn order_label(&self) -> &'static str {
        match self.data.direction {
            SortDirection::Ascending => "lowest first",
            SortDirection::Descending => "highest first",
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(f, "{}", entry.name)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(
                f,
                "{}. {} co2={}g water={}ml efficiency={}/10",
                entry.rank,
                entry.name,
                format_quantity(entry.co2_grams),
                format_quantity(entry.water_ml),
                entry.efficiency
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(
            f,
            "Sorted by {} ({}), per 1000 tokens",
            self.data.sort_key,
            self.order_label()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>2}  {:<14} {:>7} {:>9} {:>16}  {:<9} {:<11}",
            "#", "MODEL", "CO2 g", "WATER ml", "EFFICIENCY", "COST", "PERFORMANCE"
        )?;
        writeln!(f, "{}", "-".repeat(76))?;

        for entry in &self.data.entries {
            let score = format!("{}/10 {}", entry.efficiency, entry.grade);
            write!(
                f,
                "{:>2}  {} {:>7} {:>9} {:>16}  {:<9} {:<11}",
                entry.rank,
                paint(format!("{:<14}", entry.name), Style::new().bold(), color),
                format_quantity(entry.co2_grams),
                format_quantity(entry.water_ml),
                score,
                entry.cost.to_string(),
                entry.performance.to_string()
            )?;
            if entry.best_choice {
                write!(f, " {}", paint(BEST_MARKER, Style::new().green(), color))?;
            }
            writeln!(f)?;
        }

        self.render_export(f)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(
            f,
            "Sorted by {} ({}), per 1000 tokens",
            self.data.sort_key,
            self.order_label()
        )?;

        for entry in &self.data.entries {
            writeln!(f)?;
            write!(
                f,
                "{}. {}",
                entry.rank,
                paint(&entry.name, Style::new().bold(), color)
            )?;
            if entry.best_choice {
                write!(f, "  {}", paint(BEST_MARKER, Style::new().green(), color))?;
            }
            writeln!(f)?;
            writeln!(f, "   CO₂:         {}g", format_quantity(entry.co2_grams))?;
            writeln!(f, "   Water:       {}ml", format_quantity(entry.water_ml))?;
            writeln!(
                f,
                "   Efficiency:  {}/10 {} {}",
                entry.efficiency,
                efficiency_bar(entry.efficiency),
                entry.grade
            )?;
            writeln!(f, "   Cost:        {}", entry.cost)?;
            writeln!(f, "   Performance: {}", entry.performance)?;
        }

        self.render_export(f)
    }

    fn render_export(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(path) = &self.data.exported_to {
            writeln!(f)?;
            writeln!(f, "Exported to {}", path.display())?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ComparisonView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.entries.is_empty() {
            if self.options.mode != ViewMode::Minimal {
                writeln!(f, "No comparison data configured.")?;
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
