use std::fmt;

use greenmind_types::ImpactLevel;
use owo_colors::Style;

use crate::presentation::formatters::paint;
use crate::presentation::view_models::common::{ViewMode, ViewOptions};
use crate::presentation::view_models::{RecommendationListViewModel, RecommendationViewModel};

fn impact_style(impact: ImpactLevel) -> Style {
    match impact {
        ImpactLevel::VeryHigh => Style::new().green().bold(),
        ImpactLevel::High => Style::new().green(),
        ImpactLevel::Medium => Style::new().yellow(),
    }
}

pub struct RecommendationListView<'a> {
    data: &'a RecommendationListViewModel,
    options: ViewOptions,
}

impl<'a> RecommendationListView<'a> {
    pub fn new(data: &'a RecommendationListViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for category in &self.data.categories {
            for item in &category.items {
                writeln!(f, "{}: {}", category.slug, item.title)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for category in &self.data.categories {
            writeln!(f, "{}", category.title)?;
            for item in &category.items {
                writeln!(f, "  - {} ({})", item.title, item.savings)?;
            }
        }
        Ok(())
    }

    fn render_item(&self, f: &mut fmt::Formatter, item: &RecommendationViewModel) -> fmt::Result {
        let color = self.options.enable_color;

        writeln!(f, "  • {}", paint(&item.title, Style::new().bold(), color))?;
        writeln!(f, "    {}", item.description)?;
        writeln!(
            f,
            "    Impact: {} | Difficulty: {} | Savings: {} | Time: {}",
            paint(item.impact, impact_style(item.impact), color),
            item.difficulty,
            item.savings,
            item.time_to_implement
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = self.options.enable_color;

        for (index, category) in self.data.categories.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "{} [{}]",
                paint(&category.title, Style::new().green().bold(), color),
                category.slug
            )?;
            for item in &category.items {
                self.render_item(f, item)?;
            }
        }

        let impact = &self.data.potential_impact;
        writeln!(f)?;
        writeln!(f, "Potential impact if every recommendation is applied:")?;
        writeln!(f, "  {}% CO₂ reduction", impact.co2_reduction_pct)?;
        writeln!(f, "  {}% water savings", impact.water_savings_pct)?;
        writeln!(f, "  {}% cost reduction", impact.cost_reduction_pct)
    }
}

impl<'a> fmt::Display for RecommendationListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}
