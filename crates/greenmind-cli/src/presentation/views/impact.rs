use std::fmt;

use greenmind_types::ImpactVerdict;
use owo_colors::Style;

use crate::presentation::formatters::{
    efficiency_bar, format_grams, format_liters, format_tokens, paint,
};
use crate::presentation::view_models::common::{ViewMode, ViewOptions};
use crate::presentation::view_models::{CalculatorPendingViewModel, ImpactViewModel};

fn verdict_style(verdict: ImpactVerdict) -> Style {
    match verdict {
        ImpactVerdict::Efficient => Style::new().green(),
        ImpactVerdict::Moderate => Style::new().yellow(),
        ImpactVerdict::HighImpact => Style::new().red(),
    }
}

fn verdict_icon(verdict: ImpactVerdict) -> &'static str {
    match verdict {
        ImpactVerdict::Efficient => "🌱",
        ImpactVerdict::Moderate => "⚠️",
        ImpactVerdict::HighImpact => "🔴",
    }
}

// --------------------------------------------------------
// Impact View
// --------------------------------------------------------

pub struct ImpactView<'a> {
    data: &'a ImpactViewModel,
    options: ViewOptions,
}

impl<'a> ImpactView<'a> {
    pub fn new(data: &'a ImpactViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{} {} {}/10",
            format_grams(d.co2_grams),
            format_liters(d.water_liters),
            d.efficiency
        )
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            "{}: {} CO₂, {} water, efficiency {}/10",
            d.model_name,
            format_grams(d.co2_grams),
            format_liters(d.water_liters),
            d.efficiency
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        let color = self.options.enable_color;
        let style = verdict_style(d.verdict);

        writeln!(
            f,
            "{} ({})",
            paint(&d.model_name, Style::new().bold(), color),
            d.model_id
        )?;
        writeln!(
            f,
            "{} words × {} prompts/day ≈ {} tokens per prompt",
            d.prompt_words,
            d.daily_usage,
            format_tokens(d.tokens_per_prompt)
        )?;
        writeln!(f)?;
        writeln!(f, "Daily environmental footprint")?;
        writeln!(f, "  CO₂ Emissions   {}", format_grams(d.co2_grams))?;
        writeln!(f, "  Water Usage     {}", format_liters(d.water_liters))?;
        writeln!(f)?;
        writeln!(
            f,
            "Efficiency Score  {}",
            paint(format!("{}/10", d.efficiency), style, color)
        )?;
        writeln!(f, "  {}", paint(efficiency_bar(d.efficiency), style, color))?;
        writeln!(f)?;
        writeln!(f, "{} {}", verdict_icon(d.verdict), d.verdict_message)
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;

        let d = self.data;
        writeln!(f)?;
        writeln!(f, "Raw values")?;
        writeln!(f, "  tokens/prompt: {}", d.tokens_per_prompt)?;
        writeln!(f, "  co2 (g):       {}", d.co2_grams)?;
        writeln!(f, "  water (L):     {}", d.water_liters)?;
        writeln!(f, "  efficiency:    {}%", d.efficiency_pct)
    }
}

impl<'a> fmt::Display for ImpactView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Calculator Pending View
// --------------------------------------------------------

pub struct CalculatorPendingView<'a> {
    data: &'a CalculatorPendingViewModel,
    options: ViewOptions,
}

impl<'a> CalculatorPendingView<'a> {
    pub fn new(data: &'a CalculatorPendingViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for CalculatorPendingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.missing_fields.join(","));
        }

        writeln!(f, "Still needed before calculating:")?;
        for field in &self.data.missing_fields {
            writeln!(f, "  - {}", field)?;
        }
        Ok(())
    }
}
