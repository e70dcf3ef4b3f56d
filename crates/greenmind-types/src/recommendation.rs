use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::Medium => write!(f, "Medium"),
            ImpactLevel::High => write!(f, "High"),
            ImpactLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single actionable suggestion for reducing footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactLevel,
    pub difficulty: Difficulty,
    pub savings: &'static str,
    pub time_to_implement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationCategory {
    /// Stable key for filtering (`eco-models`, `usage`, `alternatives`)
    pub slug: &'static str,
    pub title: &'static str,
    pub items: &'static [Recommendation],
}

/// Aggregate savings claimed when every recommendation is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotentialImpact {
    pub co2_reduction_pct: u8,
    pub water_savings_pct: u8,
    pub cost_reduction_pct: u8,
}
