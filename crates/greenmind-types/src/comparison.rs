use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{is_valid_coefficient, is_valid_efficiency};
use crate::{Error, Result};

/// Relative price band of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    VeryLow,
    Low,
    Medium,
    High,
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostTier::VeryLow => write!(f, "Very Low"),
            CostTier::Low => write!(f, "Low"),
            CostTier::Medium => write!(f, "Medium"),
            CostTier::High => write!(f, "High"),
        }
    }
}

/// Relative output quality band of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::Medium => write!(f, "Medium"),
            PerformanceTier::High => write!(f, "High"),
            PerformanceTier::VeryHigh => write!(f, "Very High"),
        }
    }
}

/// One row of the model comparison table.
///
/// `co2` is grams and `water` is millilitres, both per 1000 tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub name: String,
    pub co2: f64,
    pub water: f64,
    pub efficiency: u8,
    pub cost: CostTier,
    pub performance: PerformanceTier,
}

impl ComparisonRecord {
    pub fn new(
        name: impl Into<String>,
        co2: f64,
        water: f64,
        efficiency: u8,
        cost: CostTier,
        performance: PerformanceTier,
    ) -> Self {
        Self {
            name: name.into(),
            co2,
            water,
            efficiency,
            cost,
            performance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(Error::InvalidRecord(self.name.clone(), msg));

        if self.name.trim().is_empty() {
            return invalid("name must not be blank".to_string());
        }
        if !is_valid_coefficient(self.co2) {
            return invalid(format!("co2 {} must be finite and >= 0", self.co2));
        }
        if !is_valid_coefficient(self.water) {
            return invalid(format!("water {} must be finite and >= 0", self.water));
        }
        if !is_valid_efficiency(self.efficiency) {
            return invalid(format!("efficiency {} must be within 1-10", self.efficiency));
        }
        Ok(())
    }
}

/// Numeric field a comparison table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Co2,
    Water,
    #[default]
    Efficiency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Efficiency, SortKey::Co2, SortKey::Water];

    /// Higher efficiency is better; lower resource use is better.
    pub fn direction(self) -> SortDirection {
        match self {
            SortKey::Efficiency => SortDirection::Descending,
            SortKey::Co2 | SortKey::Water => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Co2 => write!(f, "co2"),
            SortKey::Water => write!(f, "water"),
            SortKey::Efficiency => write!(f, "efficiency"),
        }
    }
}
