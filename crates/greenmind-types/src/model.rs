use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lowest and highest static efficiency rating a model can carry
pub const EFFICIENCY_MIN: u8 = 1;
pub const EFFICIENCY_MAX: u8 = 10;

/// Per-token resource coefficients for one model.
///
/// `id` is the lookup key used by the calculator (`"gpt-4"`, `"llama-2-7b"`).
/// Coefficients are illustrative: grams of CO₂ and liters of water per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    pub id: String,

    /// Human-facing label; empty means "use the id"
    #[serde(default)]
    pub display_name: String,

    pub co2_per_token: f64,
    pub water_per_token: f64,

    /// Static 1-10 rating, looked up, never computed
    pub efficiency: u8,
}

impl ModelProfile {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        co2_per_token: f64,
        water_per_token: f64,
        efficiency: u8,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            co2_per_token,
            water_per_token,
            efficiency,
        }
    }

    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidProfile(
                self.id.clone(),
                "id must not be blank".to_string(),
            ));
        }
        if !is_valid_coefficient(self.co2_per_token) {
            return Err(Error::InvalidProfile(
                self.id.clone(),
                format!("co2_per_token {} must be finite and >= 0", self.co2_per_token),
            ));
        }
        if !is_valid_coefficient(self.water_per_token) {
            return Err(Error::InvalidProfile(
                self.id.clone(),
                format!(
                    "water_per_token {} must be finite and >= 0",
                    self.water_per_token
                ),
            ));
        }
        if !is_valid_efficiency(self.efficiency) {
            return Err(Error::InvalidProfile(
                self.id.clone(),
                format!(
                    "efficiency {} must be within {}-{}",
                    self.efficiency, EFFICIENCY_MIN, EFFICIENCY_MAX
                ),
            ));
        }
        Ok(())
    }
}

/// Output of one calculator run. Not rounded; formatting belongs to the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Grams of CO₂
    pub co2: f64,
    /// Liters of water
    pub water: f64,
    pub efficiency: u8,
}

pub(crate) fn is_valid_coefficient(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub(crate) fn is_valid_efficiency(score: u8) -> bool {
    (EFFICIENCY_MIN..=EFFICIENCY_MAX).contains(&score)
}
