//! Built-in footprint tables.
//!
//! All figures are illustrative and are not sourced from measurements.
//! Runtime configuration can replace or extend both tables.

use greenmind_types::{ComparisonRecord, CostTier, ModelProfile, PerformanceTier};

/// Compile-time row of the calculator table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSpec {
    pub id: &'static str,
    pub display_name: &'static str,
    pub co2_per_token: f64,
    pub water_per_token: f64,
    pub efficiency: u8,
}

impl ProfileSpec {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        co2_per_token: f64,
        water_per_token: f64,
        efficiency: u8,
    ) -> Self {
        Self {
            id,
            display_name,
            co2_per_token,
            water_per_token,
            efficiency,
        }
    }

    fn to_profile(self) -> ModelProfile {
        ModelProfile::new(
            self.id,
            self.display_name,
            self.co2_per_token,
            self.water_per_token,
            self.efficiency,
        )
    }
}

/// Compile-time row of the comparison table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordSpec {
    pub name: &'static str,
    pub co2: f64,
    pub water: f64,
    pub efficiency: u8,
    pub cost: CostTier,
    pub performance: PerformanceTier,
}

impl RecordSpec {
    pub const fn new(
        name: &'static str,
        co2: f64,
        water: f64,
        efficiency: u8,
        cost: CostTier,
        performance: PerformanceTier,
    ) -> Self {
        Self {
            name,
            co2,
            water,
            efficiency,
            cost,
            performance,
        }
    }

    fn to_record(self) -> ComparisonRecord {
        ComparisonRecord::new(
            self.name,
            self.co2,
            self.water,
            self.efficiency,
            self.cost,
            self.performance,
        )
    }
}

/// Grams CO₂ / liters water per token. Order is the order models are offered in.
pub const PROFILE_SPECS: &[ProfileSpec] = &[
    ProfileSpec::new("gpt-4", "GPT-4", 0.004, 0.002, 7),
    ProfileSpec::new("gpt-3.5-turbo", "GPT-3.5 Turbo", 0.001, 0.0005, 9),
    ProfileSpec::new("claude-3", "Claude 3", 0.003, 0.0015, 8),
    ProfileSpec::new("llama-2-70b", "LLaMA 2 70B", 0.006, 0.003, 6),
    ProfileSpec::new("llama-2-7b", "LLaMA 2 7B", 0.0008, 0.0004, 9),
    ProfileSpec::new("palm-2", "PaLM 2", 0.002, 0.001, 8),
];

/// Grams CO₂ / millilitres water per 1000 tokens.
/// Insertion order is the tie-break order when ranking.
pub const RECORD_SPECS: &[RecordSpec] = &[
    RecordSpec::new("GPT-3.5 Turbo", 65.0, 32.0, 9, CostTier::Low, PerformanceTier::High),
    RecordSpec::new("LLaMA 2 7B", 52.0, 26.0, 9, CostTier::VeryLow, PerformanceTier::Medium),
    RecordSpec::new("PaLM 2", 130.0, 65.0, 8, CostTier::Medium, PerformanceTier::High),
    RecordSpec::new("Claude 3", 195.0, 97.0, 8, CostTier::Medium, PerformanceTier::VeryHigh),
    RecordSpec::new("GPT-4", 260.0, 130.0, 7, CostTier::High, PerformanceTier::VeryHigh),
    RecordSpec::new("LLaMA 2 70B", 390.0, 195.0, 6, CostTier::High, PerformanceTier::VeryHigh),
];

pub fn builtin_profiles() -> Vec<ModelProfile> {
    PROFILE_SPECS.iter().map(|spec| spec.to_profile()).collect()
}

pub fn builtin_comparison() -> Vec<ComparisonRecord> {
    RECORD_SPECS.iter().map(|spec| spec.to_record()).collect()
}
