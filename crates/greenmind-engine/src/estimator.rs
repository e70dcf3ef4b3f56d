use greenmind_types::{Error, ImpactResult, ModelProfile, Result};

/// Words-to-tokens conversion factor.
///
/// The 1.3 default is an illustrative approximation, not a measured value,
/// so it is carried as data and can be overridden from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenApproximation {
    ratio: f64,
}

impl TokenApproximation {
    pub const DEFAULT_RATIO: f64 = 1.3;

    pub fn new(ratio: f64) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::InvalidRatio(ratio));
        }
        Ok(Self { ratio })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn tokens_for(&self, words: u32) -> f64 {
        f64::from(words) * self.ratio
    }
}

impl Default for TokenApproximation {
    fn default() -> Self {
        Self {
            ratio: Self::DEFAULT_RATIO,
        }
    }
}

/// Calculator core: per-token coefficients × approximate tokens × usage count.
///
/// Borrows its profile table so callers can substitute any set of profiles.
#[derive(Debug, Clone, Copy)]
pub struct ImpactEstimator<'a> {
    profiles: &'a [ModelProfile],
    tokens: TokenApproximation,
}

impl<'a> ImpactEstimator<'a> {
    pub fn new(profiles: &'a [ModelProfile], tokens: TokenApproximation) -> Self {
        Self { profiles, tokens }
    }

    pub fn token_approximation(&self) -> TokenApproximation {
        self.tokens
    }

    pub fn profiles(&self) -> &'a [ModelProfile] {
        self.profiles
    }

    /// Exact id match. Tables hold a handful of rows, so a linear scan is fine.
    pub fn profile(&self, model_id: &str) -> Option<&'a ModelProfile> {
        self.profiles.iter().find(|p| p.id == model_id)
    }

    /// Returns `None` when `model_id` is not in the table; no estimate is made.
    ///
    /// Inputs are not range-checked here. Results are unrounded.
    pub fn estimate(
        &self,
        model_id: &str,
        prompt_words: u32,
        daily_usage: u32,
    ) -> Option<ImpactResult> {
        let Some(profile) = self.profile(model_id) else {
            log::debug!("no profile for model '{}', skipping estimate", model_id);
            return None;
        };

        let tokens = self.tokens.tokens_for(prompt_words);
        let usage = f64::from(daily_usage);

        Some(ImpactResult {
            co2: profile.co2_per_token * tokens * usage,
            water: profile.water_per_token * tokens * usage,
            efficiency: profile.efficiency,
        })
    }
}
