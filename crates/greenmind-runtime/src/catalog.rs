use crate::config::Config;
use crate::{Error, Result};
use greenmind_engine::catalog::{builtin_comparison, builtin_profiles};
use greenmind_engine::{ComparisonRanker, ImpactEstimator, TokenApproximation};
use greenmind_types::{ComparisonRecord, ModelProfile};
use std::collections::HashSet;

/// The tables every command operates on: built-ins merged with configuration.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    profiles: Vec<ModelProfile>,
    comparison: Vec<ComparisonRecord>,
    tokens: TokenApproximation,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
            comparison: builtin_comparison(),
            tokens: TokenApproximation::default(),
        }
    }

    /// Arbitrary tables, validated the same way configured entries are
    pub fn new(
        profiles: Vec<ModelProfile>,
        comparison: Vec<ComparisonRecord>,
        tokens: TokenApproximation,
    ) -> Result<Self> {
        check_unique(profiles.iter().map(|p| p.id.as_str()), "model id")?;
        check_unique(comparison.iter().map(|r| r.name.as_str()), "comparison name")?;
        for profile in &profiles {
            profile.validate()?;
        }
        for record in &comparison {
            record.validate()?;
        }

        Ok(Self {
            profiles,
            comparison,
            tokens,
        })
    }

    /// Apply `config` on top of the built-in tables.
    ///
    /// Entries whose key already exists replace the built-in row in place;
    /// new keys are appended in file order.
    pub fn from_config(config: &Config) -> Result<Self> {
        let tokens = match config.token_ratio {
            Some(ratio) => TokenApproximation::new(ratio)?,
            None => TokenApproximation::default(),
        };

        check_unique(config.models.iter().map(|p| p.id.as_str()), "model id")?;
        check_unique(
            config.comparison.iter().map(|r| r.name.as_str()),
            "comparison name",
        )?;

        let (base_profiles, base_comparison) = if config.replace_builtin {
            (Vec::new(), Vec::new())
        } else {
            (builtin_profiles(), builtin_comparison())
        };

        let profiles = merge_by_key(base_profiles, &config.models, |p| p.id.as_str());
        let comparison = merge_by_key(base_comparison, &config.comparison, |r| r.name.as_str());

        log::debug!(
            "catalog: {} model(s), {} comparison row(s), token ratio {}",
            profiles.len(),
            comparison.len(),
            tokens.ratio()
        );

        Self::new(profiles, comparison, tokens)
    }

    pub fn profiles(&self) -> &[ModelProfile] {
        &self.profiles
    }

    pub fn comparison(&self) -> &[ComparisonRecord] {
        &self.comparison
    }

    pub fn token_approximation(&self) -> TokenApproximation {
        self.tokens
    }

    pub fn model_ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn estimator(&self) -> ImpactEstimator<'_> {
        ImpactEstimator::new(&self.profiles, self.tokens)
    }

    pub fn ranker(&self) -> ComparisonRanker<'_> {
        ComparisonRanker::new(&self.comparison)
    }
}

fn check_unique<'a>(keys: impl Iterator<Item = &'a str>, kind: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(Error::Config(format!("duplicate {} '{}'", kind, key)));
        }
    }
    Ok(())
}

fn merge_by_key<T, F>(mut base: Vec<T>, overrides: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    for item in overrides {
        match base.iter().position(|existing| key(existing) == key(item)) {
            Some(index) => base[index] = item.clone(),
            None => base.push(item.clone()),
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmind_types::{CostTier, PerformanceTier, SortKey};

    fn mistral_profile() -> ModelProfile {
        ModelProfile::new("mistral-7b", "Mistral 7B", 0.0007, 0.00035, 9)
    }

    fn mistral_record() -> ComparisonRecord {
        ComparisonRecord::new(
            "Mistral 7B",
            45.0,
            22.0,
            9,
            CostTier::VeryLow,
            PerformanceTier::Medium,
        )
    }

    #[test]
    fn test_empty_config_is_builtin() -> Result<()> {
        let catalog = Catalog::from_config(&Config::default())?;
        assert_eq!(catalog, Catalog::builtin());
        Ok(())
    }

    #[test]
    fn test_override_replaces_in_place() -> Result<()> {
        let gpt4 = ModelProfile::new("gpt-4", "GPT-4 (tuned)", 0.005, 0.0025, 6);
        let config = Config {
            models: vec![gpt4.clone()],
            ..Config::default()
        };

        let catalog = Catalog::from_config(&config)?;

        assert_eq!(catalog.profiles().len(), 6);
        assert_eq!(catalog.profiles()[0], gpt4);
        assert_eq!(catalog.estimator().estimate("gpt-4", 10, 1).map(|r| r.efficiency), Some(6));
        Ok(())
    }

    #[test]
    fn test_new_entries_are_appended() -> Result<()> {
        let config = Config {
            models: vec![mistral_profile()],
            comparison: vec![mistral_record()],
            ..Config::default()
        };

        let catalog = Catalog::from_config(&config)?;

        assert_eq!(catalog.model_ids().last(), Some(&"mistral-7b"));
        assert_eq!(catalog.comparison().len(), 7);
        assert_eq!(
            catalog.ranker().best_choice(SortKey::Co2).map(|r| r.name.as_str()),
            Some("Mistral 7B")
        );
        Ok(())
    }

    #[test]
    fn test_replace_builtin_drops_defaults() -> Result<()> {
        let config = Config {
            replace_builtin: true,
            models: vec![mistral_profile()],
            ..Config::default()
        };

        let catalog = Catalog::from_config(&config)?;

        assert_eq!(catalog.model_ids(), vec!["mistral-7b"]);
        assert!(catalog.comparison().is_empty());
        assert!(catalog.estimator().estimate("gpt-4", 10, 1).is_none());
        Ok(())
    }

    #[test]
    fn test_token_ratio_override() -> Result<()> {
        let config = Config {
            token_ratio: Some(2.0),
            ..Config::default()
        };

        let catalog = Catalog::from_config(&config)?;
        let result = catalog.estimator().estimate("gpt-4", 100, 5).unwrap();

        assert_eq!(catalog.token_approximation().ratio(), 2.0);
        assert!((result.co2 - 4.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let config = Config {
            token_ratio: Some(0.0),
            ..Config::default()
        };

        assert!(matches!(
            Catalog::from_config(&config),
            Err(Error::Catalog(greenmind_types::Error::InvalidRatio(_)))
        ));
    }

    #[test]
    fn test_invalid_efficiency_rejected() {
        let mut profile = mistral_profile();
        profile.efficiency = 11;
        let config = Config {
            models: vec![profile],
            ..Config::default()
        };

        let err = Catalog::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("mistral-7b"));
    }

    #[test]
    fn test_duplicate_config_keys_rejected() {
        let config = Config {
            models: vec![mistral_profile(), mistral_profile()],
            ..Config::default()
        };

        let err = Catalog::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("duplicate model id 'mistral-7b'"));
    }

    #[test]
    fn test_template_reproduces_builtin() -> Result<()> {
        let catalog = Catalog::from_config(&Config::template())?;
        assert_eq!(catalog, Catalog::builtin());
        Ok(())
    }
}
