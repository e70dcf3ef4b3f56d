use greenmind_types::ImpactResult;
use std::fmt;

use crate::estimator::ImpactEstimator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    Model,
    PromptWords,
    DailyUsage,
}

impl fmt::Display for CalculatorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorField::Model => write!(f, "model"),
            CalculatorField::PromptWords => write!(f, "prompt length"),
            CalculatorField::DailyUsage => write!(f, "daily usage count"),
        }
    }
}

/// Partially filled calculator form.
///
/// Calculation is gated on presence only: every field must be filled,
/// nothing else is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorInput {
    pub model: Option<String>,
    pub prompt_words: Option<u32>,
    pub daily_usage: Option<u32>,
}

impl CalculatorInput {
    pub fn new(model: Option<String>, prompt_words: Option<u32>, daily_usage: Option<u32>) -> Self {
        Self {
            model,
            prompt_words,
            daily_usage,
        }
    }

    /// Trimmed model id; blank strings count as missing
    pub fn model_id(&self) -> Option<&str> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
    }

    /// Missing fields in form order
    pub fn missing_fields(&self) -> Vec<CalculatorField> {
        let mut missing = Vec::new();
        if self.model_id().is_none() {
            missing.push(CalculatorField::Model);
        }
        if self.prompt_words.is_none() {
            missing.push(CalculatorField::PromptWords);
        }
        if self.daily_usage.is_none() {
            missing.push(CalculatorField::DailyUsage);
        }
        missing
    }

    pub fn is_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// `None` if the form is incomplete or the model is not in the table
    pub fn submit(&self, estimator: &ImpactEstimator<'_>) -> Option<ImpactResult> {
        let model = self.model_id()?;
        let words = self.prompt_words?;
        let usage = self.daily_usage?;
        estimator.estimate(model, words, usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_profiles;
    use crate::estimator::TokenApproximation;

    #[test]
    fn test_empty_form_is_not_ready() {
        let input = CalculatorInput::default();

        assert!(!input.is_ready());
        assert_eq!(
            input.missing_fields(),
            vec![
                CalculatorField::Model,
                CalculatorField::PromptWords,
                CalculatorField::DailyUsage
            ]
        );
    }

    #[test]
    fn test_blank_model_counts_as_missing() {
        let input = CalculatorInput::new(Some("   ".to_string()), Some(50), Some(10));

        assert_eq!(input.missing_fields(), vec![CalculatorField::Model]);
    }

    #[test]
    fn test_submit_requires_every_field() {
        let profiles = builtin_profiles();
        let estimator = ImpactEstimator::new(&profiles, TokenApproximation::default());

        let partial = CalculatorInput::new(Some("gpt-4".to_string()), Some(100), None);
        assert!(partial.submit(&estimator).is_none());

        let complete = CalculatorInput::new(Some("gpt-4".to_string()), Some(100), Some(5));
        assert!(complete.is_ready());
        assert_eq!(
            complete.submit(&estimator),
            estimator.estimate("gpt-4", 100, 5)
        );
    }

    #[test]
    fn test_submit_trims_model_id() {
        let profiles = builtin_profiles();
        let estimator = ImpactEstimator::new(&profiles, TokenApproximation::default());

        let input = CalculatorInput::new(Some(" palm-2 ".to_string()), Some(10), Some(1));
        assert_eq!(input.submit(&estimator).map(|r| r.efficiency), Some(8));
    }

    #[test]
    fn test_ready_but_unknown_model() {
        let profiles = builtin_profiles();
        let estimator = ImpactEstimator::new(&profiles, TokenApproximation::default());

        let input = CalculatorInput::new(Some("bard".to_string()), Some(10), Some(1));
        assert!(input.is_ready());
        assert!(input.submit(&estimator).is_none());
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(CalculatorField::PromptWords.to_string(), "prompt length");
        assert_eq!(CalculatorField::DailyUsage.to_string(), "daily usage count");
    }
}
