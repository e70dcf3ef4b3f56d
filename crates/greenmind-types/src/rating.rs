use serde::Serialize;
use std::fmt;

/// Verdict shown next to a calculator result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactVerdict {
    Efficient,
    Moderate,
    HighImpact,
}

impl ImpactVerdict {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            ImpactVerdict::Efficient
        } else if score >= 6 {
            ImpactVerdict::Moderate
        } else {
            ImpactVerdict::HighImpact
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ImpactVerdict::Efficient => "Great choice! This model is environmentally efficient.",
            ImpactVerdict::Moderate => "Moderate impact. Consider eco-friendly alternatives.",
            ImpactVerdict::HighImpact => {
                "High environmental impact. Check our recommendations below."
            }
        }
    }
}

/// Badge grade on a comparison card. Finer-grained than `ImpactVerdict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl EfficiencyGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            9.. => EfficiencyGrade::Excellent,
            8 => EfficiencyGrade::Good,
            7 => EfficiencyGrade::Fair,
            _ => EfficiencyGrade::Poor,
        }
    }
}

impl fmt::Display for EfficiencyGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyGrade::Excellent => write!(f, "Excellent"),
            EfficiencyGrade::Good => write!(f, "Good"),
            EfficiencyGrade::Fair => write!(f, "Fair"),
            EfficiencyGrade::Poor => write!(f, "Poor"),
        }
    }
}

/// Width of the efficiency bar in percent (score × 10, capped at 100)
pub fn efficiency_fill_pct(score: u8) -> u8 {
    score.min(10) * 10
}
