use greenmind_types::{
    Difficulty, ImpactLevel, PotentialImpact, Recommendation, RecommendationCategory,
};

const ECO_MODELS: &[Recommendation] = &[
    Recommendation {
        title: "Switch to GPT-3.5 Turbo",
        description: "Reduces CO₂ emissions by 75% compared to GPT-4 while maintaining excellent performance.",
        impact: ImpactLevel::High,
        difficulty: Difficulty::Easy,
        savings: "75% less CO₂",
        time_to_implement: "Immediate",
    },
    Recommendation {
        title: "Use LLaMA 2 7B for Simple Tasks",
        description: "Perfect for basic queries, content generation, and simple analysis with minimal environmental impact.",
        impact: ImpactLevel::High,
        difficulty: Difficulty::Easy,
        savings: "80% less CO₂",
        time_to_implement: "1 day",
    },
];

const USAGE_OPTIMIZATION: &[Recommendation] = &[
    Recommendation {
        title: "Optimize Prompt Length",
        description: "Reduce prompt wordiness by 30-50% using clear, concise language without losing context.",
        impact: ImpactLevel::Medium,
        difficulty: Difficulty::Easy,
        savings: "40% less usage",
        time_to_implement: "Immediate",
    },
    Recommendation {
        title: "Batch Similar Requests",
        description: "Group related queries together to reduce the overhead of multiple API calls.",
        impact: ImpactLevel::Medium,
        difficulty: Difficulty::Medium,
        savings: "25% efficiency gain",
        time_to_implement: "1 week",
    },
];

const SMART_ALTERNATIVES: &[Recommendation] = &[
    Recommendation {
        title: "Use Smaller Models for Preprocessing",
        description: "Filter and prepare data with efficient models before sending to larger ones for final processing.",
        impact: ImpactLevel::High,
        difficulty: Difficulty::Medium,
        savings: "60% total reduction",
        time_to_implement: "2 weeks",
    },
    Recommendation {
        title: "Implement Response Caching",
        description: "Cache common responses to avoid repeated API calls for similar queries.",
        impact: ImpactLevel::VeryHigh,
        difficulty: Difficulty::Hard,
        savings: "70% fewer calls",
        time_to_implement: "1 month",
    },
];

pub const CATEGORIES: &[RecommendationCategory] = &[
    RecommendationCategory {
        slug: "eco-models",
        title: "Eco-Friendly Models",
        items: ECO_MODELS,
    },
    RecommendationCategory {
        slug: "usage",
        title: "Usage Optimization",
        items: USAGE_OPTIMIZATION,
    },
    RecommendationCategory {
        slug: "alternatives",
        title: "Smart Alternatives",
        items: SMART_ALTERNATIVES,
    },
];

pub const POTENTIAL_IMPACT: PotentialImpact = PotentialImpact {
    co2_reduction_pct: 60,
    water_savings_pct: 45,
    cost_reduction_pct: 70,
};

pub fn find_category(slug: &str) -> Option<&'static RecommendationCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.slug.eq_ignore_ascii_case(slug.trim()))
}

pub fn category_slugs() -> Vec<&'static str> {
    CATEGORIES.iter().map(|category| category.slug).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_categories_of_two() {
        assert_eq!(CATEGORIES.len(), 3);
        for category in CATEGORIES {
            assert_eq!(category.items.len(), 2, "{}", category.title);
        }
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category("usage").map(|c| c.title), Some("Usage Optimization"));
        assert_eq!(find_category(" Eco-Models ").map(|c| c.items.len()), Some(2));
        assert!(find_category("hardware").is_none());
    }

    #[test]
    fn test_slugs() {
        assert_eq!(category_slugs(), vec!["eco-models", "usage", "alternatives"]);
    }

    #[test]
    fn test_hardest_item_has_highest_impact() {
        let caching = SMART_ALTERNATIVES
            .iter()
            .find(|item| item.difficulty == Difficulty::Hard)
            .unwrap();

        assert_eq!(caching.impact, ImpactLevel::VeryHigh);
        assert_eq!(caching.savings, "70% fewer calls");
    }
}
