use crate::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ComparisonEntryViewModel, ComparisonViewModel, Guidance, StatusBadge,
};
use greenmind_types::{ComparisonRecord, EfficiencyGrade, SortKey};
use std::path::PathBuf;

/// `ranked` must already be in display order; `best` is flagged by name
pub fn present_comparison(
    sort_key: SortKey,
    ranked: &[ComparisonRecord],
    best: Option<&ComparisonRecord>,
    exported_to: Option<PathBuf>,
) -> CommandResultViewModel<ComparisonViewModel> {
    let best_name = best.map(|record| record.name.as_str());

    let entries = ranked
        .iter()
        .enumerate()
        .map(|(index, record)| ComparisonEntryViewModel {
            rank: index + 1,
            name: record.name.clone(),
            co2_grams: record.co2,
            water_ml: record.water,
            efficiency: record.efficiency,
            grade: EfficiencyGrade::from_score(record.efficiency),
            cost: record.cost,
            performance: record.performance,
            best_choice: Some(record.name.as_str()) == best_name,
        })
        .collect();

    let exported = exported_to.is_some();
    let content = ComparisonViewModel {
        sort_key,
        direction: sort_key.direction(),
        entries,
        exported_to,
    };

    let mut result = CommandResultViewModel::new(content);

    if ranked.is_empty() {
        return result
            .with_badge(StatusBadge::info("No comparison data"))
            .with_suggestion(
                Guidance::new("Write a config file with the built-in tables").with_command(cmd::INIT),
            );
    }

    result = result.with_badge(StatusBadge::success(format!(
        "Ranked {} model(s) by {}",
        ranked.len(),
        sort_key
    )));

    if !exported {
        result = result
            .with_suggestion(Guidance::new("Save this ranking").with_command(cmd::COMPARE_EXPORT));
    }
    if sort_key != SortKey::Co2 {
        result = result.with_suggestion(
            Guidance::new("Rank by emissions instead").with_command(cmd::COMPARE_BY_CO2),
        );
    }

    result.with_suggestion(Guidance::new("Ways to reduce your footprint").with_command(cmd::RECOMMEND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmind_engine::ComparisonRanker;
    use greenmind_engine::catalog::builtin_comparison;

    #[test]
    fn test_only_first_entry_is_best_choice() {
        let records = builtin_comparison();
        let ranker = ComparisonRanker::new(&records);
        let ranked = ranker.rank(SortKey::Co2);

        let result =
            present_comparison(SortKey::Co2, &ranked, ranker.best_choice(SortKey::Co2), None);
        let entries = &result.content.entries;

        assert_eq!(entries[0].name, "LLaMA 2 7B");
        assert_eq!(entries[0].rank, 1);
        assert!(entries[0].best_choice);
        assert_eq!(entries.iter().filter(|e| e.best_choice).count(), 1);
        assert_eq!(entries[5].rank, 6);
    }

    #[test]
    fn test_json_shape() {
        let records = builtin_comparison();
        let ranker = ComparisonRanker::new(&records);
        let ranked = ranker.rank(SortKey::Efficiency);
        let result = present_comparison(
            SortKey::Efficiency,
            &ranked,
            ranker.best_choice(SortKey::Efficiency),
            None,
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"]["sort_key"], "efficiency");
        assert_eq!(json["content"]["direction"], "descending");
        assert_eq!(json["content"]["entries"][0]["name"], "GPT-3.5 Turbo");
        assert_eq!(json["content"]["entries"][0]["grade"], "excellent");
        assert_eq!(json["content"]["entries"][1]["cost"], "very_low");
        assert!(json["content"].get("exported_to").is_none());
    }

    #[test]
    fn test_export_suppresses_export_tip() {
        let records = builtin_comparison();
        let ranked = ComparisonRanker::new(&records).rank(SortKey::Co2);
        let result = present_comparison(
            SortKey::Co2,
            &ranked,
            ranked.first(),
            Some(PathBuf::from("ranking.csv")),
        );

        assert!(
            result
                .suggestions
                .iter()
                .all(|tip| tip.command.as_deref() != Some(cmd::COMPARE_EXPORT))
        );
    }

    #[test]
    fn test_empty_table() {
        let result = present_comparison(SortKey::Water, &[], None, None);

        assert!(result.content.entries.is_empty());
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::INIT));
    }
}
