use greenmind_types::{ComparisonRecord, SortDirection, SortKey};
use std::cmp::Ordering;

/// Return a new, reordered copy of `records`.
///
/// Efficiency sorts descending, co2 and water ascending. The sort is stable,
/// so equal keys keep their input order.
pub fn rank(records: &[ComparisonRecord], key: SortKey) -> Vec<ComparisonRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| compare(a, b, key));
    ranked
}

/// The record ranked first for `key`, if any
pub fn best_choice(records: &[ComparisonRecord], key: SortKey) -> Option<&ComparisonRecord> {
    // min_by returns the first of equal minima, matching the stable sort
    records.iter().min_by(|a, b| compare(a, b, key))
}

fn compare(a: &ComparisonRecord, b: &ComparisonRecord, key: SortKey) -> Ordering {
    let ascending = match key {
        SortKey::Co2 => a.co2.total_cmp(&b.co2),
        SortKey::Water => a.water.total_cmp(&b.water),
        SortKey::Efficiency => a.efficiency.cmp(&b.efficiency),
    };

    match key.direction() {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// Borrowed view over a comparison table
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRanker<'a> {
    records: &'a [ComparisonRecord],
}

impl<'a> ComparisonRanker<'a> {
    pub fn new(records: &'a [ComparisonRecord]) -> Self {
        Self { records }
    }

    pub fn rank(&self, key: SortKey) -> Vec<ComparisonRecord> {
        rank(self.records, key)
    }

    pub fn best_choice(&self, key: SortKey) -> Option<&'a ComparisonRecord> {
        best_choice(self.records, key)
    }
}
