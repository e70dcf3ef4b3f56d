use greenmind_types::efficiency_fill_pct;

const BAR_CELLS: usize = 10;

/// Ten-cell bar filled `score × 10` percent: `█████████░`
pub fn efficiency_bar(score: u8) -> String {
    let filled = usize::from(efficiency_fill_pct(score)) * BAR_CELLS / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}
