use crate::args::ViewModeArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use greenmind_runtime::Catalog;
use greenmind_types::{ComparisonRecord, SortKey};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    rank: usize,
    name: &'a str,
    co2_g: f64,
    water_ml: f64,
    efficiency: u8,
    cost: String,
    performance: String,
}

pub fn handle(
    catalog: &Catalog,
    sort_key: SortKey,
    export: Option<PathBuf>,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let ranker = catalog.ranker();
    let ranked = ranker.rank(sort_key);

    if let Some(path) = &export {
        write_csv(path, &ranked)?;
        log::debug!("compare: exported {} row(s) to {}", ranked.len(), path.display());
    }

    let view_model =
        presenters::present_comparison(sort_key, &ranked, ranker.best_choice(sort_key), export);
    ctx.render(view_model)
}

fn write_csv(path: &Path, ranked: &[ComparisonRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for (index, record) in ranked.iter().enumerate() {
        writer.serialize(ExportRow {
            rank: index + 1,
            name: &record.name,
            co2_g: record.co2,
            water_ml: record.water,
            efficiency: record.efficiency,
            cost: record.cost.to_string(),
            performance: record.performance.to_string(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
