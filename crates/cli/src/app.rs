// crates/cli/src/app.rs
use crate::config::CliConfig;
use crate::presentation;
use anyhow::Context;
use keyword_histogram_engine::chart::BarChart;
use keyword_histogram_engine::export::write_json;
use keyword_histogram_engine::report::RunResult;
use log::info;

/// Runs one analysis and writes every requested output.
///
/// # Errors
///
/// Returns the engine error of a failed run, or the first output that could
/// not be written.
pub fn run(config: &CliConfig) -> anyhow::Result<RunResult> {
    let result = keyword_histogram_engine::run(&config.analysis)
        .with_context(|| format!("analyzing {}", config.analysis.root.display()))?;

    for (path, err) in result.skipped() {
        eprintln!("Skipped {}: {err}", path.display());
    }

    presentation::print_results(&result, config).context("printing results")?;

    if let Some(path) = &config.json_path {
        write_json(result.histogram(), config.json_style, path)
            .with_context(|| format!("saving histogram to {}", path.display()))?;
        info!("histogram saved to {}", path.display());
    }

    if let Some(path) = &config.totals_path {
        write_json(result.totals(), config.json_style, path)
            .with_context(|| format!("saving totals to {}", path.display()))?;
        info!("totals saved to {}", path.display());
    }

    if let Some(path) = &config.chart_path {
        BarChart::new(config.chart.clone())
            .render_svg(result.totals(), path)
            .with_context(|| format!("saving chart to {}", path.display()))?;
        info!("chart saved to {}", path.display());
    }

    Ok(result)
}
