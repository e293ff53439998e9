// crates/cli/src/presentation.rs
use crate::config::CliConfig;
use crate::options::OutputFormat;
use keyword_histogram_core::{Histogram, MatchMode, TotalCount};
use keyword_histogram_engine::error::Result;
use keyword_histogram_engine::export::to_json;
use keyword_histogram_engine::report::RunResult;
use std::fmt::Write;

const RULE: &str = "----------------------------------------------";
const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Writes the console report for `result` to stdout.
///
/// # Errors
///
/// Fails only when JSON output is requested and serialization fails.
pub fn print_results(result: &RunResult, config: &CliConfig) -> Result<()> {
    match config.format {
        OutputFormat::Table => print!("{}", render_table(result, config)),
        OutputFormat::Json => println!("{}", to_json(result.histogram(), config.json_style)?),
        OutputFormat::Quiet => {}
    }
    if config.show {
        print!("{}", render_bars(result.totals(), BAR_WIDTH));
    }
    Ok(())
}

fn mode_name(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Substring { as_words: false } => "substring",
        MatchMode::Substring { as_words: true } => "words",
        MatchMode::Regex => "regex",
    }
}

#[must_use]
pub fn render_table(result: &RunResult, config: &CliConfig) -> String {
    let mut out = String::new();
    let analysis = &config.analysis;
    let _ = writeln!(
        out,
        "keyword_histogram v{} · mode={} · parallel={}",
        crate::VERSION,
        mode_name(analysis.mode),
        analysis.jobs
    );
    out.push('\n');

    if config.per_file {
        render_per_file(&mut out, result.histogram());
    }

    let _ = writeln!(out, "{:>9}      KEYWORD", "COUNT");
    let _ = writeln!(out, "{RULE}");
    for (label, count) in result.totals().iter() {
        let _ = writeln!(out, "{count:>9}      {label}");
    }
    let _ = writeln!(out, "---");
    let analyzed = result.histogram().len();
    let _ = writeln!(out, "{:>9}      TOTAL ({analyzed} files)", result.totals().sum());

    out.push('\n');
    let skipped = result.skipped().len();
    if skipped == 0 {
        let _ = writeln!(out, "[keyword_histogram] Completed: {analyzed} files processed.");
    } else {
        let _ = writeln!(
            out,
            "[keyword_histogram] Completed: {analyzed} files processed, {skipped} without text."
        );
    }
    out
}

fn render_per_file(out: &mut String, histogram: &Histogram) {
    for (file, counts) in histogram.files() {
        let _ = writeln!(out, "{file}");
        for (label, count) in counts {
            let _ = writeln!(out, "{count:>9}      {label}");
        }
        out.push('\n');
    }
}

/// Horizontal text bars scaled so the largest total spans `width` cells.
#[must_use]
pub fn render_bars(totals: &TotalCount, width: usize) -> String {
    let mut out = String::new();
    let label_width = totals.labels().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = totals.max();
    for (label, count) in totals.iter() {
        let cells = if max == 0 {
            0
        } else {
            let scaled = u128::from(count) * width as u128 / u128::from(max);
            usize::try_from(scaled).unwrap_or(width)
        };
        let bar: String = std::iter::repeat_n(BAR_CHAR, cells).collect();
        let _ = writeln!(out, "{label:<label_width$} │{bar} {count}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(pairs: &[(&str, u64)]) -> TotalCount {
        let mut h = Histogram::new();
        for (label, count) in pairs {
            h.add("a.pdf", label, *count);
        }
        let order: Vec<String> = pairs.iter().map(|(l, _)| (*l).to_string()).collect();
        h.totals(&order)
    }

    #[test]
    fn bars_scale_to_the_largest_total() {
        let out = render_bars(&totals(&[("AI", 10), ("Robotic", 5), ("Big Data", 0)]), 10);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("AI       │{} 10", "█".repeat(10)));
        assert_eq!(lines[1], format!("Robotic  │{} 5", "█".repeat(5)));
        assert_eq!(lines[2], "Big Data │ 0");
    }

    #[test]
    fn bars_for_all_zero_totals_are_empty() {
        let out = render_bars(&totals(&[("AI", 0)]), 10);
        assert_eq!(out, "AI │ 0\n");
    }

    #[test]
    fn mode_names() {
        assert_eq!(mode_name(MatchMode::default()), "substring");
        assert_eq!(mode_name(MatchMode::Substring { as_words: true }), "words");
        assert_eq!(mode_name(MatchMode::Regex), "regex");
    }
}
