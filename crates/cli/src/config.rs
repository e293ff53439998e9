// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::OutputFormat;
use keyword_histogram_core::{KeywordGroup, Keywords, MatchMode};
use keyword_histogram_engine::chart::ChartOptions;
pub use keyword_histogram_engine::config::{
    AnalysisConfig, AnalysisConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use keyword_histogram_engine::export::JsonStyle;
use keyword_histogram_engine::keywords::{load_keywords, parse_group};
use log::warn;
use std::path::PathBuf;

/// Everything one invocation needs: the engine request plus what to do with
/// its result.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub analysis: AnalysisConfig,
    pub format: OutputFormat,
    pub per_file: bool,
    pub json_path: Option<PathBuf>,
    pub totals_path: Option<PathBuf>,
    pub json_style: JsonStyle,
    pub show: bool,
    pub chart_path: Option<PathBuf>,
    pub chart: ChartOptions,
}

impl TryFrom<Args> for CliConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let keywords = keywords_from_args(&args)?;

        if args.matching.regex && args.matching.as_words {
            warn!("--as-words has no effect together with --regex");
        }
        let mode = MatchMode::from_flags(args.matching.regex, args.matching.as_words);

        let walk = WalkOptionsBuilder::default()
            .hidden(!args.scan.no_hidden)
            .git_ignore(args.scan.git_ignore)
            .follow_links(args.scan.follow)
            .max_depth(args.scan.max_depth)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let analysis = AnalysisConfigBuilder::default()
            .root(args.directory)
            .keywords(keywords)
            .mode(mode)
            .walk(walk)
            .jobs(args.scan.jobs.unwrap_or(1))
            .on_extract_error(args.scan.on_extract_error)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let chart = ChartOptions {
            caption: args.chart.title,
            x_label: args.chart.x_label,
            y_label: args.chart.y_label,
            rotation: args.chart.rotation,
            size: args.chart.size,
        };

        Ok(Self {
            analysis,
            format: args.output.format,
            per_file: args.output.per_file,
            json_path: args.output.json,
            totals_path: args.output.totals_json,
            json_style: JsonStyle::new(args.output.minify, args.output.indent),
            show: args.output.show,
            chart_path: args.chart.chart,
            chart,
        })
    }
}

/// Keyword-file groups first, then `-k` groups in command-line order.
fn keywords_from_args(args: &Args) -> Result<Keywords, AppError> {
    let mut groups: Vec<KeywordGroup> = match &args.keywords.keywords_file {
        Some(path) => load_keywords(path)?.groups().to_vec(),
        None => Vec::new(),
    };
    groups.extend(args.keywords.keyword.iter().map(|spec| parse_group(spec)));
    Keywords::new(groups).map_err(|e| AppError::Engine(e.into()))
}
