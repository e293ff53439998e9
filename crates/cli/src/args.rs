// crates/cli/src/args.rs
use crate::options::{ExtractErrorArg, OutputFormat};
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use keyword_histogram_engine::chart::LabelRotation;
use keyword_histogram_engine::export::DEFAULT_INDENT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "keyword_histogram",
    version,
    about = "Count keyword occurrences across a directory of PDF files"
)]
pub struct Args {
    /// Directory searched recursively for PDF files
    #[arg(value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    #[command(flatten)]
    pub keywords: KeywordOptions,

    #[command(flatten)]
    pub matching: MatchOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ClapArgs, Debug)]
pub struct KeywordOptions {
    /// Keyword group, synonyms separated by `|` (repeatable), e.g. -k "Artificial Intelligence|AI"
    #[arg(short = 'k', long = "keyword", value_name = "SYNONYMS", help_heading = "Keywords")]
    pub keyword: Vec<String>,

    /// Read keyword groups from a .json, .yaml or plain-text file
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Keywords")]
    pub keywords_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct MatchOptions {
    /// Case-insensitive whole-word matching (absorbs -/' continuations)
    #[arg(long, help_heading = "Matching")]
    pub regex: bool,

    /// Only count keywords surrounded by spaces (substring mode only)
    #[arg(long, help_heading = "Matching")]
    pub as_words: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Skip hidden files and directories
    #[arg(long, help_heading = "Scan")]
    pub no_hidden: bool,

    /// Honour .gitignore files
    #[arg(long, help_heading = "Scan")]
    pub git_ignore: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// Maximum directory depth
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Worker threads (0 or no value = one per CPU)
    #[arg(
        short = 'j',
        long,
        num_args = 0..=1,
        default_missing_value = "0",
        value_parser = parsers::parse_jobs,
        help_heading = "Scan"
    )]
    pub jobs: Option<usize>,

    /// What to do with PDFs whose text cannot be extracted
    #[arg(long, value_enum, default_value = "fail", help_heading = "Scan")]
    pub on_extract_error: ExtractErrorArg,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Console output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Also list counts per file in table output
    #[arg(long, help_heading = "Output")]
    pub per_file: bool,

    /// Write the histogram as JSON to this file
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub json: Option<PathBuf>,

    /// Write the per-keyword totals as JSON to this file
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub totals_json: Option<PathBuf>,

    /// Minified JSON
    #[arg(long, help_heading = "Output")]
    pub minify: bool,

    /// JSON indentation width
    #[arg(long, default_value_t = DEFAULT_INDENT, conflicts_with = "minify", help_heading = "Output")]
    pub indent: usize,

    /// Draw the totals as a text bar chart on stdout
    #[arg(long, help_heading = "Output")]
    pub show: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ChartArgs {
    /// Save a bar chart of the totals as SVG
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Chart")]
    pub chart: Option<PathBuf>,

    /// Chart title
    #[arg(long, help_heading = "Chart")]
    pub title: Option<String>,

    /// X-axis title
    #[arg(long, default_value = "Keywords", help_heading = "Chart")]
    pub x_label: String,

    /// Y-axis title
    #[arg(long, default_value = "Occurrences", help_heading = "Chart")]
    pub y_label: String,

    /// Tick-label rotation in degrees. Only quarter turns (0, 90, 180, 270,
    /// or negatives) are supported: plotters cannot rotate text by other
    /// angles, so values such as 45 are rejected.
    #[arg(long, default_value = "90", allow_hyphen_values = true, help_heading = "Chart")]
    pub rotation: LabelRotation,

    /// Image size as WIDTHxHEIGHT
    #[arg(long, default_value = "1024x768", value_parser = parsers::parse_size, help_heading = "Chart")]
    pub size: (u32, u32),
}
