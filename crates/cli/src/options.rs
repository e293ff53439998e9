use clap::ValueEnum;
use keyword_histogram_engine::config::ExtractionPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Totals per keyword as an aligned table
    #[default]
    Table,
    /// The per-file histogram as JSON
    Json,
    /// Nothing on stdout (files are still written)
    Quiet,
}

/// Handling of PDFs whose text cannot be extracted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExtractErrorArg {
    /// Stop at the first failure
    #[default]
    Fail,
    /// Leave the file out and warn
    Skip,
    /// Record the file with zero counts and warn
    Zero,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(ExtractErrorArg, ExtractionPolicy, Fail, Skip, Zero);
