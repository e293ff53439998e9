use clap::Parser;
use keyword_histogram_cli::app;
use keyword_histogram_cli::args::Args;
use keyword_histogram_cli::config::CliConfig;
use keyword_histogram_cli::error::exit_code;
use std::process::ExitCode;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = CliConfig::try_from(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| app::run(&config));

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}
