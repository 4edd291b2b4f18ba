use clap::Parser;
use reddit_top::cli::Cli;
use reddit_top::config::Config;
use reddit_top::logging::init_tracing;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_file.clone());

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match reddit_top::ui::run(config, cli.subreddit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "terminal ui failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
