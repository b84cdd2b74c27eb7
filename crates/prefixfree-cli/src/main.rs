mod cli;
mod commands;

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match prefixfree_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("prefixfree: {e}");
            return ExitCode::FAILURE;
        }
    };

    // --log-level wins over the config file
    let log_directive = args
        .log_level
        .as_deref()
        .map(cli::log_directive)
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "prefixfree=info".parse().unwrap()),
            ),
        )
        .init();

    match commands::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("prefixfree: {e}");
            ExitCode::FAILURE
        }
    }
}
