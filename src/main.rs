use clap::Parser;
use movierate::cli::{self, Cli};
use movierate::error::describe_error_code;
use movierate::RatingError;
use tracing::{debug, error, trace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli::resolve_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(cli.verbose, &config))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_line_number(cli.verbose >= 2)
        .init();

    debug!("movierate started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = cli::run(&cli, &config).await {
        error!("Fatal error: {:#}", e);
        match e.downcast_ref::<RatingError>() {
            Some(err) => {
                eprintln!("Error: {}", err.user_message());
                eprintln!("  [E{:04}] {}", err.code(), describe_error_code(err.code()));
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
