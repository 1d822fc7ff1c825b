use clap::Parser;
use tracing_subscriber::EnvFilter;

use phage_matcher::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flags
    let filter = if cli.verbose {
        EnvFilter::new("phage_matcher=debug,info")
    } else if cli.quiet {
        EnvFilter::new("phage_matcher=warn")
    } else {
        EnvFilter::new("phage_matcher=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::matches::run(&cli)
}
