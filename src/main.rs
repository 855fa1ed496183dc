//! `mictl` 바이너리 진입점.

use mictl::interface::cli::Cli;

#[tokio::main]
async fn main() {
    let parsed = Cli::parse_action();

    let default_filter = if parsed.verbose { "mictl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    if let Err(err) = mictl::run(parsed.action).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
