mod cmd;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "issue-backfill",
    about = "Back-fill templated descriptions into blank tracker issues",
    version
)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = cmd::run::run() {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
