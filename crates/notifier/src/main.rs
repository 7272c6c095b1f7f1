use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use alertmanager_notifier::{cli::Cli, failure_message, HttpTransport, Notifier};

fn init_logging(debug: bool) {
    // Only our own crates go to DEBUG; HTTP internals stay at WARN.
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::new(format!(
        "warn,alertmanager_notifier={level},notify_alertmanager={level}"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

async fn notify(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.notifier_config().context("invalid --alert-api-url")?;
    let check = cli.check_result()?;

    let transport = HttpTransport::new().context("failed to build HTTP client")?;
    let notifier = Notifier::new(config, Box::new(transport));

    notifier
        .run(&check)
        .await
        .with_context(|| format!("failed to post alert to {}", notifier.config().alert_api_url))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_with_build_info();
    init_logging(cli.debug);

    debug!("CLI arguments");
    debug!("{:?}", cli);

    match notify(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
