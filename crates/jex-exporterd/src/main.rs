use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use tracing::info;

use jex_collect::{Poller, StatusFetcher};
use jex_metrics::NodeGauges;
use jex_model::parse_targets;
use jex_observe::{LoggerConfig, logger_init};

mod cli;
mod server;

use cli::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1) Logger
    let logger_cfg = LoggerConfig {
        format: args.log_format.parse()?,
        level: args.log_level.clone(),
        ..Default::default()
    };
    logger_init(&logger_cfg)?;

    // 2) Host registry
    let targets = parse_targets(&args.urls);
    if targets.is_empty() {
        bail!("--urls must contain at least one non-empty URL (comma separated)");
    }
    if args.poll_delay == 0 {
        bail!("--poll-delay must be at least 1 second");
    }
    info!("registered {} target(s)", targets.len());

    // 3) Publisher + fetcher
    let gauges = Arc::new(NodeGauges::new()?);
    let fetcher = StatusFetcher::new()?;
    let poller = Poller::new(fetcher, targets, Arc::clone(&gauges));

    if args.one_shot {
        poller.run_cycle().await;
        println!("{}", gauges.render()?);
        return Ok(());
    }

    // 4) Background poll loop, owned by the process lifecycle: it stops
    //    when the process does.
    let interval = Duration::from_secs(args.poll_delay);
    tokio::spawn(poller.run(interval));
    info!("polling every {}s", args.poll_delay);

    // 5) Scrape endpoint
    tokio::select! {
        result = server::serve(&args.listen, gauges) => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down..."),
    }

    Ok(())
}
