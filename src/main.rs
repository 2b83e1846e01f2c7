use std::{env, process};

use anyhow::Context;
use log::info;
use orchestrator::configs::CoordinatorConfig;
use worker::WorkerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Read the arguments to determine if it's the coordinator or a client
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <coordinator|client> <config.json>", args[0]);
        process::exit(1);
    }

    let mode = &args[1];
    let path = &args[2];

    match mode.as_str() {
        "coordinator" => {
            let config = CoordinatorConfig::load(path)
                .with_context(|| format!("loading coordinator config from {path}"))?;
            info!("starting coordinator at {}", config.bind_addr());
            orchestrator::run(config).await?;
        }
        "client" => {
            let config = WorkerConfig::load(path)
                .with_context(|| format!("loading client config from {path}"))?;
            info!("starting client {} at {}", config.id, config.bind_addr());
            worker::run(config).await?;
        }
        _ => {
            eprintln!("Unknown mode: {mode}. You must use 'coordinator' or 'client'.");
            process::exit(1);
        }
    }

    Ok(())
}
