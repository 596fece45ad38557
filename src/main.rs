// src/main.rs
use std::process::exit;
use anyhow::Result;
use clap::Parser;
use tracing::{info, error, Level};

use userhunt::cli::{App, Args, Commands};
use userhunt::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the result lines
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Some(Commands::Init { force }) => match Config::init(*force) {
            Ok(path) => println!("Configuration initialized at {}", path.display()),
            Err(e) => {
                error!("Failed to initialize configuration: {}", e);
                exit(1);
            }
        },
        Some(Commands::Sites { .. }) => {
            let app = App::new(load_config(&args).with_overrides(args.targets_override(), None, None));
            match app.load_targets(&[]) {
                Ok(targets) => {
                    for target in &targets {
                        println!("{}", target.name);
                    }
                }
                Err(e) => {
                    error!("{}", e);
                    exit(1);
                }
            }
        }
        None => {
            let check = &args.check;
            let app = App::new(load_config(&args).with_overrides(
                args.targets_override(),
                check.timeout,
                check.max_concurrency,
            ));

            info!("Starting userhunt v{}", env!("CARGO_PKG_VERSION"));
            if let Err(e) = app.run_check(check).await {
                error!("Check failed: {}", e);
                exit(1);
            }
        }
    }

    Ok(())
}

/// Load settings or stop the run before any probing starts
fn load_config(args: &Args) -> Config {
    match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            exit(1);
        }
    }
}
