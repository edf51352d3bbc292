//! Load-test client for the Userbase HTTP API.
//!
//! Prints the wall time of each scenario and, for the concurrent ones, the
//! per-worker latency summary.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userbase_client::{ClientConfig, UsersClient};
use userbase_loadtest::{
    bulk_insert, point_select, range_select, seed, PointOptions, RangeOptions, RunReport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userbase_loadtest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = UsersClient::new(
        ClientConfig::new(&cli.url).with_timeout(Duration::from_secs(cli.timeout)),
    )?;

    println!("Userbase load test against {}", client.url());
    println!("==============================");

    match cli.command {
        Commands::Insert { count } => {
            let report = bulk_insert(&client, count).await?;
            println!("Inserted {} users", report.inserted);
            println!("Total time (sec): {:.6}", report.elapsed.as_secs_f64());
            if report.inserted > 0 {
                println!(
                    "Average insert (sec): {:.6}",
                    report.elapsed.as_secs_f64() / report.inserted as f64
                );
            }
        }
        Commands::Range {
            connections,
            records,
            range,
            seed: with_seed,
        } => {
            if with_seed {
                seed(&client, records.max(0) as u64).await?;
            }
            let report = range_select(
                &client,
                RangeOptions {
                    connections,
                    records,
                    range,
                },
            )
            .await?;
            print_run("Range select", &report);
        }
        Commands::Point {
            connections,
            records,
            requests,
            seed: with_seed,
        } => {
            if with_seed {
                seed(&client, records.max(0) as u64).await?;
            }
            let report = point_select(
                &client,
                PointOptions {
                    connections,
                    records,
                    requests,
                },
            )
            .await?;
            print_run("Point select", &report);
        }
    }

    Ok(())
}

fn print_run(name: &str, report: &RunReport) {
    println!("\n{}", name);
    if let Some(stats) = &report.stats {
        println!("{}", stats);
    }
    println!("Total time (sec): {:.6}", report.total.as_secs_f64());
}
