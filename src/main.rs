//! # order-tracker
//!
//! Walks one order through the tracker: submit, approve, dispatch its first
//! step to a free machine, finish the step, and shut down.

use chrono::{Duration, Utc};
use clap::Parser;
use order_tracker::config::TrackerConfig;
use order_tracker::lifecycle::{setup_tracing, TrackerSystem};
use order_tracker::model::{Order, Priority, Process, ProductItem};
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

#[derive(Debug, Parser)]
#[command(name = "order-tracker", about = "Manufacturing order tracking demo")]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "ORDER_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            TrackerConfig::load(path)?
        }
        None => TrackerConfig::default(),
    };

    let system = TrackerSystem::new(&config)?;

    let now = Utc::now();
    let milling = Process::new(
        "P-10",
        "CNC milling",
        "Bob",
        "6061 bar stock",
        "milled housing",
    )
    .with_plan(now, now + Duration::hours(6));
    let finishing = Process::new(
        "P-20",
        "Deburr and anodize",
        "Carol",
        "milled housing",
        "finished housing",
    )
    .with_plan(now + Duration::hours(6), now + Duration::days(1));
    let order = Order::new("ORD-1", "Acme Robotics", (now + Duration::days(14)).date_naive())
        .with_priority(Priority::High)
        .with_product(ProductItem {
            name: "Gearbox housing".to_string(),
            quantity: 40,
            unit: "pcs".to_string(),
        })
        .with_process(milling)
        .with_process(finishing);

    async {
        system.order_client.add_order(order.clone()).await?;
        let outcome = system.order_client.approve_order(order.order_id.clone()).await?;
        info!(?outcome, "Review finished");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(tracing::info_span!("review"))
    .await?;

    let approved = system.order_client.approved_orders().await?;
    let Some(order) = approved.into_iter().next() else {
        warn!("Nothing approved, stopping");
        system.shutdown().await?;
        return Ok(());
    };

    let idle = system.machine_client.available_machines().await?;
    match (idle.first(), order.sub_tasks.first()) {
        (Some(machine), Some(step)) => {
            let machine_id = machine.id.clone();
            let outcome = system
                .machine_client
                .assign_work(machine_id.clone(), &order, step, "Alice")
                .instrument(tracing::info_span!("dispatch"))
                .await?;
            info!(%machine_id, ?outcome, "Dispatched");

            let outcome = system.machine_client.complete_work(machine_id.clone()).await?;
            info!(%machine_id, ?outcome, "Work completed");
            if let Some(machine) = system.machine_client.find_machine(machine_id).await? {
                info!(
                    machine = %machine.id,
                    status = %machine.status(),
                    history = machine.task_history().len(),
                    "Step finished"
                );
            }
        }
        _ => warn!("No idle machine or no process to dispatch"),
    }

    system.shutdown().await?;
    Ok(())
}
