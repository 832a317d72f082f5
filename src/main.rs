mod cli;
mod error;
mod io;
mod model;
mod simulation;
mod strategy;

use crate::cli::Args;
use crate::io::{chart, reporting};
use crate::model::inventory::Inventory;
use crate::model::recipe::{initial_stock, Ingredient};
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::BakerySimulation;
use crate::strategy::traits::RestockPolicy;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Bakery Simulation in Rust ===");

    // 1. SETUP CONFIGURATION
    let args = Args::parse();
    let days = match args.days {
        Some(days) => days,
        None => cli::prompt_days(std::io::stdin().lock(), std::io::stdout(), cli::DEFAULT_DAYS)?,
    };
    let config = args.to_config(days);
    config.validate()?;

    run_demo(config, args.restock_policy(), &args.outdir)
}

fn run_demo(config: SimulationConfig, policy: Box<dyn RestockPolicy>, outdir: &Path) -> Result<()> {
    std::fs::create_dir_all(outdir)
        .with_context(|| format!("creating output directory {}", outdir.display()))?;

    // 2. INITIALIZE SIMULATION
    let mut sim = BakerySimulation::new(config, Inventory::new(&initial_stock())).with_policy(policy);
    let days = sim.config().days;

    // 3. RUN SIMULATION
    println!("\nRunning bakery simulation for {days} days...");
    sim.run()?;

    // 4. EXPORT RESULTS
    let csv_path = reporting::history_csv_path(outdir, days);
    reporting::write_simulation_log(&csv_path, sim.history())?;
    println!("History saved to {}", csv_path.display());

    let chart_path = reporting::inventory_chart_path(outdir, days);
    if let Some(saved) = chart::plot_inventory(&chart_path, sim.history())? {
        println!("Inventory plot saved to {}", saved.display());
    }

    // 5. PRINT SUMMARY
    let summary = sim.summary();
    println!("\n--- Simulation Summary ---");
    println!("Days simulated: {}", summary.days);
    println!("Total revenue: {}", summary.total_revenue);
    for (product, units) in &summary.total_sales {
        println!("{product}: {units}");
    }
    println!("Closing stock:");
    for ingredient in Ingredient::ALL {
        println!("  {ingredient}: {}", sim.inventory().quantity(ingredient));
    }
    println!("--------------------------");

    Ok(())
}
