// src/cli.rs

use crate::error::SimError;
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::{NeverRestock, ThresholdRestock};
use crate::strategy::traits::RestockPolicy;
use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_DAYS: u32 = 14;

/// Run bakery simulation
#[derive(Debug, Parser)]
#[command(name = "bakery-sim", version)]
pub struct Args {
    /// Number of days to simulate (positive integer). If omitted you'll be prompted.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Fewest customers that can arrive in a day.
    #[arg(long, default_value_t = 8)]
    pub customers_min: u32,

    /// Most customers that can arrive in a day.
    #[arg(long, default_value_t = 25)]
    pub customers_max: u32,

    /// Seed for the random generator.
    #[arg(long, default_value_t = 123, conflicts_with = "unseeded")]
    pub seed: u64,

    /// Draw randomness from the OS instead of a fixed seed.
    #[arg(long)]
    pub unseeded: bool,

    /// Stock level below which an ingredient is restocked at close.
    #[arg(long, default_value_t = 500)]
    pub restock_threshold: u32,

    /// Quantity added to each restocked ingredient.
    #[arg(long, default_value_t = 2000)]
    pub restock_amount: u32,

    /// Let stock run down with no end-of-day restocking.
    #[arg(long)]
    pub no_restock: bool,

    /// Directory for the CSV history and inventory chart.
    #[arg(short, long, default_value = "output")]
    pub outdir: PathBuf,
}

impl Args {
    pub fn to_config(&self, days: u32) -> SimulationConfig {
        SimulationConfig {
            days,
            customers_min: self.customers_min,
            customers_max: self.customers_max,
            seed: (!self.unseeded).then_some(self.seed),
            restock_threshold: self.restock_threshold,
            restock_amount: self.restock_amount,
        }
    }

    /// The end-of-day restock rule selected on the command line.
    pub fn restock_policy(&self) -> Box<dyn RestockPolicy> {
        if self.no_restock {
            Box::new(NeverRestock)
        } else {
            Box::new(ThresholdRestock::new(self.restock_threshold, self.restock_amount))
        }
    }
}

/// Asks for a day count until a positive integer is entered.
///
/// A blank line selects `default_days`. Running out of input aborts with
/// `InvalidDays` carrying the last rejected entry.
pub fn prompt_days<R: BufRead, W: Write>(mut input: R, mut output: W, default_days: u32) -> Result<u32> {
    let mut last_entry = String::new();
    loop {
        write!(output, "Enter number of days to simulate [default {default_days}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(SimError::InvalidDays(last_entry).into());
        }

        let entry = line.trim();
        if entry.is_empty() {
            return Ok(default_days);
        }
        last_entry = entry.to_string();
        match entry.parse::<i64>() {
            Ok(n) if n <= 0 => writeln!(output, "Please enter a positive integer for days.")?,
            Ok(n) => match u32::try_from(n) {
                Ok(days) => return Ok(days),
                Err(_) => writeln!(output, "Please enter a smaller number of days.")?,
            },
            Err(_) => writeln!(
                output,
                "Invalid input - please enter a positive integer (or press Enter to use the default)."
            )?,
        }
    }
}
