// src/simulation/engine.rs

use crate::error::SimError;
use crate::io::demand::{draw_customer_count, pick_product};
use crate::model::inventory::Inventory;
use crate::model::recipe::{Ingredient, IngredientStock, Product};
use crate::simulation::config::SimulationConfig;
use crate::strategy::implementations::ThresholdRestock;
use crate::strategy::traits::RestockPolicy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Outcome of one business day. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub day: u32,
    /// Customers who walked in, served or not.
    pub customers: u32,
    pub sales: BTreeMap<Product, u32>,
    pub revenue: u64,
    pub restocked: Vec<Ingredient>,
    /// Stock at close of business, after restocking.
    pub inventory: IngredientStock,
}

impl DayRecord {
    pub fn units_sold(&self) -> u32 {
        self.sales.values().sum()
    }
}

/// Totals across a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub days: usize,
    pub total_revenue: u64,
    pub total_sales: BTreeMap<Product, u64>,
}

pub struct BakerySimulation {
    config: SimulationConfig,
    inventory: Inventory,
    restock_policy: Box<dyn RestockPolicy>,
    rng: ChaCha8Rng,
    history: Vec<DayRecord>,
}

impl BakerySimulation {
    pub fn new(config: SimulationConfig, inventory: Inventory) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let restock_policy = Box::new(ThresholdRestock::new(
            config.restock_threshold,
            config.restock_amount,
        ));

        Self {
            config,
            inventory,
            restock_policy,
            rng,
            history: Vec::new(),
        }
    }

    /// Replaces the end-of-day restock policy.
    pub fn with_policy(mut self, policy: Box<dyn RestockPolicy>) -> Self {
        self.restock_policy = policy;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }

    /// Runs the configured number of days.
    pub fn run(&mut self) -> Result<&[DayRecord], SimError> {
        let SimulationConfig {
            days,
            customers_min,
            customers_max,
            ..
        } = self.config;
        self.simulate(days, customers_min, customers_max)
    }

    /// Simulates days `1..=days` in order, each seeing the stock the previous
    /// day left behind.
    pub fn simulate(
        &mut self,
        days: u32,
        customers_min: u32,
        customers_max: u32,
    ) -> Result<&[DayRecord], SimError> {
        if days == 0 {
            return Err(SimError::InvalidDays(days.to_string()));
        }
        if customers_max < customers_min {
            return Err(SimError::InvalidRange {
                min: customers_min,
                max: customers_max,
            });
        }

        info!(days, customers_min, customers_max, seed = ?self.config.seed, "starting simulation");
        for day in 1..=days {
            let record = self.simulate_day(day, customers_min, customers_max)?;
            if day % 5 == 0 {
                info!(
                    day,
                    revenue = record.revenue,
                    restocked = record.restocked.len(),
                    "progress"
                );
            }
        }
        info!(days = self.history.len(), "simulation complete");
        Ok(&self.history)
    }

    /// Simulates one business day with a random customer count and random
    /// product requests.
    pub fn simulate_day(
        &mut self,
        day: u32,
        customers_min: u32,
        customers_max: u32,
    ) -> Result<DayRecord, SimError> {
        let customers = draw_customer_count(&mut self.rng, customers_min, customers_max)?;
        let rng = &mut self.rng;
        let requests: Vec<Product> = (0..customers).map(|_| pick_product(rng)).collect();
        Ok(self.serve_customers(day, &requests))
    }

    /// Serves the given requests in order, then restocks and records the day.
    ///
    /// A request that the stock cannot cover is dropped.
    pub fn serve_customers(&mut self, day: u32, requests: &[Product]) -> DayRecord {
        let mut sales: BTreeMap<Product, u32> = Product::ALL.iter().map(|&p| (p, 0)).collect();
        let mut revenue: u64 = 0;
        let mut turned_away = 0u32;

        for &product in requests {
            if self.inventory.can_make(product) {
                self.inventory.consume(product);
                *sales.entry(product).or_insert(0) += 1;
                revenue += u64::from(product.price());
            } else {
                turned_away += 1;
            }
        }

        let restocked = self.restock_policy.restock(&mut self.inventory);

        let record = DayRecord {
            day,
            customers: requests.len() as u32,
            sales,
            revenue,
            restocked,
            inventory: self.inventory.snapshot(),
        };
        debug!(
            day,
            customers = record.customers,
            sold = record.units_sold(),
            turned_away,
            revenue,
            restocked = ?record.restocked,
            "day closed"
        );

        self.history.push(record.clone());
        record
    }

    /// Revenue and per-product unit sales summed over the history.
    pub fn summary(&self) -> RunSummary {
        let mut total_sales: BTreeMap<Product, u64> =
            Product::ALL.iter().map(|&p| (p, 0)).collect();
        for record in &self.history {
            for (product, count) in &record.sales {
                *total_sales.entry(*product).or_insert(0) += u64::from(*count);
            }
        }
        RunSummary {
            days: self.history.len(),
            total_revenue: self.history.iter().map(|r| r.revenue).sum(),
            total_sales,
        }
    }
}
