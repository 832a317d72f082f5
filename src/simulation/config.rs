// src/simulation/config.rs

use crate::error::SimError;
use crate::model::inventory::{DEFAULT_RESTOCK_AMOUNT, DEFAULT_RESTOCK_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub days: u32,
    pub customers_min: u32,
    pub customers_max: u32,
    /// `None` draws the generator state from OS entropy.
    pub seed: Option<u64>,
    pub restock_threshold: u32,
    pub restock_amount: u32,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.days == 0 {
            return Err(SimError::InvalidDays(self.days.to_string()));
        }
        if self.customers_max < self.customers_min {
            return Err(SimError::InvalidRange {
                min: self.customers_min,
                max: self.customers_max,
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 14,
            customers_min: 8,
            customers_max: 25,
            seed: Some(123),
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
            restock_amount: DEFAULT_RESTOCK_AMOUNT,
        }
    }
}
