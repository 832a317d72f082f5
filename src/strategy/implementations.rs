// src/strategy/implementations.rs

use crate::model::inventory::{Inventory, DEFAULT_RESTOCK_AMOUNT, DEFAULT_RESTOCK_THRESHOLD};
use crate::model::recipe::Ingredient;
use crate::strategy::traits::RestockPolicy;

// =========================================================================
// 1. Threshold Policy
// =========================================================================

/// Tops up every ingredient that has fallen below `threshold` by a fixed
/// `amount`. This is the bakery's standing end-of-day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdRestock {
    pub threshold: u32,
    pub amount: u32,
}

impl ThresholdRestock {
    pub fn new(threshold: u32, amount: u32) -> Self {
        Self { threshold, amount }
    }
}

impl Default for ThresholdRestock {
    fn default() -> Self {
        Self::new(DEFAULT_RESTOCK_THRESHOLD, DEFAULT_RESTOCK_AMOUNT)
    }
}

impl RestockPolicy for ThresholdRestock {
    fn restock(&mut self, inventory: &mut Inventory) -> Vec<Ingredient> {
        inventory.restock_if_needed(self.threshold, self.amount)
    }
}

// =========================================================================
// 2. Never Restock
// =========================================================================

/// Lets stock run down without replenishment.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRestock;

impl RestockPolicy for NeverRestock {
    fn restock(&mut self, _inventory: &mut Inventory) -> Vec<Ingredient> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::recipe::initial_stock;

    #[test]
    fn threshold_defaults() {
        let policy = ThresholdRestock::default();
        assert_eq!(policy.threshold, 500);
        assert_eq!(policy.amount, 2000);
    }

    #[test]
    fn threshold_restocks_low_ingredients() {
        let mut inv = Inventory::new(&initial_stock());
        let restocked = ThresholdRestock::new(150, 10).restock(&mut inv);
        assert_eq!(restocked, vec![Ingredient::Eggs]);
        assert_eq!(inv.quantity(Ingredient::Eggs), 110);
    }

    #[test]
    fn never_restock_leaves_stock_alone() {
        let mut inv = Inventory::new(&initial_stock());
        assert!(NeverRestock.restock(&mut inv).is_empty());
        assert_eq!(inv.snapshot(), initial_stock());
    }
}
