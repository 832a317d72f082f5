// src/model/inventory.rs

use crate::model::recipe::{Ingredient, IngredientStock, Product};
use tracing::warn;

pub const DEFAULT_RESTOCK_THRESHOLD: u32 = 500;
pub const DEFAULT_RESTOCK_AMOUNT: u32 = 2000;

/// Live ingredient stock shared by every day of a run.
#[derive(Debug, Clone)]
pub struct Inventory {
    stocks: IngredientStock,
}

impl Inventory {
    /// Builds an inventory from its own copy of `stocks`.
    pub fn new(stocks: &IngredientStock) -> Self {
        Self {
            stocks: stocks.clone(),
        }
    }

    /// Current quantity of an ingredient. Missing entries count as zero.
    pub fn quantity(&self, ingredient: Ingredient) -> u32 {
        self.stocks.get(&ingredient).copied().unwrap_or(0)
    }

    /// True when every ingredient in the recipe is available in full.
    pub fn can_make(&self, product: Product) -> bool {
        product
            .ingredients()
            .iter()
            .all(|&(ing, amount)| self.quantity(ing) >= amount)
    }

    /// Deducts one unit's worth of ingredients.
    ///
    /// Does not check feasibility; call `can_make` first. A deduction that
    /// would go below zero leaves the ingredient at zero.
    pub fn consume(&mut self, product: Product) {
        for &(ing, amount) in product.ingredients() {
            let current = self.quantity(ing);
            if current < amount {
                warn!(%product, ingredient = %ing, current, amount, "stock clamped to zero");
            }
            if let Some(qty) = self.stocks.get_mut(&ing) {
                *qty = current.saturating_sub(amount);
            }
        }
    }

    /// Adds `restock_amount` to every ingredient below `threshold`.
    ///
    /// Returns the restocked ingredients in stock order.
    pub fn restock_if_needed(&mut self, threshold: u32, restock_amount: u32) -> Vec<Ingredient> {
        let mut restocked = Vec::new();
        for (ing, qty) in self.stocks.iter_mut() {
            if *qty < threshold {
                *qty = qty.saturating_add(restock_amount);
                restocked.push(*ing);
            }
        }
        restocked
    }

    /// Independent copy of the current stock.
    pub fn snapshot(&self) -> IngredientStock {
        self.stocks.clone()
    }
}
