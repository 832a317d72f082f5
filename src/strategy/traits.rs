// src/strategy/traits.rs

use crate::model::inventory::Inventory;
use crate::model::recipe::Ingredient;
use std::fmt::Debug;

/// Decides how the bakery replenishes stock at the end of each day.
///
/// We require `Send` + `Sync` so independent runs can live on separate threads.
pub trait RestockPolicy: Debug + Send + Sync {
    /// Applies the policy to the live inventory.
    ///
    /// Returns the ingredients that were topped up, in stock order.
    fn restock(&mut self, inventory: &mut Inventory) -> Vec<Ingredient>;
}
