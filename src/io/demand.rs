// src/io/demand.rs

use crate::error::SimError;
use crate::model::recipe::Product;
use rand::Rng;

/// Draws how many customers walk in today, uniformly from `[min, max]`.
///
/// Fails with `InvalidRange` when the bounds are inverted.
pub fn draw_customer_count<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> Result<u32, SimError> {
    if max < min {
        return Err(SimError::InvalidRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Picks the product one customer asks for, uniformly over the catalog.
pub fn pick_product<R: Rng + ?Sized>(rng: &mut R) -> Product {
    Product::ALL[rng.gen_range(0..Product::ALL.len())]
}
