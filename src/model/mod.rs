pub mod inventory;
pub mod recipe;
