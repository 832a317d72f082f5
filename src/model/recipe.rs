// src/model/recipe.rs

use std::collections::BTreeMap;
use std::fmt;

/// Quantity of every ingredient on hand, iterated in `Ingredient` order.
pub type IngredientStock = BTreeMap<Ingredient, u32>;

/// Raw materials held by the bakery.
///
/// The declaration order is the order stock maps iterate in, so it also fixes
/// the order of the restocked list in each day record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ingredient {
    Flour,
    Yeast,
    Water,
    Sugar,
    Eggs,
    Oil,
    Butter,
}

impl Ingredient {
    pub const ALL: [Ingredient; 7] = [
        Ingredient::Flour,
        Ingredient::Yeast,
        Ingredient::Water,
        Ingredient::Sugar,
        Ingredient::Eggs,
        Ingredient::Oil,
        Ingredient::Butter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Flour => "flour",
            Ingredient::Yeast => "yeast",
            Ingredient::Water => "water",
            Ingredient::Sugar => "sugar",
            Ingredient::Eggs => "eggs",
            Ingredient::Oil => "oil",
            Ingredient::Butter => "butter",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Items on sale. Each variant carries a fixed price and recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Product {
    Bread,
    Cake,
    Donut,
    Cookie,
}

impl Product {
    pub const ALL: [Product; 4] = [Product::Bread, Product::Cake, Product::Donut, Product::Cookie];

    pub fn name(&self) -> &'static str {
        match self {
            Product::Bread => "Bread",
            Product::Cake => "Cake",
            Product::Donut => "Donut",
            Product::Cookie => "Cookie",
        }
    }

    /// Sale price of one unit.
    pub fn price(&self) -> u32 {
        match self {
            Product::Bread => 40,
            Product::Cake => 150,
            Product::Donut => 50,
            Product::Cookie => 20,
        }
    }

    /// Ingredients needed to bake one unit.
    pub fn ingredients(&self) -> &'static [(Ingredient, u32)] {
        use Ingredient::*;
        match self {
            Product::Bread => &[(Flour, 200), (Yeast, 5), (Water, 100)],
            Product::Cake => &[(Flour, 300), (Sugar, 100), (Eggs, 3), (Butter, 50)],
            Product::Donut => &[(Flour, 80), (Sugar, 20), (Oil, 15)],
            Product::Cookie => &[(Flour, 50), (Sugar, 30), (Butter, 15)],
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stock the bakery opens with on day one.
pub fn initial_stock() -> IngredientStock {
    use Ingredient::*;
    IngredientStock::from([
        (Flour, 5000),
        (Yeast, 200),
        (Water, 5000),
        (Sugar, 2000),
        (Eggs, 100),
        (Oil, 1000),
        (Butter, 800),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_iterates_in_declaration_order() {
        let keys: Vec<Ingredient> = initial_stock().keys().copied().collect();
        assert_eq!(keys, Ingredient::ALL.to_vec());
    }

    #[test]
    fn bread_recipe_matches_catalog() {
        assert_eq!(Product::Bread.price(), 40);
        assert_eq!(
            Product::Bread.ingredients(),
            &[
                (Ingredient::Flour, 200),
                (Ingredient::Yeast, 5),
                (Ingredient::Water, 100)
            ]
        );
    }

    #[test]
    fn every_recipe_uses_known_stock() {
        let stock = initial_stock();
        for product in Product::ALL {
            for (ing, amount) in product.ingredients() {
                assert!(stock.contains_key(ing), "{product} needs {ing}");
                assert!(*amount > 0);
            }
        }
    }

    #[test]
    fn names_display() {
        assert_eq!(Ingredient::Eggs.to_string(), "eggs");
        assert_eq!(Product::Cookie.to_string(), "Cookie");
    }
}
