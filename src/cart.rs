//! Shopping cart: products and per-product quantity tracking.
//!
//! Independent of the library catalog; shares only the crate error type.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Caller-assigned unique identifier
    pub id: i32,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// One cart line: a product and how many of it are in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Shopping cart, one line per product id, in insertion order
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ShoppingCart {
    lines: IndexMap<i32, CartLine>,
}

impl ShoppingCart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product to the cart.
    ///
    /// A product already in the cart has its quantity increased; the price
    /// recorded with the existing line is kept.
    pub fn add_product(&mut self, product: Product, quantity: u32) -> AppResult<()> {
        product
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if quantity == 0 {
            return Err(AppError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }
        match self.lines.get_mut(&product.id) {
            Some(line) => line.quantity += quantity,
            None => {
                self.lines.insert(product.id, CartLine { product, quantity });
            }
        }
        Ok(())
    }

    /// Remove a quantity of a product from the cart.
    ///
    /// With no quantity, or a quantity covering the whole line, the line is
    /// dropped; otherwise the line keeps the remainder.
    pub fn remove_product(&mut self, product_id: i32, quantity: Option<u32>) -> AppResult<()> {
        if quantity == Some(0) {
            return Err(AppError::Validation(
                "Quantity must be positive".to_string(),
            ));
        }
        let current = self
            .lines
            .get(&product_id)
            .map(|line| line.quantity)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not in cart", product_id)))?;
        match quantity {
            Some(removed) if removed < current => {
                if let Some(line) = self.lines.get_mut(&product_id) {
                    line.quantity -= removed;
                }
            }
            _ => {
                self.lines.shift_remove(&product_id);
            }
        }
        Ok(())
    }

    /// Sum of price times quantity over all lines
    pub fn total_price(&self) -> Decimal {
        self.lines
            .values()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum()
    }

    /// Total number of product units in the cart
    pub fn product_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Cart line for a product id, if present
    pub fn line(&self, product_id: i32) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    /// Number of distinct products in the cart
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
