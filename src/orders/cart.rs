use serde::{Deserialize, Serialize};
use crate::error::{CatalogError, Result};
use crate::scheme::Product;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub subtotal: f64,
}

/// Items in the order they were added. Adding the same product twice keeps two lines.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, product: Product, quantity: u32) -> Result<&CartItem> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity(quantity));
        }
        let subtotal = product.price * quantity as f64;
        self.items.push(CartItem { product, quantity, subtotal });
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.subtotal).sum()
    }

    #[inline(always)]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empties the cart, handing its items over.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
