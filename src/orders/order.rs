use std::fmt::Write;
use chrono::Local;
use serde::{Deserialize, Serialize};
use crate::orders::cart::CartItem;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub customer: Customer,
    pub items: Vec<CartItem>,
    pub total: f64,
    pub created_at: String,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: u32, customer: Customer, items: Vec<CartItem>) -> Self {
        let total = items.iter().map(|item| item.subtotal).sum();
        Self {
            id,
            customer,
            items,
            total,
            created_at: Local::now().format(DATE_FORMAT).to_string(),
            status: OrderStatus::Pending,
        }
    }

    #[inline(always)]
    pub fn mark_processed(&mut self) {
        self.status = OrderStatus::Processed;
    }

    pub fn invoice(&self) -> String {
        let rule = "-".repeat(40);
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Invoice #{}", self.id);
        let _ = writeln!(out, "Customer: {}", self.customer.name);
        let _ = writeln!(out, "Date: {}", self.created_at);
        let _ = writeln!(out, "{}", rule);
        for item in &self.items {
            let _ = writeln!(
                out,
                "{} x{} @ Q{:.2} - Q{:.2}",
                item.product.name, item.quantity, item.product.price, item.subtotal
            );
        }
        let _ = writeln!(out, "{}", rule);
        let _ = write!(out, "Total: Q{:.2}", self.total);
        out
    }
}
