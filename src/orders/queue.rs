use std::collections::VecDeque;
use crate::error::{CatalogError, Result};
use crate::info;
use crate::orders::cart::Cart;
use crate::orders::order::{Customer, Order};

/// Orders waiting to be processed, first in first out.
pub struct OrderQueue {
    pending: VecDeque<Order>,
    next_id: u32,
    processed: usize,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            next_id: 1,
            processed: 0,
        }
    }

    /// Turns the cart into a pending order at the tail of the queue. The cart is left empty.
    pub fn checkout(&mut self, cart: &mut Cart, customer: Customer) -> Result<&Order> {
        if cart.is_empty() {
            return Err(CatalogError::EmptyCart);
        }
        let order = Order::new(self.next_id, customer, cart.take());
        self.next_id += 1;
        info!("Order #{} queued for {} - Total: Q{:.2}", order.id, order.customer.name, order.total);
        self.pending.push_back(order);
        Ok(&self.pending[self.pending.len() - 1])
    }

    pub fn next(&mut self) -> Option<Order> {
        self.pending.pop_front()
    }

    /// Puts an order that was taken but not confirmed back at the tail.
    pub fn requeue(&mut self, order: Order) {
        self.pending.push_back(order);
    }

    /// Confirms an order taken with [`OrderQueue::next`].
    pub fn mark_processed(&mut self, mut order: Order) -> Order {
        order.mark_processed();
        self.processed += 1;
        info!("Order #{} processed", order.id);
        order
    }

    #[inline(always)]
    pub fn processed(&self) -> usize {
        self.processed
    }

    #[inline(always)]
    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.pending.iter()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for OrderQueue {
    fn default() -> Self {
        Self::new()
    }
}
