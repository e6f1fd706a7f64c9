use serde::{Deserialize, Serialize};
use crate::error::{CatalogError, Result};
use crate::index::{ChainedHashTable, Index};
use crate::info;
use crate::orders::Customer;
use crate::search::contains_search;
use crate::settings::cfg::DEFAULT_INDEX_BUCKETS;
use crate::sort::quick_sort;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisteredCustomer {
    pub id: u32,
    pub customer: Customer,
}

impl RegisteredCustomer {
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.customer.name
    }
}

/// Registered customers in registration order, with an id index.
pub struct CustomerDirectory {
    customers: Vec<RegisteredCustomer>,
    index: ChainedHashTable<u32, Customer>,
    next_id: u32,
}

impl CustomerDirectory {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            customers: Vec::new(),
            index: ChainedHashTable::new(bucket_count),
            next_id: 1,
        }
    }

    /// Registers a customer under the next sequential id. A blank name is rejected.
    pub fn register(&mut self, customer: Customer) -> Result<u32> {
        if customer.name.trim().is_empty() {
            return Err(CatalogError::MissingName);
        }
        let id = self.next_id;
        self.next_id += 1;
        info!("Customer {} registered as #{}", customer.name, id);
        self.index.insert(id, customer.clone());
        self.customers.push(RegisteredCustomer { id, customer });
        Ok(id)
    }

    #[inline(always)]
    pub fn find_by_id(&self, id: u32) -> Option<&Customer> {
        self.index.find(&id)
    }

    #[inline(always)]
    pub fn list(&self) -> &[RegisteredCustomer] {
        &self.customers
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Alphabetical, ignoring case.
    pub fn sorted_by_name(&self) -> Vec<RegisteredCustomer> {
        quick_sort(&self.customers, |c| c.customer.name.to_lowercase())
    }

    /// Every customer whose name contains `fragment`, ignoring case, in registration order.
    pub fn search_by_name(&self, fragment: &str) -> Vec<&RegisteredCustomer> {
        contains_search(&self.customers, fragment, RegisteredCustomer::name)
    }
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_BUCKETS)
    }
}
