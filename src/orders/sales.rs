use crate::error::{CatalogError, Result};

pub const MONTHS: usize = 12;
pub const MONTH_NAMES: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Units sold per product (row) and month (column).
pub struct SalesMatrix {
    rows: Vec<[u64; MONTHS]>,
}

impl SalesMatrix {
    pub fn new(products: usize) -> Self {
        Self { rows: vec![[0; MONTHS]; products] }
    }

    #[inline(always)]
    pub fn products(&self) -> usize {
        self.rows.len()
    }

    /// Adds `quantity` units to the cell.
    pub fn record_sale(&mut self, product: usize, month: usize, quantity: u64) -> Result<()> {
        let products = self.rows.len();
        let row = self.rows.get_mut(product).ok_or(CatalogError::OutOfRange {
            what: "product",
            value: product,
            limit: products,
        })?;
        let cell = row.get_mut(month).ok_or(CatalogError::OutOfRange {
            what: "month",
            value: month,
            limit: MONTHS,
        })?;
        *cell += quantity;
        Ok(())
    }

    pub fn monthly(&self, product: usize) -> Option<&[u64; MONTHS]> {
        self.rows.get(product)
    }

    pub fn product_total(&self, product: usize) -> u64 {
        self.rows.get(product).map_or(0, |row| row.iter().sum())
    }

    /// Month with the most units for `product`; the earliest month wins a tie.
    pub fn best_month(&self, product: usize) -> Option<usize> {
        let row = self.rows.get(product)?;
        let mut best = 0;
        for month in 1..MONTHS {
            if row[month] > row[best] {
                best = month;
            }
        }
        Some(best)
    }

    /// One report row: name, yearly total and best month, e.g. `Vinilo Tornasol   28   Mar`.
    pub fn report_line(&self, product: usize, name: &str) -> Option<String> {
        let best = self.best_month(product)?;
        let short: String = name.chars().take(30).collect();
        Some(format!("{:<30} {:<15} {:<15}", short, self.product_total(product), MONTH_NAMES[best]))
    }

    /// Product with the highest yearly total and that total; the lowest row wins a tie.
    /// `None` for an empty matrix.
    pub fn best_seller(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for product in 0..self.rows.len() {
            let total = self.product_total(product);
            if best.map_or(true, |(_, max)| total > max) {
                best = Some((product, total));
            }
        }
        best
    }
}
