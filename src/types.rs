use serde::{Deserialize, Serialize};

/// A catalog entry from the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub unit_price: f64,
}

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A recorded sale joined with the names of its customer and product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub sale_date: String,
}

/// A sale about to be inserted. `sale_date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub sale_date: String,
}

/// Aggregate revenue over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub transaction_count: i64,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableCounts {
    pub products: i64,
    pub customers: i64,
    pub sales: i64,
}

impl TableCounts {
    pub fn total(&self) -> i64 {
        self.products + self.customers + self.sales
    }
}

/// Rounds a monetary amount to cents.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_money_to_cents() {
        assert_eq!(round_money(19.99 * 3.0), 59.97);
        assert_eq!(round_money(2.499 * 2.0), 5.0);
        assert_eq!(round_money(0.0), 0.0);
    }

    #[test]
    fn table_counts_total() {
        let counts = TableCounts {
            products: 30,
            customers: 70,
            sales: 900,
        };
        assert_eq!(counts.total(), 1000);
    }
}
