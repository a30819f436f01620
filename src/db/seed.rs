//! Demo data loader.
//!
//! Replaces the contents of the store with a fixed-size synthetic data set:
//! 30 products, 70 customers and 900 sales spread over 2024.

use tracing::info;

use super::connection::Database;
use crate::errors::{Result, SalesAgentError};
use crate::types::{round_money, NewSale, TableCounts};

pub const SEED_PRODUCTS: usize = 30;
pub const SEED_CUSTOMERS: usize = 70;
pub const SEED_SALES: usize = 900;

const DAYS_IN_MONTH_2024: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Truncates all tables and inserts the demo data set inside one transaction.
///
/// Returns the row counts read back after the commit.
pub fn seed_demo_data(db: &Database, rng: &mut fastrand::Rng) -> Result<TableCounts> {
    let tx = db
        .conn()
        .unchecked_transaction()
        .map_err(|e| SalesAgentError::Database {
            message: format!("failed to begin transaction: {e}"),
            operation: "seed_demo_data".to_string(),
        })?;

    db.truncate_all()?;

    let mut prices = Vec::with_capacity(SEED_PRODUCTS);
    for i in 1..=SEED_PRODUCTS {
        let unit_price = round_money(9.99 + rng.u32(0..=400) as f64 / 10.0);
        db.insert_product(&format!("Product {i}"), &format!("PRD-{i:03}"), unit_price)?;
        prices.push(unit_price);
    }
    info!(count = SEED_PRODUCTS, "seeded products");

    for i in 1..=SEED_CUSTOMERS {
        db.insert_customer(
            &format!("Customer {i}"),
            &format!("customer{i}@example.com"),
        )?;
    }
    info!(count = SEED_CUSTOMERS, "seeded customers");

    for _ in 0..SEED_SALES {
        let product_index = rng.usize(0..SEED_PRODUCTS);
        let quantity = rng.i64(1..=10);
        let unit_price = prices[product_index];
        db.insert_sale(&NewSale {
            customer_id: rng.i64(1..=SEED_CUSTOMERS as i64),
            product_id: product_index as i64 + 1,
            quantity,
            unit_price,
            total: round_money(quantity as f64 * unit_price),
            sale_date: random_date_2024(rng),
        })?;
    }
    info!(count = SEED_SALES, "seeded sales");

    tx.commit().map_err(|e| SalesAgentError::Database {
        message: format!("failed to commit transaction: {e}"),
        operation: "seed_demo_data".to_string(),
    })?;

    db.counts()
}

fn random_date_2024(rng: &mut fastrand::Rng) -> String {
    let month = rng.usize(0..12);
    let day = rng.u32(1..=DAYS_IN_MONTH_2024[month]);
    format!("2024-{:02}-{:02}", month + 1, day)
}
