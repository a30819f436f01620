use rusqlite::params;
use rusqlite::OptionalExtension;

use super::connection::Database;
use crate::errors::{Result, SalesAgentError};
use crate::types::*;

// ---------------------------------------------------------------------------
// Helper: map a rusqlite row to domain types
// ---------------------------------------------------------------------------

fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("name")?,
        sku: row.get("sku")?,
        unit_price: row.get("unit_price")?,
    })
}

fn row_to_customer(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
    })
}

fn row_to_sale(row: &rusqlite::Row) -> rusqlite::Result<SaleRecord> {
    Ok(SaleRecord {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        customer_name: row.get("customer_name")?,
        product_id: row.get("product_id")?,
        product_name: row.get("product_name")?,
        quantity: row.get("quantity")?,
        unit_price: row.get("unit_price")?,
        total: row.get("total")?,
        sale_date: row.get("sale_date")?,
    })
}

/// Builds the error mapper for a failed store call.
fn db_error(operation: &'static str, what: &'static str) -> impl Fn(rusqlite::Error) -> SalesAgentError {
    move |e| SalesAgentError::Database {
        message: format!("failed to {what}: {e}"),
        operation: operation.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Sales
// ---------------------------------------------------------------------------

impl Database {
    /// Sums revenue and counts sales dated within `[start, end]` inclusive.
    pub fn sales_summary(&self, start: &str, end: &str) -> Result<SalesSummary> {
        self.conn()
            .query_row(
                "SELECT COALESCE(SUM(total), 0.0) AS total_revenue, COUNT(*) AS transaction_count
                 FROM sales WHERE sale_date BETWEEN ?1 AND ?2",
                params![start, end],
                |row| {
                    Ok(SalesSummary {
                        total_revenue: row.get("total_revenue")?,
                        transaction_count: row.get("transaction_count")?,
                    })
                },
            )
            .map_err(db_error("sales_summary", "summarize sales"))
    }

    /// Lists the most recent sales, newest first, optionally bounded by date.
    pub fn list_sales(
        &self,
        limit: i64,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<SaleRecord>> {
        let mut sql = String::from(
            "SELECT s.id, s.customer_id, c.name AS customer_name, s.product_id,
                    p.name AS product_name, s.quantity, s.unit_price, s.total, s.sale_date
             FROM sales s
             JOIN customers c ON c.id = s.customer_id
             JOIN products p ON p.id = s.product_id",
        );

        let mut clauses: Vec<&str> = Vec::new();
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
        if let Some(start) = start {
            clauses.push("s.sale_date >= ?");
            param_values.push(Box::new(start.to_string()));
        }
        if let Some(end) = end {
            clauses.push("s.sale_date <= ?");
            param_values.push(Box::new(end.to_string()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY s.sale_date DESC, s.id DESC LIMIT ?");
        param_values.push(Box::new(limit));

        let param_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|b| b.as_ref()).collect();

        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(db_error("list_sales", "prepare query"))?;
        let rows = stmt
            .query_map(param_refs.as_slice(), row_to_sale)
            .map_err(db_error("list_sales", "query sales"))?;

        let mut sales = Vec::new();
        for row in rows {
            sales.push(row.map_err(db_error("list_sales", "read sale row"))?);
        }
        Ok(sales)
    }

    /// Inserts a sale and returns its new id.
    pub fn insert_sale(&self, sale: &NewSale) -> Result<i64> {
        self.conn()
            .execute(
                "INSERT INTO sales (customer_id, product_id, quantity, unit_price, total, sale_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    sale.customer_id,
                    sale.product_id,
                    sale.quantity,
                    sale.unit_price,
                    sale.total,
                    sale.sale_date,
                ],
            )
            .map_err(db_error("insert_sale", "insert sale"))?;
        Ok(self.conn().last_insert_rowid())
    }

    // -----------------------------------------------------------------------
    // Products
    // -----------------------------------------------------------------------

    /// Lists products ordered by id.
    pub fn list_products(&self, limit: i64) -> Result<Vec<Product>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, sku, unit_price FROM products ORDER BY id LIMIT ?1")
            .map_err(db_error("list_products", "prepare query"))?;
        let rows = stmt
            .query_map(params![limit], row_to_product)
            .map_err(db_error("list_products", "query products"))?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row.map_err(db_error("list_products", "read product row"))?);
        }
        Ok(products)
    }

    /// Returns the unit price of a product, or `None` if it does not exist.
    pub fn product_unit_price(&self, product_id: i64) -> Result<Option<f64>> {
        self.conn()
            .query_row(
                "SELECT unit_price FROM products WHERE id = ?1",
                params![product_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_error("product_unit_price", "look up product"))
    }

    /// Inserts a product and returns its new id.
    pub fn insert_product(&self, name: &str, sku: &str, unit_price: f64) -> Result<i64> {
        self.conn()
            .execute(
                "INSERT INTO products (name, sku, unit_price) VALUES (?1, ?2, ?3)",
                params![name, sku, unit_price],
            )
            .map_err(db_error("insert_product", "insert product"))?;
        Ok(self.conn().last_insert_rowid())
    }

    // -----------------------------------------------------------------------
    // Customers
    // -----------------------------------------------------------------------

    /// Lists customers ordered by id.
    pub fn list_customers(&self, limit: i64) -> Result<Vec<Customer>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, email FROM customers ORDER BY id LIMIT ?1")
            .map_err(db_error("list_customers", "prepare query"))?;
        let rows = stmt
            .query_map(params![limit], row_to_customer)
            .map_err(db_error("list_customers", "query customers"))?;

        let mut customers = Vec::new();
        for row in rows {
            customers.push(row.map_err(db_error("list_customers", "read customer row"))?);
        }
        Ok(customers)
    }

    pub fn customer_exists(&self, customer_id: i64) -> Result<bool> {
        let found: Option<i64> = self
            .conn()
            .query_row(
                "SELECT id FROM customers WHERE id = ?1",
                params![customer_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_error("customer_exists", "look up customer"))?;
        Ok(found.is_some())
    }

    /// Inserts a customer and returns its new id.
    pub fn insert_customer(&self, name: &str, email: &str) -> Result<i64> {
        self.conn()
            .execute(
                "INSERT INTO customers (name, email) VALUES (?1, ?2)",
                params![name, email],
            )
            .map_err(db_error("insert_customer", "insert customer"))?;
        Ok(self.conn().last_insert_rowid())
    }

    // -----------------------------------------------------------------------
    // Maintenance
    // -----------------------------------------------------------------------

    /// Returns the number of rows in each table.
    pub fn counts(&self) -> Result<TableCounts> {
        self.conn()
            .query_row(
                "SELECT (SELECT COUNT(*) FROM products),
                        (SELECT COUNT(*) FROM customers),
                        (SELECT COUNT(*) FROM sales)",
                [],
                |row| {
                    Ok(TableCounts {
                        products: row.get(0)?,
                        customers: row.get(1)?,
                        sales: row.get(2)?,
                    })
                },
            )
            .map_err(db_error("counts", "count rows"))
    }

    /// Deletes every row and resets the id sequences.
    pub fn truncate_all(&self) -> Result<()> {
        self.conn()
            .execute_batch(
                "DELETE FROM sales;
                 DELETE FROM products;
                 DELETE FROM customers;
                 DELETE FROM sqlite_sequence WHERE name IN ('sales', 'products', 'customers');",
            )
            .map_err(db_error("truncate_all", "truncate tables"))
    }
}
