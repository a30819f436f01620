//! Concrete tools backed by the sales store.
//!
//! Every tool answers with a JSON string carrying a `status` field. Argument
//! problems and unknown rows come back as `{"status":"error","message":...}`;
//! store failures propagate as `ToolError::Fault`.

pub mod args;
pub mod create_order;
pub mod list_customers;
pub mod list_products;
pub mod list_sales;
pub mod query_sales;

use std::rc::Rc;

use crate::db::Database;
use crate::mcp::ToolRegistry;

pub use create_order::CreateOrderTool;
pub use list_customers::ListCustomersTool;
pub use list_products::ListProductsTool;
pub use list_sales::ListSalesTool;
pub use query_sales::{QuerySalesTool, SalesBackend};

/// Builds the registry served by the binary.
///
/// Without a store only `query_sales` is available, in mock mode.
pub fn default_registry(db: Option<Rc<Database>>) -> ToolRegistry {
    match db {
        Some(db) => ToolRegistry::new()
            .with(QuerySalesTool::connected(Rc::clone(&db)))
            .with(ListProductsTool::new(Rc::clone(&db)))
            .with(ListCustomersTool::new(Rc::clone(&db)))
            .with(ListSalesTool::new(Rc::clone(&db)))
            .with(CreateOrderTool::new(db)),
        None => ToolRegistry::new().with(QuerySalesTool::mock()),
    }
}
