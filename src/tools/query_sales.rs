use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::args::{error_payload, require_date, str_arg};
use crate::db::Database;
use crate::errors::ToolError;
use crate::mcp::{Tool, ToolDefinition};

pub const NAME: &str = "query_sales";

/// Where `query_sales` gets its numbers from.
pub enum SalesBackend {
    /// Aggregates real rows from the store.
    Connected(Rc<Database>),
    /// No store configured: answers with a random revenue figure.
    Mock,
}

/// Revenue report over a date range.
pub struct QuerySalesTool {
    backend: SalesBackend,
}

impl QuerySalesTool {
    pub fn new(backend: SalesBackend) -> Self {
        Self { backend }
    }

    pub fn connected(db: Rc<Database>) -> Self {
        Self::new(SalesBackend::Connected(db))
    }

    pub fn mock() -> Self {
        Self::new(SalesBackend::Mock)
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, SalesBackend::Mock)
    }
}

impl Tool for QuerySalesTool {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            description: "Retrieves sales data for a specific date range. Use this to generate business reports.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "start_date": { "type": "string", "format": "date", "description": "YYYY-MM-DD" },
                    "end_date": { "type": "string", "format": "date", "description": "YYYY-MM-DD" }
                },
                "required": ["start_date", "end_date"]
            }),
        }
    }

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        let (Some(start), Some(end)) = (str_arg(arguments, "start_date"), str_arg(arguments, "end_date")) else {
            return Ok(error_payload("start_date and end_date are required"));
        };
        // Checked in mock mode too, so both backends reject the same input.
        require_date("start_date", &start)?;
        require_date("end_date", &end)?;

        let (total_revenue, transaction_count) = match &self.backend {
            SalesBackend::Connected(db) => {
                let summary = db.sales_summary(&start, &end)?;
                (json!(summary.total_revenue), summary.transaction_count)
            }
            SalesBackend::Mock => (json!(fastrand::u32(10_000..=50_000)), 0),
        };

        Ok(json!({
            "status": "success",
            "period": format!("{start} to {end}"),
            "total_revenue": total_revenue,
            "transaction_count": transaction_count,
            "currency": "USD",
        })
        .to_string())
    }
}
