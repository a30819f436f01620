use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::args::{limit_arg, require_date, str_arg};
use crate::db::Database;
use crate::errors::ToolError;
use crate::mcp::{Tool, ToolDefinition};

pub const NAME: &str = "list_sales";

/// Order history, newest first, optionally filtered by date.
pub struct ListSalesTool {
    db: Rc<Database>,
}

impl ListSalesTool {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

/// Reads an optional date bound; empty strings count as absent.
fn date_bound(arguments: &Map<String, Value>, field: &str) -> Result<Option<String>, ToolError> {
    match str_arg(arguments, field).filter(|s| !s.is_empty()) {
        Some(date) => {
            require_date(field, &date)?;
            Ok(Some(date))
        }
        None => Ok(None),
    }
}

impl Tool for ListSalesTool {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            description: "Lists recent sales/orders. Optionally filter by date range. Use to show order history.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Max number of sales to return (default 20)",
                        "default": 20
                    },
                    "start_date": {
                        "type": "string",
                        "format": "date",
                        "description": "Filter from this date (YYYY-MM-DD)"
                    },
                    "end_date": {
                        "type": "string",
                        "format": "date",
                        "description": "Filter to this date (YYYY-MM-DD)"
                    }
                },
                "required": []
            }),
        }
    }

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        let limit = limit_arg(arguments, "limit", 20);
        let start = date_bound(arguments, "start_date")?;
        let end = date_bound(arguments, "end_date")?;

        let sales = self
            .db
            .list_sales(limit, start.as_deref(), end.as_deref())?;
        Ok(json!({
            "status": "success",
            "count": sales.len(),
            "sales": sales,
        })
        .to_string())
    }
}
