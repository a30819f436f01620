use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::args::limit_arg;
use crate::db::Database;
use crate::errors::ToolError;
use crate::mcp::{Tool, ToolDefinition};

pub const NAME: &str = "list_products";

/// Catalog listing: names, SKUs and prices.
pub struct ListProductsTool {
    db: Rc<Database>,
}

impl ListProductsTool {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl Tool for ListProductsTool {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            description: "Lists all products in the catalog. Use to show product names, SKUs, and prices.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Max number of products to return (default 50)",
                        "default": 50
                    }
                },
                "required": []
            }),
        }
    }

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        let products = self.db.list_products(limit_arg(arguments, "limit", 50))?;
        Ok(json!({
            "status": "success",
            "count": products.len(),
            "products": products,
        })
        .to_string())
    }
}
