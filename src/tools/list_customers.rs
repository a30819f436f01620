use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::args::limit_arg;
use crate::db::Database;
use crate::errors::ToolError;
use crate::mcp::{Tool, ToolDefinition};

pub const NAME: &str = "list_customers";

pub struct ListCustomersTool {
    db: Rc<Database>,
}

impl ListCustomersTool {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

impl Tool for ListCustomersTool {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            description: "Lists customers. Use to show customer names and emails.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Max number of customers to return (default 50)",
                        "default": 50
                    }
                },
                "required": []
            }),
        }
    }

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        let customers = self.db.list_customers(limit_arg(arguments, "limit", 50))?;
        Ok(json!({
            "status": "success",
            "count": customers.len(),
            "customers": customers,
        })
        .to_string())
    }
}
