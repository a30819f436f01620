use std::rc::Rc;

use serde_json::{json, Map, Value};

use super::args::{error_payload, int_arg, require_date, str_arg};
use crate::db::Database;
use crate::errors::ToolError;
use crate::mcp::{Tool, ToolDefinition};
use crate::types::{round_money, NewSale};

pub const NAME: &str = "create_order";

/// Records a sale for an existing customer and product.
pub struct CreateOrderTool {
    db: Rc<Database>,
}

impl CreateOrderTool {
    pub fn new(db: Rc<Database>) -> Self {
        Self { db }
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

impl Tool for CreateOrderTool {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: NAME.to_string(),
            description: "Creates a new sale/order for a customer and product. Use when the user wants to place an order.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "customer_id": { "type": "integer", "description": "Customer ID" },
                    "product_id": { "type": "integer", "description": "Product ID" },
                    "quantity": { "type": "integer", "description": "Quantity to order", "minimum": 1 },
                    "sale_date": {
                        "type": "string",
                        "format": "date",
                        "description": "Date of sale (YYYY-MM-DD). Defaults to today."
                    }
                },
                "required": ["customer_id", "product_id", "quantity"]
            }),
        }
    }

    fn execute(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        let customer_id = int_arg(arguments, "customer_id").unwrap_or(0);
        let product_id = int_arg(arguments, "product_id").unwrap_or(0);
        let quantity = int_arg(arguments, "quantity").unwrap_or(0);

        if customer_id < 1 || product_id < 1 || quantity < 1 {
            return Ok(error_payload(
                "customer_id, product_id, and quantity (>= 1) are required",
            ));
        }

        let Some(unit_price) = self.db.product_unit_price(product_id)? else {
            return Ok(error_payload("Product not found"));
        };
        if !self.db.customer_exists(customer_id)? {
            return Ok(error_payload("Customer not found"));
        }

        let sale_date = str_arg(arguments, "sale_date").unwrap_or_else(today);
        require_date("sale_date", &sale_date)?;

        let sale = NewSale {
            customer_id,
            product_id,
            quantity,
            unit_price,
            total: round_money(unit_price * quantity as f64),
            sale_date,
        };
        let id = self.db.insert_sale(&sale)?;

        Ok(json!({
            "status": "success",
            "message": "Order created",
            "order": {
                "id": id,
                "customer_id": sale.customer_id,
                "product_id": sale.product_id,
                "quantity": sale.quantity,
                "unit_price": sale.unit_price,
                "total": sale.total,
                "sale_date": sale.sale_date,
            }
        })
        .to_string())
    }
}
