use std::rc::Rc;

use sales_mcp::db::Database;
use sales_mcp::errors::ToolError;
use sales_mcp::mcp::Tool;
use sales_mcp::tools::*;
use sales_mcp::types::NewSale;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// Helper: a temp database with two products, two customers and three sales.
/// The TempDir is returned so that it stays alive for the duration of the test.
fn setup_db() -> (Rc<Database>, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = Database::initialize(&dir.path().join("sales.db")).expect("failed to initialize database");

    db.insert_product("Widget", "PRD-001", 10.5).unwrap();
    db.insert_product("Gadget", "PRD-002", 19.99).unwrap();
    db.insert_customer("Ada", "ada@example.com").unwrap();
    db.insert_customer("Grace", "grace@example.com").unwrap();

    for (customer_id, product_id, quantity, unit_price, sale_date) in [
        (1, 1, 2, 10.5, "2024-01-05"),
        (2, 2, 1, 19.99, "2024-01-20"),
        (1, 2, 3, 19.99, "2024-03-01"),
    ] {
        db.insert_sale(&NewSale {
            customer_id,
            product_id,
            quantity,
            unit_price,
            total: unit_price * quantity as f64,
            sale_date: sale_date.to_string(),
        })
        .unwrap();
    }

    (Rc::new(db), dir)
}

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn call(tool: &dyn Tool, arguments: Value) -> Value {
    let text = tool.execute(&args(arguments)).expect("tool call failed");
    serde_json::from_str(&text).expect("tool output is JSON")
}

#[test]
fn test_default_registry_with_store() {
    let (db, _dir) = setup_db();
    let registry = default_registry(Some(db));
    let names: Vec<&str> = registry.list().map(|t| t.name()).collect();
    assert_eq!(
        names,
        vec!["query_sales", "list_products", "list_customers", "list_sales", "create_order"]
    );
}

#[test]
fn test_default_registry_without_store_is_mock_only() {
    let registry = default_registry(None);
    assert_eq!(registry.len(), 1);
    assert!(registry.get("query_sales").is_some());
    assert!(registry.get("create_order").is_none());
}

#[test]
fn test_tool_definitions_have_object_schemas() {
    let (db, _dir) = setup_db();
    let registry = default_registry(Some(db));
    for tool in registry.list() {
        let def = tool.definition();
        assert_eq!(def.name, tool.name());
        assert!(!def.description.is_empty());
        assert_eq!(def.input_schema["type"], "object", "tool '{}'", def.name);
        assert!(def.input_schema["properties"].is_object(), "tool '{}'", def.name);
        assert!(def.input_schema["required"].is_array(), "tool '{}'", def.name);
    }
}

#[test]
fn test_query_sales_connected_sums_range() {
    let (db, _dir) = setup_db();
    let tool = QuerySalesTool::connected(db);
    assert!(!tool.is_mock());

    let data = call(&tool, json!({"start_date": "2024-01-01", "end_date": "2024-01-31"}));
    assert_eq!(data["status"], "success");
    assert_eq!(data["period"], "2024-01-01 to 2024-01-31");
    assert_eq!(data["transaction_count"], 2);
    assert!((data["total_revenue"].as_f64().unwrap() - 40.99).abs() < 1e-9);
    assert_eq!(data["currency"], "USD");
}

#[test]
fn test_query_sales_empty_range() {
    let (db, _dir) = setup_db();
    let data = call(
        &QuerySalesTool::connected(db),
        json!({"start_date": "2025-01-01", "end_date": "2025-12-31"}),
    );
    assert_eq!(data["transaction_count"], 0);
    assert_eq!(data["total_revenue"].as_f64(), Some(0.0));
}

#[test]
fn test_query_sales_mock_mode() {
    let tool = QuerySalesTool::mock();
    assert!(tool.is_mock());
    let data = call(&tool, json!({"start_date": "2024-05-01", "end_date": "2024-05-31"}));
    assert_eq!(data["transaction_count"], 0);
    let revenue = data["total_revenue"].as_u64().unwrap();
    assert!((10_000..=50_000).contains(&revenue));
}

#[test]
fn test_query_sales_requires_both_dates() {
    let data = call(&QuerySalesTool::mock(), json!({"start_date": "2024-01-01"}));
    assert_eq!(data["status"], "error");
    assert_eq!(data["message"], "start_date and end_date are required");
}

#[test]
fn test_query_sales_rejects_malformed_date() {
    let result = QuerySalesTool::mock().execute(&args(json!({"start_date": "yesterday", "end_date": "2024-01-31"})));
    assert!(matches!(result, Err(ToolError::Execution(_))));
}

#[test]
fn test_list_products_and_limit() {
    let (db, _dir) = setup_db();
    let tool = ListProductsTool::new(db);

    let data = call(&tool, json!({}));
    assert_eq!(data["status"], "success");
    assert_eq!(data["count"], 2);
    assert_eq!(data["products"][0]["sku"], "PRD-001");
    assert_eq!(data["products"][1]["unit_price"], 19.99);

    let data = call(&tool, json!({"limit": 1}));
    assert_eq!(data["count"], 1);

    let data = call(&tool, json!({"limit": 0}));
    assert_eq!(data["count"], 1);
}

#[test]
fn test_list_customers() {
    let (db, _dir) = setup_db();
    let data = call(&ListCustomersTool::new(db), json!({"limit": "10"}));
    assert_eq!(data["count"], 2);
    assert_eq!(data["customers"][1]["email"], "grace@example.com");
}

#[test]
fn test_list_sales_newest_first_with_names() {
    let (db, _dir) = setup_db();
    let data = call(&ListSalesTool::new(db), json!({}));
    assert_eq!(data["count"], 3);
    let first = &data["sales"][0];
    assert_eq!(first["sale_date"], "2024-03-01");
    assert_eq!(first["customer_name"], "Ada");
    assert_eq!(first["product_name"], "Gadget");
}

#[test]
fn test_list_sales_date_filter_ignores_empty_bounds() {
    let (db, _dir) = setup_db();
    let tool = ListSalesTool::new(db);

    let data = call(&tool, json!({"start_date": "2024-01-10", "end_date": ""}));
    assert_eq!(data["count"], 2);

    let data = call(&tool, json!({"start_date": "2024-01-01", "end_date": "2024-01-31", "limit": 1}));
    assert_eq!(data["count"], 1);
    assert_eq!(data["sales"][0]["sale_date"], "2024-01-20");
}

#[test]
fn test_create_order_success() {
    let (db, _dir) = setup_db();
    let tool = CreateOrderTool::new(Rc::clone(&db));

    let data = call(
        &tool,
        json!({"customer_id": 2, "product_id": 2, "quantity": 3, "sale_date": "2024-06-15"}),
    );
    assert_eq!(data["status"], "success");
    assert_eq!(data["message"], "Order created");
    assert_eq!(data["order"]["id"], 4);
    assert_eq!(data["order"]["unit_price"], 19.99);
    assert_eq!(data["order"]["total"], 59.97);
    assert_eq!(data["order"]["sale_date"], "2024-06-15");

    assert_eq!(db.counts().unwrap().sales, 4);
}

#[test]
fn test_create_order_defaults_to_today() {
    let (db, _dir) = setup_db();
    let data = call(
        &CreateOrderTool::new(db),
        json!({"customer_id": "1", "product_id": 1, "quantity": 1}),
    );
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(data["order"]["sale_date"], today);
    assert_eq!(data["order"]["customer_id"], 1);
}

#[test]
fn test_create_order_validation_errors() {
    let (db, _dir) = setup_db();
    let tool = CreateOrderTool::new(Rc::clone(&db));

    let data = call(&tool, json!({"customer_id": 1, "product_id": 1}));
    assert_eq!(data["status"], "error");
    assert_eq!(data["message"], "customer_id, product_id, and quantity (>= 1) are required");

    let data = call(&tool, json!({"customer_id": 1, "product_id": 99, "quantity": 1}));
    assert_eq!(data["message"], "Product not found");

    let data = call(&tool, json!({"customer_id": 99, "product_id": 1, "quantity": 1}));
    assert_eq!(data["message"], "Customer not found");

    assert_eq!(db.counts().unwrap().sales, 3);
}

#[test]
fn test_create_order_bad_date_is_execution_error() {
    let (db, _dir) = setup_db();
    let tool = CreateOrderTool::new(Rc::clone(&db));
    let result = tool.execute(&args(json!({
        "customer_id": 1, "product_id": 1, "quantity": 1, "sale_date": "2024-13-01"
    })));
    assert!(matches!(result, Err(ToolError::Execution(_))));
    assert_eq!(db.counts().unwrap().sales, 3);
}
