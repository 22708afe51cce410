mod common;

use common::{write_csv, SAMPLE_CSV};
use pretty_assertions::assert_eq;
use sales_dashboard::loader::load_transactions;
use sales_dashboard::utils::LoadError;

#[test]
fn test_load_sample_file() {
    let file = write_csv(SAMPLE_CSV);
    let table = load_transactions(file.path()).unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.regions(), vec!["North", "South", "East", "West"]);
    assert_eq!(table.revenue_range(), Some((80.25, 2300.0)));
    assert_eq!(table.source(), Some(file.path()));
    assert!(table.has_category());
    assert!(table.has_product_name());
}

#[test]
fn test_load_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_transactions(dir.path().join("commercial_data.csv"));
    assert!(matches!(result, Err(LoadError::NotFound(_))));
}

#[test]
fn test_load_missing_cost_column() {
    let file = write_csv("Customer_ID,Region,Total_Revenue,Quantity\nC1,North,10,1\n");
    match load_transactions(file.path()) {
        Err(LoadError::Schema { missing }) => assert_eq!(missing, vec!["Cost".to_string()]),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_schema_error_message_names_columns() {
    let file = write_csv("Customer_ID,Total_Revenue,Quantity\nC1,10,1\n");
    let err = load_transactions(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Missing required columns: Region, Cost");
}

#[test]
fn test_load_empty_file() {
    let file = write_csv("");
    let result = load_transactions(file.path());
    assert!(matches!(result, Err(LoadError::EmptyOrMalformed(_))));
}

#[test]
fn test_load_without_optional_columns() {
    let file = write_csv("Customer_ID,Region,Total_Revenue,Quantity,Cost\nC1,North,10,1,2\n");
    let table = load_transactions(file.path()).unwrap();
    assert!(!table.has_category());
    assert_eq!(table.records()[0].category, None);
}

#[test]
fn test_extra_columns_ignored() {
    let file = write_csv(
        "Order_Date,Customer_ID,Region,Total_Revenue,Quantity,Cost\n2024-01-02,C1,North,10,1,2\n",
    );
    let table = load_transactions(file.path()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records()[0].customer_id, "C1");
}
