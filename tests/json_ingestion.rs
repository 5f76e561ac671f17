use catalog_queries::ingestion::json::{ingest_catalog_json_from_path, ingest_catalog_json_from_str};
use catalog_queries::CatalogError;
use chrono::NaiveDate;

#[test]
fn ingest_json_from_path_happy_path() {
    let catalog = ingest_catalog_json_from_path("tests/fixtures/catalog.json").unwrap();

    assert_eq!(catalog.customers.len(), 2);
    assert_eq!(catalog.products.len(), 4);
    assert_eq!(catalog.orders.len(), 3);
    assert_eq!(catalog.products[2].category, "Toys");
    assert_eq!(
        catalog.orders[0].order_date,
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    );
    assert_eq!(catalog.orders[1].products, vec![4, 3, 2]);
}

#[test]
fn ingest_json_errors_on_bad_date() {
    let input = r#"{"customers":[{"id":1,"name":"Ada","tier":1}],
        "orders":[{"id":1,"order_date":"31/01/2024","customer_id":1,"products":[]}]}"#;
    let err = ingest_catalog_json_from_str(input).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert!(err.to_string().starts_with("json error"));
}

#[test]
fn ingest_json_errors_on_missing_field() {
    let input = r#"{"products":[{"id":1,"name":"Tome","price":1.0}]}"#;
    let err = ingest_catalog_json_from_str(input).unwrap_err();
    assert!(err.to_string().contains("missing field `category`"));
}

#[test]
fn ingest_json_validates_references() {
    let input = r#"{
        "customers":[{"id":1,"name":"Ada","tier":1}],
        "products":[{"id":1,"name":"Tome","category":"Books","price":1.0}],
        "orders":[{"id":5,"order_date":"2024-01-01","customer_id":1,"products":[1,2]}]
    }"#;
    let err = ingest_catalog_json_from_str(input).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownProduct { order: 5, product: 2 }));
}

#[test]
fn ingest_json_rejects_duplicate_order_ids() {
    let input = r#"{
        "customers":[{"id":1,"name":"Ada","tier":1}],
        "orders":[
            {"id":5,"order_date":"2024-01-01","customer_id":1,"products":[]},
            {"id":5,"order_date":"2024-01-02","customer_id":1,"products":[]}
        ]
    }"#;
    let err = ingest_catalog_json_from_str(input).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateOrderId { id: 5 }));
}
