use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, Value};

use crate::{catalog, order, site_settings};

// Rows carry only the selected columns, as a legacy table without `updated_at` would.
fn settings_row(id: i32, name: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("site_name", Value::from(name)),
        ("site_description", Value::from(format!("{name} description"))),
    ])
}

fn service_row(id: i32, active: bool) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("title", Value::from(format!("Service {id}"))),
        ("description", Value::from("Rank up")),
        ("requirements", Value::from("Account login")),
        ("price", Value::from("500 ₽")),
        ("is_active", Value::from(active)),
    ])
}

#[tokio::test]
async fn latest_settings_none_when_table_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();
    let found = site_settings::latest(&db).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn latest_settings_never_reads_timestamp() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![settings_row(7, "Boost")]])
        .into_connection();
    let found = site_settings::latest(&db).await.unwrap().unwrap();
    assert_eq!(found, site_settings::Summary { id: 7, site_name: "Boost".into(), site_description: "Boost description".into() });

    let log = format!("{:?}", db.into_transaction_log());
    assert!(!log.contains("updated_at"));
    assert!(log.contains("ORDER BY"));
}

#[tokio::test]
async fn catalog_listing_keeps_row_order_and_flags() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![service_row(1, true), service_row(2, false)]])
        .into_connection();
    let rows = catalog::list(&db, false).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 1);
    assert!(!rows[1].is_active);
    assert_eq!(rows[1].price, "500 ₽");

    let log = format!("{:?}", db.into_transaction_log());
    assert!(!log.contains("updated_at"));
}

#[tokio::test]
async fn public_catalog_filters_active() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![service_row(4, true)]])
        .into_connection();
    let rows = catalog::list(&db, true).await.unwrap();
    assert_eq!(rows[0].id, 4);
    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("Bool(Some(true))"));
}

#[tokio::test]
async fn orders_listing_maps_joined_title() {
    let row = BTreeMap::from([
        ("id", Value::from(3i32)),
        ("service_id", Value::from(1i32)),
        ("phone", Value::from("123")),
        ("game_uid", Value::from("u1")),
        ("telegram", Value::from("@t")),
        ("status", Value::from(order::INITIAL_STATUS)),
        ("service_title", Value::from("Rank boost")),
    ]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();
    let rows = order::list_with_service_title(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].service_title, "Rank boost");
    assert_eq!(rows[0].status, "pending");
}

#[tokio::test]
async fn query_errors_become_model_errors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([sea_orm::DbErr::Custom("relation \"services\" does not exist".into())])
        .into_connection();
    let err = catalog::list(&db, true).await.unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
