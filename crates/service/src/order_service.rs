use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, QueryFilter,
};
use serde::Deserialize;
use tracing::{debug, info};

use models::order;
use crate::errors::ServiceError;

/// Body of `POST orders`, sent by the public order form.
#[derive(Debug, Default, Deserialize)]
pub struct OrderInput {
    #[serde(default)]
    pub service_id: Option<i32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub game_uid: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
}

/// Body of `PUT orders/status`.
#[derive(Debug, Default, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub order_id: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Record a customer order in the initial status.
pub async fn create_order(db: &DatabaseConnection, input: OrderInput) -> Result<(), ServiceError> {
    let service_id = input.service_id;
    let mut stmt = Query::insert();
    stmt.into_table(order::Entity.table_ref()).columns([
        order::Column::ServiceId,
        order::Column::Phone,
        order::Column::GameUid,
        order::Column::Telegram,
        order::Column::Status,
    ]);
    stmt.values([
        input.service_id.into(),
        input.phone.into(),
        input.game_uid.into(),
        input.telegram.into(),
        order::INITIAL_STATUS.into(),
    ])
    .map_err(ServiceError::db)?;

    let backend = db.get_database_backend();
    db.execute(backend.build(&stmt)).await.map_err(ServiceError::db)?;
    info!(service_id = ?service_id, "order_created");
    Ok(())
}

/// Orders for the admin panel, newest first, with service titles.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::WithServiceTitle>, ServiceError> {
    Ok(order::list_with_service_title(db).await?)
}

/// Move an order to another status. Any string is accepted. Returns affected rows.
pub async fn update_order_status(db: &DatabaseConnection, input: StatusUpdate) -> Result<u64, ServiceError> {
    let res = order::Entity::update_many()
        .col_expr(order::Column::Status, Expr::value(input.status.clone()))
        .col_expr(order::Column::UpdatedAt, Expr::current_timestamp().into())
        .filter(order::Column::Id.eq(input.order_id))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(order_id = ?input.order_id, status = ?input.status, rows = res.rows_affected, "order_status_updated");
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_service::{self, ServiceInput, Text};
    use crate::test_support::{exec_ok, get_db, log_text};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn new_orders_start_pending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(1)])
            .into_connection();
        let input: OrderInput =
            serde_json::from_str(r#"{"service_id":1,"phone":"123","game_uid":"u1","telegram":"@t"}"#).unwrap();
        create_order(&db, input).await.unwrap();

        let log = log_text(db);
        assert!(log.contains("INSERT INTO"));
        assert!(log.contains("orders"));
        assert!(log.contains("String(Some(\"pending\"))"));
        assert!(log.contains("Int(Some(1))"));
    }

    #[tokio::test]
    async fn status_update_filters_by_order_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_ok(0)])
            .into_connection();
        let rows = update_order_status(&db, StatusUpdate { order_id: Some(42), status: Some("accepted".into()) })
            .await
            .unwrap();
        // unknown ids are not an error
        assert_eq!(rows, 0);
        let log = log_text(db);
        assert!(log.contains("accepted"));
        assert!(log.contains("Int(Some(42))"));
    }

    #[tokio::test]
    async fn order_lifecycle_against_database() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };

        let title = format!("svc_order_flow_{}", std::process::id());
        catalog_service::create_service(&db, ServiceInput {
            title: Some(title.clone()),
            description: Some("d".into()),
            requirements: Some("r".into()),
            price: Some(Text::Str("10".into())),
        })
        .await?;
        let svc = catalog_service::list_all(&db).await?.into_iter().rfind(|s| s.title == title).expect("service");

        create_order(&db, OrderInput {
            service_id: Some(svc.id),
            phone: Some("123".into()),
            game_uid: Some("u1".into()),
            telegram: Some("@t".into()),
        })
        .await?;
        let placed = list_orders(&db).await?.into_iter().find(|o| o.service_id == svc.id).expect("order");
        assert_eq!(placed.status, "pending");
        assert_eq!(placed.service_title, title);

        let rows = update_order_status(&db, StatusUpdate { order_id: Some(placed.id), status: Some("completed".into()) }).await?;
        assert_eq!(rows, 1);
        let done = list_orders(&db).await?.into_iter().find(|o| o.id == placed.id).expect("order");
        assert_eq!(done.status, "completed");

        order::Entity::delete_by_id(placed.id).exec(&db).await?;
        models::catalog::Entity::delete_by_id(svc.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_phone_is_rejected_by_schema() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let res = create_order(&db, OrderInput { service_id: Some(1), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        Ok(())
    }
}
