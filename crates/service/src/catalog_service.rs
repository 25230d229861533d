use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, QueryFilter,
};
use serde::Deserialize;
use tracing::debug;

use models::catalog;
use crate::errors::ServiceError;

/// Free-text field that also accepts a bare JSON number, as price inputs often are.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<Text> for String {
    fn from(t: Text) -> Self {
        match t {
            Text::Str(s) => s,
            Text::Int(i) => i.to_string(),
            Text::Float(f) => f.to_string(),
        }
    }
}

/// Body of `POST services`.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub price: Option<Text>,
}

impl ServiceInput {
    fn price_text(&self) -> Option<String> {
        self.price.clone().map(String::from)
    }
}

/// Body of `PUT services/update`.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceUpdate {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(flatten)]
    pub fields: ServiceInput,
}

/// Body of `PUT services/delete`.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceRef {
    #[serde(default)]
    pub id: Option<i32>,
}

/// Services visible to customers.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<catalog::Listing>, ServiceError> {
    Ok(catalog::list(db, true).await?)
}

/// Every service, soft-deleted ones included.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<catalog::Listing>, ServiceError> {
    Ok(catalog::list(db, false).await?)
}

/// Insert a catalog entry. `is_active` and `updated_at` take their column defaults.
pub async fn create_service(db: &DatabaseConnection, input: ServiceInput) -> Result<(), ServiceError> {
    let price = input.price_text();
    let mut stmt = Query::insert();
    stmt.into_table(catalog::Entity.table_ref()).columns([
        catalog::Column::Title,
        catalog::Column::Description,
        catalog::Column::Requirements,
        catalog::Column::Price,
    ]);
    stmt.values([
        input.title.into(),
        input.description.into(),
        input.requirements.into(),
        price.into(),
    ])
    .map_err(ServiceError::db)?;

    let backend = db.get_database_backend();
    db.execute(backend.build(&stmt)).await.map_err(ServiceError::db)?;
    Ok(())
}

/// Replace the four editable fields of a service. Returns affected rows.
pub async fn update_service(db: &DatabaseConnection, input: ServiceUpdate) -> Result<u64, ServiceError> {
    let price = input.fields.price_text();
    let res = catalog::Entity::update_many()
        .col_expr(catalog::Column::Title, Expr::value(input.fields.title))
        .col_expr(catalog::Column::Description, Expr::value(input.fields.description))
        .col_expr(catalog::Column::Requirements, Expr::value(input.fields.requirements))
        .col_expr(catalog::Column::Price, Expr::value(price))
        .col_expr(catalog::Column::UpdatedAt, Expr::current_timestamp().into())
        .filter(catalog::Column::Id.eq(input.id))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(id = ?input.id, rows = res.rows_affected, "service_updated");
    Ok(res.rows_affected)
}

/// Soft delete: hide the service from the public listing. Returns affected rows.
pub async fn deactivate_service(db: &DatabaseConnection, target: ServiceRef) -> Result<u64, ServiceError> {
    let res = catalog::Entity::update_many()
        .col_expr(catalog::Column::IsActive, Expr::value(false))
        .col_expr(catalog::Column::UpdatedAt, Expr::current_timestamp().into())
        .filter(catalog::Column::Id.eq(target.id))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(id = ?target.id, rows = res.rows_affected, "service_deactivated");
    Ok(res.rows_affected)
}
