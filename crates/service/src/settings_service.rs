use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use tracing::debug;

use models::site_settings;
use crate::errors::ServiceError;

/// Body of `PUT settings`.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsInput {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub site_description: Option<String>,
}

/// Current settings, `None` when the table is empty.
pub async fn current_settings(db: &DatabaseConnection) -> Result<Option<site_settings::Summary>, ServiceError> {
    Ok(site_settings::latest(db).await?)
}

/// Overwrite name and description of the editable row. Returns affected rows.
pub async fn update_settings(db: &DatabaseConnection, input: SettingsInput) -> Result<u64, ServiceError> {
    let res = site_settings::Entity::update_many()
        .col_expr(site_settings::Column::SiteName, Expr::value(input.site_name))
        .col_expr(site_settings::Column::SiteDescription, Expr::value(input.site_description))
        .col_expr(site_settings::Column::UpdatedAt, Expr::current_timestamp().into())
        .filter(site_settings::Column::Id.eq(site_settings::EDITABLE_ID))
        .exec(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(rows = res.rows_affected, "site_settings_updated");
    Ok(res.rows_affected)
}
