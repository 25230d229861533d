use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub site_name: String,
    pub site_description: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row id that admin edits write to.
pub const EDITABLE_ID: i32 = 1;

/// Public shape of the settings row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct Summary {
    pub id: i32,
    pub site_name: String,
    pub site_description: String,
}

/// The current settings: the row with the highest id.
pub async fn latest(db: &DatabaseConnection) -> Result<Option<Summary>, errors::ModelError> {
    Entity::find()
        .select_only()
        .columns([Column::Id, Column::SiteName, Column::SiteDescription])
        .order_by_desc(Column::Id)
        .into_model::<Summary>()
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
