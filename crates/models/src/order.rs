use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, JoinType, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::{catalog, errors};

/// Status every new order starts in.
pub const INITIAL_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_id: i32,
    pub phone: String,
    pub game_uid: String,
    pub telegram: String,
    pub status: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Service }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(catalog::Entity)
                .from(Column::ServiceId)
                .to(catalog::Column::Id)
                .into(),
        }
    }
}

impl Related<catalog::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// An order as the admin panel lists it, with the title of the ordered service.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct WithServiceTitle {
    pub id: i32,
    pub service_id: i32,
    pub phone: String,
    pub game_uid: String,
    pub telegram: String,
    pub status: String,
    pub service_title: String,
}

/// All orders, newest first. Orders whose service row is gone are not listed.
pub async fn list_with_service_title(db: &DatabaseConnection) -> Result<Vec<WithServiceTitle>, errors::ModelError> {
    Entity::find()
        .select_only()
        .columns([
            Column::Id,
            Column::ServiceId,
            Column::Phone,
            Column::GameUid,
            Column::Telegram,
            Column::Status,
        ])
        .column_as(catalog::Column::Title, "service_title")
        .join(JoinType::InnerJoin, Relation::Service.def())
        .order_by_desc(Column::Id)
        .into_model::<WithServiceTitle>()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
