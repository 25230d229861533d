//! The `services` table: what the storefront sells.

use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::{errors, order};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    /// Display text, e.g. "500 ₽".
    pub price: String,
    pub is_active: bool,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Orders }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Orders => Entity::has_many(order::Entity).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Listing shape shared by the public and admin catalog endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct Listing {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub price: String,
    pub is_active: bool,
}

/// Services ordered by id; `active_only` drops soft-deleted rows. `updated_at` is not read.
pub async fn list(db: &DatabaseConnection, active_only: bool) -> Result<Vec<Listing>, errors::ModelError> {
    let mut select = Entity::find().select_only().columns([
        Column::Id,
        Column::Title,
        Column::Description,
        Column::Requirements,
        Column::Price,
        Column::IsActive,
    ]);
    if active_only {
        select = select.filter(Column::IsActive.eq(true));
    }
    select
        .order_by_asc(Column::Id)
        .into_model::<Listing>()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
