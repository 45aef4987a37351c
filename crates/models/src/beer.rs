use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::beer_style::BeerStyle;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "beer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub version: i32,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_date: DateTimeWithTimeZone,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    pub quantity_to_brew: i32,
    pub min_on_hand: i32,
    pub quantity_on_hand: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert a fresh row. The caller decides id, version and timestamps.
pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(model.id),
        version: Set(model.version),
        created_date: Set(model.created_date),
        last_modified_date: Set(model.last_modified_date),
        beer_name: Set(model.beer_name),
        beer_style: Set(model.beer_style),
        upc: Set(model.upc),
        price: Set(model.price),
        quantity_to_brew: Set(model.quantity_to_brew),
        min_on_hand: Set(model.min_on_hand),
        quantity_on_hand: Set(model.quantity_on_hand),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Optimistic update: writes `model` with `version + 1` only if the stored row
/// still carries `model.version`. `created_date` is never touched.
///
/// Returns `Ok(None)` when no row matched (missing id or stale version).
pub async fn update_if_version(
    db: &DatabaseConnection,
    model: Model,
    last_modified_date: DateTimeWithTimeZone,
) -> Result<Option<Model>, errors::ModelError> {
    let expected = model.version;
    let next = Model {
        version: expected + 1,
        last_modified_date,
        ..model
    };
    let am = ActiveModel {
        version: Set(next.version),
        last_modified_date: Set(next.last_modified_date),
        beer_name: Set(next.beer_name.clone()),
        beer_style: Set(next.beer_style),
        upc: Set(next.upc),
        price: Set(next.price),
        quantity_to_brew: Set(next.quantity_to_brew),
        min_on_hand: Set(next.min_on_hand),
        quantity_on_hand: Set(next.quantity_on_hand),
        ..Default::default()
    };
    let res = Entity::update_many()
        .set(am)
        .filter(Column::Id.eq(next.id))
        .filter(Column::Version.eq(expected))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    // Re-read so the caller sees the stored created_date.
    find(db, next.id).await
}
