use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use tracing::warn;
use uuid::Uuid;

use models::errors::ModelError;

use crate::beer::domain::Beer;
use crate::beer::errors::BeerError;
use crate::beer::repository::BeerRepository;

pub struct SeaOrmBeerRepository {
    pub db: DatabaseConnection,
}

impl From<models::beer::Model> for Beer {
    fn from(m: models::beer::Model) -> Self {
        Beer {
            id: Some(m.id),
            version: Some(m.version),
            created_date: Some(m.created_date),
            last_modified_date: Some(m.last_modified_date),
            beer_name: m.beer_name,
            beer_style: Some(m.beer_style),
            upc: m.upc,
            price: m.price,
            quantity_to_brew: m.quantity_to_brew,
            min_on_hand: m.min_on_hand,
            quantity_on_hand: m.quantity_on_hand,
        }
    }
}

fn to_model(beer: Beer, id: Uuid, version: i32, created: DateTime<FixedOffset>) -> Result<models::beer::Model, ModelError> {
    let beer_style = beer
        .beer_style
        .ok_or_else(|| ModelError::Validation("beer_style is required".into()))?;
    Ok(models::beer::Model {
        id,
        version,
        created_date: created,
        last_modified_date: beer.last_modified_date.unwrap_or(created),
        beer_name: beer.beer_name,
        beer_style,
        upc: beer.upc,
        price: beer.price,
        quantity_to_brew: beer.quantity_to_brew,
        min_on_hand: beer.min_on_hand,
        quantity_on_hand: beer.quantity_on_hand,
    })
}

/// Database failures are storage faults; rule breaks stay model errors.
fn storage_error(e: ModelError) -> BeerError {
    match e {
        ModelError::Db(msg) => BeerError::Repository(msg),
        other => BeerError::Model(other),
    }
}

#[async_trait::async_trait]
impl BeerRepository for SeaOrmBeerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, BeerError> {
        let found = models::beer::find(&self.db, id).await.map_err(storage_error)?;
        Ok(found.map(Beer::from))
    }

    async fn save(&self, beer: Beer) -> Result<Beer, BeerError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        match (beer.id, beer.version) {
            (Some(id), Some(version)) => {
                let created = beer.created_date.unwrap_or(now);
                let model = to_model(beer, id, version, created)?;
                match models::beer::update_if_version(&self.db, model, now).await.map_err(storage_error)? {
                    Some(updated) => Ok(updated.into()),
                    None => {
                        warn!(%id, version, "beer_update_rejected_stale_version");
                        Err(BeerError::Conflict { id, version })
                    }
                }
            }
            (id, _) => {
                let id = id.unwrap_or_else(Uuid::new_v4);
                let mut fresh = beer;
                fresh.last_modified_date = Some(now);
                let model = to_model(fresh, id, 0, now)?;
                let created = models::beer::insert(&self.db, model).await.map_err(storage_error)?;
                Ok(created.into())
            }
        }
    }

    async fn count(&self) -> Result<u64, BeerError> {
        models::beer::count(&self.db).await.map_err(storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_failures_become_repository_errors() {
        let err = storage_error(ModelError::Db("connection reset".into()));
        assert!(matches!(err, BeerError::Repository(ref msg) if msg == "connection reset"));
        assert!(!err.is_client_error());

        let err = storage_error(ModelError::Validation("beer_style is required".into()));
        assert!(matches!(err, BeerError::Model(ModelError::Validation(_))));
        assert!(err.is_client_error());
    }
    use crate::beer::domain::BeerStyle;
    use crate::test_support::get_db;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn seaorm_save_find_update() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() { return Ok(()); }
        let repo = SeaOrmBeerRepository { db: get_db().await? };

        let before = repo.count().await?;
        let saved = repo
            .save(
                Beer::builder()
                    .beer_name(format!("svc_beer_{}", Uuid::new_v4()))
                    .beer_style(BeerStyle::Pilsner)
                    .upc(42)
                    .price(Decimal::new(499, 2))
                    .quantity_on_hand(5)
                    .build(),
            )
            .await?;
        assert_eq!(saved.version, Some(0));
        assert_eq!(repo.count().await?, before + 1);

        let mut found = repo.find_by_id(saved.id.unwrap()).await?.unwrap();
        assert_eq!(found.quantity_on_hand, 5);
        found.upc = 43;
        let updated = repo.save(found.clone()).await?;
        assert_eq!(updated.version, Some(1));
        assert_eq!(updated.upc, 43);
        assert_eq!(updated.created_date, saved.created_date);

        // `found` still holds version 0
        let err = repo.save(found).await.unwrap_err();
        assert!(matches!(err, BeerError::Conflict { .. }));

        use sea_orm::EntityTrait;
        models::beer::Entity::delete_by_id(saved.id.unwrap()).exec(&repo.db).await?;
        Ok(())
    }
}
