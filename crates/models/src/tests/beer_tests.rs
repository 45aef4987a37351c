use crate::beer;
use crate::beer_style::BeerStyle;
use crate::db::connect;
use anyhow::Result;
use chrono::Utc;
use migration::MigratorTrait;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Connect and migrate, or `None` when no database is configured for tests.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

fn sample(name: &str) -> beer::Model {
    let now = Utc::now().into();
    beer::Model {
        id: Uuid::new_v4(),
        version: 0,
        created_date: now,
        last_modified_date: now,
        beer_name: name.to_string(),
        beer_style: BeerStyle::Lager,
        upc: 1900024312001,
        price: Decimal::new(1295, 2),
        quantity_to_brew: 200,
        min_on_hand: 12,
        quantity_on_hand: 7,
    }
}

#[tokio::test]
async fn test_beer_insert_find_count() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let before = beer::count(&db).await?;
    let created = beer::insert(&db, sample(&format!("insert_{}", Uuid::new_v4()))).await?;
    assert_eq!(beer::count(&db).await?, before + 1);

    let found = beer::find(&db, created.id).await?.expect("row inserted");
    assert_eq!(found.beer_style, BeerStyle::Lager);
    assert_eq!(found.price, Decimal::new(1295, 2));
    assert_eq!(found.version, 0);

    beer::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_beer_update_bumps_version_and_rejects_stale() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = beer::insert(&db, sample(&format!("update_{}", Uuid::new_v4()))).await?;

    let mut changed = created.clone();
    changed.beer_name = "Lager Reserve".into();
    let updated = beer::update_if_version(&db, changed.clone(), Utc::now().into())
        .await?
        .expect("version matched");
    assert_eq!(updated.version, 1);
    assert_eq!(updated.beer_name, "Lager Reserve");
    assert_eq!(updated.created_date, created.created_date);
    assert!(updated.last_modified_date >= updated.created_date);

    // `changed` still carries version 0
    let stale = beer::update_if_version(&db, changed, Utc::now().into()).await?;
    assert!(stale.is_none());

    beer::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}
