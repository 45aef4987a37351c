//! Create `beer` table.
//! One row per beer; `version` backs optimistic locking on updates.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beer::Table)
                    .if_not_exists()
                    .col(uuid(Beer::Id).primary_key())
                    .col(integer(Beer::Version).not_null().default(0))
                    .col(timestamp_with_time_zone(Beer::CreatedDate).not_null())
                    .col(timestamp_with_time_zone(Beer::LastModifiedDate).not_null())
                    .col(string_len(Beer::BeerName, 255).not_null())
                    .col(string_len(Beer::BeerStyle, 32).not_null())
                    .col(big_integer(Beer::Upc).not_null())
                    .col(decimal_len(Beer::Price, 19, 2).not_null())
                    .col(integer(Beer::QuantityToBrew).not_null().default(0))
                    .col(integer(Beer::MinOnHand).not_null().default(0))
                    .col(integer(Beer::QuantityOnHand).not_null().default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beer_upc")
                    .table(Beer::Table)
                    .col(Beer::Upc)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Beer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Beer {
    Table,
    Id,
    Version,
    CreatedDate,
    LastModifiedDate,
    BeerName,
    BeerStyle,
    Upc,
    Price,
    QuantityToBrew,
    MinOnHand,
    QuantityOnHand,
}
