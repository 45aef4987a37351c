//! Sample data for an empty store.

use rust_decimal::Decimal;
use tracing::info;

use super::domain::{Beer, BeerStyle};
use super::errors::BeerError;
use super::repository::BeerRepository;

pub fn sample_beers() -> Vec<Beer> {
    vec![
        Beer::builder()
            .beer_name("Mönchsambacher Lager")
            .beer_style(BeerStyle::Lager)
            .quantity_to_brew(200)
            .min_on_hand(12)
            .upc(1900024312001)
            .price(Decimal::new(1295, 2))
            .build(),
        Beer::builder()
            .beer_name("Mönchsambacher Weizen")
            .beer_style(BeerStyle::WeizenHell)
            .quantity_to_brew(350)
            .min_on_hand(24)
            .upc(1900024312002)
            .price(Decimal::new(1495, 2))
            .build(),
    ]
}

/// Store [`sample_beers`] if the repository holds no beers yet. Returns how
/// many were written.
pub async fn load_sample_beers<R: BeerRepository + ?Sized>(repo: &R) -> Result<usize, BeerError> {
    if repo.count().await? > 0 {
        info!(event = "seed_skipped", "beer store not empty, skipping sample data");
        return Ok(0);
    }
    let beers = sample_beers();
    let n = beers.len();
    for beer in beers {
        let saved = repo.save(beer).await?;
        info!(event = "seed_beer", id = ?saved.id, name = %saved.beer_name, "sample beer stored");
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beer::repository::memory::InMemoryBeerRepository;

    #[tokio::test]
    async fn loads_once_into_empty_store() {
        let repo = InMemoryBeerRepository::new();
        assert_eq!(load_sample_beers(&repo).await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);

        assert_eq!(load_sample_beers(&repo).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn skips_when_store_already_has_beers() {
        let repo = InMemoryBeerRepository::new();
        repo.save(Beer::builder().beer_name("Own").beer_style(BeerStyle::Ale).build())
            .await
            .unwrap();
        assert_eq!(load_sample_beers(&repo).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
