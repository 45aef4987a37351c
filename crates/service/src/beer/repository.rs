use async_trait::async_trait;
use uuid::Uuid;

use super::domain::Beer;
use super::errors::BeerError;

/// Persistence port for beers.
///
/// `save` owns identity and versioning: an unsaved beer gets a fresh id,
/// version 0 and both timestamps; a stored beer is written only if its
/// `version` still matches, and comes back with `version + 1` and a new
/// `last_modified_date`.
#[async_trait]
pub trait BeerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, BeerError>;
    async fn save(&self, beer: Beer) -> Result<Beer, BeerError>;
    async fn count(&self) -> Result<u64, BeerError>;
}

/// Map-backed repository, used by tests and when no database is configured.
pub mod memory {
    use super::*;
    use chrono::{DateTime, FixedOffset, Utc};
    use models::errors::ModelError;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryBeerRepository {
        beers: RwLock<HashMap<Uuid, Beer>>,
    }

    impl InMemoryBeerRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl BeerRepository for InMemoryBeerRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Beer>, BeerError> {
            let beers = self.beers.read().await;
            Ok(beers.get(&id).cloned())
        }

        async fn save(&self, mut beer: Beer) -> Result<Beer, BeerError> {
            if beer.beer_style.is_none() {
                return Err(ModelError::Validation("beer_style is required".into()).into());
            }
            let now: DateTime<FixedOffset> = Utc::now().into();
            let mut beers = self.beers.write().await;

            let stored = beer.id.and_then(|id| beers.get(&id));
            match stored {
                Some(stored) => {
                    if beer.version != stored.version {
                        return Err(BeerError::Conflict {
                            id: beer.id.unwrap_or_default(),
                            version: beer.version.unwrap_or_default(),
                        });
                    }
                    beer.version = stored.version.map(|v| v + 1);
                    beer.created_date = stored.created_date;
                    beer.last_modified_date = Some(now);
                }
                None => {
                    beer.id = Some(beer.id.unwrap_or_else(Uuid::new_v4));
                    beer.version = Some(0);
                    beer.created_date = Some(now);
                    beer.last_modified_date = Some(now);
                }
            }

            let id = beer.id.unwrap_or_default();
            beers.insert(id, beer.clone());
            Ok(beer)
        }

        async fn count(&self) -> Result<u64, BeerError> {
            Ok(self.beers.read().await.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryBeerRepository;
    use super::*;
    use crate::beer::domain::BeerStyle;

    fn lager() -> Beer {
        Beer::builder().beer_name("Lager").beer_style(BeerStyle::Lager).upc(1).build()
    }

    #[tokio::test]
    async fn first_save_assigns_identity() {
        let repo = InMemoryBeerRepository::new();
        let saved = repo.save(lager()).await.unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.version, Some(0));
        assert_eq!(saved.created_date, saved.last_modified_date);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_by_id(saved.id.unwrap()).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn resave_bumps_version_and_keeps_created_date() {
        let repo = InMemoryBeerRepository::new();
        let first = repo.save(lager()).await.unwrap();
        let mut changed = first.clone();
        changed.beer_name = "Lager Reserve".into();
        // pretend the client tried to rewrite the creation time
        changed.created_date = None;

        let second = repo.save(changed).await.unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.version, Some(1));
        assert_eq!(second.created_date, first.created_date);
        assert!(second.last_modified_date >= second.created_date);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn stale_version_is_a_conflict() {
        let repo = InMemoryBeerRepository::new();
        let first = repo.save(lager()).await.unwrap();
        repo.save(first.clone()).await.unwrap();

        let err = repo.save(first).await.unwrap_err();
        assert!(matches!(err, BeerError::Conflict { version: 0, .. }));
    }

    #[tokio::test]
    async fn beer_without_style_is_rejected() {
        let repo = InMemoryBeerRepository::new();
        let err = repo.save(Beer::default()).await.unwrap_err();
        assert!(matches!(err, BeerError::Model(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
