use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::Beer;
use super::dto::BeerDto;
use super::errors::BeerError;
use super::mapper::{apply_update, beer_to_dto, dto_to_beer};
use super::repository::BeerRepository;

/// Beer operations independent of the web framework.
///
/// Holds nothing but the repository, so one instance is shared by all
/// requests. Concurrent writes to the same beer are settled by the
/// repository's version check.
pub struct BeerService<R: BeerRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: BeerRepository + ?Sized> Clone for BeerService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: BeerRepository + ?Sized> BeerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Look up one beer and render it for the wire.
    ///
    /// # Examples
    /// ```
    /// use service::beer::{BeerService, repository::memory::InMemoryBeerRepository};
    /// use service::beer::errors::BeerError;
    /// use std::sync::Arc;
    /// let svc = BeerService::new(Arc::new(InMemoryBeerRepository::new()));
    /// let missing = tokio_test::block_on(svc.get_beer(uuid::Uuid::new_v4()));
    /// assert!(matches!(missing, Err(BeerError::NotFound(_))));
    /// ```
    #[instrument(skip(self))]
    pub async fn get_beer(&self, id: Uuid) -> Result<BeerDto, BeerError> {
        match self.repo.find_by_id(id).await? {
            Some(beer) => Ok(beer_to_dto(&beer)),
            None => {
                debug!(%id, "beer_not_found");
                Err(BeerError::NotFound(id))
            }
        }
    }

    /// Validate, map and store a new beer. Nothing is written when validation
    /// fails.
    ///
    /// # Examples
    /// ```
    /// use service::beer::{BeerService, dto::BeerDto, repository::{BeerRepository, memory::InMemoryBeerRepository}};
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryBeerRepository::new());
    /// let svc = BeerService::new(repo.clone());
    /// let dto = BeerDto {
    ///     beer_name: Some("Lager".into()),
    ///     beer_style: Some("LAGER".into()),
    ///     upc: Some(1900024312001),
    ///     price: Some("12.95".parse().unwrap()),
    ///     ..Default::default()
    /// };
    /// let saved = tokio_test::block_on(svc.save_new_beer(&dto)).unwrap();
    /// assert_eq!(saved.version, Some(0));
    /// assert_eq!(tokio_test::block_on(repo.count()).unwrap(), 1);
    /// ```
    #[instrument(skip(self, dto), fields(beer_name = ?dto.beer_name))]
    pub async fn save_new_beer(&self, dto: &BeerDto) -> Result<Beer, BeerError> {
        dto.validate()?;
        let beer = dto_to_beer(dto)?;
        let saved = self.repo.save(beer).await?;
        info!(id = ?saved.id, "beer_created");
        Ok(saved)
    }

    /// Overwrite name, style, price and upc of an existing beer.
    ///
    /// An unknown id is not an error: nothing is written and `Ok(None)` is
    /// returned. Validation still runs first, so bad input is rejected even
    /// for unknown ids.
    #[instrument(skip(self, dto))]
    pub async fn update_beer(&self, id: Uuid, dto: &BeerDto) -> Result<Option<Beer>, BeerError> {
        dto.validate()?;
        let Some(mut beer) = self.repo.find_by_id(id).await? else {
            debug!(%id, "beer_update_skipped_unknown_id");
            return Ok(None);
        };
        apply_update(&mut beer, dto)?;
        let saved = self.repo.save(beer).await?;
        info!(%id, version = ?saved.version, "beer_updated");
        Ok(Some(saved))
    }

    pub async fn count(&self) -> Result<u64, BeerError> {
        self.repo.count().await
    }
}
