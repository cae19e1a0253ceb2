//! In-memory TailedBeastRepository, for local runs without MongoDB and for
//! handler tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{TailedBeastError, TailedBeastResult};
use crate::models::TailedBeast;
use crate::repository::TailedBeastRepository;

#[derive(Default)]
pub struct InMemoryTailedBeastRepository {
    beasts: RwLock<Vec<TailedBeast>>,
}

impl InMemoryTailedBeastRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; slugs are taken as given.
    pub fn with_beasts(beasts: Vec<TailedBeast>) -> Self {
        Self {
            beasts: RwLock::new(beasts),
        }
    }
}

#[async_trait]
impl TailedBeastRepository for InMemoryTailedBeastRepository {
    #[instrument(skip(self, beast), fields(slug = %beast.slug))]
    async fn create(&self, beast: &TailedBeast) -> TailedBeastResult<()> {
        let mut beasts = self.beasts.write().await;
        if beasts.iter().any(|b| b.slug == beast.slug) {
            return Err(TailedBeastError::DuplicateSlug(beast.slug.clone()));
        }
        beasts.push(beast.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> TailedBeastResult<Option<TailedBeast>> {
        let beasts = self.beasts.read().await;
        Ok(beasts.iter().find(|b| b.slug == slug).cloned())
    }

    #[instrument(skip(self, beast))]
    async fn update_by_slug(&self, slug: &str, beast: &TailedBeast) -> TailedBeastResult<()> {
        let mut beasts = self.beasts.write().await;
        let index = beasts
            .iter()
            .position(|b| b.slug == slug)
            .ok_or_else(|| TailedBeastError::NotFound(slug.to_string()))?;

        let collides = beasts
            .iter()
            .enumerate()
            .any(|(i, b)| i != index && b.slug == beast.slug);
        if collides {
            return Err(TailedBeastError::DuplicateSlug(beast.slug.clone()));
        }

        beasts[index] = beast.clone();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> TailedBeastResult<()> {
        let mut beasts = self.beasts.write().await;
        let before = beasts.len();
        beasts.retain(|b| b.slug != slug);
        if beasts.len() == before {
            return Err(TailedBeastError::NotFound(slug.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> TailedBeastResult<Vec<TailedBeast>> {
        let beasts = self.beasts.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };
        Ok(beasts.iter().skip(skip).take(take).cloned().collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> TailedBeastResult<u64> {
        Ok(self.beasts.read().await.len() as u64)
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> TailedBeastResult<Vec<TailedBeast>> {
        let needle = query.to_lowercase();
        let beasts = self.beasts.read().await;
        Ok(beasts
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
