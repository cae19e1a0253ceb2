//! Tailed beast service

use core_resource::{Page, PageRequest, slugify};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TailedBeastError, TailedBeastResult};
use crate::models::{CreateTailedBeast, TailedBeast, UpdateTailedBeast};
use crate::repository::TailedBeastRepository;

const UNSLUGGABLE_NAME: &str = "name must contain at least one letter or digit";

/// Path segments routed ahead of `/{slug}`.
const RESERVED_SLUGS: &[&str] = &["search"];

fn check_slug(slug: &str) -> TailedBeastResult<()> {
    if slug.is_empty() {
        return Err(TailedBeastError::Validation(UNSLUGGABLE_NAME.to_string()));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(TailedBeastError::Validation(format!(
            "name must not produce the reserved slug '{slug}'"
        )));
    }
    Ok(())
}

/// Tailed beast service: slug assignment, partial-update merge, pagination and
/// name search on top of a TailedBeastRepository.
pub struct TailedBeastService<R: TailedBeastRepository> {
    repository: Arc<R>,
}

impl<R: TailedBeastRepository> TailedBeastService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateTailedBeast) -> TailedBeastResult<TailedBeast> {
        input
            .validate()
            .map_err(|e| TailedBeastError::Validation(e.to_string()))?;

        let beast = TailedBeast::new(input);
        check_slug(&beast.slug)?;

        self.repository.create(&beast).await?;
        Ok(beast)
    }

    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> TailedBeastResult<TailedBeast> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| TailedBeastError::NotFound(slug.to_string()))
    }

    /// Merge `patch` into the stored beast and persist it under the
    /// original slug. Returns the merged beast.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, slug: &str, patch: UpdateTailedBeast) -> TailedBeastResult<TailedBeast> {
        patch
            .validate()
            .map_err(|e| TailedBeastError::Validation(e.to_string()))?;

        if let Some(name) = patch.new_name() {
            check_slug(&slugify(name))?;
        }

        let mut beast = self.get_by_slug(slug).await?;
        beast.apply_update(patch);

        self.repository.update_by_slug(slug, &beast).await?;
        Ok(beast)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, slug: &str) -> TailedBeastResult<()> {
        self.repository.delete_by_slug(slug).await
    }

    /// One page plus the collection total. A non-positive page or limit
    /// returns every beast.
    #[instrument(skip(self))]
    pub async fn list_paged(&self, request: PageRequest) -> TailedBeastResult<Page<TailedBeast>> {
        let window = request.window();
        let (items, total) = tokio::try_join!(
            self.repository.list(window.skip, window.limit),
            self.repository.count()
        )?;
        Ok(Page::new(items, total, request))
    }

    #[instrument(skip(self))]
    pub async fn search_by_name(&self, query: &str) -> TailedBeastResult<Vec<TailedBeast>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TailedBeastError::Validation(
                "name query parameter is required".to_string(),
            ));
        }

        let found = self.repository.search_by_name(query).await?;
        if found.is_empty() {
            return Err(TailedBeastError::NoResults(query.to_string()));
        }
        Ok(found)
    }
}

impl<R: TailedBeastRepository> Clone for TailedBeastService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
