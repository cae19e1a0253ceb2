use async_trait::async_trait;

use crate::error::TailedBeastResult;
use crate::models::TailedBeast;

/// Repository trait for TailedBeast persistence
///
/// Every lookup is by slug. Implementations must reject a second document
/// with the same slug (`DuplicateSlug`) and report `NotFound` when an update
/// or delete matches nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TailedBeastRepository: Send + Sync {
    /// Insert a new beast
    async fn create(&self, beast: &TailedBeast) -> TailedBeastResult<()>;

    /// Exact slug match
    async fn find_by_slug(&self, slug: &str) -> TailedBeastResult<Option<TailedBeast>>;

    /// Overwrite the document stored under `slug` with `beast`, which may
    /// carry a new slug
    async fn update_by_slug(&self, slug: &str, beast: &TailedBeast) -> TailedBeastResult<()>;

    async fn delete_by_slug(&self, slug: &str) -> TailedBeastResult<()>;

    /// Insertion-ordered window; `limit == 0` returns everything after `skip`
    async fn list(&self, skip: u64, limit: u64) -> TailedBeastResult<Vec<TailedBeast>>;

    async fn count(&self) -> TailedBeastResult<u64>;

    /// Case-insensitive substring match on `name`
    async fn search_by_name(&self, query: &str) -> TailedBeastResult<Vec<TailedBeast>>;
}
