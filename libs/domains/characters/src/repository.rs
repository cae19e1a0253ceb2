use async_trait::async_trait;

use crate::error::CharacterResult;
use crate::models::Character;

/// Repository trait for Character persistence
///
/// Every lookup is by slug. Implementations must reject a second document
/// with the same slug (`DuplicateSlug`) and report `NotFound` when an update
/// or delete matches nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Insert a new character
    async fn create(&self, character: &Character) -> CharacterResult<()>;

    /// Exact slug match
    async fn find_by_slug(&self, slug: &str) -> CharacterResult<Option<Character>>;

    /// Overwrite the document stored under `slug` with `character`, which may
    /// carry a new slug
    async fn update_by_slug(&self, slug: &str, character: &Character) -> CharacterResult<()>;

    async fn delete_by_slug(&self, slug: &str) -> CharacterResult<()>;

    /// Insertion-ordered window; `limit == 0` returns everything after `skip`
    async fn list(&self, skip: u64, limit: u64) -> CharacterResult<Vec<Character>>;

    async fn count(&self) -> CharacterResult<u64>;

    /// Case-insensitive substring match on `name`
    async fn search_by_name(&self, query: &str) -> CharacterResult<Vec<Character>>;
}
