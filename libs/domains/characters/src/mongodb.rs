//! MongoDB implementation of CharacterRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key_error;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_document},
    options::{FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::{CharacterError, CharacterResult};
use crate::models::Character;
use crate::repository::CharacterRepository;

pub const DEFAULT_COLLECTION: &str = "characters";
pub const SLUG_INDEX_NAME: &str = "idx_slug_unique";

/// MongoDB implementation of the CharacterRepository
pub struct MongoCharacterRepository {
    collection: Collection<Character>,
}

impl MongoCharacterRepository {
    /// Repository over the `characters` collection.
    ///
    /// ```ignore
    /// let client = database::mongodb::connect(&config).await?;
    /// let repo = MongoCharacterRepository::new(client.database("shinobi"));
    /// repo.init_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Character>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<Character> {
        &self.collection
    }

    /// Create the unique slug index. Idempotent.
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    pub async fn init_indexes(&self) -> CharacterResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(
                IndexOptions::builder()
                    .name(SLUG_INDEX_NAME.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!(index = SLUG_INDEX_NAME, "Character indexes ready");
        Ok(())
    }

    fn name_filter(query: &str) -> Document {
        doc! { "name": { "$regex": regex::escape(query), "$options": "i" } }
    }

    fn find_options(skip: u64, limit: u64) -> FindOptions {
        let limit = (limit > 0).then(|| i64::try_from(limit).unwrap_or(i64::MAX));
        FindOptions::builder()
            .skip((skip > 0).then(|| skip.min(i64::MAX as u64)))
            .limit(limit)
            .sort(doc! { "_id": 1 })
            .build()
    }

    fn write_error(err: mongodb::error::Error, slug: &str) -> CharacterError {
        if is_duplicate_key_error(&err) {
            CharacterError::DuplicateSlug(slug.to_string())
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl CharacterRepository for MongoCharacterRepository {
    #[instrument(skip(self, character), fields(slug = %character.slug))]
    async fn create(&self, character: &Character) -> CharacterResult<()> {
        self.collection
            .insert_one(character)
            .await
            .map_err(|e| Self::write_error(e, &character.slug))?;

        tracing::info!(slug = %character.slug, "Character created successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> CharacterResult<Option<Character>> {
        let character = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(character)
    }

    #[instrument(skip(self, character), fields(new_slug = %character.slug))]
    async fn update_by_slug(&self, slug: &str, character: &Character) -> CharacterResult<()> {
        let fields =
            to_document(character).map_err(|e| CharacterError::Database(e.to_string()))?;

        let result = self
            .collection
            .update_one(doc! { "slug": slug }, doc! { "$set": fields })
            .await
            .map_err(|e| Self::write_error(e, &character.slug))?;

        if result.matched_count == 0 {
            return Err(CharacterError::NotFound(slug.to_string()));
        }

        tracing::info!(slug, new_slug = %character.slug, "Character updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> CharacterResult<()> {
        let result = self.collection.delete_one(doc! { "slug": slug }).await?;

        if result.deleted_count == 0 {
            return Err(CharacterError::NotFound(slug.to_string()));
        }

        tracing::info!(slug, "Character deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> CharacterResult<Vec<Character>> {
        let cursor = self
            .collection
            .find(doc! {})
            .with_options(Self::find_options(skip, limit))
            .await?;
        let characters: Vec<Character> = cursor.try_collect().await?;
        Ok(characters)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> CharacterResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> CharacterResult<Vec<Character>> {
        let cursor = self
            .collection
            .find(Self::name_filter(query))
            .sort(doc! { "_id": 1 })
            .await?;
        let characters: Vec<Character> = cursor.try_collect().await?;
        Ok(characters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_resource::PageRequest;

    #[test]
    fn test_name_filter_escapes_regex() {
        let filter = MongoCharacterRepository::name_filter("Might Guy (8 Gates)");
        let name = filter.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"Might Guy \(8 Gates\)");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_find_options_unbounded() {
        let options = MongoCharacterRepository::find_options(0, 0);
        assert_eq!(options.skip, None);
        assert_eq!(options.limit, None);
        assert_eq!(options.sort, Some(doc! { "_id": 1 }));
    }

    #[test]
    fn test_find_options_window() {
        let options = MongoCharacterRepository::find_options(20, 10);
        assert_eq!(options.skip, Some(20));
        assert_eq!(options.limit, Some(10));
    }

    #[test]
    fn test_find_options_far_page_serializes() {
        let window = PageRequest::new(i64::MAX, 2).window();
        let options = MongoCharacterRepository::find_options(window.skip, window.limit);
        assert_eq!(options.skip, Some(i64::MAX as u64));
        assert!(mongodb::bson::to_document(&options).is_ok());

        let options = MongoCharacterRepository::find_options(u64::MAX, 10);
        assert_eq!(options.skip, Some(i64::MAX as u64));
    }
}
