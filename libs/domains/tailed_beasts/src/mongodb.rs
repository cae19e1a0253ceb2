//! MongoDB implementation of TailedBeastRepository

use async_trait::async_trait;
use database::mongodb::is_duplicate_key_error;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, to_document},
    options::{FindOptions, IndexOptions},
};
use tracing::instrument;

use crate::error::{TailedBeastError, TailedBeastResult};
use crate::models::TailedBeast;
use crate::repository::TailedBeastRepository;

pub const DEFAULT_COLLECTION: &str = "tailed_beasts";
pub const SLUG_INDEX_NAME: &str = "idx_slug_unique";

/// MongoDB implementation of the TailedBeastRepository
pub struct MongoTailedBeastRepository {
    collection: Collection<TailedBeast>,
}

impl MongoTailedBeastRepository {
    /// Repository over the `tailed_beasts` collection.
    ///
    /// ```ignore
    /// let client = database::mongodb::connect(&config).await?;
    /// let repo = MongoTailedBeastRepository::new(client.database("shinobi"));
    /// repo.init_indexes().await?;
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<TailedBeast>(collection_name);
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<TailedBeast> {
        &self.collection
    }

    /// Create the unique slug index. Idempotent.
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    pub async fn init_indexes(&self) -> TailedBeastResult<()> {
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
        tracing::info!(index = SLUG_INDEX_NAME, "Tailed beast indexes ready");
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

    fn write_error(err: mongodb::error::Error, slug: &str) -> TailedBeastError {
        if is_duplicate_key_error(&err) {
            TailedBeastError::DuplicateSlug(slug.to_string())
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl TailedBeastRepository for MongoTailedBeastRepository {
    #[instrument(skip(self, beast), fields(slug = %beast.slug))]
    async fn create(&self, beast: &TailedBeast) -> TailedBeastResult<()> {
        self.collection
            .insert_one(beast)
            .await
            .map_err(|e| Self::write_error(e, &beast.slug))?;

        tracing::info!(slug = %beast.slug, "Tailed beast created successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> TailedBeastResult<Option<TailedBeast>> {
        let beast = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(beast)
    }

    #[instrument(skip(self, beast), fields(new_slug = %beast.slug))]
    async fn update_by_slug(&self, slug: &str, beast: &TailedBeast) -> TailedBeastResult<()> {
        let fields =
            to_document(beast).map_err(|e| TailedBeastError::Database(e.to_string()))?;

        let result = self
            .collection
            .update_one(doc! { "slug": slug }, doc! { "$set": fields })
            .await
            .map_err(|e| Self::write_error(e, &beast.slug))?;

        if result.matched_count == 0 {
            return Err(TailedBeastError::NotFound(slug.to_string()));
        }

        tracing::info!(slug, new_slug = %beast.slug, "Tailed beast updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> TailedBeastResult<()> {
        let result = self.collection.delete_one(doc! { "slug": slug }).await?;

        if result.deleted_count == 0 {
            return Err(TailedBeastError::NotFound(slug.to_string()));
        }

        tracing::info!(slug, "Tailed beast deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> TailedBeastResult<Vec<TailedBeast>> {
        let cursor = self
            .collection
            .find(doc! {})
            .with_options(Self::find_options(skip, limit))
            .await?;
        let beasts: Vec<TailedBeast> = cursor.try_collect().await?;
        Ok(beasts)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> TailedBeastResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> TailedBeastResult<Vec<TailedBeast>> {
        let cursor = self
            .collection
            .find(Self::name_filter(query))
            .sort(doc! { "_id": 1 })
            .await?;
        let beasts: Vec<TailedBeast> = cursor.try_collect().await?;
        Ok(beasts)
    }
}
