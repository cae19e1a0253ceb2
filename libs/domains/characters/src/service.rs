//! Character Service - Business logic layer

use core_resource::{Page, PageRequest, slugify};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CharacterError, CharacterResult};
use crate::models::{Character, CreateCharacter, UpdateCharacter};
use crate::repository::CharacterRepository;

const UNSLUGGABLE_NAME: &str = "name must contain at least one letter or digit";

/// Path segments routed ahead of `/{slug}`.
const RESERVED_SLUGS: &[&str] = &["search"];

fn check_slug(slug: &str) -> CharacterResult<()> {
    if slug.is_empty() {
        return Err(CharacterError::Validation(UNSLUGGABLE_NAME.to_string()));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(CharacterError::Validation(format!(
            "name must not produce the reserved slug '{slug}'"
        )));
    }
    Ok(())
}

/// Character service: slug assignment, partial-update merge, pagination and
/// name search on top of a CharacterRepository.
pub struct CharacterService<R: CharacterRepository> {
    repository: Arc<R>,
}

impl<R: CharacterRepository> CharacterService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a character; its slug is derived from the name.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateCharacter) -> CharacterResult<Character> {
        input
            .validate()
            .map_err(|e| CharacterError::Validation(e.to_string()))?;

        let character = Character::new(input);
        check_slug(&character.slug)?;

        self.repository.create(&character).await?;
        Ok(character)
    }

    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> CharacterResult<Character> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| CharacterError::NotFound(slug.to_string()))
    }

    /// Merge `patch` into the stored character and persist it under the
    /// original slug. Returns the merged character.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, slug: &str, patch: UpdateCharacter) -> CharacterResult<Character> {
        patch
            .validate()
            .map_err(|e| CharacterError::Validation(e.to_string()))?;

        if let Some(name) = patch.new_name() {
            check_slug(&slugify(name))?;
        }

        let mut character = self.get_by_slug(slug).await?;
        character.apply_update(patch);

        self.repository.update_by_slug(slug, &character).await?;
        Ok(character)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, slug: &str) -> CharacterResult<()> {
        self.repository.delete_by_slug(slug).await
    }

    /// One page plus the collection total. A non-positive page or limit
    /// returns every character.
    #[instrument(skip(self))]
    pub async fn list_paged(&self, request: PageRequest) -> CharacterResult<Page<Character>> {
        let window = request.window();
        let (items, total) = tokio::try_join!(
            self.repository.list(window.skip, window.limit),
            self.repository.count()
        )?;
        Ok(Page::new(items, total, request))
    }

    /// Case-insensitive substring search on name.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, query: &str) -> CharacterResult<Vec<Character>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CharacterError::Validation(
                "name query parameter is required".to_string(),
            ));
        }

        let found = self.repository.search_by_name(query).await?;
        if found.is_empty() {
            return Err(CharacterError::NoResults(query.to_string()));
        }
        Ok(found)
    }
}

impl<R: CharacterRepository> Clone for CharacterService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Personal, Rank};
    use crate::repository::MockCharacterRepository;
    use mockall::predicate::eq;

    fn stored(name: &str) -> Character {
        Character::new(CreateCharacter {
            name: name.to_string(),
            images: vec![format!("{name}.png")],
            personal: Personal {
                clan: "Uzumaki".to_string(),
                ..Default::default()
            },
            rank: Rank {
                ninja_rank: "Genin".to_string(),
            },
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_create_assigns_slug() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_create()
            .withf(|c| c.slug == "uzumaki-naruto" && c.name == "Uzumaki Naruto")
            .times(1)
            .returning(|_| Ok(()));

        let service = CharacterService::new(repo);
        let created = service
            .create(CreateCharacter {
                name: "Uzumaki Naruto".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.slug, "uzumaki-naruto");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let repo = MockCharacterRepository::new();
        let service = CharacterService::new(repo);

        let err = service.create(CreateCharacter::default()).await.unwrap_err();
        assert!(matches!(err, CharacterError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_name_without_alphanumerics() {
        let repo = MockCharacterRepository::new();
        let service = CharacterService::new(repo);

        let err = service
            .create(CreateCharacter {
                name: "???".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Validation(msg) if msg == UNSLUGGABLE_NAME));
    }

    #[tokio::test]
    async fn test_create_propagates_duplicate_slug() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_create()
            .returning(|c| Err(CharacterError::DuplicateSlug(c.slug.clone())));

        let service = CharacterService::new(repo);
        let err = service
            .create(CreateCharacter {
                name: "Hatake Kakashi".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::DuplicateSlug(slug) if slug == "hatake-kakashi"));
    }

    #[tokio::test]
    async fn test_get_missing_slug_is_not_found() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_slug()
            .with(eq("nobody"))
            .returning(|_| Ok(None));

        let service = CharacterService::new(repo);
        let err = service.get_by_slug("nobody").await.unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(slug) if slug == "nobody"));
    }

    #[tokio::test]
    async fn test_rename_persists_under_original_slug() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_slug()
            .with(eq("uzumaki-naruto"))
            .returning(|_| Ok(Some(stored("Uzumaki Naruto"))));
        repo.expect_update_by_slug()
            .withf(|slug, c| {
                slug == "uzumaki-naruto"
                    && c.slug == "naruto-uzumaki"
                    && c.images == vec!["Uzumaki Naruto.png".to_string()]
                    && c.personal.clan == "Uzumaki"
                    && c.rank.ninja_rank == "Genin"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CharacterService::new(repo);
        let updated = service
            .update(
                "uzumaki-naruto",
                UpdateCharacter {
                    name: Some("Naruto Uzumaki".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Naruto Uzumaki");
        assert_eq!(updated.slug, "naruto-uzumaki");
    }

    #[tokio::test]
    async fn test_update_missing_slug_never_writes() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_slug().returning(|_| Ok(None));
        repo.expect_update_by_slug().never();

        let service = CharacterService::new(repo);
        let err = service
            .update("ghost", UpdateCharacter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_unsluggable_rename() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_slug().never();

        let service = CharacterService::new(repo);
        let err = service
            .update(
                "uzumaki-naruto",
                UpdateCharacter {
                    name: Some("!!!".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_slug_is_not_found() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_delete_by_slug()
            .returning(|slug| Err(CharacterError::NotFound(slug.to_string())));

        let service = CharacterService::new(repo);
        let err = service.delete("ghost").await.unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_paged_second_page() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_list()
            .with(eq(10), eq(10))
            .returning(|_, _| Ok((0..10).map(|i| stored(&format!("Ninja {i}"))).collect()));
        repo.expect_count().returning(|| Ok(25));

        let service = CharacterService::new(repo);
        let page = service.list_paged(PageRequest::new(2, 10)).await.unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages(), Some(3));
    }

    #[tokio::test]
    async fn test_list_paged_unbounded() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_list()
            .with(eq(0), eq(0))
            .returning(|_, _| Ok(vec![stored("Gaara"), stored("Temari")]));
        repo.expect_count().returning(|| Ok(2));

        let service = CharacterService::new(repo);
        let page = service.list_paged(PageRequest::new(0, 0)).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages(), None);
    }

    #[tokio::test]
    async fn test_search_empty_query_never_reaches_store() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_search_by_name().never();

        let service = CharacterService::new(repo);
        for query in ["", "   "] {
            let err = service.search_by_name(query).await.unwrap_err();
            assert!(matches!(err, CharacterError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_search_without_matches_is_no_results() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_search_by_name()
            .with(eq("orochimaru"))
            .returning(|_| Ok(vec![]));

        let service = CharacterService::new(repo);
        let err = service.search_by_name(" orochimaru ").await.unwrap_err();
        assert!(matches!(err, CharacterError::NoResults(q) if q == "orochimaru"));
    }

    #[tokio::test]
    async fn test_create_rejects_reserved_slug() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_create().never();

        let service = CharacterService::new(repo);
        let err = service
            .create(CreateCharacter {
                name: "Search".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Validation(msg) if msg.contains("'search'")));
    }

    #[tokio::test]
    async fn test_update_rejects_rename_to_reserved_slug() {
        let mut repo = MockCharacterRepository::new();
        repo.expect_find_by_slug().never();
        repo.expect_update_by_slug().never();

        let service = CharacterService::new(repo);
        let err = service
            .update(
                "uzumaki-naruto",
                UpdateCharacter {
                    name: Some(" search ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::Validation(_)));
    }
}
