//! In-memory CharacterRepository, for local runs without MongoDB and for
//! handler tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{CharacterError, CharacterResult};
use crate::models::Character;
use crate::repository::CharacterRepository;

#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<Vec<Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store; slugs are taken as given.
    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            characters: RwLock::new(characters),
        }
    }
}

#[async_trait]
impl CharacterRepository for InMemoryCharacterRepository {
    #[instrument(skip(self, character), fields(slug = %character.slug))]
    async fn create(&self, character: &Character) -> CharacterResult<()> {
        let mut characters = self.characters.write().await;
        if characters.iter().any(|c| c.slug == character.slug) {
            return Err(CharacterError::DuplicateSlug(character.slug.clone()));
        }
        characters.push(character.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> CharacterResult<Option<Character>> {
        let characters = self.characters.read().await;
        Ok(characters.iter().find(|c| c.slug == slug).cloned())
    }

    #[instrument(skip(self, character))]
    async fn update_by_slug(&self, slug: &str, character: &Character) -> CharacterResult<()> {
        let mut characters = self.characters.write().await;
        let index = characters
            .iter()
            .position(|c| c.slug == slug)
            .ok_or_else(|| CharacterError::NotFound(slug.to_string()))?;

        let collides = characters
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.slug == character.slug);
        if collides {
            return Err(CharacterError::DuplicateSlug(character.slug.clone()));
        }

        characters[index] = character.clone();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_slug(&self, slug: &str) -> CharacterResult<()> {
        let mut characters = self.characters.write().await;
        let before = characters.len();
        characters.retain(|c| c.slug != slug);
        if characters.len() == before {
            return Err(CharacterError::NotFound(slug.to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> CharacterResult<Vec<Character>> {
        let characters = self.characters.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = match limit {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };
        Ok(characters.iter().skip(skip).take(take).cloned().collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> CharacterResult<u64> {
        Ok(self.characters.read().await.len() as u64)
    }

    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> CharacterResult<Vec<Character>> {
        let needle = query.to_lowercase();
        let characters = self.characters.read().await;
        Ok(characters
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateCharacter;

    fn character(name: &str) -> Character {
        Character::new(CreateCharacter {
            name: name.to_string(),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_slug() {
        let repo = InMemoryCharacterRepository::new();
        repo.create(&character("Rock Lee")).await.unwrap();

        let err = repo.create(&character("rock lee")).await.unwrap_err();
        assert!(matches!(err, CharacterError::DuplicateSlug(slug) if slug == "rock-lee"));
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_slug() {
        let repo = InMemoryCharacterRepository::new();

        let err = repo
            .update_by_slug("ghost", &character("Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(_)));

        let err = repo.delete_by_slug("ghost").await.unwrap_err();
        assert!(matches!(err, CharacterError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_onto_existing_slug_is_rejected() {
        let repo = InMemoryCharacterRepository::with_characters(vec![
            character("Hyuga Neji"),
            character("Hyuga Hinata"),
        ]);

        let err = repo
            .update_by_slug("hyuga-neji", &character("Hyuga Hinata"))
            .await
            .unwrap_err();
        assert!(matches!(err, CharacterError::DuplicateSlug(_)));
    }

    #[tokio::test]
    async fn test_list_window_keeps_insertion_order() {
        let names = ["A", "B", "C", "D", "E"];
        let repo = InMemoryCharacterRepository::with_characters(
            names.iter().map(|n| character(n)).collect(),
        );

        let page: Vec<_> = repo
            .list(1, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(page, vec!["B", "C"]);

        assert_eq!(repo.list(0, 0).await.unwrap().len(), 5);
        assert_eq!(repo.list(4, 0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let repo = InMemoryCharacterRepository::with_characters(vec![
            character("Uzumaki Naruto"),
            character("Uzumaki Kushina"),
            character("Uchiha Sasuke"),
        ]);

        let found = repo.search_by_name("NARU").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "uzumaki-naruto");

        assert_eq!(repo.search_by_name("uzumaki").await.unwrap().len(), 2);
    }
}
