use core_resource::slugify;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Biographical details shown on a character card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    pub birthdate: String,
    pub sex: String,
    pub status: String,
    pub height: String,
    pub weight: String,
    pub blood_type: String,
    pub occupation: String,
    pub affiliation: String,
    pub clan: String,
}

impl Personal {
    pub fn is_empty(&self) -> bool {
        [
            &self.birthdate,
            &self.sex,
            &self.status,
            &self.height,
            &self.weight,
            &self.blood_type,
            &self.occupation,
            &self.affiliation,
            &self.clan,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Rank {
    pub ninja_rank: String,
}

impl Rank {
    pub fn is_empty(&self) -> bool {
        self.ninja_rank.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Debut {
    pub anime: String,
    pub appears_in: String,
}

impl Debut {
    pub fn is_empty(&self) -> bool {
        self.anime.is_empty() && self.appears_in.is_empty()
    }
}

/// Character entity, stored one document per character.
///
/// `slug` is derived from `name` and is the only lookup key; the store's own
/// `_id` is never exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub name: String,
    pub slug: String,
    pub images: Vec<String>,
    pub personal: Personal,
    pub rank: Rank,
    pub debut: Debut,
    pub jutsu: Vec<String>,
}

/// DTO for creating a character
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub personal: Personal,
    #[serde(default)]
    pub rank: Rank,
    #[serde(default)]
    pub debut: Debut,
    #[serde(default)]
    pub jutsu: Vec<String>,
}

/// DTO for a partial update.
///
/// Absent or empty values leave the stored field alone. A list that is
/// present replaces the stored list, so `[]` clears it. Nested records are
/// replaced as a whole, and only when they carry at least one value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    pub images: Option<Vec<String>>,
    pub personal: Option<Personal>,
    pub rank: Option<Rank>,
    pub debut: Option<Debut>,
    pub jutsu: Option<Vec<String>>,
}

impl UpdateCharacter {
    /// The new name, if the patch renames the character.
    pub fn new_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl Character {
    pub fn new(input: CreateCharacter) -> Self {
        Self {
            slug: slugify(&input.name),
            name: input.name,
            images: input.images,
            personal: input.personal,
            rank: input.rank,
            debut: input.debut,
            jutsu: input.jutsu,
        }
    }

    /// Merge a patch into this character, re-deriving the slug on rename.
    pub fn apply_update(&mut self, update: UpdateCharacter) {
        if let Some(name) = update.name.filter(|name| !name.is_empty()) {
            if name != self.name {
                self.slug = slugify(&name);
                self.name = name;
            }
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(personal) = update.personal.filter(|p| !p.is_empty()) {
            self.personal = personal;
        }
        if let Some(rank) = update.rank.filter(|r| !r.is_empty()) {
            self.rank = rank;
        }
        if let Some(debut) = update.debut.filter(|d| !d.is_empty()) {
            self.debut = debut;
        }
        if let Some(jutsu) = update.jutsu {
            self.jutsu = jutsu;
        }
    }
}
