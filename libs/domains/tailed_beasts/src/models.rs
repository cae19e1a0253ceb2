use core_resource::slugify;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Tailed beast entity. `slug` is derived from `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TailedBeast {
    pub name: String,
    pub slug: String,
    pub images: Vec<String>,
    pub rank: String,
    pub abilities: Vec<String>,
    pub personality: String,
}

/// DTO for creating a tailed beast
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTailedBeast {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub personality: String,
}

/// DTO for a partial update. Empty strings are ignored; a present list
/// replaces the stored one.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTailedBeast {
    #[validate(length(max = 200))]
    pub name: Option<String>,
    pub images: Option<Vec<String>>,
    pub rank: Option<String>,
    pub abilities: Option<Vec<String>>,
    pub personality: Option<String>,
}

impl UpdateTailedBeast {
    pub fn new_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TailedBeast {
    pub fn new(input: CreateTailedBeast) -> Self {
        Self {
            slug: slugify(&input.name),
            name: input.name,
            images: input.images,
            rank: input.rank,
            abilities: input.abilities,
            personality: input.personality,
        }
    }

    pub fn apply_update(&mut self, update: UpdateTailedBeast) {
        if let Some(name) = non_empty(update.name) {
            if name != self.name {
                self.slug = slugify(&name);
                self.name = name;
            }
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(rank) = non_empty(update.rank) {
            self.rank = rank;
        }
        if let Some(abilities) = update.abilities {
            self.abilities = abilities;
        }
        if let Some(personality) = non_empty(update.personality) {
            self.personality = personality;
        }
    }
}
