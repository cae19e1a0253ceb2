//! Characters Domain
//!
//! ```text
//! Handlers    HTTP endpoints, envelopes
//!    |
//! Service     slug assignment, partial-update merge, pagination, search
//!    |
//! Repository  trait + MongoDB and in-memory implementations
//!    |
//! Models      Character, DTOs
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_characters::{handlers, MongoCharacterRepository, CharacterService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoCharacterRepository::new(client.database("shinobi"));
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(CharacterService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CharacterError, CharacterResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryCharacterRepository;
pub use models::{Character, CreateCharacter, Debut, Personal, Rank, UpdateCharacter};
pub use mongodb::MongoCharacterRepository;
pub use repository::CharacterRepository;
pub use service::CharacterService;
