//! Tailed Beasts Domain
//!
//! Same layering as the characters domain: handlers -> service ->
//! repository (MongoDB or in-memory) -> models.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{TailedBeastError, TailedBeastResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTailedBeastRepository;
pub use models::{CreateTailedBeast, TailedBeast, UpdateTailedBeast};
pub use mongodb::MongoTailedBeastRepository;
pub use repository::TailedBeastRepository;
pub use service::TailedBeastService;
