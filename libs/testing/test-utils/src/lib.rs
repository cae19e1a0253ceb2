//! Shared test utilities for the domain crates.
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: deterministic, per-test names
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.database(&builder.database_name());
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Seeded generator so each test gets stable but distinct names.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from the test's own name.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_character");
    /// assert!(builder.database_name().starts_with("test_"));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `test-<prefix>-<seed>-<suffix>`, e.g. a display name for a fixture.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Database name private to this test (MongoDB names are limited to
    /// 63 bytes, so only the seed is used).
    pub fn database_name(&self) -> String {
        format!("test_{:016x}", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.name("character", "main"), b.name("character", "main"));
        assert_eq!(a.database_name(), b.database_name());
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");

        assert_ne!(a.database_name(), b.database_name());
    }

    #[test]
    fn test_database_name_shape() {
        let name = TestDataBuilder::new(u64::MAX).database_name();
        assert_eq!(name, "test_ffffffffffffffff");
        assert!(name.len() < 64);
    }
}
