//! Building blocks shared by the slug-addressed resource domains.
//!
//! - [`slug`]: display name -> URL-safe identifier
//! - [`pagination`]: page/limit -> store window, total page math
//! - [`envelope`]: the `{ message, result, ... }` JSON response body

pub mod envelope;
pub mod pagination;
pub mod slug;

pub use envelope::{Envelope, PageMeta};
pub use pagination::{Page, PageRequest, StoreWindow};
pub use slug::slugify;
