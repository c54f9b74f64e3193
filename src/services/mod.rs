// Service exports
pub mod cache;
pub mod catalog;
pub mod metadata;

pub use cache::{QueryCache, QueryCacheKey, CacheStats};
pub use catalog::{MentorCatalog, CatalogError};
pub use metadata::UserMetadataStore;
