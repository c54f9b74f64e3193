//! Mentor Match - mentor browsing and profile service for Mastero
//!
//! This library provides the mentor search/filter/sort/paginate pipeline used
//! by the recommendation view, plus the validation rules behind the
//! profile-building wizard and the account settings page.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{advance_page, query, MentorQueryEngine, DEFAULT_PAGE_SIZE};
pub use models::{Mentor, QueryState, QueryResult, AcceptanceFilter, SortKey};
pub use services::MentorCatalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = MentorQueryEngine::default();
        assert_eq!(engine.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(advance_page(&QueryState::default(), 4, -1), 3);
    }
}
