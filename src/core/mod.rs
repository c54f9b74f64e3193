// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod pagination;
pub mod sorting;
pub mod validation;
pub mod wizard;

pub use engine::{query, MentorQueryEngine, DEFAULT_PAGE_SIZE};
pub use filters::{filter_mentors, matches_acceptance, matches_search, normalize_query};
pub use pagination::{advance_page, clamp_page_index, page_count};
pub use sorting::sort_mentors;
pub use validation::{validate_profile_step, validate_settings_section, FieldErrors};
pub use wizard::{ProfileError, ProfileWizard, WizardStep, WIZARD_STEPS};
