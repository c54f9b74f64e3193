// Model exports
pub mod domain;
pub mod profile;
pub mod requests;
pub mod responses;

pub use domain::{Mentor, AcceptanceFilter, SortKey, QueryState, QueryResult};
pub use profile::{ProfileForm, AccountSettingsForm, DataPreferences, SettingsSection, UserMetadata};
pub use requests::{MentorQueryParams, MentorQueryRequest, AdvancePageRequest, SeedUserRequest, SaveSettingsRequest, ProfileStepRequest};
pub use responses::{AdvancePageResponse, RecommendationsResponse, HealthResponse, ErrorResponse, SaveSettingsResponse, ProfileStepResponse};
