use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AcceptanceFilter, QueryState, SortKey};
use crate::models::profile::{AccountSettingsForm, ProfileForm};

/// Query-string form of a browse request
///
/// GET /api/v1/mentors?searchQuery=..&acceptanceFilter=..&sortKey=..&pageIndex=..&pageSize=..
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MentorQueryParams {
    #[serde(rename = "searchQuery", default)]
    pub search_query: String,
    #[serde(rename = "acceptanceFilter", default)]
    pub acceptance_filter: AcceptanceFilter,
    #[serde(rename = "sortKey", default)]
    pub sort_key: SortKey,
    #[serde(rename = "pageIndex", default)]
    pub page_index: usize,
    #[validate(range(min = 1))]
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

impl MentorQueryParams {
    pub fn into_parts(self) -> (QueryState, Option<usize>) {
        let state = QueryState {
            search_query: self.search_query,
            acceptance_filter: self.acceptance_filter,
            sort_key: self.sort_key,
            page_index: self.page_index,
        };
        (state, self.page_size)
    }
}

/// JSON browse request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MentorQueryRequest {
    #[serde(default)]
    pub state: QueryState,
    #[validate(range(min = 1))]
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

/// Carousel navigation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdvancePageRequest {
    #[serde(default)]
    pub state: QueryState,
    pub delta: i64,
    #[validate(range(min = 1))]
    #[serde(rename = "pageSize")]
    pub page_size: Option<usize>,
}

/// Register a signed-in user with the identity fields from the provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeedUserRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
}

/// Save one account settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsRequest {
    pub form: AccountSettingsForm,
}

/// Complete one wizard step (or finish the wizard)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStepRequest {
    pub form: ProfileForm,
}
