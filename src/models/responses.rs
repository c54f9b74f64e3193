use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{Mentor, QueryResult, QueryState};
use crate::models::profile::{ProfileForm, UserMetadata};
use crate::services::CacheStats;

/// Response for the carousel navigation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancePageResponse {
    pub state: QueryState,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
}

/// Recommendation view: the featured mentor plus the browsable rest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(rename = "bestMatch")]
    pub best_match: Option<Mentor>,
    pub others: QueryResult,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub mentors: usize,
    /// Query cache of the full listing, absent when caching is off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
            fields: BTreeMap::new(),
        }
    }
}

/// Successful save of a settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub message: String,
}

/// Wizard state after a step was completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileStepResponse {
    pub message: String,
    #[serde(rename = "currentStep")]
    pub current_step: u8,
    #[serde(rename = "completedSteps")]
    pub completed_steps: Vec<u8>,
    #[serde(rename = "progressPercent")]
    pub progress_percent: f64,
    pub profile: UserMetadata,
    /// Wizard form prefilled from the stored profile
    pub form: ProfileForm,
}
