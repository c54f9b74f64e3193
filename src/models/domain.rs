use serde::{Deserialize, Serialize};
use validator::Validate;

/// Mentor profile shown in the recommendation view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Mentor {
    pub id: u32,
    #[validate(length(min = 1))]
    pub name: String,
    pub title: String,
    pub company: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[validate(range(max = 100))]
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "menteesCount", default)]
    pub mentees_count: u32,
    #[serde(rename = "yearsExperience")]
    pub years_experience: u32,
    #[serde(rename = "isAcceptingMentees")]
    pub is_accepting_mentees: bool,
    #[serde(rename = "mentorshipDuration", default)]
    pub mentorship_duration: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub schedule: String,
}

/// Tri-state filter on whether a mentor takes new mentees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AcceptanceFilter {
    #[default]
    #[serde(alias = "")]
    All,
    Accepting,
    NotAccepting,
}

impl AcceptanceFilter {
    #[inline]
    pub fn admits(self, is_accepting: bool) -> bool {
        match self {
            AcceptanceFilter::All => true,
            AcceptanceFilter::Accepting => is_accepting,
            AcceptanceFilter::NotAccepting => !is_accepting,
        }
    }
}

/// Field the browse list is ordered by (always descending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    MatchScore,
    Rating,
    Experience,
}

/// Browse state owned by the calling view
///
/// Every field has a default so partial JSON bodies and query strings work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(rename = "searchQuery", default)]
    pub search_query: String,
    #[serde(rename = "acceptanceFilter", default)]
    pub acceptance_filter: AcceptanceFilter,
    #[serde(rename = "sortKey", default)]
    pub sort_key: SortKey,
    #[serde(rename = "pageIndex", default)]
    pub page_index: usize,
}

impl QueryState {
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_filter(mut self, filter: AcceptanceFilter) -> Self {
        self.acceptance_filter = filter;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Pull `page_index` back into range after the matched set changed size
    pub fn clamp_page(&mut self, page_count: usize) {
        self.page_index = crate::core::pagination::clamp_page_index(self.page_index, page_count);
    }
}

/// One page of the filtered, sorted mentor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub visible: Vec<Mentor>,
    #[serde(rename = "totalMatched")]
    pub total_matched: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
    #[serde(rename = "clampedPageIndex")]
    pub clamped_page_index: usize,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            visible: Vec::new(),
            total_matched: 0,
            page_count: 0,
            clamped_page_index: 0,
        }
    }
}
