use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::Settings;
use crate::core::{advance_page, query};
use crate::models::{
    AdvancePageRequest, AdvancePageResponse, ErrorResponse, HealthResponse, MentorQueryParams,
    MentorQueryRequest, QueryResult, QueryState, RecommendationsResponse,
};
use crate::services::{MentorCatalog, QueryCache, UserMetadataStore};
use std::sync::Arc;

/// A mentor collection plus its optional result memo
#[derive(Clone)]
pub struct MentorListing {
    pub catalog: MentorCatalog,
    pub cache: Option<QueryCache>,
}

impl MentorListing {
    pub fn new(catalog: MentorCatalog, cache: Option<QueryCache>) -> Self {
        Self { catalog, cache }
    }

    pub fn query(&self, state: &QueryState, page_size: usize) -> Arc<QueryResult> {
        match &self.cache {
            Some(cache) => cache.get_or_compute(self.catalog.mentors(), state, page_size),
            None => Arc::new(query(self.catalog.mentors(), state, page_size)),
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Every mentor, used by the search endpoints
    pub mentors: MentorListing,
    /// Carousel list of the recommendation view (best match excluded)
    pub browse: MentorListing,
    pub metadata: UserMetadataStore,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state from a catalog, wiring caches per the settings
    pub fn new(catalog: MentorCatalog, settings: Settings) -> Result<Self, crate::services::CatalogError> {
        let browse = MentorCatalog::new(catalog.browse_set())?;

        let make_cache = || {
            settings
                .cache
                .enabled
                .then(|| QueryCache::new(settings.cache.max_entries, settings.cache.ttl_secs))
        };

        Ok(Self {
            mentors: MentorListing::new(catalog, make_cache()),
            browse: MentorListing::new(browse, make_cache()),
            metadata: UserMetadataStore::new(),
            settings: Arc::new(settings),
        })
    }
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors", web::get().to(list_mentors))
        .route("/mentors/query", web::post().to(query_mentors))
        .route("/mentors/best", web::get().to(best_match))
        .route("/mentors/{id}", web::get().to(get_mentor))
        .route("/recommendations", web::get().to(recommendations))
        .route("/recommendations/page", web::post().to(advance_recommendation_page));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.mentors.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mentors: state.mentors.catalog.len(),
        cache: state.mentors.cache.as_ref().map(QueryCache::stats),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", message, 400))
}

/// Browse mentors from query-string parameters
///
/// GET /api/v1/mentors?searchQuery=product&acceptanceFilter=accepting&sortKey=rating&pageIndex=0
async fn list_mentors(
    state: web::Data<AppState>,
    params: web::Query<MentorQueryParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        return validation_failed(errors.to_string());
    }

    let (query_state, page_size) = params.into_inner().into_parts();
    let page_size = state.settings.effective_page_size(page_size);
    let result = state.mentors.query(&query_state, page_size);

    tracing::info!(
        "Browse '{}' returned {} of {} matches (page {}/{})",
        query_state.search_query,
        result.visible.len(),
        result.total_matched,
        result.clamped_page_index,
        result.page_count
    );

    HttpResponse::Ok().json(&*result)
}

/// Browse mentors from a JSON query state
///
/// POST /api/v1/mentors/query
///
/// Request body:
/// ```json
/// {
///   "state": {
///     "searchQuery": "product",
///     "acceptanceFilter": "all",
///     "sortKey": "matchScore",
///     "pageIndex": 0
///   },
///   "pageSize": 3
/// }
/// ```
async fn query_mentors(
    state: web::Data<AppState>,
    req: web::Json<MentorQueryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let page_size = state.settings.effective_page_size(req.page_size);
    let result = state.mentors.query(&req.state, page_size);

    tracing::debug!(
        "Query {:?} matched {} mentors",
        req.state,
        result.total_matched
    );

    HttpResponse::Ok().json(&*result)
}

/// Carousel next/previous
///
/// POST /api/v1/recommendations/page
///
/// Returns the query state with its page index moved by `delta`, wrapping
/// around at either end. Pages over the same collection as
/// `/recommendations` so both agree on the page count.
async fn advance_recommendation_page(
    state: web::Data<AppState>,
    req: web::Json<AdvancePageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let req = req.into_inner();
    let page_size = state.settings.effective_page_size(req.page_size);
    let result = state.browse.query(&req.state, page_size);

    let mut next = req.state;
    next.clamp_page(result.page_count);
    next.page_index = advance_page(&next, result.page_count, req.delta);

    HttpResponse::Ok().json(AdvancePageResponse {
        state: next,
        page_count: result.page_count,
    })
}

/// Featured mentor with the highest match score
async fn best_match(state: web::Data<AppState>) -> impl Responder {
    match state.mentors.catalog.best_match() {
        Some(mentor) => HttpResponse::Ok().json(mentor),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Not found",
            "The mentor catalog is empty",
            404,
        )),
    }
}

async fn get_mentor(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.mentors.catalog.get(id) {
        Some(mentor) => HttpResponse::Ok().json(mentor),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Not found",
            format!("Mentor {} does not exist", id),
            404,
        )),
    }
}

/// Recommendation view payload
///
/// GET /api/v1/recommendations?searchQuery=..&acceptanceFilter=..&sortKey=..&pageIndex=..
///
/// The best match is featured separately; the query runs over everyone else.
async fn recommendations(
    state: web::Data<AppState>,
    params: web::Query<MentorQueryParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        return validation_failed(errors.to_string());
    }

    let (query_state, page_size) = params.into_inner().into_parts();
    let page_size = state.settings.effective_page_size(page_size);
    let others = state.browse.query(&query_state, page_size);

    HttpResponse::Ok().json(RecommendationsResponse {
        best_match: state.mentors.catalog.best_match().cloned(),
        others: (*others).clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_without_cache_matches_engine() {
        let catalog = MentorCatalog::sample().unwrap();
        let listing = MentorListing::new(catalog.clone(), None);
        let state = QueryState::default().with_search("analytics");

        let result = listing.query(&state, 3);
        assert_eq!(*result, query(catalog.mentors(), &state, 3));
    }

    #[test]
    fn test_app_state_browse_excludes_best_match() {
        let catalog = MentorCatalog::sample().unwrap();
        let state = AppState::new(catalog, Settings::default()).unwrap();

        assert_eq!(state.mentors.catalog.len(), 8);
        assert_eq!(state.browse.catalog.len(), 7);
        assert!(state.browse.catalog.get(1).is_none());
    }
}
