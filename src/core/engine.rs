use crate::models::{Mentor, QueryState, QueryResult};
use crate::core::{
    filters::filter_mentors,
    pagination::{clamp_page_index, page_bounds, page_count},
    sorting::sort_mentors,
};

/// Page size used by the recommendation carousel
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Browse pipeline for the recommendation view
///
/// # Pipeline Stages
/// 1. Free-text search over name, title, company and specialties
/// 2. Acceptance filter
/// 3. Stable descending sort by the selected key
/// 4. Pagination with page index clamping
///
/// The engine holds no state besides its page size, so one instance can be
/// shared across workers.
#[derive(Debug, Clone, Copy)]
pub struct MentorQueryEngine {
    page_size: usize,
}

impl MentorQueryEngine {
    /// A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run the pipeline with this engine's page size
    pub fn query(&self, mentors: &[Mentor], state: &QueryState) -> QueryResult {
        query(mentors, state, self.page_size)
    }
}

impl Default for MentorQueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Compute the visible page of mentors for `state`
///
/// # Arguments
/// * `mentors` - Source collection, its order is the sort tiebreak
/// * `state` - Search text, filter, sort key and requested page
/// * `page_size` - Records per page, values below 1 are treated as 1
///
/// # Returns
/// QueryResult with the visible slice, match count, page count and the
/// page index actually used
pub fn query(mentors: &[Mentor], state: &QueryState, page_size: usize) -> QueryResult {
    let page_size = page_size.max(1);

    // Stage 1 & 2: filtering
    let mut matched = filter_mentors(mentors, state);

    // Stage 3: ordering
    sort_mentors(&mut matched, state.sort_key);

    // Stage 4: pagination
    let total_matched = matched.len();
    let page_count = page_count(total_matched, page_size);
    let clamped_page_index = clamp_page_index(state.page_index, page_count);
    let (start, end) = page_bounds(clamped_page_index, page_size, total_matched);

    let visible = matched[start..end].iter().map(|m| (*m).clone()).collect();

    tracing::trace!(
        "Query '{}' matched {} mentors, page {}/{}",
        state.search_query,
        total_matched,
        clamped_page_index,
        page_count
    );

    QueryResult {
        visible,
        total_matched,
        page_count,
        clamped_page_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AcceptanceFilter, SortKey};

    fn create_mentor(id: u32, title: &str, match_score: u8, accepting: bool) -> Mentor {
        Mentor {
            id,
            name: format!("Mentor {}", id),
            title: title.to_string(),
            company: "Acme".to_string(),
            rating: 4.5,
            review_count: 12,
            match_score,
            specialties: vec!["Mentoring".to_string()],
            image: String::new(),
            mentees_count: 10,
            years_experience: id,
            is_accepting_mentees: accepting,
            mentorship_duration: "6 months avg.".to_string(),
            price: "$80/hr".to_string(),
            schedule: "Mon-Fri".to_string(),
        }
    }

    fn create_catalog() -> Vec<Mentor> {
        vec![
            create_mentor(1, "Product Manager", 70, true),
            create_mentor(2, "Engineer", 95, true),
            create_mentor(3, "Product Designer", 88, false),
            create_mentor(4, "Data Scientist", 60, true),
            create_mentor(5, "Head of Product", 91, true),
        ]
    }

    #[test]
    fn test_query_basic() {
        let result = query(&create_catalog(), &QueryState::default(), 3);

        assert_eq!(result.total_matched, 5);
        assert_eq!(result.page_count, 2);
        assert_eq!(result.clamped_page_index, 0);
        let ids: Vec<u32> = result.visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 5, 3]);
    }

    #[test]
    fn test_query_search_and_filter() {
        let state = QueryState::default()
            .with_search("product")
            .with_filter(AcceptanceFilter::Accepting);
        let result = query(&create_catalog(), &state, 3);

        assert_eq!(result.total_matched, 2);
        let ids: Vec<u32> = result.visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn test_query_clamps_stale_page() {
        let state = QueryState::default().with_page(9);
        let result = query(&create_catalog(), &state, 3);

        assert_eq!(result.clamped_page_index, 1);
        assert_eq!(result.visible.len(), 2);
    }

    #[test]
    fn test_query_empty_catalog() {
        let state = QueryState::default().with_page(4);
        let result = query(&[], &state, 3);

        assert_eq!(result, QueryResult::empty());
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let catalog = create_catalog();
        let before = catalog.clone();
        let state = QueryState::default().with_sort(SortKey::Experience);

        let first = query(&catalog, &state, 2);
        let second = query(&catalog, &state, 2);

        assert_eq!(catalog, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_zero_page_size() {
        let engine = MentorQueryEngine::new(0);
        assert_eq!(engine.page_size(), 1);

        let result = engine.query(&create_catalog(), &QueryState::default());
        assert_eq!(result.page_count, 5);
        assert_eq!(result.visible.len(), 1);
    }
}
