// Unit tests for Mentor Match

use mentor_match::core::{
    advance_page, filters::normalize_query, pagination::page_count, query, MentorQueryEngine,
};
use mentor_match::models::{AcceptanceFilter, Mentor, QueryState, SortKey};
use mentor_match::services::MentorCatalog;

fn full_catalog() -> Vec<Mentor> {
    MentorCatalog::sample().unwrap().mentors().to_vec()
}

/// The seven mentors of the recommendation carousel
fn browse_set() -> Vec<Mentor> {
    MentorCatalog::sample().unwrap().browse_set()
}

fn ids(mentors: &[Mentor]) -> Vec<u32> {
    mentors.iter().map(|m| m.id).collect()
}

fn searchable_fields_contain(mentor: &Mentor, needle: &str) -> bool {
    mentor.name.to_lowercase().contains(needle)
        || mentor.title.to_lowercase().contains(needle)
        || mentor.company.to_lowercase().contains(needle)
        || mentor.specialties.iter().any(|s| s.to_lowercase().contains(needle))
}

fn all_states() -> Vec<QueryState> {
    let mut states = Vec::new();
    for search in ["", "product", "ANALYTICS", "  strategy ", "zzz", "e"] {
        for filter in [
            AcceptanceFilter::All,
            AcceptanceFilter::Accepting,
            AcceptanceFilter::NotAccepting,
        ] {
            for sort in [SortKey::MatchScore, SortKey::Rating, SortKey::Experience] {
                states.push(
                    QueryState::default()
                        .with_search(search)
                        .with_filter(filter)
                        .with_sort(sort),
                );
            }
        }
    }
    states
}

/// Every matched mentor in order, by walking all pages
fn collect_pages(mentors: &[Mentor], state: &QueryState, page_size: usize) -> Vec<Mentor> {
    let first = query(mentors, state, page_size);
    let mut all = Vec::new();
    for page in 0..first.page_count {
        let result = query(mentors, &state.clone().with_page(page), page_size);
        assert_eq!(result.clamped_page_index, page);
        all.extend(result.visible);
    }
    all
}

#[test]
fn test_empty_query_matches_everything() {
    let mentors = full_catalog();
    let result = query(&mentors, &QueryState::default(), 3);

    assert_eq!(result.total_matched, mentors.len());
    assert_eq!(result.page_count, 3);
    assert_eq!(ids(&result.visible), vec![1, 2, 3]);
}

#[test]
fn test_visible_mentors_contain_search_text() {
    let mentors = full_catalog();

    for state in all_states() {
        let needle = normalize_query(&state.search_query);
        if needle.is_empty() {
            continue;
        }
        for mentor in collect_pages(&mentors, &state, 3) {
            assert!(
                searchable_fields_contain(&mentor, &needle),
                "mentor {} does not contain '{}'",
                mentor.id,
                needle
            );
        }
    }
}

#[test]
fn test_acceptance_filter_property() {
    let mentors = full_catalog();

    for state in all_states() {
        let matched = collect_pages(&mentors, &state, 3);
        match state.acceptance_filter {
            AcceptanceFilter::Accepting => assert!(matched.iter().all(|m| m.is_accepting_mentees)),
            AcceptanceFilter::NotAccepting => assert!(matched.iter().all(|m| !m.is_accepting_mentees)),
            AcceptanceFilter::All => {}
        }
    }
}

#[test]
fn test_pagination_reconstructs_filtered_sequence() {
    let mentors = full_catalog();

    for page_size in [1, 2, 3, 5, 8, 20] {
        for state in all_states() {
            let pages = collect_pages(&mentors, &state, page_size);
            let everything = query(&mentors, &state, usize::MAX);

            assert_eq!(pages.len(), everything.total_matched);
            assert_eq!(ids(&pages), ids(&everything.visible));
            assert_eq!(
                query(&mentors, &state, page_size).page_count,
                page_count(everything.total_matched, page_size)
            );
        }
    }
}

#[test]
fn test_sort_orders() {
    let mentors = full_catalog();

    let by_score = collect_pages(&mentors, &QueryState::default(), 3);
    assert_eq!(ids(&by_score), vec![1, 2, 3, 8, 6, 4, 7, 5]);

    let by_rating = collect_pages(&mentors, &QueryState::default().with_sort(SortKey::Rating), 3);
    assert_eq!(ids(&by_rating), vec![1, 3, 5, 8, 2, 6, 4, 7]);

    let by_years = collect_pages(&mentors, &QueryState::default().with_sort(SortKey::Experience), 3);
    assert_eq!(ids(&by_years), vec![5, 2, 8, 7, 1, 6, 3, 4]);
}

#[test]
fn test_sort_stability_on_equal_keys() {
    let mentors = full_catalog();
    let state = QueryState::default().with_sort(SortKey::Rating);
    let sorted = collect_pages(&mentors, &state, 3);

    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            if a.rating == b.rating {
                let pos_a = mentors.iter().position(|m| m.id == a.id).unwrap();
                let pos_b = mentors.iter().position(|m| m.id == b.id).unwrap();
                assert!(pos_a < pos_b, "tie between {} and {} reordered", a.id, b.id);
            }
        }
    }
}

#[test]
fn test_product_search_scenario() {
    let mentors = full_catalog();
    let result = query(&mentors, &QueryState::default().with_search("product"), 3);

    let titles: Vec<&str> = result.visible.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Senior Product Manager", "Head of Product"]);
    assert_eq!(result.total_matched, 2);
    assert_eq!(result.page_count, 1);
}

#[test]
fn test_not_accepting_over_browse_set() {
    let mentors = browse_set();
    assert_eq!(mentors.len(), 7);

    let state = QueryState::default().with_filter(AcceptanceFilter::NotAccepting);
    let result = query(&mentors, &state, 3);

    assert_eq!(result.total_matched, 2);
    let names: Vec<&str> = result.visible.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Emily Rodriguez", "Rajesh Kumar"]);
}

#[test]
fn test_no_matches() {
    let mentors = browse_set();
    let state = QueryState::default().with_search("astronaut").with_page(2);
    let result = query(&mentors, &state, 3);

    assert!(result.visible.is_empty());
    assert_eq!(result.total_matched, 0);
    assert_eq!(result.page_count, 0);
    assert_eq!(result.clamped_page_index, 0);
}

#[test]
fn test_stale_page_reclamped_after_narrowing() {
    let mentors = browse_set();
    let mut state = QueryState::default().with_page(2);

    let wide = query(&mentors, &state, 3);
    assert_eq!(wide.clamped_page_index, 2);
    assert_eq!(ids(&wide.visible), vec![5]);

    state.search_query = "analytics".to_string();
    let narrow = query(&mentors, &state, 3);
    assert_eq!(narrow.page_count, 1);
    assert_eq!(narrow.clamped_page_index, 0);
    assert_eq!(ids(&narrow.visible), vec![6, 4]);

    state.clamp_page(narrow.page_count);
    assert_eq!(state.page_index, 0);
}

#[test]
fn test_advance_page_wraparound() {
    let first = QueryState::default();
    assert_eq!(advance_page(&first, 4, -1), 3);

    let last = QueryState::default().with_page(3);
    assert_eq!(advance_page(&last, 4, 1), 0);
}

#[test]
fn test_carousel_cycle_visits_every_page() {
    let mentors = browse_set();
    let engine = MentorQueryEngine::default();
    let mut state = QueryState::default();
    let page_total = engine.query(&mentors, &state).page_count;

    let mut seen = Vec::new();
    for _ in 0..page_total {
        seen.extend(ids(&engine.query(&mentors, &state).visible));
        state.page_index = advance_page(&state, page_total, 1);
    }

    assert_eq!(state.page_index, 0);
    seen.sort_unstable();
    assert_eq!(seen, vec![2, 3, 4, 5, 6, 7, 8]);
}
