use crate::models::{Mentor, QueryState};

/// Normalise user-entered search text for matching
#[inline]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check if a mentor matches an already-normalised search needle
///
/// This is Stage 1 of the browse pipeline. The needle is compared against
/// name, title, company and each specialty tag separately, so a match never
/// spans two fields. An empty needle matches everyone.
#[inline]
pub fn matches_search(mentor: &Mentor, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    mentor.name.to_lowercase().contains(needle)
        || mentor.title.to_lowercase().contains(needle)
        || mentor.company.to_lowercase().contains(needle)
        || mentor
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(needle))
}

/// Stage 2 - acceptance filter
#[inline]
pub fn matches_acceptance(mentor: &Mentor, state: &QueryState) -> bool {
    state.acceptance_filter.admits(mentor.is_accepting_mentees)
}

/// Run both filter stages, keeping source order
pub fn filter_mentors<'a>(mentors: &'a [Mentor], state: &QueryState) -> Vec<&'a Mentor> {
    let needle = normalize_query(&state.search_query);

    mentors
        .iter()
        .filter(|mentor| matches_search(mentor, &needle))
        .filter(|mentor| matches_acceptance(mentor, state))
        .collect()
}
