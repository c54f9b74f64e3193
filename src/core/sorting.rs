use std::cmp::Ordering;
use crate::models::{Mentor, SortKey};

/// Compare two mentors for descending order under `key`
///
/// NaN ratings compare equal so they keep their source position.
#[inline]
pub fn compare_desc(a: &Mentor, b: &Mentor, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => b
            .rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal),
        SortKey::MatchScore => b.match_score.cmp(&a.match_score),
        SortKey::Experience => b.years_experience.cmp(&a.years_experience),
    }
}

/// Stage 3 - stable sort, ties keep source order
pub fn sort_mentors(mentors: &mut [&Mentor], key: SortKey) {
    // slice::sort_by is stable
    mentors.sort_by(|a, b| compare_desc(a, b, key));
}
