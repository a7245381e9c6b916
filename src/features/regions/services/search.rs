//! Substring scoring over region names.
//!
//! A name that contains the (lowercased) query at character offset `i`
//! scores `1 / (i + 1)`: a prefix match scores 1.0, later matches less,
//! non-matches are dropped. Ties keep source order.

use std::sync::Arc;

use crate::features::regions::models::Region;

struct Hit {
    score: f64,
    position: usize,
}

/// Score of `name` against an already-lowercased query, if it matches
pub fn score(name: &str, query_lower: &str) -> Option<f64> {
    let name_lower = name.to_lowercase();
    let byte_offset = name_lower.find(query_lower)?;
    let char_offset = name_lower[..byte_offset].chars().count();
    let score = 1.0 / (char_offset as f64 + 1.0);
    (score > 0.0).then_some(score)
}

/// Rank `regions` against `query`, best first, keeping at most `limit`.
pub fn rank(query: &str, regions: &[Region], limit: usize) -> Arc<[Region]> {
    let query_lower = query.to_lowercase();

    let mut hits: Vec<Hit> = regions
        .iter()
        .enumerate()
        .filter_map(|(position, region)| {
            score(&region.name, &query_lower).map(|score| Hit { score, position })
        })
        .collect();

    // stable: equal scores stay in source order
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));

    hits.into_iter()
        .take(limit)
        .map(|hit| regions[hit.position].clone())
        .collect()
}
