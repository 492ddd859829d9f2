//! Listing Search
//!
//! Structured filtering over in-memory listings, and the zero-match
//! fallback: when a location query finds nothing directly, candidates
//! are ranked against the query by text similarity and the best few are
//! suggested as "similar areas".

use crate::listing::{Home, HomeQuery};
use crate::similarity::compute_similarity;
use tracing::debug;

/// Suggestions must score strictly above this to be shown.
pub const MIN_SIMILARITY: f64 = 0.25;

/// Maximum number of similar-area suggestions.
pub const MAX_SUGGESTIONS: usize = 8;

/// A suggested listing with its similarity score
#[derive(Debug, Clone)]
pub struct SimilarMatch {
    pub home: Home,
    pub score: f64,
}

/// Filter listings against a structured query.
///
/// Location is a case-insensitive substring match against the listing's
/// location or title; beds and baths are minimums; every requested
/// amenity must be present.
pub fn filter_homes(homes: &[Home], query: &HomeQuery) -> Vec<Home> {
    homes
        .iter()
        .filter(|h| matches_query(h, query))
        .cloned()
        .collect()
}

fn matches_query(home: &Home, query: &HomeQuery) -> bool {
    if let Some(location) = &query.location {
        let lc = location.to_lowercase();
        if !home.location.to_lowercase().contains(&lc)
            && !home.title.to_lowercase().contains(&lc)
        {
            return false;
        }
    }
    if let Some(beds) = query.beds {
        if home.beds < beds {
            return false;
        }
    }
    if let Some(baths) = query.baths {
        if home.baths < baths {
            return false;
        }
    }
    query
        .amenities
        .iter()
        .all(|wanted| home.amenities.iter().any(|have| have == wanted))
}

/// Rank listings by similarity to a free-text location query.
///
/// Each listing is scored as the better of its location and title
/// similarity. Scores at or below `min_score` are dropped, the rest are
/// sorted descending and truncated to `limit`.
pub fn similar_areas(
    location: &str,
    homes: &[Home],
    min_score: f64,
    limit: usize,
) -> Vec<SimilarMatch> {
    let mut matches: Vec<SimilarMatch> = homes
        .iter()
        .filter_map(|home| {
            let score = compute_similarity(location, &home.location)
                .max(compute_similarity(location, &home.title));
            if score > min_score {
                Some(SimilarMatch {
                    home: home.clone(),
                    score,
                })
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);

    debug!(
        "🔍 {} similar-area suggestions for '{}' above {:.2}",
        matches.len(),
        location,
        min_score
    );
    matches
}
