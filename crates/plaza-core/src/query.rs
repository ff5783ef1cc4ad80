// The feed's filter + sort, applied on every keystroke. Pure: the input
// collection is never touched and the result is a fresh vector.

use plaza_types::models::Listing;
use plaza_types::price::parse_display_price;
use std::cmp::{Ordering, Reverse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    MostRecent,
    HighestValue,
    LowestValue,
}

/// Filter by case-insensitive substring match on the title (an empty search
/// matches everything), then order by `sort`. Sorting is stable: listings
/// with equal keys keep their original relative order.
pub fn query(listings: &[Listing], search_text: &str, sort: SortMode) -> Vec<Listing> {
    let needle = search_text.trim().to_lowercase();

    let mut result: Vec<Listing> = listings
        .iter()
        .filter(|l| needle.is_empty() || l.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortMode::MostRecent => result.sort_by_key(|l| Reverse(id_ordinal(&l.id))),
        SortMode::HighestValue => result.sort_by(|a, b| cmp_price(b, a)),
        SortMode::LowestValue => result.sort_by(|a, b| cmp_price(a, b)),
    }

    result
}

/// Ids carry the creation timestamp in milliseconds; anything non-numeric
/// orders as zero.
fn id_ordinal(id: &str) -> i64 {
    id.trim().parse().unwrap_or(0)
}

fn cmp_price(a: &Listing, b: &Listing) -> Ordering {
    parse_display_price(&a.display_price)
        .partial_cmp(&parse_display_price(&b.display_price))
        .unwrap_or(Ordering::Equal)
}
