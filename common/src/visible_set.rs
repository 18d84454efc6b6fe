use crate::types::{FilterState, Restaurant};

/// Derives the visible restaurant set from the full fetched set and the
/// active filters.
///
/// A restaurant is kept iff its precomputed distance is within the radius
/// (inclusive bound), it serves the selected cuisine when one is set, and
/// it carries every selected tag (AND semantics). The scan is linear and
/// stable: output preserves fetch order, and the full set is bounded by a
/// single API page.
pub fn compute(full_set: &[Restaurant], filter: &FilterState) -> Vec<Restaurant> {
    full_set
        .iter()
        .filter(|restaurant| matches(restaurant, filter))
        .cloned()
        .collect()
}

fn matches(restaurant: &Restaurant, filter: &FilterState) -> bool {
    if restaurant.distance > filter.radius_km {
        return false;
    }
    if let Some(cuisine) = &filter.cuisine {
        if !restaurant.cuisine.iter().any(|label| label == cuisine) {
            return false;
        }
    }
    filter
        .tags
        .iter()
        .all(|tag| restaurant.tags.iter().any(|label| label == tag))
}
