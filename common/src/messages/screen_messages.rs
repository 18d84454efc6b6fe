use actix::Message;
use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// Cuisine chip tapped in the filter bar. Tapping the active chip clears
/// the selection (single-select, toggle-off).
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct SetCuisine {
    pub label: String,
}

/// Tag badge toggled in the filter bar (multi-select).
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ToggleTag {
    pub label: String,
}

/// Distance slider moved. Local filtering reacts on every tick; the remote
/// re-fetch is debounced.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct SetDistanceRadius {
    pub km: f64,
}

/// A place-search prediction was resolved to a coordinate, or locate-me
/// fired.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct SearchCenterChanged {
    pub center: Coordinate,
}

/// Map marker pressed. The index refers to the current visible set.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct MarkerPressed {
    pub index: usize,
}

/// Carousel swiped to a new card. The index refers to the current visible
/// set.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct CarouselSnapped {
    pub index: usize,
}

/// Detail panel closed by the user.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct DismissSelection;

/// Detail page requested for a restaurant id.
#[derive(Message, Debug, Clone, Serialize, Deserialize)]
#[rtype(result = "()")]
pub struct ShowDetail {
    pub id: String,
}
