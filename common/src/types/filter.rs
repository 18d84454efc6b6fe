use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM};

/// The user's active search filters. Created with defaults when the screen
/// mounts, mutated only by explicit toggle actions, never persisted across
/// sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Single-select cuisine filter; `None` means all cuisines.
    pub cuisine: Option<String>,
    /// Multi-select tag filter with AND semantics.
    pub tags: HashSet<String>,
    /// Distance radius in kilometers, always within `[MIN, MAX]`.
    pub radius_km: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            cuisine: None,
            tags: HashSet::new(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

impl FilterState {
    /// Selects a cuisine, with toggle-off semantics: picking the active
    /// cuisine again clears the selection.
    pub fn set_cuisine(&mut self, label: &str) {
        if self.cuisine.as_deref() == Some(label) {
            self.cuisine = None;
        } else {
            self.cuisine = Some(label.to_string());
        }
    }

    /// Inserts the tag if absent, removes it otherwise.
    pub fn toggle_tag(&mut self, label: &str) {
        if !self.tags.remove(label) {
            self.tags.insert(label.to_string());
        }
    }

    /// Stores the slider value, clamped to the supported range. Non-finite
    /// input leaves the current value untouched.
    pub fn set_radius_km(&mut self, value: f64) {
        if value.is_finite() {
            self.radius_km = value.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unfiltered_five_km() {
        let filter = FilterState::default();
        assert_eq!(filter.cuisine, None);
        assert!(filter.tags.is_empty());
        assert_eq!(filter.radius_km, DEFAULT_RADIUS_KM);
    }

    #[test]
    fn picking_the_active_cuisine_clears_it() {
        let mut filter = FilterState::default();
        filter.set_cuisine("Italian");
        assert_eq!(filter.cuisine.as_deref(), Some("Italian"));
        filter.set_cuisine("Japanese");
        assert_eq!(filter.cuisine.as_deref(), Some("Japanese"));
        filter.set_cuisine("Japanese");
        assert_eq!(filter.cuisine, None);
    }

    #[test]
    fn tags_toggle_independently() {
        let mut filter = FilterState::default();
        filter.toggle_tag("Vegan");
        filter.toggle_tag("Outdoor");
        assert!(filter.tags.contains("Vegan"));
        assert!(filter.tags.contains("Outdoor"));
        filter.toggle_tag("Vegan");
        assert!(!filter.tags.contains("Vegan"));
        assert!(filter.tags.contains("Outdoor"));
    }

    #[test]
    fn radius_is_clamped_to_bounds() {
        let mut filter = FilterState::default();
        filter.set_radius_km(0.2);
        assert_eq!(filter.radius_km, MIN_RADIUS_KM);
        filter.set_radius_km(120.0);
        assert_eq!(filter.radius_km, MAX_RADIUS_KM);
        filter.set_radius_km(12.5);
        assert_eq!(filter.radius_km, 12.5);
    }

    #[test]
    fn non_finite_radius_is_ignored() {
        let mut filter = FilterState::default();
        filter.set_radius_km(f64::NAN);
        assert_eq!(filter.radius_km, DEFAULT_RADIUS_KM);
        filter.set_radius_km(f64::INFINITY);
        assert_eq!(filter.radius_km, DEFAULT_RADIUS_KM);
    }
}
