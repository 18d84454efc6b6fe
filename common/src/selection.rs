use serde::{Deserialize, Serialize};

use crate::types::Restaurant;

/// Which surface initiated a focus change. A marker press drives the
/// carousel programmatically, so the owner must be able to tell the two
/// apart to avoid replaying the programmatic scroll as a user swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusOrigin {
    Marker,
    Carousel,
}

/// Screen-level selection: the selected restaurant, the focused carousel
/// card and the highlighted map marker move as one. The highlighted marker
/// id *is* the focused restaurant id, so the two cannot diverge; the
/// carousel index is only ever written together with the id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    Focused {
        restaurant_id: String,
        carousel_index: usize,
    },
}

/// Side effects the owner must issue after feeding an event through the
/// machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A restaurant gained focus.
    Focus {
        restaurant_id: String,
        index: usize,
        origin: FocusOrigin,
    },
    /// The focused restaurant moved to a new position in the visible set;
    /// only the carousel needs realigning.
    Rebound { index: usize },
    /// Selection cleared; marker highlight and carousel focus drop with it.
    Cleared,
    /// Nothing to do.
    Unchanged,
    /// The event referenced an index outside the visible set (stale after
    /// a set shrink). Dropped, never acted on.
    Ignored { index: usize },
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Focused { restaurant_id, .. } => Some(restaurant_id),
        }
    }

    /// The highlighted marker tracks the selected restaurant exactly.
    pub fn highlighted_marker(&self) -> Option<&str> {
        self.selected_id()
    }

    pub fn carousel_index(&self) -> Option<usize> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Focused { carousel_index, .. } => Some(*carousel_index),
        }
    }

    pub fn marker_pressed(&mut self, index: usize, visible: &[Restaurant]) -> Transition {
        self.focus(index, visible, FocusOrigin::Marker)
    }

    pub fn carousel_snapped(&mut self, index: usize, visible: &[Restaurant]) -> Transition {
        // A snap onto the card that already has focus is the echo of a
        // programmatic scroll, not a user swipe.
        if let SelectionState::Focused { carousel_index, .. } = self {
            if *carousel_index == index {
                return Transition::Unchanged;
            }
        }
        self.focus(index, visible, FocusOrigin::Carousel)
    }

    /// Re-validates the selection against a freshly computed visible set.
    /// A focused restaurant that fell out of the set forces `Idle`; one
    /// that merely moved is re-bound to its new index.
    pub fn set_changed(&mut self, visible: &[Restaurant]) -> Transition {
        let SelectionState::Focused {
            restaurant_id,
            carousel_index,
        } = self
        else {
            return Transition::Unchanged;
        };
        match visible.iter().position(|r| r.id == *restaurant_id) {
            Some(index) if index == *carousel_index => Transition::Unchanged,
            Some(index) => {
                *carousel_index = index;
                Transition::Rebound { index }
            }
            None => {
                *self = SelectionState::Idle;
                Transition::Cleared
            }
        }
    }

    /// Detail panel closed by the user.
    pub fn dismissed(&mut self) -> Transition {
        match self {
            SelectionState::Idle => Transition::Unchanged,
            SelectionState::Focused { .. } => {
                *self = SelectionState::Idle;
                Transition::Cleared
            }
        }
    }

    /// True when the state agrees with the given visible set: either idle,
    /// or focused on the restaurant actually stored at the focused index.
    pub fn is_consistent_with(&self, visible: &[Restaurant]) -> bool {
        match self {
            SelectionState::Idle => true,
            SelectionState::Focused {
                restaurant_id,
                carousel_index,
            } => visible
                .get(*carousel_index)
                .is_some_and(|r| r.id == *restaurant_id),
        }
    }

    fn focus(&mut self, index: usize, visible: &[Restaurant], origin: FocusOrigin) -> Transition {
        let Some(restaurant) = visible.get(index) else {
            return Transition::Ignored { index };
        };
        *self = SelectionState::Focused {
            restaurant_id: restaurant.id.clone(),
            carousel_index: index,
        };
        Transition::Focus {
            restaurant_id: restaurant.id.clone(),
            index,
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: id.to_string(),
            latitude: 43.0,
            longitude: -87.9,
            address: String::new(),
            image: String::new(),
            distance: 1.0,
            price_rating: "$".to_string(),
            opens_at: "09:00".to_string(),
            closes_at: "21:00".to_string(),
            cuisine: vec![],
            tags: vec![],
            reviews: vec![],
        }
    }

    fn visible(ids: &[&str]) -> Vec<Restaurant> {
        ids.iter().map(|id| restaurant(id)).collect()
    }

    #[test]
    fn marker_press_focuses_the_pressed_index() {
        let set = visible(&["a", "b"]);
        let mut selection = SelectionState::default();
        let transition = selection.marker_pressed(1, &set);
        assert_eq!(
            transition,
            Transition::Focus {
                restaurant_id: "b".to_string(),
                index: 1,
                origin: FocusOrigin::Marker,
            }
        );
        assert_eq!(selection.selected_id(), Some("b"));
        assert_eq!(selection.highlighted_marker(), Some("b"));
        assert_eq!(selection.carousel_index(), Some(1));
        assert!(selection.is_consistent_with(&set));
    }

    #[test]
    fn carousel_snap_moves_the_focus() {
        let set = visible(&["a", "b", "c"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(0, &set);
        let transition = selection.carousel_snapped(2, &set);
        assert_eq!(
            transition,
            Transition::Focus {
                restaurant_id: "c".to_string(),
                index: 2,
                origin: FocusOrigin::Carousel,
            }
        );
        assert!(selection.is_consistent_with(&set));
    }

    #[test]
    fn snap_echo_onto_the_focused_card_is_ignored() {
        let set = visible(&["a", "b"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(1, &set);
        assert_eq!(selection.carousel_snapped(1, &set), Transition::Unchanged);
        assert_eq!(selection.selected_id(), Some("b"));
    }

    #[test]
    fn out_of_bounds_events_are_dropped() {
        let set = visible(&["a"]);
        let mut selection = SelectionState::default();
        assert_eq!(
            selection.marker_pressed(3, &set),
            Transition::Ignored { index: 3 }
        );
        assert_eq!(selection, SelectionState::Idle);
        assert_eq!(
            selection.carousel_snapped(7, &set),
            Transition::Ignored { index: 7 }
        );
        assert_eq!(selection, SelectionState::Idle);
    }

    #[test]
    fn set_change_clears_a_selection_that_fell_out() {
        let before = visible(&["a", "b"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(1, &before);
        let after = visible(&["a"]);
        assert_eq!(selection.set_changed(&after), Transition::Cleared);
        assert_eq!(selection, SelectionState::Idle);
        assert_eq!(selection.highlighted_marker(), None);
        assert_eq!(selection.carousel_index(), None);
    }

    #[test]
    fn set_change_rebinds_a_moved_selection() {
        let before = visible(&["a", "b", "c"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(2, &before);
        let after = visible(&["c", "a"]);
        assert_eq!(selection.set_changed(&after), Transition::Rebound { index: 0 });
        assert_eq!(selection.selected_id(), Some("c"));
        assert!(selection.is_consistent_with(&after));
    }

    #[test]
    fn set_change_with_the_selection_in_place_is_a_noop() {
        let set = visible(&["a", "b"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(0, &set);
        assert_eq!(selection.set_changed(&set), Transition::Unchanged);
    }

    #[test]
    fn dismiss_clears_everything_together() {
        let set = visible(&["a"]);
        let mut selection = SelectionState::default();
        selection.marker_pressed(0, &set);
        assert_eq!(selection.dismissed(), Transition::Cleared);
        assert_eq!(selection, SelectionState::Idle);
        assert_eq!(selection.dismissed(), Transition::Unchanged);
    }

    #[test]
    fn consistency_holds_across_an_arbitrary_event_run() {
        let mut set = visible(&["a", "b", "c", "d"]);
        let mut selection = SelectionState::default();

        selection.marker_pressed(3, &set);
        assert!(selection.is_consistent_with(&set));

        selection.carousel_snapped(1, &set);
        assert!(selection.is_consistent_with(&set));

        set = visible(&["b", "d"]);
        selection.set_changed(&set);
        assert!(selection.is_consistent_with(&set));

        selection.marker_pressed(9, &set); // stale index, dropped
        assert!(selection.is_consistent_with(&set));

        set = visible(&["d"]);
        selection.set_changed(&set);
        assert!(selection.is_consistent_with(&set));
        assert_eq!(selection, SelectionState::Idle);
    }
}
