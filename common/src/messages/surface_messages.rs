use actix::Message;

use crate::types::{Region, Restaurant};

/// Commands the screen issues to its rendering surface (map + carousel).
/// One fire-and-forget channel: the surface never answers, it only
/// re-renders, and sends user intents back as separate messages.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub enum SurfaceCommand {
    /// Full re-render. Markers and carousel cards come from the same
    /// visible set, in the same order.
    Render {
        restaurants: Vec<Restaurant>,
        highlighted: Option<String>,
    },
    /// Smooth viewport transition; completion is never awaited.
    AnimateToRegion { region: Region, duration_ms: u64 },
    /// Programmatic carousel alignment. Must not be re-emitted as a snap
    /// intent.
    ScrollToIndex { index: usize },
    /// Marker highlight changed; `None` clears it.
    HighlightMarker { id: Option<String> },
    /// Discrete feedback pulse (haptic stand-in) for a marker press.
    FeedbackPulse,
    /// A fetch is in flight; the previous content may be stale.
    ShowLoading,
    /// Inline error shown in place of the map/list content.
    ShowError { message: String },
    /// Detail page payload for a single restaurant.
    RenderDetail { restaurant: Box<Restaurant> },
}
