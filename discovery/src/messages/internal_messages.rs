use actix::Message;
use common::selection::SelectionState;
use common::types::{Coordinate, FilterState};

/// Point-in-time view of the screen state, served on [`GetSnapshot`].
#[derive(Debug, Clone)]
pub struct ScreenSnapshot {
    pub filter: FilterState,
    pub center: Coordinate,
    /// Ids of the visible set, in render order.
    pub visible_ids: Vec<String>,
    pub selection: SelectionState,
    pub cuisines: Vec<String>,
    pub tags: Vec<String>,
    /// Remote fetches issued since mount (including the initial one).
    pub fetches_issued: u64,
    /// Superseded fetch responses that were discarded on arrival.
    pub stale_discarded: u64,
    pub loading: bool,
    pub last_error: Option<String>,
}

/// Asks the screen for a [`ScreenSnapshot`]. Used by tests and diagnostics.
#[derive(Message, Debug)]
#[rtype(result = "ScreenSnapshot")]
pub struct GetSnapshot;
