use actix::prelude::*;
use colored::Color;
use common::constants::{DEFAULT_SEARCH_CENTER, FETCH_DEBOUNCE, MAX_RADIUS_KM, REGION_ANIMATION_MS};
use common::logger::Logger;
use common::messages::{
    CarouselSnapped, DismissSelection, MarkerPressed, SearchCenterChanged, SetCuisine,
    SetDistanceRadius, ShowDetail, SurfaceCommand, ToggleTag,
};
use common::selection::{FocusOrigin, SelectionState, Transition};
use common::types::{Coordinate, FilterState, Restaurant};
use common::{viewport, visible_set};

use crate::messages::internal_messages::{GetSnapshot, ScreenSnapshot};
use crate::repository::{RepositoryError, RestaurantRepository};

/// The `Screen` actor is the composition root of the discovery view. It
/// owns the filter state, the search center, the fetched restaurant set and
/// the selection, and it is the only mutator of any of them: surfaces send
/// it intents, it answers with [`SurfaceCommand`]s.
///
/// ## Responsibilities
/// - Recompute the visible set on every filter change and push a render.
/// - Keep selected restaurant, carousel focus and marker highlight in sync
///   through the selection machine.
/// - Frame the viewport around the search radius, or tighter around a
///   focused restaurant.
/// - Debounce radius-driven re-fetches and discard stale fetch responses.
pub struct Screen {
    /// Active filters (cuisine, tags, radius).
    filter: FilterState,
    /// Coordinate the search is anchored around.
    center: Coordinate,
    /// Last successfully fetched set, in API order.
    full_set: Vec<Restaurant>,
    /// Subset of `full_set` matching `filter`, same order.
    visible: Vec<Restaurant>,
    /// Selected restaurant / carousel focus / marker highlight.
    selection: SelectionState,
    /// Remote API client.
    repository: RestaurantRepository,
    /// Rendering surface (map + carousel).
    surface: Recipient<SurfaceCommand>,
    /// Vocabulary labels for the filter bar, fetched at mount.
    cuisines: Vec<String>,
    tags: Vec<String>,
    /// Generation of the newest issued fetch; older continuations are
    /// stale and must be discarded on arrival.
    fetch_generation: u64,
    fetches_issued: u64,
    stale_discarded: u64,
    /// Pending debounced re-fetch, if any.
    refetch_timer: Option<SpawnHandle>,
    loading: bool,
    last_error: Option<String>,
    logger: Logger,
}

impl Screen {
    pub fn new(repository: RestaurantRepository, surface: Recipient<SurfaceCommand>) -> Self {
        let (latitude, longitude) = DEFAULT_SEARCH_CENTER;
        Screen {
            filter: FilterState::default(),
            center: Coordinate::new(latitude, longitude),
            full_set: Vec::new(),
            visible: Vec::new(),
            selection: SelectionState::default(),
            repository,
            surface,
            cuisines: Vec::new(),
            tags: Vec::new(),
            fetch_generation: 0,
            fetches_issued: 0,
            stale_discarded: 0,
            refetch_timer: None,
            loading: false,
            last_error: None,
            logger: Logger::new("Screen", Color::Cyan),
        }
    }

    /// Recomputes the visible set, re-validates the selection against it
    /// and pushes a full render. Markers and cards always come from the
    /// same set.
    fn recompute_and_render(&mut self, ctx: &mut Context<Self>) {
        self.visible = visible_set::compute(&self.full_set, &self.filter);
        let transition = self.selection.set_changed(&self.visible);
        self.apply_transition(transition, ctx);
        self.surface.do_send(SurfaceCommand::Render {
            restaurants: self.visible.clone(),
            highlighted: self.selection.highlighted_marker().map(String::from),
        });
    }

    /// Issues the side effects a selection transition asks for. Highlight,
    /// carousel focus and viewport always move in the same handler turn, so
    /// the surface never observes them apart.
    fn apply_transition(&mut self, transition: Transition, _ctx: &mut Context<Self>) {
        match transition {
            Transition::Focus {
                restaurant_id,
                index,
                origin,
            } => {
                let Some(restaurant) = self.visible.get(index) else {
                    return;
                };
                self.logger
                    .info(format!("focused {restaurant_id} (card {index})"));
                self.surface.do_send(SurfaceCommand::HighlightMarker {
                    id: Some(restaurant_id),
                });
                if origin == FocusOrigin::Marker {
                    self.surface
                        .do_send(SurfaceCommand::ScrollToIndex { index });
                    self.surface.do_send(SurfaceCommand::FeedbackPulse);
                }
                self.surface.do_send(SurfaceCommand::AnimateToRegion {
                    region: viewport::region_for_restaurant(restaurant.position()),
                    duration_ms: REGION_ANIMATION_MS,
                });
            }
            Transition::Rebound { index } => {
                self.surface
                    .do_send(SurfaceCommand::ScrollToIndex { index });
            }
            Transition::Cleared => {
                self.logger.info("selection cleared");
                self.surface
                    .do_send(SurfaceCommand::HighlightMarker { id: None });
            }
            Transition::Unchanged => {}
            Transition::Ignored { index } => {
                self.logger.debug(format!(
                    "dropped event for index {index}, visible set has {} entries",
                    self.visible.len()
                ));
            }
        }
    }

    /// Frames the full search radius around the current center.
    fn frame_search_area(&self) {
        let region = viewport::region_for(self.center, self.filter.radius_km);
        self.surface.do_send(SurfaceCommand::AnimateToRegion {
            region,
            duration_ms: REGION_ANIMATION_MS,
        });
    }

    /// (Re)arms the debounce timer. Each new call resets the quiet period,
    /// so a burst of slider ticks ends in exactly one remote fetch.
    fn schedule_refetch(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.refetch_timer.take() {
            ctx.cancel_future(handle);
        }
        let handle = ctx.run_later(FETCH_DEBOUNCE, |act, ctx| {
            act.refetch_timer = None;
            act.issue_fetch(ctx);
        });
        self.refetch_timer = Some(handle);
    }

    /// Issues a restaurant fetch for the current center. The request always
    /// asks for the maximum-radius superset so the slider narrows it locally
    /// without a round trip. The continuation carries the generation it was
    /// issued under; by the time it resolves a newer fetch may have
    /// superseded it.
    fn issue_fetch(&mut self, ctx: &mut Context<Self>) {
        self.fetch_generation += 1;
        self.fetches_issued += 1;
        let generation = self.fetch_generation;
        let repository = self.repository.clone();
        let center = self.center;
        self.loading = true;
        self.surface.do_send(SurfaceCommand::ShowLoading);
        self.logger.info(format!(
            "fetching restaurants around ({:.4}, {:.4}) within {MAX_RADIUS_KM} km",
            center.latitude, center.longitude
        ));
        let fut = async move {
            repository
                .fetch_restaurants(center, MAX_RADIUS_KM, None, &[])
                .await
        }
        .into_actor(self)
        .map(move |result, act, ctx| act.apply_fetch(generation, result, ctx));
        ctx.spawn(fut);
    }

    /// Continuation of a restaurant fetch. Responses from superseded
    /// fetches are discarded so a slow older response cannot overwrite
    /// newer state.
    fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Restaurant>, RepositoryError>,
        ctx: &mut Context<Self>,
    ) {
        if generation != self.fetch_generation {
            self.stale_discarded += 1;
            self.logger.debug(format!(
                "discarded stale fetch response (generation {generation}, current {})",
                self.fetch_generation
            ));
            return;
        }
        self.loading = false;
        match result {
            Ok(restaurants) => {
                self.logger
                    .info(format!("fetched {} restaurants", restaurants.len()));
                self.last_error = None;
                self.full_set = restaurants;
                self.recompute_and_render(ctx);
            }
            Err(e) => {
                self.logger.error(format!("restaurant fetch failed: {e}"));
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.surface.do_send(SurfaceCommand::ShowError { message });
            }
        }
    }

    /// Fetches the filter bar vocabularies. Missing vocabularies degrade
    /// the filter bar, not the screen.
    fn load_vocabularies(&mut self, ctx: &mut Context<Self>) {
        let repository = self.repository.clone();
        let fut = async move {
            let cuisines = repository.fetch_cuisines().await;
            let tags = repository.fetch_tags().await;
            (cuisines, tags)
        }
        .into_actor(self)
        .map(|(cuisines, tags), act, _ctx| {
            match cuisines {
                Ok(labels) => act.cuisines = labels,
                Err(e) => act
                    .logger
                    .warn(format!("cuisine vocabulary unavailable: {e}")),
            }
            match tags {
                Ok(labels) => act.tags = labels,
                Err(e) => act.logger.warn(format!("tag vocabulary unavailable: {e}")),
            }
        });
        ctx.spawn(fut);
    }
}

impl Actor for Screen {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger.info("discovery screen mounted");
        self.load_vocabularies(ctx);
        self.frame_search_area();
        self.issue_fetch(ctx);
    }
}

impl Handler<SetCuisine> for Screen {
    type Result = ();

    /// Cuisine chips filter the already-fetched set locally; no remote
    /// round trip is involved.
    fn handle(&mut self, msg: SetCuisine, ctx: &mut Self::Context) {
        self.filter.set_cuisine(&msg.label);
        self.logger.info(match &self.filter.cuisine {
            Some(label) => format!("cuisine filter: {label}"),
            None => "cuisine filter cleared".to_string(),
        });
        self.recompute_and_render(ctx);
    }
}

impl Handler<ToggleTag> for Screen {
    type Result = ();

    fn handle(&mut self, msg: ToggleTag, ctx: &mut Self::Context) {
        self.filter.toggle_tag(&msg.label);
        self.logger
            .info(format!("tag filters: {:?}", self.filter.tags));
        self.recompute_and_render(ctx);
    }
}

impl Handler<SetDistanceRadius> for Screen {
    type Result = ();

    /// Every slider tick filters the in-memory superset and re-frames the
    /// map immediately; only the debounced refresh of that superset goes
    /// remote.
    fn handle(&mut self, msg: SetDistanceRadius, ctx: &mut Self::Context) {
        self.filter.set_radius_km(msg.km);
        self.recompute_and_render(ctx);
        // A surviving focused restaurant keeps its tighter region.
        if self.selection == SelectionState::Idle {
            self.frame_search_area();
        }
        self.schedule_refetch(ctx);
    }
}

impl Handler<SearchCenterChanged> for Screen {
    type Result = ();

    /// A new center invalidates the fetched distances wholesale, so the
    /// fetch is immediate; any pending debounced fetch would be stale.
    fn handle(&mut self, msg: SearchCenterChanged, ctx: &mut Self::Context) {
        self.center = msg.center;
        self.logger.info(format!(
            "search center moved to ({:.4}, {:.4})",
            msg.center.latitude, msg.center.longitude
        ));
        if let Some(handle) = self.refetch_timer.take() {
            ctx.cancel_future(handle);
        }
        self.frame_search_area();
        self.issue_fetch(ctx);
    }
}

impl Handler<MarkerPressed> for Screen {
    type Result = ();

    fn handle(&mut self, msg: MarkerPressed, ctx: &mut Self::Context) {
        let transition = self.selection.marker_pressed(msg.index, &self.visible);
        self.apply_transition(transition, ctx);
    }
}

impl Handler<CarouselSnapped> for Screen {
    type Result = ();

    fn handle(&mut self, msg: CarouselSnapped, ctx: &mut Self::Context) {
        let transition = self.selection.carousel_snapped(msg.index, &self.visible);
        self.apply_transition(transition, ctx);
    }
}

impl Handler<DismissSelection> for Screen {
    type Result = ();

    fn handle(&mut self, _msg: DismissSelection, ctx: &mut Self::Context) {
        let transition = self.selection.dismissed();
        let dismissed = transition == Transition::Cleared;
        self.apply_transition(transition, ctx);
        if dismissed {
            self.frame_search_area();
        }
    }
}

impl Handler<ShowDetail> for Screen {
    type Result = ();

    fn handle(&mut self, msg: ShowDetail, ctx: &mut Self::Context) {
        let repository = self.repository.clone();
        let id = msg.id;
        let fut = async move { repository.fetch_restaurant(&id).await }
            .into_actor(self)
            .map(|result, act, _ctx| match result {
                Ok(restaurant) => act.surface.do_send(SurfaceCommand::RenderDetail {
                    restaurant: Box::new(restaurant),
                }),
                Err(e) => {
                    act.logger.error(format!("detail fetch failed: {e}"));
                    act.surface.do_send(SurfaceCommand::ShowError {
                        message: e.to_string(),
                    });
                }
            });
        ctx.spawn(fut);
    }
}

impl Handler<GetSnapshot> for Screen {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(ScreenSnapshot {
            filter: self.filter.clone(),
            center: self.center,
            visible_ids: self.visible.iter().map(|r| r.id.clone()).collect(),
            selection: self.selection.clone(),
            cuisines: self.cuisines.clone(),
            tags: self.tags.clone(),
            fetches_issued: self.fetches_issued,
            stale_discarded: self.stale_discarded,
            loading: self.loading,
            last_error: self.last_error.clone(),
        })
    }
}
