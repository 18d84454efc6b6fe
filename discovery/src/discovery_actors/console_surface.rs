use actix::prelude::*;
use chrono::Local;
use colored::Color;
use common::logger::Logger;
use common::messages::SurfaceCommand;
use common::types::Restaurant;

/// Console stand-in for the map and carousel renderers: every
/// [`SurfaceCommand`] the screen issues is printed instead of drawn. User
/// intents travel the other way, from the stdin loop in `main`.
pub struct ConsoleSurface {
    logger: Logger,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        ConsoleSurface {
            logger: Logger::new("Surface", Color::Magenta),
        }
    }

    fn render_card(&self, index: usize, restaurant: &Restaurant, highlighted: bool) {
        let marker = if highlighted { ">" } else { " " };
        let open = if restaurant.is_open_at(Local::now().time()) {
            "open"
        } else {
            "closed"
        };
        let rating = match restaurant.average_rating() {
            Some(avg) => format!("{avg:.1}*"),
            None => "no reviews".to_string(),
        };
        self.logger.info(format!(
            "{marker} [{index}] {} | {:.1} km | {} | {open} | {rating}",
            restaurant.name, restaurant.distance, restaurant.price_rating
        ));
    }

    fn render_detail(&self, restaurant: &Restaurant) {
        self.logger.info(format!("=== {} ===", restaurant.name));
        self.logger.info(format!("{}", restaurant.address));
        self.logger.info(format!(
            "hours {} - {} | {} | cuisines: {} | tags: {}",
            restaurant.opens_at,
            restaurant.closes_at,
            restaurant.price_rating,
            restaurant.cuisine.join(", "),
            restaurant.tags.join(", ")
        ));
        if restaurant.reviews.is_empty() {
            self.logger.info("no reviews yet");
        }
        for review in &restaurant.reviews {
            self.logger.info(format!(
                "  {:.0}* {} - {}",
                review.rating, review.author, review.text
            ));
        }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for ConsoleSurface {
    type Context = Context<Self>;
}

impl Handler<SurfaceCommand> for ConsoleSurface {
    type Result = ();

    fn handle(&mut self, msg: SurfaceCommand, _ctx: &mut Self::Context) {
        match msg {
            SurfaceCommand::Render {
                restaurants,
                highlighted,
            } => {
                self.logger
                    .info(format!("{} restaurants visible", restaurants.len()));
                for (index, restaurant) in restaurants.iter().enumerate() {
                    let is_highlighted = highlighted.as_deref() == Some(restaurant.id.as_str());
                    self.render_card(index, restaurant, is_highlighted);
                }
            }
            SurfaceCommand::AnimateToRegion {
                region,
                duration_ms,
            } => {
                self.logger.info(format!(
                    "map gliding to ({:.4}, {:.4}) spans ({:.3}, {:.3}) over {duration_ms} ms",
                    region.center.latitude,
                    region.center.longitude,
                    region.latitude_delta,
                    region.longitude_delta
                ));
            }
            SurfaceCommand::ScrollToIndex { index } => {
                self.logger.info(format!("carousel aligned to card {index}"));
            }
            SurfaceCommand::HighlightMarker { id } => match id {
                Some(id) => self.logger.info(format!("marker {id} highlighted")),
                None => self.logger.info("marker highlight cleared"),
            },
            SurfaceCommand::FeedbackPulse => self.logger.info("haptic pulse"),
            SurfaceCommand::ShowLoading => self.logger.info("loading..."),
            SurfaceCommand::ShowError { message } => self.logger.error(message),
            SurfaceCommand::RenderDetail { restaurant } => self.render_detail(&restaurant),
        }
    }
}
