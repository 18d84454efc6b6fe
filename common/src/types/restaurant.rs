use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::types::geo::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    /// Rating on the 1-5 scale the backend hands out.
    pub rating: f32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Restaurant record as returned by the remote API. `distance` is
/// precomputed by the backend relative to the search center of the request
/// that produced it, in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub image: String,
    pub distance: f64,
    pub price_rating: String,
    /// Local time-of-day strings, "HH:MM" or "HH:MM:SS".
    pub opens_at: String,
    pub closes_at: String,
    pub cuisine: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Restaurant {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Average review rating; `None` when there are no reviews.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: f32 = self.reviews.iter().map(|review| review.rating).sum();
        Some(total / self.reviews.len() as f32)
    }

    /// Whether the restaurant is open at the given local time. Opening
    /// hours that cross midnight (e.g. 18:00-02:00) wrap; unparsable hours
    /// read as closed.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        let (Some(opens), Some(closes)) =
            (parse_time(&self.opens_at), parse_time(&self.closes_at))
        else {
            return false;
        };
        if opens <= closes {
            now >= opens && now < closes
        } else {
            now >= opens || now < closes
        }
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}
