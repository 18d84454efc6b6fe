//! HTTP client for the remote restaurant discovery API.
//!
//! The backend computes per-restaurant distances relative to the requested
//! search center and returns a plain JSON array; anything else is a
//! [`RepositoryError::DataFormat`].

use std::time::Duration;

use common::types::{Coordinate, Restaurant};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// Errors surfaced by [`RestaurantRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api error: HTTP {status}")]
    Http { status: StatusCode },

    /// The payload did not have the expected shape.
    #[error("unexpected payload: {message}")]
    DataFormat { message: String },

    /// No restaurant with the requested id.
    #[error("restaurant {id} not found")]
    NotFound { id: String },
}

/// Thin client over the restaurant API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    client: Client,
    base_url: Url,
}

impl RestaurantRepository {
    /// Creates a client for the given base URL (production default or a
    /// mock server in tests).
    pub fn new(base_url: &str) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        // Exactly one trailing slash so Url::join appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| RepositoryError::DataFormat {
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches restaurants around `center` within `radius_km`, optionally
    /// narrowed server-side by cuisine and tags.
    pub async fn fetch_restaurants(
        &self,
        center: Coordinate,
        radius_km: f64,
        cuisine: Option<&str>,
        tags: &[String],
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut url = self.join("restaurants")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("lat", &center.latitude.to_string());
            pairs.append_pair("lon", &center.longitude.to_string());
            let radius_meters = (radius_km * 1000.0).round() as i64;
            pairs.append_pair("radius", &radius_meters.to_string());
            if let Some(cuisine) = cuisine {
                pairs.append_pair("cuisines", cuisine);
            }
            if !tags.is_empty() {
                pairs.append_pair("tags", &tags.join(","));
            }
        }
        let value = self.get_json(url).await?;
        if !value.is_array() {
            return Err(RepositoryError::DataFormat {
                message: format!("expected an array of restaurants, got {}", kind(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| RepositoryError::DataFormat {
            message: format!("restaurant list: {e}"),
        })
    }

    /// Cuisine labels for the filter bar.
    pub async fn fetch_cuisines(&self) -> Result<Vec<String>, RepositoryError> {
        self.fetch_vocabulary("cuisines").await
    }

    /// Tag labels for the filter bar.
    pub async fn fetch_tags(&self) -> Result<Vec<String>, RepositoryError> {
        self.fetch_vocabulary("tags").await
    }

    /// Fetches a single restaurant for the detail page.
    pub async fn fetch_restaurant(&self, id: &str) -> Result<Restaurant, RepositoryError> {
        let url = self.join(&format!("restaurants/{id}"))?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        }
        let value: serde_json::Value = check_status(response)?.json().await?;
        if !value.is_object() {
            return Err(RepositoryError::DataFormat {
                message: format!("expected a restaurant object, got {}", kind(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| RepositoryError::DataFormat {
            message: format!("restaurant {id}: {e}"),
        })
    }

    async fn fetch_vocabulary(&self, path: &str) -> Result<Vec<String>, RepositoryError> {
        let value = self.get_json(self.join(path)?).await?;
        if !value.is_array() {
            return Err(RepositoryError::DataFormat {
                message: format!("expected an array of {path}, got {}", kind(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| RepositoryError::DataFormat {
            message: format!("{path} list: {e}"),
        })
    }

    fn join(&self, path: &str) -> Result<Url, RepositoryError> {
        self.base_url
            .join(path)
            .map_err(|e| RepositoryError::DataFormat {
                message: format!("invalid path '{path}': {e}"),
            })
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, RepositoryError> {
        let response = check_status(self.client.get(url).send().await?)?;
        Ok(response.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RepositoryError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RepositoryError::Http { status })
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
