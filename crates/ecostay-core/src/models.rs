//! Data carried between the UI, the orchestrator and the backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Number of hotels requested when nothing else is configured.
pub const DEFAULT_RESULT_LIMIT: u32 = 4;

/// A point on the map. No range validation is applied anywhere in the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Paris city center, the picker's starting point.
    pub const PARIS: Coordinate = Coordinate {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::PARIS
    }
}

/// One search submission, frozen at trigger time.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub coordinate: Coordinate,
    pub result_limit: u32,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            text: text.into(),
            coordinate,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, result_limit: u32) -> Self {
        self.result_limit = result_limit;
        self
    }

    /// Wire representation of this query.
    pub fn to_request(&self) -> RecommendationRequest<'_> {
        RecommendationRequest {
            user_query: &self.text,
            user_lat: self.coordinate.latitude,
            user_lng: self.coordinate.longitude,
            top_n: self.result_limit,
        }
    }
}

/// JSON body of `POST /recommend`.
#[derive(Debug, Serialize)]
pub struct RecommendationRequest<'a> {
    pub user_query: &'a str,
    pub user_lat: f64,
    pub user_lng: f64,
    pub top_n: u32,
}

/// A recommended hotel as returned by the backend.
///
/// Every field falls back to its default when missing or `null`; a hotel
/// without images is a normal record, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Score on a 0–10 scale.
    #[serde(rename = "Rating", default, deserialize_with = "null_as_default")]
    pub rating: f64,
    /// External page for the hotel; shown as-is, never validated.
    #[serde(rename = "HotelLink", default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "images_parsed", default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

impl Hotel {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Response body of `POST /recommend`. A missing list means no results.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Hotel>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The ordered result of exactly one completed search.
///
/// Hotels are shared behind `Arc` so the detail modal can keep its hotel
/// alive after a later search replaces the set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationSet {
    hotels: Vec<Arc<Hotel>>,
}

impl RecommendationSet {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: hotels.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Hotel>> {
        self.hotels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Hotel>> {
        self.hotels.iter()
    }
}

impl From<RecommendationResponse> for RecommendationSet {
    fn from(response: RecommendationResponse) -> Self {
        Self::new(response.recommendations)
    }
}
