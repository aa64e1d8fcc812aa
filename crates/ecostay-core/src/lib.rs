//! Interaction core of the EcoStay client.
//!
//! Everything here is UI-toolkit agnostic: the terminal front end feeds
//! discrete events into a [`view::ViewController`] and renders whatever state
//! it exposes. The only asynchronous piece is the recommendation request,
//! driven by [`search::SearchOrchestrator`].

pub mod carousel;
pub mod client;
pub mod error;
pub mod location;
pub mod models;
pub mod rating;
pub mod search;
pub mod view;

pub use carousel::Carousel;
pub use client::{HttpRecommendationClient, RecommendationClient};
pub use error::ClientError;
pub use location::{LocationPicker, MapSurface, MapViewport};
pub use models::{Coordinate, Hotel, RecommendationSet, SearchQuery};
pub use rating::Star;
pub use search::{SearchCompletion, SearchOrchestrator, SearchTicket, UiPhase};
pub use view::{ModalLayer, PointerTarget, ViewController};
