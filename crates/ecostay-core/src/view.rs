//! Root view state: search, location, modals and card selection.
//!
//! The terminal front end owns one [`ViewController`] per home view and
//! renders from it by reference. Pointer input that lands inside a modal is
//! described with [`PointerTarget`] and routed to the top [`ModalLayer`]
//! only, so a click on a carousel arrow or the map never reaches the
//! backdrop of the same modal.

use std::sync::Arc;

use ecostay_config::Config;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::carousel::Carousel;
use crate::client::RecommendationClient;
use crate::location::LocationPicker;
use crate::models::{Coordinate, Hotel};
use crate::rating::{self, Star, STAR_COUNT};
use crate::search::{SearchCompletion, SearchOrchestrator, SearchTicket, UiPhase};

/// Modal stacking order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModalLayer {
    LocationPicker,
    HotelDetail,
}

/// Where a pointer press landed relative to the top modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    /// Outside the modal's content box.
    Backdrop,
    /// Inside the content box, on nothing interactive.
    Content,
    CarouselPrevious,
    CarouselNext,
    /// A map cell, already projected to a coordinate.
    Map(Coordinate),
}

/// The hotel shown in the detail modal together with its image position.
#[derive(Debug, Clone)]
pub struct HotelDetail {
    pub hotel: Arc<Hotel>,
    pub carousel: Carousel,
}

/// Render-ready view of one recommendation.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    pub index: usize,
    pub hotel: &'a Hotel,
    pub stars: [Star; STAR_COUNT],
    pub selected: bool,
}

impl Card<'_> {
    pub fn thumbnail(&self) -> Option<&str> {
        self.hotel.thumbnail()
    }
}

#[derive(Debug)]
pub struct ViewController {
    search: SearchOrchestrator,
    location: LocationPicker,
    location_picker_open: bool,
    detail: Option<HotelDetail>,
    selected_card: usize,
}

impl ViewController {
    pub fn new(search: SearchOrchestrator, location: LocationPicker) -> Self {
        Self {
            search,
            location,
            location_picker_open: false,
            detail: None,
            selected_card: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SearchOrchestrator::from_config(config),
            LocationPicker::from_config(&config.location),
        )
    }

    pub fn search(&self) -> &SearchOrchestrator {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchOrchestrator {
        &mut self.search
    }

    pub fn location(&self) -> &LocationPicker {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut LocationPicker {
        &mut self.location
    }

    pub fn phase(&self) -> UiPhase {
        self.search.phase()
    }

    /// Cards in result order; empty unless results are published.
    pub fn cards(&self) -> Vec<Card<'_>> {
        if !self.phase().results_visible() {
            return Vec::new();
        }
        self.search
            .recommendations()
            .iter()
            .enumerate()
            .map(|(index, hotel)| Card {
                index,
                hotel: hotel.as_ref(),
                stars: rating::format(hotel.rating),
                selected: index == self.selected_card,
            })
            .collect()
    }

    /// Start a submission using the coordinate selected right now.
    pub fn begin_search(&mut self) -> SearchTicket {
        let coordinate = self.location.coordinate();
        self.search.begin(coordinate)
    }

    pub fn submit(
        &mut self,
        client: Arc<dyn RecommendationClient>,
        tx: UnboundedSender<SearchCompletion>,
    ) -> JoinHandle<()> {
        let coordinate = self.location.coordinate();
        self.search.submit(coordinate, client, tx)
    }

    /// Publish a completion; card selection restarts at the first card.
    pub fn complete(&mut self, completion: SearchCompletion) -> bool {
        let published = self.search.complete(completion);
        if published {
            self.selected_card = 0;
        }
        published
    }

    // Modals

    pub fn location_picker_open(&self) -> bool {
        self.location_picker_open
    }

    pub fn open_location_picker(&mut self) {
        self.location.recenter();
        self.location_picker_open = true;
        debug!("location picker opened");
    }

    pub fn close_location_picker(&mut self) {
        self.location_picker_open = false;
    }

    pub fn toggle_location_picker(&mut self) {
        if self.location_picker_open {
            self.close_location_picker();
        } else {
            self.open_location_picker();
        }
    }

    pub fn detail(&self) -> Option<&HotelDetail> {
        self.detail.as_ref()
    }

    /// Open the detail modal for the card at `index` with a fresh carousel.
    /// Replaces any hotel already shown. Returns `false` for a bad index.
    pub fn open_detail(&mut self, index: usize) -> bool {
        if !self.phase().results_visible() {
            return false;
        }
        let Some(hotel) = self.search.recommendations().get(index).cloned() else {
            return false;
        };
        debug!(hotel = %hotel.name, "detail opened");
        let carousel = Carousel::new(hotel.images.clone());
        self.detail = Some(HotelDetail { hotel, carousel });
        self.selected_card = index;
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn top_layer(&self) -> Option<ModalLayer> {
        if self.detail.is_some() {
            Some(ModalLayer::HotelDetail)
        } else if self.location_picker_open {
            Some(ModalLayer::LocationPicker)
        } else {
            None
        }
    }

    /// Dismiss whichever modal is on top.
    pub fn dismiss_top(&mut self) -> Option<ModalLayer> {
        let layer = self.top_layer()?;
        match layer {
            ModalLayer::HotelDetail => self.close_detail(),
            ModalLayer::LocationPicker => self.close_location_picker(),
        }
        Some(layer)
    }

    pub fn carousel_next(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.carousel.next();
        }
    }

    pub fn carousel_previous(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.carousel.previous();
        }
    }

    /// Route a pointer press to the top modal. Targets that do not belong to
    /// the top layer are ignored.
    pub fn pointer(&mut self, target: PointerTarget) {
        let Some(layer) = self.top_layer() else {
            return;
        };
        match (layer, target) {
            (_, PointerTarget::Backdrop) => {
                self.dismiss_top();
            }
            (_, PointerTarget::Content) => {}
            (ModalLayer::HotelDetail, PointerTarget::CarouselNext) => self.carousel_next(),
            (ModalLayer::HotelDetail, PointerTarget::CarouselPrevious) => self.carousel_previous(),
            (ModalLayer::LocationPicker, PointerTarget::Map(coordinate)) => {
                self.location.select_point(coordinate)
            }
            (layer, target) => {
                debug!(?layer, ?target, "pointer target ignored by top layer");
            }
        }
    }

    // Card selection

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn select_card(&mut self, index: usize) {
        let len = self.cards_len();
        if len > 0 {
            self.selected_card = index.min(len - 1);
        }
    }

    pub fn select_next_card(&mut self) {
        self.select_card(self.selected_card.saturating_add(1));
    }

    pub fn select_previous_card(&mut self) {
        self.select_card(self.selected_card.saturating_sub(1));
    }

    pub fn selected_hotel(&self) -> Option<&Arc<Hotel>> {
        if !self.phase().results_visible() {
            return None;
        }
        self.search.recommendations().get(self.selected_card)
    }

    /// The raw external link of the selected card, exactly as received.
    pub fn selected_link(&self) -> Option<&str> {
        self.selected_hotel().map(|hotel| hotel.link.as_str())
    }

    fn cards_len(&self) -> usize {
        if self.phase().results_visible() {
            self.search.recommendations().len()
        } else {
            0
        }
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(SearchOrchestrator::default(), LocationPicker::default())
    }
}
