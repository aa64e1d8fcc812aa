use anyhow::Result;
use console::Style;
use ecostay_config::Config;
use ecostay_core::search::{self, SearchOrchestrator};
use ecostay_core::{Coordinate, HttpRecommendationClient, LocationPicker, ViewController};
use std::time::Duration;

use super::ui;

pub async fn handle_search(
    config: &Config,
    query: String,
    lat: Option<f64>,
    lng: Option<f64>,
    top: Option<u32>,
) -> Result<()> {
    let client = HttpRecommendationClient::from_config(&config.api)?;
    let top = top.unwrap_or(config.search.top_n);

    let mut view = ViewController::new(
        SearchOrchestrator::new(
            query,
            top,
            Duration::from_millis(config.search.reveal_delay_ms),
        ),
        LocationPicker::from_config(&config.location),
    );
    if lat.is_some() || lng.is_some() {
        let current = view.location().coordinate();
        view.location_mut().select_point(Coordinate::new(
            lat.unwrap_or(current.latitude),
            lng.unwrap_or(current.longitude),
        ));
    }

    let ticket = view.begin_search();
    ui::print_header(&format!("Searching for: {}", ticket.query.text));
    ui::print_key_value(
        "Location",
        &format!(
            "lat={}, lng={}",
            ticket.query.coordinate.latitude, ticket.query.coordinate.longitude
        ),
    );
    ui::print_key_value("Endpoint", client.endpoint());

    let completion = search::execute(&client, ticket).await;
    view.complete(completion);

    let cards = view.cards();
    if cards.is_empty() {
        ui::print_note("No hotels found.");
        return Ok(());
    }

    for card in cards {
        let hotel = card.hotel;
        let mut body = format!("{}  {:.1}/10\n", ui::stars(&card.stars), hotel.rating);
        if let Some(image) = card.thumbnail() {
            body.push_str(&format!("{image}\n"));
        }
        if !hotel.address.is_empty() {
            body.push_str(&format!("Address: {}\n", hotel.address));
        }
        if !hotel.link.is_empty() {
            body.push_str(&format!("{}\n", hotel.link));
        }
        if !hotel.description.is_empty() {
            body.push('\n');
            body.push_str(&hotel.description);
        }
        ui::print_panel(
            &format!("#{} {}", card.index + 1, hotel.name),
            &body,
            Style::new().green(),
        );
    }
    Ok(())
}
