use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ecostay_config::Config;
use ecostay_core::{HttpRecommendationClient, RecommendationClient};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};

mod app;
mod link;
mod router;
mod ticker;
mod ui;

pub use app::{App, HomeView, InputMode};
pub use router::{Route, Router};

pub async fn run_tui(config: Config) -> Result<()> {
    let client: Arc<dyn RecommendationClient> =
        Arc::new(HttpRecommendationClient::from_config(&config.api)?);
    tracing::info!(endpoint = %config.api.endpoint, "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config, client);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "tui exited with error");
    }
    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = app.tick_rate();
    loop {
        let mut hits = ui::HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, &app))?;
        app.hits = hits;

        // Check for search results
        app.drain();

        match App::poll_event(tick_rate)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.on_key(key),
            Some(Event::Mouse(mouse)) => app.on_mouse(mouse),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ecostay_core::{
        ClientError, Hotel, ModalLayer, RecommendationSet, SearchQuery, UiPhase,
    };
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    struct Canned(Vec<Hotel>);

    #[async_trait]
    impl RecommendationClient for Canned {
        async fn recommend(&self, _query: &SearchQuery) -> Result<RecommendationSet, ClientError> {
            Ok(RecommendationSet::new(self.0.clone()))
        }
    }

    fn hotel(name: &str, rating: f64, images: &[&str]) -> Hotel {
        Hotel {
            name: name.to_string(),
            rating,
            link: format!("https://example.com/{name}"),
            address: "1 Rue de Rivoli".to_string(),
            description: "Quiet rooms.\nFast Wi-Fi.".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn app_with(hotels: Vec<Hotel>) -> App {
        let mut config = Config::default();
        config.search.reveal_delay_ms = 0;
        App::new(config, Arc::new(Canned(hotels)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        let mut hits = ui::HitMap::default();
        terminal
            .draw(|f| hits = ui::draw(f, app))
            .expect("draw");
        app.hits = hits;
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    async fn wait_for_results(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                app.drain();
                if app.home().map(|h| h.view.phase()) == Some(UiPhase::Results) {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("results published");
    }

    fn phase(app: &App) -> Option<UiPhase> {
        app.home().map(|h| h.view.phase())
    }

    #[tokio::test]
    async fn test_hero_then_cards() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        let mut app = app_with(vec![
            hotel("Lumiere", 8.6, &["l1.jpg", "l2.jpg"]),
            hotel("Nid", 6.0, &[]),
        ]);

        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Find your dream hotel"));
        assert!(screen.contains("EcoStay"));

        app.on_key(key(KeyCode::Char('s')));
        assert_eq!(phase(&app), Some(UiPhase::Pending));
        let screen = render(&mut terminal, &mut app);
        assert!(!screen.contains("Find your dream hotel"));

        wait_for_results(&mut app).await;
        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Lumiere"));
        assert!(screen.contains("Nid"));
        assert!(screen.contains("l1.jpg"));
        assert_eq!(app.hits.cards.len(), 2);
        assert_eq!(app.status, "2 hotels found");
    }

    #[tokio::test]
    async fn test_editing_query() {
        let mut app = app_with(Vec::new());
        app.on_key(key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Editing);
        for _ in 0.."I want a quiet hotel with great Wi-Fi".len() {
            app.on_key(key(KeyCode::Backspace));
        }
        for c in "spa".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        let query = app.home().map(|h| h.view.search().query_text().to_string());
        assert_eq!(query.as_deref(), Some("spa"));

        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(phase(&app), Some(UiPhase::Pending));
    }

    #[tokio::test]
    async fn test_detail_modal_mouse_routing() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        let mut app = app_with(vec![hotel("Lumiere", 8.6, &["l1.jpg", "l2.jpg", "l3.jpg"])]);
        app.submit();
        wait_for_results(&mut app).await;
        render(&mut terminal, &mut app);

        let more = app.hits.cards[0].more;
        app.on_mouse(click(more.x, more.y));
        let top = app.home().and_then(|h| h.view.top_layer());
        assert_eq!(top, Some(ModalLayer::HotelDetail));

        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Slide 1 of 3"));
        assert!(screen.contains("Address:"));

        let next = app.hits.carousel_next.expect("carousel controls");
        app.on_mouse(click(next.x, next.y));
        let previous = app.hits.carousel_previous.expect("carousel controls");
        app.on_mouse(click(previous.x, previous.y));
        app.on_mouse(click(previous.x, previous.y));
        let index = app
            .home()
            .and_then(|h| h.view.detail())
            .map(|d| d.carousel.index());
        assert_eq!(index, Some(2));

        let content = app.hits.detail.expect("detail rendered").content;
        app.on_mouse(click(content.x + content.width / 2, content.y + content.height / 2));
        assert!(app.home().and_then(|h| h.view.detail()).is_some());

        // the status bar lies outside the modal
        app.on_mouse(click(0, 35));
        assert!(app.home().and_then(|h| h.view.detail()).is_none());
    }

    #[tokio::test]
    async fn test_map_click_selects_projected_point() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        let mut app = app_with(Vec::new());
        app.on_key(key(KeyCode::Char('p')));
        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Current location: lat=48.85660, lng=2.35220"));

        let surface = app.hits.map.expect("map rendered");
        let (column, row) = (surface.x + 3, surface.y + 2);
        let expected = app
            .home()
            .and_then(|h| h.view.location().viewport().project(column, row, surface));
        app.on_mouse(click(column, row));

        let view = &app.home().expect("home").view;
        assert_eq!(Some(view.location().coordinate()), expected);
        assert!(view.location_picker_open());

        app.on_key(key(KeyCode::Esc));
        assert!(!app.home().expect("home").view.location_picker_open());
    }

    #[tokio::test]
    async fn test_leaving_home_tears_it_down() {
        let mut app = app_with(vec![hotel("Lumiere", 8.6, &[])]);
        app.submit();
        app.on_key(key(KeyCode::Char('a')));
        assert_eq!(app.route(), Route::About);
        assert!(app.home().is_none());

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.route(), Route::Home);
        assert_eq!(app.status, "Ready");
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.drain();
        assert_eq!(phase(&app), Some(UiPhase::Hero));
        assert_eq!(app.status, "Ready");
    }

    #[tokio::test]
    async fn test_card_grid_scrolls_with_selection() {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).expect("terminal");
        let hotels = (0..100)
            .map(|i| hotel(&format!("Hotel {i}"), 7.0, &[]))
            .collect();
        let mut app = app_with(hotels);
        app.submit();
        wait_for_results(&mut app).await;

        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("of 25"));
        assert!(!app.hits.cards.is_empty());
        assert!(app.hits.cards.len() < 100);
        for card in &app.hits.cards {
            assert_eq!(card.link.height, 1);
            assert_eq!(card.more.height, 1);
        }

        for _ in 0..20 {
            app.on_key(key(KeyCode::Down));
        }
        assert_eq!(app.home().map(|h| h.view.selected_card()), Some(80));
        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Hotel 80"));
        assert!(app.hits.cards.iter().all(|card| card.index != 0));
        let selected = app
            .hits
            .cards
            .iter()
            .find(|card| card.index == 80)
            .copied()
            .expect("selected card rendered");
        assert_eq!(selected.more.height, 1);

        for _ in 0..30 {
            app.on_key(key(KeyCode::Right));
        }
        render(&mut terminal, &mut app);
        let last = app.hits.cards.last().copied().expect("cards rendered");
        assert_eq!(last.index, 99);

        app.on_mouse(click(last.more.x, last.more.y));
        let detail = app
            .home()
            .and_then(|h| h.view.detail())
            .map(|d| d.hotel.name.clone());
        assert_eq!(detail.as_deref(), Some("Hotel 99"));
    }

    #[tokio::test]
    async fn test_about_page_renders_team() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        let mut app = app_with(Vec::new());
        app.navigate(Route::About);
        let screen = render(&mut terminal, &mut app);
        assert!(screen.contains("Our Team"));
        assert!(screen.contains("Martin PUJOL"));

        let (_, logo) = app.hits.nav[0];
        app.on_mouse(click(logo.x, logo.y));
        assert_eq!(app.route(), Route::Home);
    }
}
