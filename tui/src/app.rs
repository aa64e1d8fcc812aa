use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ecostay_config::Config;
use ecostay_core::search::SearchCompletion;
use ecostay_core::{ModalLayer, PointerTarget, RecommendationClient, UiPhase, ViewController};
use ratatui::layout::Rect;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::link;
use crate::router::{Route, Router};
use crate::ticker::{StyleCycle, TickerGuard};
use crate::ui::{self, HitMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Everything that lives only while `/` is the current route.
///
/// Dropping it aborts the style ticker and closes the completion channel,
/// so a request that finishes after navigation has nowhere to report.
pub struct HomeView {
    pub view: ViewController,
    pub style: StyleCycle,
    completions_tx: UnboundedSender<SearchCompletion>,
    completions_rx: UnboundedReceiver<SearchCompletion>,
    _ticker: TickerGuard,
}

impl HomeView {
    pub fn new(config: &Config) -> Self {
        let (completions_tx, completions_rx) = unbounded_channel();
        let style = StyleCycle::new();
        let ticker = style.start(Duration::from_millis(config.ui.style_cycle_ms));
        Self {
            view: ViewController::from_config(config),
            style,
            completions_tx,
            completions_rx,
            _ticker: ticker,
        }
    }

    pub fn submit(&mut self, client: Arc<dyn RecommendationClient>) {
        self.view.submit(client, self.completions_tx.clone());
    }

    /// Apply every completion that has arrived. Returns how many were
    /// published.
    pub fn drain(&mut self) -> usize {
        let mut published = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.view.complete(completion) {
                published += 1;
            }
        }
        published
    }
}

pub struct App {
    config: Config,
    client: Arc<dyn RecommendationClient>,
    router: Router,
    home: Option<HomeView>,
    pub input_mode: InputMode,
    pub status: String,
    pub hits: HitMap,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, client: Arc<dyn RecommendationClient>) -> App {
        let home = HomeView::new(&config);
        App {
            config,
            client,
            router: Router::new(),
            home: Some(home),
            input_mode: InputMode::Normal,
            status: "Ready".to_string(),
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.router.current()
    }

    pub fn home(&self) -> Option<&HomeView> {
        self.home.as_ref()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.ui.tick_rate_ms)
    }

    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn navigate(&mut self, route: Route) {
        if !self.router.navigate(route) {
            return;
        }
        self.input_mode = InputMode::Normal;
        self.home = match route {
            Route::Home => {
                self.status = "Ready".to_string();
                Some(HomeView::new(&self.config))
            }
            Route::About => None,
        };
    }

    /// Pull finished searches into the home view.
    pub fn drain(&mut self) {
        let Some(home) = self.home.as_mut() else {
            return;
        };
        if home.drain() > 0 && home.view.phase() == UiPhase::Results {
            self.status = match home.view.search().recommendations().len() {
                0 => "No hotels found".to_string(),
                1 => "1 hotel found".to_string(),
                n => format!("{n} hotels found"),
            };
        }
    }

    pub fn submit(&mut self) {
        let client = self.client.clone();
        if let Some(home) = self.home.as_mut() {
            home.submit(client);
            self.input_mode = InputMode::Normal;
            self.status = "Searching…".to_string();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.router.current() {
            Route::About => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Tab | KeyCode::Char('h') => {
                    self.navigate(Route::Home)
                }
                _ => {}
            },
            Route::Home => self.on_home_key(key.code),
        }
    }

    fn on_home_key(&mut self, code: KeyCode) {
        if self.input_mode == InputMode::Editing {
            self.on_editing_key(code);
            return;
        }

        let Some(layer) = self.home.as_ref().and_then(|h| h.view.top_layer()) else {
            self.on_page_key(code);
            return;
        };
        match layer {
            ModalLayer::HotelDetail => self.on_detail_key(code),
            ModalLayer::LocationPicker => self.on_picker_key(code),
        }
    }

    fn on_editing_key(&mut self, code: KeyCode) {
        let Some(home) = self.home.as_mut() else {
            return;
        };
        match code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => home.view.search_mut().pop_char(),
            KeyCode::Char(c) => home.view.search_mut().push_char(c),
            _ => {}
        }
    }

    fn on_page_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') | KeyCode::Tab => self.navigate(Route::About),
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.input_mode = InputMode::Editing;
                self.status = "Editing query".to_string();
            }
            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('o') => self.open_selected_link(),
            _ => {
                let Some(home) = self.home.as_mut() else {
                    return;
                };
                let view = &mut home.view;
                match code {
                    KeyCode::Char('p') => view.open_location_picker(),
                    KeyCode::Left | KeyCode::Char('h') => view.select_previous_card(),
                    KeyCode::Right | KeyCode::Char('l') => view.select_next_card(),
                    KeyCode::Up | KeyCode::Char('k') => {
                        view.select_card(view.selected_card().saturating_sub(ui::CARDS_PER_ROW))
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        view.select_card(view.selected_card() + ui::CARDS_PER_ROW)
                    }
                    KeyCode::Enter | KeyCode::Char('m') => {
                        let index = view.selected_card();
                        view.open_detail(index);
                    }
                    _ => {}
                }
            }
        }
    }

    fn on_detail_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('o') {
            let link = self
                .home
                .as_ref()
                .and_then(|h| h.view.detail())
                .map(|d| d.hotel.link.clone());
            if let Some(link) = link {
                self.open_link(&link);
            }
            return;
        }

        let Some(home) = self.home.as_mut() else {
            return;
        };
        match code {
            KeyCode::Left | KeyCode::Char('h') => home.view.carousel_previous(),
            KeyCode::Right | KeyCode::Char('l') => home.view.carousel_next(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => home.view.close_detail(),
            _ => {}
        }
    }

    fn on_picker_key(&mut self, code: KeyCode) {
        let Some(home) = self.home.as_mut() else {
            return;
        };
        let view = &mut home.view;
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('p') | KeyCode::Enter => {
                view.close_location_picker()
            }
            KeyCode::Char('h') => view.location_mut().nudge(0, -1),
            KeyCode::Char('j') => view.location_mut().nudge(-1, 0),
            KeyCode::Char('k') => view.location_mut().nudge(1, 0),
            KeyCode::Char('l') => view.location_mut().nudge(0, 1),
            KeyCode::Left => view.location_mut().viewport_mut().pan(0, -1),
            KeyCode::Right => view.location_mut().viewport_mut().pan(0, 1),
            KeyCode::Up => view.location_mut().viewport_mut().pan(1, 0),
            KeyCode::Down => view.location_mut().viewport_mut().pan(-1, 0),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                view.location_mut().viewport_mut().zoom_in()
            }
            KeyCode::Char('-') => view.location_mut().viewport_mut().zoom_out(),
            KeyCode::Char('c') => view.location_mut().recenter(),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_click(column, row),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let zoom_in = mouse.kind == MouseEventKind::ScrollUp;
                let over_map = self.hits.map.is_some_and(|m| m.contains(column, row));
                let Some(home) = self.home.as_mut() else {
                    return;
                };
                if over_map && home.view.top_layer() == Some(ModalLayer::LocationPicker) {
                    let viewport = home.view.location_mut().viewport_mut();
                    if zoom_in {
                        viewport.zoom_in();
                    } else {
                        viewport.zoom_out();
                    }
                }
            }
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        let top = self.home.as_ref().and_then(|h| h.view.top_layer());
        if let Some(layer) = top {
            self.on_modal_click(layer, column, row);
            return;
        }

        let nav = self
            .hits
            .nav
            .iter()
            .find(|(_, area)| ui::contains(*area, column, row))
            .map(|(route, _)| *route);
        if let Some(route) = nav {
            self.navigate(route);
            return;
        }
        if ui::hit(self.hits.repository, column, row) {
            self.open_link(ui::REPOSITORY_URL);
            return;
        }
        if self.router.current() != Route::Home {
            return;
        }

        if ui::hit(self.hits.search_input, column, row) {
            self.input_mode = InputMode::Editing;
            return;
        }
        self.input_mode = InputMode::Normal;
        if ui::hit(self.hits.search_button, column, row) {
            self.submit();
            return;
        }

        let card = self
            .hits
            .cards
            .iter()
            .find(|card| ui::contains(card.area, column, row))
            .copied();
        let Some(home) = self.home.as_mut() else {
            return;
        };
        if ui::hit(self.hits.location_button, column, row) {
            home.view.open_location_picker();
            return;
        }
        if let Some(card) = card {
            home.view.select_card(card.index);
            if ui::contains(card.more, column, row) {
                home.view.open_detail(card.index);
            } else if ui::contains(card.link, column, row) {
                self.open_selected_link();
            }
        }
    }

    fn on_modal_click(&mut self, layer: ModalLayer, column: u16, row: u16) {
        let hits = &self.hits;
        let modal = match layer {
            ModalLayer::HotelDetail => hits.detail,
            ModalLayer::LocationPicker => hits.picker,
        };
        let Some(home) = self.home.as_mut() else {
            return;
        };
        let view = &mut home.view;

        // the close button dismisses like the backdrop does
        if modal.is_some_and(|m| ui::contains(m.close, column, row)) {
            view.pointer(PointerTarget::Backdrop);
            return;
        }

        let target = match layer {
            ModalLayer::HotelDetail if ui::hit(hits.carousel_previous, column, row) => {
                PointerTarget::CarouselPrevious
            }
            ModalLayer::HotelDetail if ui::hit(hits.carousel_next, column, row) => {
                PointerTarget::CarouselNext
            }
            ModalLayer::LocationPicker => match hits.map.and_then(|surface| {
                view.location().viewport().project(column, row, surface)
            }) {
                Some(coordinate) => PointerTarget::Map(coordinate),
                None => content_or_backdrop(modal.map(|m| m.content), column, row),
            },
            _ => content_or_backdrop(modal.map(|m| m.content), column, row),
        };
        view.pointer(target);
    }

    fn open_selected_link(&mut self) {
        let link = self
            .home
            .as_ref()
            .and_then(|h| h.view.selected_link())
            .map(str::to_string);
        if let Some(link) = link {
            self.open_link(&link);
        }
    }

    fn open_link(&mut self, target: &str) {
        self.status = match link::open(target) {
            Ok(()) => format!("Opened {target}"),
            Err(err) => {
                tracing::warn!(link = target, error = %err, "could not open link");
                format!("Could not open link: {err}")
            }
        };
    }
}

fn content_or_backdrop(content: Option<Rect>, column: u16, row: u16) -> PointerTarget {
    if ui::hit(content, column, row) {
        PointerTarget::Content
    } else {
        PointerTarget::Backdrop
    }
}
