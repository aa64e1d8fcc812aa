use ecostay_core::location::MapSurface;
use ecostay_core::rating::Star;
use ecostay_core::view::{Card, HotelDetail};
use ecostay_core::{UiPhase, ViewController};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::{App, HomeView, InputMode};
use crate::router::Route;

pub const REPOSITORY_URL: &str = "https://github.com/ahmedmaaloul/ecostay";

pub(crate) const CARDS_PER_ROW: usize = 4;
const CARD_HEIGHT: u16 = 7;
const LINK_LABEL: &str = "[ Link ]";
const MORE_LABEL: &str = "[ More ]";
const CLOSE_LABEL: &str = "[ Close ]";

/// Clickable regions of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub index: usize,
    pub area: Rect,
    pub link: Rect,
    pub more: Rect,
}

/// Content box and close button of a rendered modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHit {
    pub content: Rect,
    pub close: Rect,
}

/// Screen regions from the last frame, used to resolve mouse presses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub nav: Vec<(Route, Rect)>,
    pub repository: Option<Rect>,
    pub search_input: Option<Rect>,
    pub location_button: Option<Rect>,
    pub search_button: Option<Rect>,
    pub cards: Vec<CardHit>,
    pub picker: Option<ModalHit>,
    pub map: Option<MapSurface>,
    pub detail: Option<ModalHit>,
    pub carousel_previous: Option<Rect>,
    pub carousel_next: Option<Rect>,
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

pub fn hit(rect: Option<Rect>, column: u16, row: u16) -> bool {
    rect.is_some_and(|r| contains(r, column, row))
}

pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navbar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_navbar(f, chunks[0], app.route(), &mut hits);

    match (app.route(), app.home()) {
        (Route::Home, Some(home)) => draw_home(f, chunks[1], app, home, &mut hits),
        (Route::Home, None) => {}
        (Route::About, _) => draw_about(f, chunks[1]),
    }

    draw_status(f, chunks[2], app);

    if let Some(home) = app.home() {
        let view = &home.view;
        if view.location_picker_open() {
            draw_location_picker(f, f.area(), view, &mut hits);
        }
        if let Some(detail) = view.detail() {
            draw_detail(f, f.area(), detail, &mut hits);
        }
    }

    hits
}

fn draw_navbar(f: &mut Frame, area: Rect, route: Route, hits: &mut HitMap) {
    let active = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let logo = "EcoStay";
    let logo_area = Rect::new(area.x + 1, area.y, logo.len() as u16, 1).intersection(area);
    let logo_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new(Span::styled(logo, logo_style)), logo_area);
    hits.nav.push((Route::Home, logo_area));

    let about = "About us";
    let github = "GitHub";
    let separator = " │ ";
    let right_width = (about.len() + separator.chars().count() + github.len()) as u16;
    let start = area.right().saturating_sub(right_width + 1).max(area.x);
    let about_area = Rect::new(start, area.y, about.len() as u16, 1).intersection(area);
    let github_area = Rect::new(
        start + about.len() as u16 + separator.chars().count() as u16,
        area.y,
        github.len() as u16,
        1,
    )
    .intersection(area);

    let about_style = if route == Route::About {
        active
    } else {
        Style::default()
    };
    let right = Line::from(vec![
        Span::styled(about, about_style),
        Span::styled(separator, Style::default().fg(Color::DarkGray)),
        Span::styled(github, Style::default().fg(Color::Blue)),
    ]);
    f.render_widget(
        Paragraph::new(right),
        Rect::new(start, area.y, right_width, 1).intersection(area),
    );
    hits.nav.push((Route::About, about_area));
    hits.repository = Some(github_area);
}

fn draw_home(f: &mut Frame, area: Rect, app: &App, home: &HomeView, hits: &mut HitMap) {
    let view = &home.view;
    let hero_height = if view.phase().hero_visible() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    if view.phase().hero_visible() {
        let hero = Paragraph::new(vec![
            Line::from(""),
            Line::from("Find your dream hotel").style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled("Find your ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("EcoStay", home.style.current()),
            ]),
        ])
        .alignment(Alignment::Center);
        f.render_widget(hero, chunks[0]);
    }

    draw_search_bar(f, chunks[1], app, view, hits);

    match view.phase() {
        UiPhase::Hero => {}
        UiPhase::Pending => {
            let pending = Paragraph::new("Searching…")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(pending, chunks[2]);
        }
        UiPhase::Results => draw_cards(f, chunks[2], &view.cards(), hits),
    }
}

fn draw_search_bar(f: &mut Frame, area: Rect, app: &App, view: &ViewController, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(9),
            Constraint::Length(12),
        ])
        .split(area);

    let editing = matches!(app.input_mode, InputMode::Editing);
    let input = Paragraph::new(view.search().query_text())
        .style(if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .block(Block::default().borders(Borders::ALL).title("Search Query"));
    f.render_widget(input, chunks[0]);
    if editing {
        let width = view.search().query_text().chars().count() as u16;
        let x = (chunks[0].x + 1 + width).min(chunks[0].right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, chunks[0].y + 1));
    }

    let map_button = Paragraph::new("Map")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(map_button, chunks[1]);

    let search_button = Paragraph::new("Search")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(search_button, chunks[2]);

    hits.search_input = Some(chunks[0]);
    hits.location_button = Some(chunks[1]);
    hits.search_button = Some(chunks[2]);
}

fn draw_cards(f: &mut Frame, area: Rect, cards: &[Card<'_>], hits: &mut HitMap) {
    if cards.is_empty() {
        let empty = Paragraph::new("No hotels found.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<&[Card<'_>]> = cards.chunks(CARDS_PER_ROW).collect();
    let selected_row = cards
        .iter()
        .position(|card| card.selected)
        .unwrap_or(0)
        / CARDS_PER_ROW;

    // One line is kept for the row indicator when the grid overflows.
    let fits = (area.height / CARD_HEIGHT).max(1) as usize;
    let (window, indicator) = if rows.len() > fits {
        let visible = (area.height.saturating_sub(1) / CARD_HEIGHT).max(1) as usize;
        let start = selected_row.saturating_sub(visible - 1);
        (start..(start + visible).min(rows.len()), true)
    } else {
        (0..rows.len(), false)
    };

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            window
                .clone()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (row, row_area) in rows[window.clone()].iter().zip(row_areas.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..CARDS_PER_ROW).map(|_| Constraint::Ratio(1, CARDS_PER_ROW as u32)),
            )
            .split(*row_area);
        for (card, card_area) in row.iter().zip(columns.iter()) {
            hits.cards.push(draw_card(f, *card_area, card));
        }
    }

    if indicator {
        let line = format!(
            "rows {}-{} of {}",
            window.start + 1,
            window.end,
            rows.len()
        );
        let bottom = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        f.render_widget(
            Paragraph::new(line)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
            bottom,
        );
    }
}

fn draw_card(f: &mut Frame, area: Rect, card: &Card<'_>) -> CardHit {
    let border = if card.selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            card.hotel.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let image = match card.thumbnail() {
        Some(url) => Line::from(Span::styled(url, Style::default().fg(Color::DarkGray))),
        None => Line::from(Span::styled(
            "no image",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };
    let body = Paragraph::new(vec![image, Line::from(""), stars_line(&card.stars)]);
    f.render_widget(body, inner);

    let actions_y = inner.bottom().saturating_sub(1);
    let link = Rect::new(inner.x, actions_y, LINK_LABEL.len() as u16, 1).intersection(inner);
    let more = Rect::new(
        inner.x + LINK_LABEL.len() as u16 + 1,
        actions_y,
        MORE_LABEL.len() as u16,
        1,
    )
    .intersection(inner);
    f.render_widget(
        Paragraph::new(Span::styled(LINK_LABEL, Style::default().fg(Color::Blue))),
        link,
    );
    f.render_widget(
        Paragraph::new(Span::styled(MORE_LABEL, Style::default().fg(Color::Green))),
        more,
    );

    CardHit {
        index: card.index,
        area,
        link,
        more,
    }
}

pub fn stars_line(stars: &[Star]) -> Line<'static> {
    Line::from(
        stars
            .iter()
            .map(|star| {
                let color = if star.is_filled() {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                Span::styled(Star::SYMBOL.to_string(), Style::default().fg(color))
            })
            .collect::<Vec<_>>(),
    )
}

fn draw_about(f: &mut Frame, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Our Team", heading.fg(Color::Green))),
        Line::from(""),
        Line::from("Ahmed MAALOUL"),
        Line::from("Aksel YILMAZ"),
        Line::from("Martin PUJOL"),
        Line::from(""),
        Line::from(Span::styled("ESILV", heading)),
        Line::from(""),
        Line::from(Span::styled(REPOSITORY_URL, Style::default().fg(Color::Blue))),
    ];
    let about = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("About us"));
    f.render_widget(about, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let help = match (app.route(), app.input_mode) {
        (Route::About, _) => "Esc: home  q: quit",
        (Route::Home, InputMode::Editing) => "Enter: search  Esc: stop editing",
        (Route::Home, InputMode::Normal) => {
            "i: edit  s: search  p: map  arrows: select  m: more  o: open link  a: about  q: quit"
        }
    };
    let line = Line::from(vec![
        Span::styled(help, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::raw(app.status.as_str()),
    ]);
    let status = Paragraph::new(line).style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(status, area);
}

fn draw_location_picker(f: &mut Frame, area: Rect, view: &ViewController, hits: &mut HitMap) {
    let modal = centered_rect(80, 80, area);
    f.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Pick a place")
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let coordinate = view.location().coordinate();
    let current = Line::from(vec![
        Span::raw("Current location: "),
        Span::styled(
            format!("lat={:.5}, lng={:.5}", coordinate.latitude, coordinate.longitude),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(current), chunks[0]);

    let viewport = view.location().viewport();
    let map = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::Green,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.print(
                coordinate.longitude,
                coordinate.latitude,
                Span::styled(
                    "●",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            );
        });
    f.render_widget(map, chunks[1]);

    let footer = chunks[2];
    let close = Rect::new(
        footer.right().saturating_sub(CLOSE_LABEL.len() as u16),
        footer.y,
        CLOSE_LABEL.len() as u16,
        1,
    )
    .intersection(footer);
    let hint = format!(
        "click or h/j/k/l: move marker  arrows: pan  +/-: zoom ({})  Esc: close",
        viewport.zoom()
    );
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        footer,
    );
    f.render_widget(Paragraph::new(CLOSE_LABEL), close);

    hits.map = Some(MapSurface {
        x: chunks[1].x,
        y: chunks[1].y,
        width: chunks[1].width,
        height: chunks[1].height,
    });
    hits.picker = Some(ModalHit {
        content: modal,
        close,
    });
}

fn draw_detail(f: &mut Frame, area: Rect, detail: &HotelDetail, hits: &mut HitMap) {
    let modal = centered_rect(70, 70, area);
    f.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let carousel = &detail.carousel;
    let slideshow_height = if carousel.is_empty() { 0 } else { 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(slideshow_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    hits.carousel_previous = None;
    hits.carousel_next = None;
    if let (Some(url), Some(label)) = (carousel.current(), carousel.position_label()) {
        let slideshow = chunks[0];
        let lines = vec![
            Line::from(Span::styled(label, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(url, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            slideshow,
        );

        if carousel.has_controls() {
            let previous = Rect::new(slideshow.x, slideshow.y, 3, 1).intersection(slideshow);
            let next = Rect::new(slideshow.right().saturating_sub(3), slideshow.y, 3, 1)
                .intersection(slideshow);
            let arrow = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
            f.render_widget(Paragraph::new(Span::styled(" ‹ ", arrow)), previous);
            f.render_widget(Paragraph::new(Span::styled(" › ", arrow)), next);
            hits.carousel_previous = Some(previous);
            hits.carousel_next = Some(next);
        }
    }

    let hotel = &detail.hotel;
    let mut body = vec![
        Line::from(Span::styled(
            hotel.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Address: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(hotel.address.as_str()),
        ]),
        Line::from(""),
    ];
    body.extend(hotel.description.lines().map(Line::from));
    f.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }),
        chunks[1],
    );

    let footer = chunks[2];
    let close = Rect::new(
        footer.right().saturating_sub(CLOSE_LABEL.len() as u16),
        footer.y,
        CLOSE_LABEL.len() as u16,
        1,
    )
    .intersection(footer);
    f.render_widget(
        Paragraph::new(Span::styled(
            "←/→: browse images  o: open link  Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
        footer,
    );
    f.render_widget(Paragraph::new(CLOSE_LABEL), close);

    hits.detail = Some(ModalHit {
        content: modal,
        close,
    });
}

/// A rectangle of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
