//! Location picking: the selected coordinate and the map viewport around it.

use crate::models::Coordinate;
use ecostay_config::LocationConfig;

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;

/// Owns the coordinate sent with the next search.
///
/// The coordinate changes only through [`LocationPicker::select_point`];
/// values are stored verbatim, out-of-range pairs included.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPicker {
    coordinate: Coordinate,
    viewport: MapViewport,
}

impl LocationPicker {
    pub fn new(coordinate: Coordinate, zoom: u8) -> Self {
        Self {
            coordinate,
            viewport: MapViewport::centered_on(coordinate, zoom),
        }
    }

    pub fn from_config(config: &LocationConfig) -> Self {
        Self::new(
            Coordinate::new(config.latitude, config.longitude),
            config.zoom,
        )
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn select_point(&mut self, coordinate: Coordinate) {
        tracing::debug!(
            lat = coordinate.latitude,
            lng = coordinate.longitude,
            "location selected"
        );
        self.coordinate = coordinate;
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Re-center the map on the marker, keeping the zoom level.
    pub fn recenter(&mut self) {
        self.viewport.center = self.coordinate;
    }

    /// Select the cell under a click, if it landed on the map.
    pub fn click(&mut self, column: u16, row: u16, surface: MapSurface) -> Option<Coordinate> {
        let coordinate = self.viewport.project(column, row, surface)?;
        self.select_point(coordinate);
        Some(coordinate)
    }

    /// Move the marker by whole viewport steps (north and east positive).
    pub fn nudge(&mut self, north: i32, east: i32) {
        let (lat_step, lng_step) = self.viewport.step();
        let moved = Coordinate::new(
            self.coordinate.latitude + f64::from(north) * lat_step,
            self.coordinate.longitude + f64::from(east) * lng_step,
        );
        self.select_point(moved);
    }
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self::from_config(&LocationConfig::default())
    }
}

/// Terminal cells occupied by the rendered map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSurface {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl MapSurface {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Visible window of the map.
///
/// Zoom follows the slippy-map convention: level 1 spans the whole world
/// horizontally and every level halves the span. Terminal cells are about
/// twice as tall as wide, so the latitude span is half the longitude span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: Coordinate,
    zoom: u8,
}

impl MapViewport {
    pub fn centered_on(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    pub fn lng_span(&self) -> f64 {
        360.0 / 2f64.powi(i32::from(self.zoom) - 1)
    }

    pub fn lat_span(&self) -> f64 {
        self.lng_span() / 2.0
    }

    /// `[west, east]`
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span() / 2.0;
        [self.center.longitude - half, self.center.longitude + half]
    }

    /// `[south, north]`
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.latitude - half, self.center.latitude + half]
    }

    /// Marker step as `(latitude, longitude)` degrees.
    pub fn step(&self) -> (f64, f64) {
        (self.lat_span() / 16.0, self.lng_span() / 32.0)
    }

    /// Shift the window by a quarter span per unit (north and east positive).
    pub fn pan(&mut self, north: i32, east: i32) {
        self.center.latitude += f64::from(north) * self.lat_span() / 4.0;
        self.center.longitude += f64::from(east) * self.lng_span() / 4.0;
    }

    /// Coordinate at the center of a terminal cell, `None` off the surface.
    pub fn project(&self, column: u16, row: u16, surface: MapSurface) -> Option<Coordinate> {
        if !surface.contains(column, row) {
            return None;
        }
        let [west, _] = self.x_bounds();
        let [_, north] = self.y_bounds();
        let fx = (f64::from(column - surface.x) + 0.5) / f64::from(surface.width);
        let fy = (f64::from(row - surface.y) + 0.5) / f64::from(surface.height);
        Some(Coordinate::new(
            north - fy * self.lat_span(),
            west + fx * self.lng_span(),
        ))
    }
}
