//! Star rendering for 0–10 hotel scores.

pub const STAR_COUNT: usize = 5;
pub const MAX_RATING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

impl Star {
    /// Both states use the same glyph; only the styling differs.
    pub const SYMBOL: char = '★';

    pub fn is_filled(self) -> bool {
        matches!(self, Star::Filled)
    }
}

/// Map a 0–10 rating onto five stars.
///
/// The rating is halved onto a 0–5 scale; every whole point fills a star and
/// a remainder of at least one half fills the next one. Out-of-range input
/// is clamped and NaN counts as zero.
pub fn format(rating: f64) -> [Star; STAR_COUNT] {
    let clamped = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };
    // rating / 10 * 5, computed exactly
    let scaled = clamped / 2.0;
    let full = scaled.floor() as usize;
    let half = scaled - scaled.floor() >= 0.5;

    let mut stars = [Star::Empty; STAR_COUNT];
    for (i, star) in stars.iter_mut().enumerate() {
        if i < full || (i == full && half) {
            *star = Star::Filled;
        }
    }
    stars
}

pub fn filled_count(rating: f64) -> usize {
    format(rating).iter().filter(|s| s.is_filled()).count()
}
