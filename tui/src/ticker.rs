//! Cosmetic style cycle for the hero title.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};
use tokio::task::JoinHandle;

/// The five looks the "EcoStay" title rotates through.
pub const HERO_STYLES: [Style; 5] = [
    Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightGreen).add_modifier(Modifier::ITALIC),
    Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
    Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
];

/// Shared position in [`HERO_STYLES`], advanced by a background ticker.
#[derive(Debug, Clone, Default)]
pub struct StyleCycle {
    index: Arc<AtomicUsize>,
}

impl StyleCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    pub fn current(&self) -> Style {
        HERO_STYLES[self.index() % HERO_STYLES.len()]
    }

    fn advance(&self) {
        let next = (self.index() + 1) % HERO_STYLES.len();
        self.index.store(next, Ordering::Relaxed);
    }

    /// Start advancing every `period`. The ticker lives as long as the guard.
    pub fn start(&self, period: Duration) -> TickerGuard {
        let cycle = self.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                cycle.advance();
            }
        });
        TickerGuard { handle }
    }
}

/// Aborts the ticker task when dropped.
#[derive(Debug)]
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cycle_advances_and_stops_on_drop() {
        let cycle = StyleCycle::new();
        let guard = cycle.start(Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(1_250)).await;
        assert_eq!(cycle.index(), 2);

        drop(guard);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(cycle.index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_wraps_after_five_styles() {
        let cycle = StyleCycle::new();
        let _guard = cycle.start(Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(2_750)).await;
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), HERO_STYLES[0]);
    }
}
