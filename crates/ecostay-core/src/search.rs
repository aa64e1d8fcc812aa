//! Search orchestration: query text, phase transitions and publishing.
//!
//! A submission is split into two explicit steps. [`SearchOrchestrator::begin`]
//! hides the hero and stamps the query with a generation number;
//! [`SearchOrchestrator::complete`] publishes the outcome. Between the two, the
//! request itself runs in [`execute`], normally on a spawned task that
//! reports back over a channel.
//!
//! Overlapping submissions are resolved last-submission-wins: a completion
//! whose generation is older than the latest `begin` is dropped.

use std::sync::Arc;
use std::time::Duration;

use ecostay_config::Config;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::client::RecommendationClient;
use crate::models::{Coordinate, RecommendationSet, SearchQuery, DEFAULT_RESULT_LIMIT};

pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(400);

/// Coarse mode of the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    /// Nothing submitted yet; the hero is shown.
    Hero,
    /// First search in flight: hero hidden, no cards yet.
    Pending,
    /// A result set has been published.
    Results,
}

impl UiPhase {
    pub fn hero_visible(self) -> bool {
        self == UiPhase::Hero
    }

    pub fn results_visible(self) -> bool {
        self == UiPhase::Results
    }
}

/// A submission that has hidden the hero and is waiting for its request.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
    /// Earliest instant a successful result may be published.
    pub reveal_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Delivered(RecommendationSet),
    /// Transport or parsing failure; already logged.
    Failed,
}

#[derive(Debug, Clone)]
pub struct SearchCompletion {
    pub generation: u64,
    pub outcome: SearchOutcome,
}

#[derive(Debug)]
pub struct SearchOrchestrator {
    query_text: String,
    result_limit: u32,
    reveal_delay: Duration,
    phase: UiPhase,
    recommendations: RecommendationSet,
    generation: u64,
}

impl SearchOrchestrator {
    pub fn new(query_text: impl Into<String>, result_limit: u32, reveal_delay: Duration) -> Self {
        Self {
            query_text: query_text.into(),
            result_limit,
            reveal_delay,
            phase: UiPhase::Hero,
            recommendations: RecommendationSet::empty(),
            generation: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.search.default_query.clone(),
            config.search.top_n,
            Duration::from_millis(config.search.reveal_delay_ms),
        )
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query_text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query_text.pop();
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    pub fn recommendations(&self) -> &RecommendationSet {
        &self.recommendations
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Freeze the current text and `coordinate` into a query, hide the hero
    /// and hand back the ticket for the request.
    pub fn begin(&mut self, coordinate: Coordinate) -> SearchTicket {
        self.generation += 1;
        if self.phase == UiPhase::Hero {
            self.phase = UiPhase::Pending;
        }

        let query = SearchQuery::new(self.query_text.clone(), coordinate)
            .with_limit(self.result_limit);
        info!(
            generation = self.generation,
            query = %query.text,
            lat = coordinate.latitude,
            lng = coordinate.longitude,
            "search submitted"
        );

        SearchTicket {
            generation: self.generation,
            query,
            reveal_at: Instant::now() + self.reveal_delay,
        }
    }

    /// Publish a completion. Returns `false` when it was stale and dropped.
    pub fn complete(&mut self, completion: SearchCompletion) -> bool {
        if completion.generation != self.generation {
            warn!(
                stale = completion.generation,
                latest = self.generation,
                "discarding stale search completion"
            );
            return false;
        }

        self.recommendations = match completion.outcome {
            SearchOutcome::Delivered(set) => set,
            SearchOutcome::Failed => RecommendationSet::empty(),
        };
        self.phase = UiPhase::Results;
        info!(
            generation = completion.generation,
            hotels = self.recommendations.len(),
            "results published"
        );
        true
    }

    /// `begin` plus a spawned [`execute`] that reports on `tx`.
    pub fn submit(
        &mut self,
        coordinate: Coordinate,
        client: Arc<dyn RecommendationClient>,
        tx: UnboundedSender<SearchCompletion>,
    ) -> JoinHandle<()> {
        let ticket = self.begin(coordinate);
        spawn(client, ticket, tx)
    }
}

impl Default for SearchOrchestrator {
    fn default() -> Self {
        Self::new("", DEFAULT_RESULT_LIMIT, DEFAULT_REVEAL_DELAY)
    }
}

/// Run one request to completion.
///
/// Success waits until the ticket's reveal instant, which was fixed when the
/// hero was hidden; a slow response is therefore published immediately.
/// Failure resolves at once.
pub async fn execute(client: &dyn RecommendationClient, ticket: SearchTicket) -> SearchCompletion {
    let outcome = match client.recommend(&ticket.query).await {
        Ok(set) => {
            tokio::time::sleep_until(ticket.reveal_at).await;
            SearchOutcome::Delivered(set)
        }
        Err(err) => {
            warn!(generation = ticket.generation, error = %err, "recommendation request failed");
            SearchOutcome::Failed
        }
    };

    SearchCompletion {
        generation: ticket.generation,
        outcome,
    }
}

/// Fire-and-forget [`execute`]. A closed channel means the view is gone and
/// the completion is simply dropped.
pub fn spawn(
    client: Arc<dyn RecommendationClient>,
    ticket: SearchTicket,
    tx: UnboundedSender<SearchCompletion>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let completion = execute(client.as_ref(), ticket).await;
        if tx.send(completion).is_err() {
            debug!("search completion dropped, receiver closed");
        }
    })
}
