//! UI-facing state machine for a user-initiated city search.
//!
//! Lookups run in the background; the session only ever holds one of four
//! states and applies results through a generation guard so a slow, stale
//! lookup can never clobber a newer submission.

use crate::error::LookupError;
use crate::model::CityWeather;

/// The one message shown for any failed lookup. Users get the same retryable
/// hint whether the city was unknown, the network dropped, or the body was
/// malformed; the specific cause goes to the log instead.
pub const LOOKUP_FAILED_MSG: &str = "Failed to fetch weather data. Please try again.";

/// Token tying an in-flight lookup to the submission that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Exactly one variant is active at a time.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        city: String,
    },
    Success(CityWeather),
    Error(String),
}

impl SearchState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}

/// Holds the search state and the generation counter for stale-result
/// filtering.
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a lookup for `city`. Transitions to `Loading` synchronously,
    /// dropping any prior payload, and returns the token the eventual result
    /// must present to [`finish`](Self::finish). A blank name is rejected
    /// without touching the state.
    pub fn submit(&mut self, city: &str) -> Result<Generation, LookupError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        self.generation += 1;
        self.state = SearchState::Loading { city: city.to_string() };
        Ok(Generation(self.generation))
    }

    /// Apply the outcome of the lookup started by `generation`. Returns
    /// `false` and leaves the state alone when the result is stale: a newer
    /// submission superseded it, or a reset already left `Loading`.
    pub fn finish(
        &mut self,
        generation: Generation,
        result: Result<CityWeather, LookupError>,
    ) -> bool {
        if generation.0 != self.generation || !self.state.is_loading() {
            tracing::debug!(generation = generation.0, "dropping stale lookup result");
            return false;
        }

        self.state = match result {
            Ok(weather) => SearchState::Success(weather),
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed");
                SearchState::Error(LOOKUP_FAILED_MSG.to_string())
            }
        };
        true
    }

    /// Back to `Idle`, clearing the payload. Also invalidates any in-flight
    /// lookup.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SearchState::Idle;
    }
}
