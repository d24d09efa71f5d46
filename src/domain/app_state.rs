use std::convert::Infallible;

use super::analysis::{LogisticsResult, NewsDigest, TrackingData};
use super::request::{AnalysisFailure, RequestState};

/// Session-wide state shared through the component tree: one request cell
/// per action kind. Each cell is only ever written by the completion path
/// of its own request, so last-write-wins within a kind is the whole
/// locking story.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub analysis: RequestState<LogisticsResult, AnalysisFailure>,
    /// When the current analysis result arrived; display only.
    pub analysis_completed_at: Option<time::OffsetDateTime>,
    /// The news cell's error type is `Infallible`: a news failure can be
    /// logged but never stored or shown.
    pub news: RequestState<NewsDigest, Infallible>,
}

impl AppState {
    /// Transition handler for opening the news panel. Fetch once, then
    /// serve the cached digest: returns `true` (and claims the in-flight
    /// slot) only when no digest is cached and no request is outstanding.
    #[must_use]
    pub fn enter_news(&mut self) -> bool {
        if self.news.result().is_some() || self.news.is_in_flight() {
            return false;
        }
        self.news.begin()
    }

    /// Explicit refresh: resubmits even with a cached digest, still capped
    /// at one outstanding request.
    #[must_use]
    pub fn refresh_news(&mut self) -> bool {
        self.news.begin()
    }

    /// Fleet tracking is derived from the latest analysis; opening that
    /// panel never fetches anything. `None` renders the placeholder.
    pub fn fleet_tracking(&self) -> Option<&TrackingData> {
        self.analysis
            .result()
            .map(|result| &result.tracking_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::NewsSource;

    fn digest() -> NewsDigest {
        NewsDigest {
            items: Vec::new(),
            sources: vec![NewsSource {
                title: "Example".into(),
                uri: "https://example.com".into(),
            }],
        }
    }

    #[test]
    fn first_news_entry_triggers_exactly_one_fetch() {
        let mut state = AppState::default();
        assert!(state.enter_news());
        // Re-entering while the fetch is outstanding must not start another.
        assert!(!state.enter_news());
        assert!(state.news.is_in_flight());
    }

    #[test]
    fn cached_digest_suppresses_the_entry_fetch() {
        let mut state = AppState::default();
        assert!(state.enter_news());
        state.news.succeed(digest());
        assert!(!state.enter_news());
        assert!(state.news.result().is_some());
    }

    #[test]
    fn explicit_refresh_ignores_the_cache() {
        let mut state = AppState::default();
        state.news.succeed(digest());
        assert!(state.refresh_news());
        assert!(state.news.is_in_flight());
        // ...but still respects the single-outstanding-request cap.
        assert!(!state.refresh_news());
    }

    #[test]
    fn abandoned_news_failure_restores_the_cached_digest() {
        let mut state = AppState::default();
        state.news.succeed(digest());
        assert!(state.refresh_news());
        state.news.abandon();
        assert_eq!(state.news.result(), Some(&digest()));
        assert!(!state.news.is_in_flight());
    }

    #[test]
    fn fleet_panel_waits_for_an_analysis_result() {
        let mut state = AppState::default();
        assert!(state.fleet_tracking().is_none());

        assert!(state.analysis.begin());
        assert!(state.fleet_tracking().is_none());

        state
            .analysis
            .succeed(crate::domain::analysis::tests::sample_result());
        assert_eq!(
            state.fleet_tracking().map(|data| data.sea_tracking_id.as_str()),
            Some("MSCU1234567")
        );
    }
}
