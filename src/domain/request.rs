//! Lifecycle state for one asynchronous request kind.
//!
//! Each action the app can fire (run the analysis, fetch the news digest)
//! owns exactly one `RequestState` cell. The cell is a single discriminated
//! value, so a fresh result and an error can never coexist as the outcome
//! of a request. The last good result rides along in `prior` while a
//! resubmission is in flight or has failed, which is what keeps the old
//! dashboard visible underneath the skeleton and the error banner.

/// State of the most recent request of one kind.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState<T, E> {
    /// Nothing requested yet (or explicitly cleared).
    Idle,
    /// A request is outstanding. At most one per kind: `begin` refuses to
    /// start another while in this state.
    InFlight { prior: Option<T> },
    /// The last request resolved with a value.
    Succeeded(T),
    /// The last request failed. `prior` is whatever `Succeeded` value was
    /// current before the failed attempt.
    Failed { error: E, prior: Option<T> },
}

impl<T, E> Default for RequestState<T, E> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T, E> RequestState<T, E> {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight { .. })
    }

    /// The value to render: the fresh result, or the retained one while a
    /// newer attempt is pending or has failed.
    pub fn result(&self) -> Option<&T> {
        match self {
            RequestState::Idle => None,
            RequestState::InFlight { prior } => prior.as_ref(),
            RequestState::Succeeded(value) => Some(value),
            RequestState::Failed { prior, .. } => prior.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            RequestState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Try to start a request. Returns `false` without touching the cell
    /// when one is already outstanding; the second submission is dropped,
    /// never queued. Otherwise moves to `InFlight`, clearing any error and
    /// carrying the current result forward.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        let prior = self.take_result();
        *self = RequestState::InFlight { prior };
        true
    }

    /// Resolve the outstanding request with a value. The new value replaces
    /// any retained one wholesale.
    pub fn succeed(&mut self, value: T) {
        *self = RequestState::Succeeded(value);
    }

    /// Resolve the outstanding request with a failure, keeping the retained
    /// result for display.
    pub fn fail(&mut self, error: E) {
        let prior = self.take_result();
        *self = RequestState::Failed { error, prior };
    }

    /// Resolve the outstanding request without recording an outcome: fall
    /// back to the retained result, or to `Idle` when there is none. Used
    /// for failures that must stay invisible (the news digest).
    pub fn abandon(&mut self) {
        *self = match self.take_result() {
            Some(value) => RequestState::Succeeded(value),
            None => RequestState::Idle,
        };
    }

    /// Clear the error banner. Does not cancel or retry anything; an
    /// in-flight request still writes its outcome when it completes.
    pub fn dismiss_error(&mut self) {
        if let RequestState::Failed { .. } = self {
            self.abandon();
        }
    }

    /// Drop everything back to `Idle`. Hook for invalidating a stale result
    /// when the inputs change.
    pub fn clear(&mut self) {
        *self = RequestState::Idle;
    }

    fn take_result(&mut self) -> Option<T> {
        match std::mem::replace(self, RequestState::Idle) {
            RequestState::Idle => None,
            RequestState::InFlight { prior } => prior,
            RequestState::Succeeded(value) => Some(value),
            RequestState::Failed { prior, .. } => prior,
        }
    }
}

/// User-facing category for a failed analysis request. Raw collaborator
/// errors never reach the cell; they are mapped to one of these first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// Upstream rate limiting. Recoverable by waiting and resubmitting.
    QuotaExceeded,
    /// Anything else: network, malformed response, unknown.
    ServiceUnavailable,
}

impl AnalysisFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisFailure::QuotaExceeded => {
                "Network capacity reached. Our systems are currently processing a high volume of requests. Please wait 10 seconds and try again."
            }
            AnalysisFailure::ServiceUnavailable => {
                "The analysis service is currently unavailable. Please verify your connection or try again later."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Cell = RequestState<u32, &'static str>;

    #[test]
    fn begin_is_rejected_while_in_flight() {
        let mut cell = Cell::Idle;
        assert!(cell.begin());

        let before = cell.clone();
        assert!(!cell.begin());
        assert_eq!(cell, before);
    }

    #[test]
    fn success_replaces_result_and_clears_error() {
        let mut cell = Cell::Idle;
        assert!(cell.begin());
        cell.succeed(7);
        assert_eq!(cell.result(), Some(&7));
        assert_eq!(cell.error(), None);

        assert!(cell.begin());
        cell.succeed(11);
        assert_eq!(cell.result(), Some(&11));
    }

    #[test]
    fn failure_keeps_the_previous_result() {
        let mut cell = Cell::Succeeded(7);
        assert!(cell.begin());
        cell.fail("boom");
        assert_eq!(cell.result(), Some(&7));
        assert_eq!(cell.error(), Some(&"boom"));
    }

    #[test]
    fn resubmission_clears_the_previous_error() {
        let mut cell = Cell::Idle;
        assert!(cell.begin());
        cell.fail("boom");
        assert!(cell.begin());
        assert_eq!(cell.error(), None);
        assert!(cell.is_in_flight());
    }

    #[test]
    fn dismissing_an_error_restores_the_retained_result() {
        let mut cell = Cell::Failed {
            error: "boom",
            prior: Some(3),
        };
        cell.dismiss_error();
        assert_eq!(cell, Cell::Succeeded(3));

        let mut empty = Cell::Failed {
            error: "boom",
            prior: None,
        };
        empty.dismiss_error();
        assert_eq!(empty, Cell::Idle);

        let mut in_flight = Cell::InFlight { prior: None };
        in_flight.dismiss_error();
        assert!(in_flight.is_in_flight());
    }

    #[test]
    fn abandon_hides_the_failure_entirely() {
        let mut cell = Cell::Succeeded(5);
        assert!(cell.begin());
        cell.abandon();
        assert_eq!(cell, Cell::Succeeded(5));

        let mut fresh = Cell::Idle;
        assert!(fresh.begin());
        fresh.abandon();
        assert_eq!(fresh, Cell::Idle);
    }

    #[test]
    fn clear_resets_to_idle() {
        let mut cell = Cell::Succeeded(9);
        cell.clear();
        assert_eq!(cell, Cell::Idle);
    }

    #[test]
    fn result_and_error_never_coexist_as_outcomes() {
        let mut cell = Cell::Idle;
        assert!(cell.begin());
        cell.succeed(1);
        assert!(cell.error().is_none());

        assert!(cell.begin());
        cell.fail("boom");
        // The retained value is display state, not a fresh outcome.
        assert!(matches!(cell, Cell::Failed { .. }));
    }
}
