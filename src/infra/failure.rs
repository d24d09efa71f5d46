//! Maps raw analysis-collaborator errors to the two user-facing failure
//! categories. Best-effort by construction: the service's error contract is
//! informal, so this inspects whatever fields and message text happen to be
//! there. A transient network error read as generic unavailability is
//! acceptable, not a defect.

use crate::domain::AnalysisFailure;

use super::gemini::GeminiError;

const QUOTA_STATUS: &str = "RESOURCE_EXHAUSTED";
const QUOTA_HTTP_CODE: u16 = 429;

/// Decide which of the two messages a failed analysis shows. Everything
/// that does not look like rate limiting falls back to the generic one.
pub fn classify_analysis_failure(error: &GeminiError) -> AnalysisFailure {
    if is_quota_exhaustion(error) {
        AnalysisFailure::QuotaExceeded
    } else {
        AnalysisFailure::ServiceUnavailable
    }
}

fn is_quota_exhaustion(error: &GeminiError) -> bool {
    if let GeminiError::Api { code, status, .. } = error {
        if *code == Some(QUOTA_HTTP_CODE) {
            return true;
        }
        if status.as_deref() == Some(QUOTA_STATUS) {
            return true;
        }
    }

    let rendered = error.to_string();
    rendered.contains("429") || rendered.contains(QUOTA_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_429_is_quota_exhaustion() {
        let error = GeminiError::Api {
            code: Some(429),
            status: None,
            message: "Too Many Requests".into(),
        };
        assert_eq!(classify_analysis_failure(&error), AnalysisFailure::QuotaExceeded);
    }

    #[test]
    fn resource_exhausted_status_is_quota_exhaustion() {
        let error = GeminiError::Api {
            code: None,
            status: Some("RESOURCE_EXHAUSTED".into()),
            message: "quota exceeded for this project".into(),
        };
        assert_eq!(classify_analysis_failure(&error), AnalysisFailure::QuotaExceeded);
    }

    #[test]
    fn a_429_token_in_the_message_is_enough() {
        let error = GeminiError::Api {
            code: None,
            status: None,
            message: "HTTP 429 Too Many Requests: backing off".into(),
        };
        assert_eq!(classify_analysis_failure(&error), AnalysisFailure::QuotaExceeded);
    }

    #[test]
    fn anything_else_is_service_unavailability() {
        let missing = GeminiError::MissingContent;
        assert_eq!(
            classify_analysis_failure(&missing),
            AnalysisFailure::ServiceUnavailable
        );

        let api = GeminiError::Api {
            code: Some(500),
            status: Some("INTERNAL".into()),
            message: "internal error".into(),
        };
        assert_eq!(classify_analysis_failure(&api), AnalysisFailure::ServiceUnavailable);
    }

    #[test]
    fn both_messages_stay_actionable() {
        assert!(AnalysisFailure::QuotaExceeded
            .user_message()
            .contains("wait 10 seconds"));
        assert!(AnalysisFailure::ServiceUnavailable
            .user_message()
            .contains("try again later"));
    }
}
