//! Routing for the manual vessel/container lookup on the fleet panel.
//!
//! Decides which external tracking site an identifier belongs to. Opening
//! the URL in a new browsing context is the caller's job; nothing here does
//! I/O and no response is ever consumed.

use url::Url;

const CONTAINER_TRACKING_BASE: &str = "https://www.track-trace.com/container/";
const VESSEL_TRACKING_BASE: &str = "https://www.vesselfinder.com/vessels";

/// Which external tracking service handles an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingLookup {
    /// ISO 6346 container code: four letters, owner/equipment prefix, then
    /// a seven-digit serial + check digit.
    Container,
    /// Anything else is treated as a vessel name or IMO query.
    Vessel,
}

/// Classify a free-text identifier. Empty (or all-whitespace) input yields
/// `None`: no lookup may be issued. Matching is case-insensitive.
pub fn classify(identifier: &str) -> Option<TrackingLookup> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_container_code(&trimmed.to_uppercase()) {
        Some(TrackingLookup::Container)
    } else {
        Some(TrackingLookup::Vessel)
    }
}

/// Build the outbound tracking URL for an identifier, or `None` for empty
/// input. Container codes are embedded in the path; vessel queries are
/// URL-encoded as a name parameter.
pub fn lookup_url(identifier: &str) -> Option<Url> {
    let trimmed = identifier.trim();
    match classify(trimmed)? {
        TrackingLookup::Container => {
            let mut url = Url::parse(CONTAINER_TRACKING_BASE).ok()?;
            // A container-shaped id is plain ASCII alphanumerics, safe as a
            // path segment.
            url.path_segments_mut().ok()?.pop_if_empty().push(trimmed);
            Some(url)
        }
        TrackingLookup::Vessel => {
            let mut url = Url::parse(VESSEL_TRACKING_BASE).ok()?;
            url.query_pairs_mut().append_pair("name", trimmed);
            Some(url)
        }
    }
}

/// Uppercased input against the ISO container shape: exactly four ASCII
/// letters followed by exactly seven ASCII digits.
fn is_container_code(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(u8::is_ascii_uppercase)
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_shaped_ids_route_to_the_container_tracker() {
        assert_eq!(classify("MSCU1234567"), Some(TrackingLookup::Container));
        assert_eq!(classify("mscu1234567"), Some(TrackingLookup::Container));
        assert_eq!(classify("  TGHU9876543  "), Some(TrackingLookup::Container));
    }

    #[test]
    fn everything_else_routes_to_the_vessel_tracker() {
        assert_eq!(classify("EVER GIVEN"), Some(TrackingLookup::Vessel));
        assert_eq!(classify("9811000"), Some(TrackingLookup::Vessel));
        // Wrong digit count for a container code.
        assert_eq!(classify("MSCU123456"), Some(TrackingLookup::Vessel));
        assert_eq!(classify("MSCU12345678"), Some(TrackingLookup::Vessel));
        // Digit in the prefix block.
        assert_eq!(classify("MS1U1234567"), Some(TrackingLookup::Vessel));
    }

    #[test]
    fn empty_input_never_selects_a_lookup() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(lookup_url(""), None);
    }

    #[test]
    fn classification_is_idempotent() {
        for id in ["MSCU1234567", "EVER GIVEN", "x"] {
            assert_eq!(classify(id), classify(id));
        }
    }

    #[test]
    fn container_url_embeds_the_identifier_in_the_path() {
        let url = lookup_url("MSCU1234567").expect("container id should produce a URL");
        assert_eq!(
            url.as_str(),
            "https://www.track-trace.com/container/MSCU1234567"
        );
    }

    #[test]
    fn vessel_url_encodes_the_identifier_as_a_name_query() {
        let url = lookup_url("EVER GIVEN").expect("vessel name should produce a URL");
        assert_eq!(
            url.as_str(),
            "https://www.vesselfinder.com/vessels?name=EVER+GIVEN"
        );
    }

    #[test]
    fn non_ascii_input_is_a_vessel_query() {
        assert_eq!(classify("Ñandú"), Some(TrackingLookup::Vessel));
        let url = lookup_url("Ñandú").expect("vessel name should produce a URL");
        assert!(url.query().unwrap_or_default().starts_with("name=%C3%91"));
    }
}
