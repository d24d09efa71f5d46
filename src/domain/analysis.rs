//! Typed model of the analysis and news payloads returned by the reasoning
//! service. Decoded straight from the service's camelCase JSON; each record
//! is owned by the result that contains it.

use serde::{Deserialize, Serialize};

/// Import roadmaps can run long; summary views only surface the first steps.
pub const ROADMAP_PREVIEW_STEPS: usize = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: String,
    pub sub_category: String,
    /// Harmonized System tariff hint, when the service ventures one.
    #[serde(default)]
    pub hs_code_hint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegKind {
    Inland,
    Freight,
    Customs,
    Delivery,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub label: String,
    pub location: String,
    pub duration_days: f64,
    pub cost: f64,
    #[serde(rename = "type")]
    pub kind: LegKind,
}

/// One freight option (air or sea) with its ordered journey breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub method: String,
    pub route: String,
    pub estimated_days: f64,
    pub estimated_cost: f64,
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

impl RouteOption {
    /// Sum of the per-leg costs. Advisory: the service aims for this to
    /// roughly match `estimated_cost` but nothing enforces it.
    pub fn leg_cost_total(&self) -> f64 {
        self.legs.iter().map(|leg| leg.cost).sum()
    }

    pub fn leg_days_total(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration_days).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLine {
    pub label: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncotermAnalysis {
    pub description: String,
    pub total_estimated_fees: f64,
    #[serde(default)]
    pub breakdown: Vec<FeeLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRecommendation {
    #[serde(rename = "type")]
    pub container: String,
    pub reason: String,
    pub utilization_percent: f64,
    pub nature_of_goods_advice: String,
}

impl ContainerRecommendation {
    /// Utilization for display; the service is asked for 0-100 but the
    /// meter should not overflow if it strays.
    pub fn utilization_clamped(&self) -> f64 {
        self.utilization_percent.clamp(0.0, 100.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub currency: String,
    pub total_cost: f64,
    pub is_recommended: bool,
    pub exchange_rate_risk: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyOptimization {
    pub recommendation: String,
    #[serde(default)]
    pub payment_options: Vec<PaymentOption>,
    pub savings_potential: String,
    /// Win/loss narrative across the candidate currencies.
    pub analysis: String,
    /// Explicit "why" behind the recommendation.
    pub reasoning: String,
    #[serde(rename = "baseValueUSD")]
    pub base_value_usd: f64,
}

impl CurrencyOptimization {
    /// At most one option should be flagged; the first flagged row wins if
    /// the service marks several.
    pub fn recommended_option(&self) -> Option<&PaymentOption> {
        self.payment_options.iter().find(|option| option.is_recommended)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStep {
    pub step: String,
    pub detail: String,
    pub estimated_cost: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateLevel {
    Mandatory,
    Recommended,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequirement {
    pub certificate: String,
    pub description: String,
    pub level: CertificateLevel,
    pub authority: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub trend: ForecastTrend,
    pub explanation: String,
    pub best_time_to_ship: String,
}

/// One point of the chronological freight-rate series. Ordering is as
/// delivered and must be preserved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPrice {
    pub month: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveLocalization {
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub last_updated: String,
}

impl LiveLocalization {
    /// The service occasionally drifts out of range; the fleet readout
    /// clamps rather than discarding the whole result.
    pub fn clamped_latitude(&self) -> f64 {
        self.latitude.clamp(-90.0, 90.0)
    }

    pub fn clamped_longitude(&self) -> f64 {
        self.longitude.clamp(-180.0, 180.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    pub air_tracking_id: String,
    pub sea_tracking_id: String,
    pub live_localization: LiveLocalization,
}

/// Full analysis for one submitted shipment. Replaces any prior analysis
/// wholesale; nothing is merged across requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsResult {
    pub classification: Classification,
    pub flight_option: RouteOption,
    pub sea_option: RouteOption,
    pub incoterm_analysis: IncotermAnalysis,
    pub container_recommendation: ContainerRecommendation,
    pub currency_optimization: CurrencyOptimization,
    #[serde(default)]
    pub import_steps: Vec<ImportStep>,
    #[serde(default)]
    pub mandatory_certificates: Vec<CertificateRequirement>,
    pub forecasting: Forecast,
    #[serde(default)]
    pub historical_price_data: Vec<MonthlyPrice>,
    pub tracking_data: TrackingData,
}

impl LogisticsResult {
    /// First steps of the import roadmap for the dashboard card; the full
    /// list stays available on the result.
    pub fn roadmap_preview(&self) -> &[ImportStep] {
        let end = self.import_steps.len().min(ROADMAP_PREVIEW_STEPS);
        &self.import_steps[..end]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub headline: String,
    pub summary: String,
    pub shipping_impact: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub title: String,
    pub uri: String,
}

/// Digest of current shipping headlines plus the citations the grounding
/// search surfaced for them.
#[derive(Clone, Debug, PartialEq)]
pub struct NewsDigest {
    pub items: Vec<NewsItem>,
    pub sources: Vec<NewsSource>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn step(label: &str) -> ImportStep {
        ImportStep {
            step: label.to_string(),
            detail: String::new(),
            estimated_cost: 0.0,
        }
    }

    #[test]
    fn roadmap_preview_caps_at_six_steps() {
        let mut result = sample_result();
        result.import_steps = (0..9).map(|i| step(&format!("step {i}"))).collect();
        assert_eq!(result.roadmap_preview().len(), 6);
        assert_eq!(result.roadmap_preview()[0].step, "step 0");
        assert_eq!(result.import_steps.len(), 9);

        result.import_steps.truncate(3);
        assert_eq!(result.roadmap_preview().len(), 3);
    }

    #[test]
    fn localization_clamps_out_of_range_coordinates() {
        let loc = LiveLocalization {
            latitude: 97.2,
            longitude: -191.0,
            status: "In transit".into(),
            last_updated: "2024-06-01 08:00 UTC".into(),
        };
        assert_eq!(loc.clamped_latitude(), 90.0);
        assert_eq!(loc.clamped_longitude(), -180.0);
    }

    #[test]
    fn first_flagged_payment_option_is_recommended() {
        let optimization = CurrencyOptimization {
            recommendation: "EUR".into(),
            payment_options: vec![
                PaymentOption {
                    currency: "USD".into(),
                    total_cost: 44_100.0,
                    is_recommended: false,
                    exchange_rate_risk: "Medium".into(),
                },
                PaymentOption {
                    currency: "EUR".into(),
                    total_cost: 40_800.0,
                    is_recommended: true,
                    exchange_rate_risk: "Low".into(),
                },
            ],
            savings_potential: String::new(),
            analysis: String::new(),
            reasoning: String::new(),
            base_value_usd: 42_000.0,
        };
        assert_eq!(
            optimization.recommended_option().map(|o| o.currency.as_str()),
            Some("EUR")
        );
    }

    #[test]
    fn decodes_service_payload() {
        let decoded: LogisticsResult =
            serde_json::from_str(SAMPLE_PAYLOAD).expect("payload should decode");
        assert_eq!(decoded.classification.category, "Construction Materials");
        assert_eq!(decoded.classification.hs_code_hint.as_deref(), Some("6907.21"));
        assert_eq!(decoded.flight_option.legs.len(), 2);
        assert_eq!(decoded.flight_option.legs[1].kind, LegKind::Customs);
        assert_eq!(decoded.forecasting.trend, ForecastTrend::Stable);
        assert_eq!(decoded.mandatory_certificates[0].level, CertificateLevel::Mandatory);
        assert_eq!(decoded.historical_price_data[0].month, "Jan");
        assert!((decoded.currency_optimization.base_value_usd - 42000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn leg_totals_roughly_track_parent_estimates() {
        let result = sample_result();
        let option = &result.flight_option;
        assert!((option.leg_cost_total() - 5200.0).abs() < f64::EPSILON);
        assert!((option.leg_days_total() - 5.0).abs() < f64::EPSILON);
    }

    pub(crate) fn sample_result() -> LogisticsResult {
        serde_json::from_str(SAMPLE_PAYLOAD).expect("sample payload should decode")
    }

    const SAMPLE_PAYLOAD: &str = r#"{
        "classification": {
            "category": "Construction Materials",
            "subCategory": "Ceramic Tiles",
            "hsCodeHint": "6907.21"
        },
        "flightOption": {
            "method": "Air Freight",
            "route": "Guangzhou > Istanbul > Pristina",
            "estimatedDays": 5,
            "estimatedCost": 5400,
            "ports": ["CAN", "IST", "PRN"],
            "legs": [
                {"label": "Factory pickup", "location": "Guangzhou", "durationDays": 1, "cost": 400, "type": "Inland"},
                {"label": "Customs clearance", "location": "Pristina", "durationDays": 4, "cost": 4800, "type": "Customs"}
            ]
        },
        "seaOption": {
            "method": "Sea Freight (FCL)",
            "route": "Shenzhen > Durres > Pristina",
            "estimatedDays": 38,
            "estimatedCost": 2650,
            "ports": ["Shenzhen", "Durres"],
            "legs": [
                {"label": "Ocean leg", "location": "Shenzhen", "durationDays": 32, "cost": 1900, "type": "Freight"},
                {"label": "Final delivery", "location": "Pristina", "durationDays": 6, "cost": 750, "type": "Delivery"}
            ]
        },
        "incotermAnalysis": {
            "description": "Under FOB the buyer owns the main carriage and import side.",
            "totalEstimatedFees": 3120,
            "breakdown": [
                {"label": "Ocean freight", "amount": 1900},
                {"label": "Import VAT deposit", "amount": 1220}
            ]
        },
        "containerRecommendation": {
            "type": "20ft General Purpose",
            "reason": "Weight-bound cargo; volume fits a single TEU.",
            "utilizationPercent": 84,
            "natureOfGoodsAdvice": "Palletize and brace; tiles crack under point loads."
        },
        "currencyOptimization": {
            "recommendation": "EUR",
            "paymentOptions": [
                {"currency": "USD", "totalCost": 44100, "isRecommended": false, "exchangeRateRisk": "Medium"},
                {"currency": "EUR", "totalCost": 40800, "isRecommended": true, "exchangeRateRisk": "Low"}
            ],
            "savingsPotential": "Roughly 3% against invoicing in USD.",
            "analysis": "EUR settlement avoids a double conversion.",
            "reasoning": "The destination market clears in EUR.",
            "baseValueUSD": 42000
        },
        "importSteps": [
            {"step": "Confirm supplier invoice", "detail": "Match HS code and Incoterm.", "estimatedCost": 0},
            {"step": "Book freight", "detail": "Lock the sailing two weeks out.", "estimatedCost": 1900}
        ],
        "mandatoryCertificates": [
            {"certificate": "CE Marking", "description": "Required for tiles entering CEFTA markets.", "level": "Mandatory", "authority": "Notified Body"},
            {"certificate": "ISO 13006", "description": "Quality classification for ceramic tiles.", "level": "Recommended", "authority": "ISO"}
        ],
        "forecasting": {
            "trend": "stable",
            "explanation": "Rates flat outside peak season.",
            "bestTimeToShip": "Late February"
        },
        "historicalPriceData": [
            {"month": "Jan", "price": 2480},
            {"month": "Feb", "price": 2510},
            {"month": "Mar", "price": 2650}
        ],
        "trackingData": {
            "airTrackingId": "172-33456789",
            "seaTrackingId": "MSCU1234567",
            "liveLocalization": {
                "latitude": 36.1,
                "longitude": 129.4,
                "status": "In transit - East China Sea",
                "lastUpdated": "2024-06-01 08:00 UTC"
            }
        }
    }"#;
}
