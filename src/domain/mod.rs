//! Domain logic for shipment-plan evaluation lives here.

pub mod analysis;
pub mod app_state;
pub mod request;
pub mod shipment;
pub mod tracking;

#[allow(unused_imports)]
pub use analysis::{
    CertificateLevel, CertificateRequirement, Classification, ContainerRecommendation,
    CurrencyOptimization, FeeLine, Forecast, ForecastTrend, ImportStep, IncotermAnalysis,
    LegKind, LiveLocalization, LogisticsResult, MonthlyPrice, NewsDigest, NewsItem, NewsSource,
    PaymentOption, RouteLeg, RouteOption, TrackingData, ROADMAP_PREVIEW_STEPS,
};
#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use request::{AnalysisFailure, RequestState};
#[allow(unused_imports)]
pub use shipment::{ContainerType, Currency, Incoterm, ShipmentData, ShippingMode};
#[allow(unused_imports)]
pub use tracking::{classify, lookup_url, TrackingLookup};
