use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;

use crate::{
    domain::{
        AppState, CertificateLevel, CurrencyOptimization, ForecastTrend, LogisticsResult,
        RouteOption,
    },
    ui::components::DashboardWidget,
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let in_flight = state.with(|st| st.analysis.is_in_flight());
    let failure = state.with(|st| st.analysis.error().copied());
    let result = state.with(|st| st.analysis.result().cloned());
    let completed_at = state.with(|st| st.analysis_completed_at);

    rsx! {
        if let Some(failure) = failure {
            ErrorBanner { message: failure.user_message(), state: state.clone() }
        }

        if result.is_none() && !in_flight && failure.is_none() {
            div {
                class: "flex h-full flex-col items-center justify-center rounded-2xl border-2 border-dashed border-slate-700 bg-slate-900/40 p-12 text-center",
                span { class: "mb-6 text-4xl opacity-40", "📈" }
                h2 { class: "text-2xl font-semibold text-slate-300", "Ready to Analyze" }
                p { class: "mt-2 max-w-sm text-sm text-slate-500",
                    "Input your shipment parameters on the left to generate an AI-powered logistics strategy."
                }
            }
        }

        if in_flight {
            div { class: "space-y-6 animate-pulse",
                div { class: "h-40 rounded-xl bg-slate-800" }
                div { class: "grid grid-cols-2 gap-4",
                    div { class: "h-32 rounded-xl bg-slate-800" }
                    div { class: "h-32 rounded-xl bg-slate-800" }
                }
                div { class: "h-64 rounded-xl bg-slate-800" }
            }
        }

        if let Some(result) = result {
            ResultGrid { result, completed_at }
        }
    }
}

#[component]
fn ErrorBanner(message: &'static str, state: Signal<AppState>) -> Element {
    let on_dismiss = {
        let mut state = state;
        move |_| state.with_mut(|st| st.analysis.dismiss_error())
    };

    rsx! {
        div {
            class: "flex items-start gap-4 rounded-xl border border-rose-500/50 bg-rose-900/20 p-4",
            span { class: "text-xl", "⛔" }
            div { class: "flex-1",
                h4 { class: "text-sm font-semibold text-rose-200", "Processing Interruption" }
                p { class: "mt-1 text-xs leading-relaxed text-rose-300/80", "{message}" }
            }
            button {
                class: "text-xs uppercase tracking-wide text-rose-400 hover:text-rose-200",
                onclick: on_dismiss,
                "Dismiss"
            }
        }
    }
}

#[component]
fn ResultGrid(result: LogisticsResult, completed_at: Option<time::OffsetDateTime>) -> Element {
    let generated_label = completed_at
        .and_then(|at| at.format(&Rfc3339).ok())
        .map(|stamp| format!("Generated {stamp}"));

    rsx! {
        if let Some(label) = generated_label {
            p { class: "text-right text-[10px] uppercase tracking-widest text-slate-600", "{label}" }
        }

        div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
            ClassificationCard { result: result.clone() }
            CurrencyCard { optimization: result.currency_optimization.clone() }
        }

        div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
            RouteCard {
                title: "Air Priority",
                accent: "border-l-4 border-l-sky-500",
                option: result.flight_option.clone(),
            }
            RouteCard {
                title: "Sea Economic",
                accent: "border-l-4 border-l-emerald-500",
                option: result.sea_option.clone(),
            }
        }

        div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
            RoadmapCard { result: result.clone() }
            ContainerCard { result: result.clone() }
            ComplianceCard { result: result.clone() }
        }

        div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
            IncotermCard { result: result.clone() }
            ForecastCard { result }
        }
    }
}

#[component]
fn ClassificationCard(result: LogisticsResult) -> Element {
    let classification = result.classification;
    rsx! {
        DashboardWidget { title: "Product Classification",
            div { class: "space-y-4",
                div {
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Category" }
                    p { class: "text-3xl font-semibold leading-none tracking-tight text-white", "{classification.category}" }
                }
                div { class: "border-t border-slate-700/50 pt-3",
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Sub-Category" }
                    p { class: "text-xl font-semibold text-emerald-400", "{classification.sub_category}" }
                    if let Some(hint) = classification.hs_code_hint {
                        span {
                            class: "mt-3 inline-block rounded-md border border-slate-800 bg-slate-950 px-3 py-1 font-mono text-[10px] text-slate-400",
                            "HS HINT: {hint}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct PaymentRow {
    row_class: &'static str,
    currency: String,
    recommended: bool,
    total_cost: String,
    risk: String,
}

#[component]
fn CurrencyCard(optimization: CurrencyOptimization) -> Element {
    // The explicit "why" wins; fall back to the win/loss narrative.
    let reasoning = if optimization.reasoning.trim().is_empty() {
        optimization.analysis.clone()
    } else {
        optimization.reasoning.clone()
    };
    let base_value = format!("${:.0}", optimization.base_value_usd);
    let recommended = if optimization.recommendation.trim().is_empty() {
        optimization
            .recommended_option()
            .map(|option| option.currency.clone())
    } else {
        Some(optimization.recommendation.clone())
    };
    let payment_rows: Vec<PaymentRow> = optimization
        .payment_options
        .iter()
        .map(|option| PaymentRow {
            row_class: if option.is_recommended {
                "border-b border-slate-800/50 bg-emerald-900/20 last:border-0"
            } else {
                "border-b border-slate-800/50 last:border-0"
            },
            currency: option.currency.clone(),
            recommended: option.is_recommended,
            total_cost: format!("{:.0}", option.total_cost),
            risk: option.exchange_rate_risk.clone(),
        })
        .collect();

    rsx! {
        DashboardWidget { title: "Currency Strategy & Valuation",
            div { class: "space-y-3",
                div { class: "flex items-start justify-between",
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Base Value (USD)" }
                    p { class: "text-2xl font-semibold text-white", "{base_value}" }
                }

                table { class: "w-full text-left text-xs",
                    thead {
                        tr { class: "border-b border-slate-800 text-slate-500",
                            th { class: "pb-1 pl-1", "Currency" }
                            th { class: "pb-1", "Total Cost" }
                            th { class: "pb-1 text-right", "Risk" }
                        }
                    }
                    tbody {
                        for row in payment_rows {
                            tr {
                                class: "{row.row_class}",
                                td { class: "py-2 pl-1 font-semibold text-slate-300",
                                    "{row.currency}"
                                    if row.recommended {
                                        span { class: "ml-1 rounded bg-emerald-600 px-1 text-[8px] font-bold text-white", "BEST" }
                                    }
                                }
                                td { class: "py-2 font-mono text-slate-300", "{row.total_cost}" }
                                td { class: "py-2 text-right text-slate-400", "{row.risk}" }
                            }
                        }
                    }
                }

                div { class: "rounded-lg border border-sky-500/20 bg-sky-900/10 p-3",
                    p { class: "text-[9px] font-semibold uppercase text-sky-400", "Why this recommendation?" }
                    if let Some(currency) = recommended {
                        p { class: "mt-1 text-[11px] font-semibold text-slate-200", "Settle in {currency}" }
                    }
                    p { class: "mt-1 text-[11px] leading-snug text-slate-300", "{reasoning}" }
                }

                p { class: "text-[11px] text-slate-500", "{optimization.savings_potential}" }
            }
        }
    }
}

#[component]
fn RouteCard(title: &'static str, accent: &'static str, option: RouteOption) -> Element {
    let days = format!("{:.0} Days", option.estimated_days);
    let cost = format!("${:.0}", option.estimated_cost);
    let ports = option.ports.join(" → ");

    rsx! {
        DashboardWidget { title, accent,
            div { class: "mb-4 flex items-end justify-between",
                div {
                    p { class: "text-3xl font-semibold text-white", "{days}" }
                    p { class: "text-xs uppercase tracking-tight text-slate-500", "Factory to Door" }
                }
                p { class: "text-xl font-semibold text-emerald-400", "{cost}" }
            }
            p { class: "text-xs text-slate-400", "{option.method} · {option.route}" }
            if !ports.is_empty() {
                p { class: "mt-1 font-mono text-[10px] text-slate-500", "{ports}" }
            }
            JourneyTimeline { option }
        }
    }
}

#[derive(Clone, PartialEq)]
struct LegView {
    dot_class: &'static str,
    label: String,
    cost: String,
    where_and_kind: String,
    days: String,
}

#[component]
fn JourneyTimeline(option: RouteOption) -> Element {
    let totals = format!(
        "Legs: ${:.0} over {:.0}d",
        option.leg_cost_total(),
        option.leg_days_total()
    );
    let last = option.legs.len().saturating_sub(1);
    let legs: Vec<LegView> = option
        .legs
        .iter()
        .enumerate()
        .map(|(index, leg)| LegView {
            dot_class: if index == 0 {
                "h-2 w-2 rounded-full bg-emerald-400"
            } else if index == last {
                "h-2 w-2 rounded-full bg-sky-400"
            } else {
                "h-2 w-2 rounded-full bg-slate-600"
            },
            label: leg.label.clone(),
            cost: format!("${:.0}", leg.cost),
            where_and_kind: format!("{} · {:?}", leg.location, leg.kind),
            days: format!("{:.0}d", leg.duration_days),
        })
        .collect();

    rsx! {
        div { class: "mt-4 space-y-2",
            div { class: "flex items-center justify-between",
                p { class: "text-[10px] font-semibold uppercase tracking-widest text-slate-500", "Journey Breakdown" }
                p { class: "font-mono text-[9px] text-slate-600", "{totals}" }
            }
            for leg in legs {
                div {
                    class: "flex items-center gap-3 rounded border border-slate-800/50 bg-slate-900/30 p-2",
                    div { class: "{leg.dot_class}" }
                    div { class: "flex-1",
                        div { class: "flex items-center justify-between",
                            span { class: "text-[11px] font-semibold text-slate-300", "{leg.label}" }
                            span { class: "font-mono text-[10px] text-emerald-400", "{leg.cost}" }
                        }
                        div { class: "flex items-center justify-between text-[9px] text-slate-500",
                            span { "{leg.where_and_kind}" }
                            span { "{leg.days}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoadmapCard(result: LogisticsResult) -> Element {
    let steps: Vec<_> = result.roadmap_preview().to_vec();
    rsx! {
        DashboardWidget { title: "Import Roadmap",
            div { class: "space-y-3",
                for (index, step) in steps.into_iter().enumerate() {
                    div {
                        class: "flex gap-2 border-b border-slate-800/50 pb-2 text-[11px] leading-snug text-slate-300 last:border-0 last:pb-0",
                        div {
                            class: "mt-0.5 flex h-4 min-w-4 items-center justify-center rounded-full bg-emerald-900/50 text-[8px] font-bold text-emerald-400",
                            {format!("{}", index + 1)}
                        }
                        div { class: "flex-1",
                            div { class: "flex items-start justify-between",
                                span { class: "font-semibold text-slate-200", "{step.step}" }
                                if step.estimated_cost > 0.0 {
                                    span {
                                        class: "rounded border border-emerald-900/50 bg-emerald-900/20 px-1 font-mono text-[9px] text-emerald-400",
                                        {format!("${:.0}", step.estimated_cost)}
                                    }
                                }
                            }
                            p { class: "text-[9px] text-slate-500", "{step.detail}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContainerCard(result: LogisticsResult) -> Element {
    let recommendation = result.container_recommendation;
    let fill = recommendation.utilization_clamped();
    let fill_label = format!("{fill:.0}% Full");
    let fill_style = format!("width: {fill:.0}%");

    rsx! {
        DashboardWidget { title: "Container Utilization",
            div { class: "flex h-full flex-col gap-4",
                p { class: "text-xs font-semibold text-slate-300", "{recommendation.container}" }
                div { class: "rounded-lg border border-slate-700 bg-slate-900/50 p-2",
                    div { class: "h-4 w-full overflow-hidden rounded bg-slate-950",
                        div {
                            class: "h-full rounded bg-gradient-to-r from-emerald-900 to-emerald-500",
                            style: "{fill_style}",
                        }
                    }
                    p { class: "mt-1 text-center text-[10px] font-semibold text-emerald-400", "{fill_label}" }
                }
                p { class: "text-[10px] text-slate-500", "{recommendation.reason}" }
                div { class: "flex-1 rounded bg-slate-900/30 p-2 text-[10px] text-slate-400",
                    p { class: "mb-1 font-semibold text-slate-300", "Loading Advice:" }
                    "{recommendation.nature_of_goods_advice}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct CertificateView {
    name: String,
    badge_class: &'static str,
    badge: &'static str,
    description: String,
    authority: String,
}

#[component]
fn ComplianceCard(result: LogisticsResult) -> Element {
    let certificates: Vec<CertificateView> = result
        .mandatory_certificates
        .iter()
        .map(|certificate| {
            let (badge_class, badge) = match certificate.level {
                CertificateLevel::Mandatory => (
                    "rounded border border-rose-900 bg-rose-900/40 px-1.5 py-0.5 text-[8px] font-bold uppercase text-rose-400",
                    "Mandatory",
                ),
                CertificateLevel::Recommended => (
                    "rounded border border-sky-900 bg-sky-900/40 px-1.5 py-0.5 text-[8px] font-bold uppercase text-sky-400",
                    "Recommended",
                ),
            };
            CertificateView {
                name: certificate.certificate.clone(),
                badge_class,
                badge,
                description: certificate.description.clone(),
                authority: certificate.authority.clone(),
            }
        })
        .collect();

    rsx! {
        DashboardWidget { title: "Compliance Alert",
            div { class: "space-y-3",
                for certificate in certificates {
                    div {
                        class: "rounded border border-slate-800 bg-slate-900/30 p-2 text-[10px]",
                        div { class: "mb-1 flex items-center justify-between",
                            span { class: "font-semibold text-slate-200", "{certificate.name}" }
                            span { class: "{certificate.badge_class}", "{certificate.badge}" }
                        }
                        p { class: "mb-1 text-slate-500", "{certificate.description}" }
                        p { class: "font-mono text-[9px] text-slate-600", "Auth: {certificate.authority}" }
                    }
                }
            }
        }
    }
}

#[component]
fn IncotermCard(result: LogisticsResult) -> Element {
    let analysis = result.incoterm_analysis;
    let total = format!("${:.0}", analysis.total_estimated_fees);
    rsx! {
        DashboardWidget { title: "Incoterm Fee Exposure",
            div { class: "space-y-3",
                div { class: "flex items-start justify-between",
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Total Estimated Fees" }
                    p { class: "text-2xl font-semibold text-white", "{total}" }
                }
                p { class: "text-xs leading-relaxed text-slate-400", "{analysis.description}" }
                div { class: "space-y-1",
                    for line in analysis.breakdown {
                        div { class: "flex items-center justify-between border-b border-slate-800/50 py-1 text-[11px] last:border-0",
                            span { class: "text-slate-300", "{line.label}" }
                            span { class: "font-mono text-slate-400", {format!("${:.0}", line.amount)} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ForecastCard(result: LogisticsResult) -> Element {
    let forecast = result.forecasting;
    let (trend_label, trend_class) = match forecast.trend {
        ForecastTrend::Rising => ("▲ Rising", "text-rose-400"),
        ForecastTrend::Falling => ("▼ Falling", "text-emerald-400"),
        ForecastTrend::Stable => ("◆ Stable", "text-sky-400"),
    };
    let peak = result
        .historical_price_data
        .iter()
        .map(|point| point.price)
        .fold(0.0_f64, f64::max);
    let bars: Vec<(String, String)> = result
        .historical_price_data
        .iter()
        .map(|point| {
            let height = if peak > 0.0 {
                (point.price / peak * 100.0).clamp(4.0, 100.0)
            } else {
                4.0
            };
            (point.month.clone(), format!("height: {height:.0}%"))
        })
        .collect();

    rsx! {
        DashboardWidget { title: "Rate Forecast & History",
            div { class: "space-y-3",
                p { class: "text-lg font-semibold {trend_class}", "{trend_label}" }
                p { class: "text-xs leading-relaxed text-slate-400", "{forecast.explanation}" }
                p { class: "text-[11px] text-slate-300",
                    span { class: "font-semibold uppercase tracking-wide text-slate-500", "Best window: " }
                    "{forecast.best_time_to_ship}"
                }
                if !bars.is_empty() {
                    div { class: "flex h-24 items-end gap-1 rounded border border-slate-800/50 bg-slate-900/30 p-2",
                        for (month, bar_style) in bars {
                            div { class: "flex flex-1 flex-col items-center gap-1",
                                div {
                                    class: "w-full rounded-t bg-sky-500/60",
                                    style: "{bar_style}",
                                }
                                span { class: "text-[8px] text-slate-500", "{month}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
