use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, ShipmentData},
    infra::{failure::classify_analysis_failure, gemini::GeminiClient},
    ui::{
        pages::{DashboardPage, FleetPage, NewsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/fleet")]
    Fleet {},
    #[route("/news")]
    News {},
}

/// Why a news fetch was queued; only changes what gets logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsTrigger {
    PanelEntry,
    ManualRefresh,
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    // Request triggers shared across routes. Each fetch resource watches
    // its own signal; the in-flight guard lives on the state cell.
    let analysis_request = use_signal(|| None::<ShipmentData>);
    use_context_provider(|| analysis_request.clone());

    let news_request = use_signal(|| None::<NewsTrigger>);
    use_context_provider(|| news_request.clone());

    let _analysis = use_resource({
        let state = state.clone();
        let analysis_request = analysis_request.clone();
        move || async move { run_analysis(state.clone(), analysis_request.clone()).await }
    });

    let _news = use_resource({
        let state = state.clone();
        let news_request = news_request.clone();
        move || async move { run_news_fetch(state.clone(), news_request.clone()).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
    }
}

/// Queue an analysis run for a submitted shipment. A second submission
/// while one is outstanding is dropped here, before anything is issued;
/// the form also disables its submit control while the cell is in flight.
pub fn request_analysis(
    state: Signal<AppState>,
    mut analysis_request: Signal<Option<ShipmentData>>,
    shipment: ShipmentData,
) {
    let mut state = state;
    let accepted = state.with_mut(|st| st.analysis.begin());
    if !accepted {
        println!("[analysis] request already in flight; dropping resubmission");
        return;
    }
    println!(
        "[analysis] queueing analysis for \"{}\" from {}",
        shipment.product_description, shipment.factory_location
    );
    analysis_request.set(Some(shipment));
}

/// Queue a news fetch. Panel entry defers to the cached digest; a manual
/// refresh does not. Both respect the one-outstanding-request cap.
pub fn request_news_fetch(
    state: Signal<AppState>,
    mut news_request: Signal<Option<NewsTrigger>>,
    trigger: NewsTrigger,
) {
    let mut state = state;
    let accepted = state.with_mut(|st| match trigger {
        NewsTrigger::PanelEntry => st.enter_news(),
        NewsTrigger::ManualRefresh => st.refresh_news(),
    });
    if !accepted {
        println!("[news] digest cached or fetch already in flight; skipping");
        return;
    }
    println!("[news] queueing digest fetch ({trigger:?})");
    news_request.set(Some(trigger));
}

async fn run_analysis(
    mut state: Signal<AppState>,
    mut analysis_request: Signal<Option<ShipmentData>>,
) {
    let Some(shipment) = analysis_request() else {
        return;
    };

    let client = match GeminiClient::new() {
        Ok(client) => client,
        Err(err) => {
            println!("[analysis] failed to initialise analysis client: {err}");
            let failure = classify_analysis_failure(&err);
            analysis_request.set(None);
            state.with_mut(|st| st.analysis.fail(failure));
            return;
        }
    };

    match client.analyze(&shipment).await {
        Ok(result) => {
            analysis_request.set(None);
            println!(
                "[analysis] received analysis: {} / {}",
                result.classification.category, result.classification.sub_category
            );
            state.with_mut(|st| {
                st.analysis.succeed(result);
                st.analysis_completed_at = Some(time::OffsetDateTime::now_utc());
            });
        }
        Err(err) => {
            analysis_request.set(None);
            println!("[analysis] request failed: {err}");
            let failure = classify_analysis_failure(&err);
            state.with_mut(|st| st.analysis.fail(failure));
        }
    }
}

async fn run_news_fetch(
    mut state: Signal<AppState>,
    mut news_request: Signal<Option<NewsTrigger>>,
) {
    let Some(trigger) = news_request() else {
        return;
    };

    let client = match GeminiClient::new() {
        Ok(client) => client,
        Err(err) => {
            // News failures are diagnostics only; the panel keeps its
            // empty/cached state and manual refresh stays available.
            println!("[news] failed to initialise news client: {err}");
            news_request.set(None);
            state.with_mut(|st| st.news.abandon());
            return;
        }
    };

    match client.fetch_shipping_news().await {
        Ok(digest) => {
            news_request.set(None);
            println!(
                "[news] received digest: {} items, {} sources ({trigger:?})",
                digest.items.len(),
                digest.sources.len()
            );
            state.with_mut(|st| st.news.succeed(digest));
        }
        Err(err) => {
            news_request.set(None);
            println!("[news] digest fetch failed: {err}");
            state.with_mut(|st| st.news.abandon());
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Fleet() -> Element {
    rsx! { Shell { FleetPage {} } }
}

#[component]
pub fn News() -> Element {
    rsx! { Shell { NewsPage {} } }
}
