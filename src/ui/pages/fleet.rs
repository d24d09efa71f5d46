use dioxus::{document, prelude::*};

use crate::{
    domain::{tracking, AppState, TrackingData},
    ui::components::DashboardWidget,
};

#[component]
pub fn FleetPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let tracking_data = state.with(|st| st.fleet_tracking().cloned());

    rsx! {
        DashboardWidget { title: "Live Fleet Monitor",
            if let Some(data) = tracking_data {
                TelemetryPanel { data }
            } else {
                div {
                    class: "flex h-[320px] flex-col items-center justify-center gap-4 text-slate-600",
                    span { class: "text-4xl opacity-20", "🌐" }
                    "Run an analysis to activate fleet tracking."
                }
            }
        }
    }
}

#[component]
fn TelemetryPanel(data: TrackingData) -> Element {
    let localization = data.live_localization.clone();
    let latitude = format!("LAT: {:.4}", localization.clamped_latitude());
    let longitude = format!("LNG: {:.4}", localization.clamped_longitude());

    rsx! {
        div { class: "space-y-6",
            div { class: "rounded-2xl border border-slate-800 bg-slate-950 p-4",
                p { class: "text-[10px] font-semibold uppercase tracking-widest text-slate-500", "Global Telemetry" }
                div { class: "mt-2 flex items-center gap-2 font-mono text-xs text-white",
                    span { class: "h-2 w-2 animate-ping rounded-full bg-emerald-500" }
                    "{localization.status}"
                }
                p { class: "mt-2 text-[9px] font-semibold text-slate-500", "{latitude}" }
                p { class: "text-[9px] font-semibold text-slate-500", "{longitude}" }
                p { class: "mt-2 text-[9px] text-slate-600", "Updated: {localization.last_updated}" }
            }

            div { class: "grid grid-cols-1 gap-3 md:grid-cols-2",
                div { class: "rounded-lg border border-slate-800 bg-slate-900/40 p-3",
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Air Waybill" }
                    p { class: "mt-1 font-mono text-sm text-slate-200", "{data.air_tracking_id}" }
                }
                div { class: "rounded-lg border border-slate-800 bg-slate-900/40 p-3",
                    p { class: "text-[10px] uppercase tracking-widest text-slate-500", "Sea Container" }
                    p { class: "mt-1 font-mono text-sm text-slate-200", "{data.sea_tracking_id}" }
                }
            }

            LookupControls {}
        }
    }
}

/// Manual vessel/container lookup. The classifier decides which tracking
/// site handles the identifier; empty input does nothing.
#[component]
fn LookupControls() -> Element {
    let lookup_id = use_signal(String::new);

    let on_search = {
        let lookup_id = lookup_id.clone();
        move |_| open_tracking_page(&lookup_id())
    };
    let on_input = {
        let mut lookup_id = lookup_id.clone();
        move |evt: FormEvent| lookup_id.set(evt.value())
    };

    rsx! {
        div {
            label {
                class: "mb-2 block text-[10px] font-semibold uppercase tracking-widest text-slate-500",
                "Vessel / Container Lookup"
            }
            div { class: "flex gap-2",
                input {
                    class: "flex-1 rounded-lg border border-slate-700 bg-slate-900 p-3 text-sm text-white",
                    r#type: "text",
                    placeholder: "IMO Number or Container ID (e.g. MSCU1234567)",
                    value: lookup_id(),
                    oninput: on_input,
                }
                button {
                    class: "rounded-lg bg-sky-600 px-8 text-xs font-semibold uppercase text-white hover:bg-sky-500",
                    onclick: on_search,
                    "Search"
                }
            }
        }
    }
}

/// Open the matching tracking site in a new browsing context. The built
/// URL is fully percent-encoded, so it is safe to splice into the script.
fn open_tracking_page(identifier: &str) {
    let Some(url) = tracking::lookup_url(identifier) else {
        println!("[tracking] empty identifier; nothing to open");
        return;
    };
    println!("[tracking] opening {url}");
    let eval = document::eval(&format!("window.open('{url}', '_blank');"));
    spawn(async move {
        let _ = eval.await;
    });
}
