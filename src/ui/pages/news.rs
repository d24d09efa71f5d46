use dioxus::prelude::*;

use crate::{
    app::{request_news_fetch, NewsTrigger},
    domain::{AppState, NewsDigest},
};

#[component]
pub fn NewsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let news_request = use_context::<Signal<Option<NewsTrigger>>>();

    // Opening the panel is the transition that may fetch: once, then the
    // cached digest is served on every re-entry.
    use_hook({
        let state = state.clone();
        let news_request = news_request.clone();
        move || request_news_fetch(state, news_request, NewsTrigger::PanelEntry)
    });

    let in_flight = state.with(|st| st.news.is_in_flight());
    let digest = state.with(|st| st.news.result().cloned());

    let on_refresh = {
        let state = state.clone();
        let news_request = news_request.clone();
        move |_| request_news_fetch(state.clone(), news_request.clone(), NewsTrigger::ManualRefresh)
    };

    rsx! {
        div { class: "flex items-center justify-between",
            h2 { class: "text-xl font-semibold text-slate-200", "Global Shipping Intelligence" }
            button {
                class: "text-xs text-slate-400 transition-colors hover:text-white",
                onclick: on_refresh,
                if in_flight { "Refreshing..." } else { "Refresh" }
            }
        }

        if in_flight && digest.is_none() {
            div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
                for _ in 0..4 {
                    div { class: "h-48 animate-pulse rounded-xl bg-slate-800/50" }
                }
            }
        }

        if let Some(digest) = digest {
            DigestView { digest }
        }
    }
}

#[component]
fn DigestView(digest: NewsDigest) -> Element {
    let NewsDigest { items, sources } = digest;
    rsx! {
        div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
            for item in items {
                article {
                    class: "rounded-xl border border-slate-800 border-l-4 border-l-emerald-500 bg-slate-900/40 p-5",
                    p { class: "mb-2 text-[9px] font-semibold uppercase tracking-widest text-slate-500", "{item.date}" }
                    h3 { class: "mb-2 text-sm font-semibold leading-tight text-white", "{item.headline}" }
                    p { class: "mb-4 text-xs leading-relaxed text-slate-400", "{item.summary}" }
                    div { class: "rounded border border-slate-800 bg-slate-950/50 p-2",
                        p { class: "mb-1 text-[9px] font-semibold uppercase text-emerald-400", "Shipping Impact" }
                        p { class: "text-[10px] text-slate-300", "{item.shipping_impact}" }
                    }
                }
            }
        }

        if !sources.is_empty() {
            div { class: "mt-8 rounded-xl border border-slate-800/50 bg-slate-900/30 p-4",
                h4 { class: "mb-3 text-[10px] font-semibold uppercase tracking-widest text-slate-500", "Sources & References" }
                div { class: "flex flex-wrap gap-2",
                    for source in sources {
                        a {
                            class: "max-w-[200px] truncate rounded-full border border-slate-800 bg-slate-950 px-3 py-1.5 text-[10px] text-sky-400 transition-colors hover:bg-slate-800",
                            href: "{source.uri}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{source.title}"
                        }
                    }
                }
            }
        }
    }
}
