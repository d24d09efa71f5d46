use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::components::ShipmentForm;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let footer_label = format!("{APP_NAME} {}", version_label());

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🧭" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs uppercase tracking-widest text-slate-500", "Intelligent Trade Hub" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Dashboard {}),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            label: "Dashboard",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Fleet {}),
                            onclick: move |_| { nav.push(Route::Fleet {}); },
                            label: "Fleet Tracking",
                        }
                        NavButton {
                            active: matches!(current_route, Route::News {}),
                            onclick: move |_| { nav.push(Route::News {}); },
                            label: "News",
                        }
                    }
                }
            }
            main {
                class: "mx-auto grid max-w-6xl grid-cols-1 gap-8 px-6 py-10 lg:grid-cols-12",
                aside { class: "lg:col-span-4",
                    ShipmentForm {}
                }
                div { class: "lg:col-span-8 space-y-6",
                    {children}
                }
            }
            footer {
                class: "border-t border-slate-900/60 px-6 py-6 text-center text-xs uppercase tracking-widest text-slate-600",
                "{footer_label}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
