use dioxus::prelude::*;

/// Card chrome shared by every dashboard widget: title row plus body.
#[component]
pub fn DashboardWidget(
    title: &'static str,
    #[props(default = "")] accent: &'static str,
    children: Element,
) -> Element {
    let class = if accent.is_empty() {
        "rounded-xl border border-slate-800 bg-slate-900/40 p-4".to_string()
    } else {
        format!("rounded-xl border border-slate-800 bg-slate-900/40 p-4 {accent}")
    };

    rsx! {
        section {
            class: "{class}",
            h2 {
                class: "text-xs font-semibold uppercase tracking-wide text-slate-500",
                "{title}"
            }
            div { class: "mt-3", {children} }
        }
    }
}
