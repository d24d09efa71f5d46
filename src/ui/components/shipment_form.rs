use dioxus::prelude::*;

use crate::{
    app::request_analysis,
    domain::{AppState, ContainerType, Currency, Incoterm, ShipmentData, ShippingMode},
};

/// Shipment parameter form. Owns a draft `ShipmentData` and hands an
/// immutable copy to the analysis request on submit. The submit control
/// stays disabled while the quantities are not positive or while an
/// analysis is already in flight.
#[component]
pub fn ShipmentForm() -> Element {
    let state = use_context::<Signal<AppState>>();
    let analysis_request = use_context::<Signal<Option<ShipmentData>>>();
    let draft = use_signal(ShipmentData::default);

    let in_flight = state.with(|st| st.analysis.is_in_flight());
    let submittable = draft.with(|d| d.is_submittable());

    let on_mode_change = {
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            if let Some(mode) = ShippingMode::from_code(&evt.value()) {
                draft.with_mut(|d| d.shipping_mode = mode);
            }
        }
    };
    let on_factory_input = {
        let mut draft = draft.clone();
        move |evt: FormEvent| draft.with_mut(|d| d.factory_location = evt.value())
    };
    let on_product_input = {
        let mut draft = draft.clone();
        move |evt: FormEvent| draft.with_mut(|d| d.product_description = evt.value())
    };
    let on_weight_change = {
        let mut draft = draft.clone();
        move |value: f64| draft.with_mut(|d| d.weight = value)
    };
    let on_volume_change = {
        let mut draft = draft.clone();
        move |value: f64| draft.with_mut(|d| d.volume = value)
    };
    let on_amount_change = {
        let mut draft = draft.clone();
        move |value: f64| draft.with_mut(|d| d.invoice_amount = value)
    };
    let on_currency_change = {
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            if let Some(currency) = Currency::from_code(&evt.value()) {
                draft.with_mut(|d| d.currency = currency);
            }
        }
    };
    let on_incoterm_change = {
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            if let Some(incoterm) = Incoterm::from_code(&evt.value()) {
                draft.with_mut(|d| d.incoterm = incoterm);
            }
        }
    };
    let on_port_input = {
        let mut draft = draft.clone();
        move |evt: FormEvent| draft.with_mut(|d| d.origin_port = evt.value())
    };
    let on_container_change = {
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            if let Some(container) = ContainerType::from_code(&evt.value()) {
                draft.with_mut(|d| d.container_type = container);
            }
        }
    };
    let on_submit = {
        let state = state.clone();
        let analysis_request = analysis_request.clone();
        let draft = draft.clone();
        move |_| {
            let shipment = draft();
            if !shipment.is_submittable() {
                return;
            }
            request_analysis(state.clone(), analysis_request.clone(), shipment);
        }
    };

    let field_class = "w-full rounded-lg border border-slate-700 bg-slate-950 p-2.5 text-sm text-slate-200";
    let submit_class = if in_flight || !submittable {
        "w-full rounded-lg bg-slate-800 px-4 py-3 text-sm font-semibold uppercase tracking-wide text-slate-500 cursor-not-allowed"
    } else {
        "w-full rounded-lg bg-emerald-600 px-4 py-3 text-sm font-semibold uppercase tracking-wide text-white hover:bg-emerald-500"
    };

    rsx! {
        section {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-5 space-y-4",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-400", "Shipment Parameters" }

            div {
                FieldLabel { text: "Shipping Mode" }
                select {
                    class: "{field_class}",
                    onchange: on_mode_change,
                    for mode in ShippingMode::ALL {
                        option {
                            value: mode.code(),
                            selected: draft.with(|d| d.shipping_mode) == mode,
                            "{mode.label()}"
                        }
                    }
                }
            }

            div {
                FieldLabel { text: "Factory Location" }
                input {
                    class: "{field_class}",
                    r#type: "text",
                    placeholder: "e.g. Guangzhou, China",
                    value: draft.with(|d| d.factory_location.clone()),
                    oninput: on_factory_input,
                }
            }

            div {
                FieldLabel { text: "Product Description" }
                input {
                    class: "{field_class}",
                    r#type: "text",
                    placeholder: "e.g. Ceramic tiles, palletized",
                    value: draft.with(|d| d.product_description.clone()),
                    oninput: on_product_input,
                }
            }

            div { class: "grid grid-cols-2 gap-3",
                div {
                    FieldLabel { text: "Weight (kg)" }
                    NumberField {
                        value: draft.with(|d| d.weight),
                        on_change: on_weight_change,
                    }
                }
                div {
                    FieldLabel { text: "Volume (m³)" }
                    NumberField {
                        value: draft.with(|d| d.volume),
                        on_change: on_volume_change,
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-3",
                div {
                    FieldLabel { text: "Invoice Amount" }
                    NumberField {
                        value: draft.with(|d| d.invoice_amount),
                        on_change: on_amount_change,
                    }
                }
                div {
                    FieldLabel { text: "Currency" }
                    select {
                        class: "{field_class}",
                        onchange: on_currency_change,
                        for currency in Currency::ALL {
                            option {
                                value: currency.code(),
                                selected: draft.with(|d| d.currency) == currency,
                                "{currency.code()}"
                            }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-3",
                div {
                    FieldLabel { text: "Incoterm" }
                    select {
                        class: "{field_class}",
                        onchange: on_incoterm_change,
                        for incoterm in Incoterm::ALL {
                            option {
                                value: incoterm.code(),
                                selected: draft.with(|d| d.incoterm) == incoterm,
                                "{incoterm.code()}"
                            }
                        }
                    }
                }
                div {
                    FieldLabel { text: "Origin Port" }
                    input {
                        class: "{field_class}",
                        r#type: "text",
                        placeholder: "e.g. Shenzhen",
                        value: draft.with(|d| d.origin_port.clone()),
                        oninput: on_port_input,
                    }
                }
            }

            div {
                FieldLabel { text: "Container Type" }
                select {
                    class: "{field_class}",
                    onchange: on_container_change,
                    for container in ContainerType::ALL {
                        option {
                            value: container.code(),
                            selected: draft.with(|d| d.container_type) == container,
                            "{container.label()}"
                        }
                    }
                }
            }

            button {
                class: "{submit_class}",
                disabled: in_flight || !submittable,
                onclick: on_submit,
                if in_flight { "Analyzing..." } else { "Generate Strategy" }
            }
        }
    }
}

#[component]
fn FieldLabel(text: &'static str) -> Element {
    rsx! {
        label { class: "mb-1 block text-xs font-semibold uppercase tracking-wide text-slate-500", "{text}" }
    }
}

#[component]
fn NumberField(value: f64, on_change: EventHandler<f64>) -> Element {
    let display = if value > 0.0 { value.to_string() } else { String::new() };
    rsx! {
        input {
            class: "w-full rounded-lg border border-slate-700 bg-slate-950 p-2.5 text-sm text-slate-200",
            r#type: "number",
            min: "0",
            step: "any",
            value: "{display}",
            oninput: move |evt: FormEvent| {
                let parsed = evt.value().trim().parse::<f64>().unwrap_or(0.0);
                on_change.call(parsed.max(0.0));
            },
        }
    }
}
