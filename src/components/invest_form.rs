use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::confirmation::ConfirmationOverlay;
use crate::config;
use crate::overlay::{OverlayAction, OverlayState};
use crate::submission::{post_fields, Delivery, FormEffect, FormFields, SubmissionAttempt};

fn control_value(el: &Element) -> Option<(String, String)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_();
        if matches!(kind.as_str(), "submit" | "button" | "reset" | "image" | "file") {
            return None;
        }
        if matches!(kind.as_str(), "checkbox" | "radio") && !input.checked() {
            return None;
        }
        return Some((input.name(), input.value()));
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

/// Snapshot of every named control, the way the browser would serialize it.
fn collect_fields(form: &HtmlFormElement) -> FormFields {
    let controls = form.elements();
    FormFields::from_pairs(
        (0..controls.length())
            .filter_map(|i| controls.item(i))
            .filter_map(|el| control_value(&el)),
    )
}

fn apply_effects(effects: &[FormEffect], form: &HtmlFormElement, overlay: &UseReducerHandle<OverlayState>) {
    for effect in effects {
        match effect {
            FormEffect::ShowConfirmation => overlay.dispatch(OverlayAction::Show),
            FormEffect::ClearFields => form.reset(),
            FormEffect::NotifyFailure(notice) => {
                if let Some(window) = window() {
                    let _ = window.alert_with_message(notice);
                }
            }
        }
    }
}

#[function_component(InvestForm)]
pub fn invest_form() -> Html {
    let form_ref = use_node_ref();
    let overlay = use_reducer(OverlayState::default);
    let in_flight = use_state(|| false);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let overlay = overlay.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = match form_ref.cast::<HtmlFormElement>() {
                Some(form) => form,
                None => return,
            };

            let mut attempt = match SubmissionAttempt::try_begin(
                *in_flight,
                collect_fields(&form),
                config::get_form_endpoint(),
            ) {
                Some(attempt) => attempt,
                None => return,
            };
            log::debug!("Submitting {} field(s)", attempt.fields.len());

            match attempt.delivery.clone() {
                Delivery::LocalOnly => {
                    let effects = attempt.finish(Ok(()), config::FAILURE_NOTICE);
                    apply_effects(&effects, &form, &overlay);
                }
                Delivery::Remote(endpoint) => {
                    in_flight.set(true);
                    let overlay = overlay.clone();
                    let in_flight = in_flight.clone();
                    spawn_local(async move {
                        let result = post_fields(&endpoint, &attempt.fields).await;
                        let effects = attempt.finish(result, config::FAILURE_NOTICE);
                        apply_effects(&effects, &form, &overlay);
                        in_flight.set(false);
                    });
                }
            }
        })
    };

    let on_overlay_action = {
        let overlay = overlay.clone();
        Callback::from(move |action: OverlayAction| overlay.dispatch(action))
    };

    html! {
        <div class="invest-form-container">
            <form id="investForm" class="invest-form" ref={form_ref} {onsubmit}>
                <div class="form-row">
                    <input class="form-input" type="text" name="name" placeholder="Full name" required=true />
                    <input class="form-input" type="email" name="email" placeholder="Email address" required=true />
                </div>
                <div class="form-row">
                    <input class="form-input" type="tel" name="phone" placeholder="Phone (optional)" />
                    <select class="form-select" name="investment_range" required=true>
                        <option value="" disabled=true selected=true>{"Investment range"}</option>
                        <option value="50k-250k">{"$50K – $250K"}</option>
                        <option value="250k-1m">{"$250K – $1M"}</option>
                        <option value="1m-5m">{"$1M – $5M"}</option>
                        <option value="5m+">{"$5M+"}</option>
                    </select>
                </div>
                <select class="form-select" name="investor_type">
                    <option value="individual">{"Individual"}</option>
                    <option value="family-office">{"Family office"}</option>
                    <option value="institution">{"Institution"}</option>
                </select>
                <textarea class="form-textarea" name="message" rows="4" placeholder="Tell us about your goals"></textarea>
                <button type="submit" class="btn-primary" disabled={*in_flight}>
                    { if *in_flight { "Submitting…" } else { "Submit Interest" } }
                </button>
            </form>
            <ConfirmationOverlay state={*overlay} on_action={on_overlay_action} />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::{CONFIRMATION_DISMISS_MS, CONFIRMATION_LEAVE_MS};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> Element {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn input(root: &Element, selector: &str) -> HtmlInputElement {
        root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn collect_fields_serializes_named_controls() {
        let root = mount_root();
        root.set_inner_html(r#"
            <form>
                <input name="name" value="Ada">
                <input value="no name">
                <input type="checkbox" name="accredited" value="yes" checked>
                <input type="checkbox" name="newsletter" value="yes">
                <input type="radio" name="contact" value="email">
                <input type="radio" name="contact" value="phone" checked>
                <input type="file" name="attachment">
                <select name="investment_range"><option value="1m-5m" selected>x</option></select>
                <textarea name="message">hello</textarea>
                <input type="submit" name="go" value="Send">
                <button type="button" name="other">Other</button>
            </form>
        "#);
        let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();

        let fields = collect_fields(&form);
        assert_eq!(fields.get("name"), Some("Ada"));
        assert_eq!(fields.get("accredited"), Some("yes"));
        assert_eq!(fields.get("newsletter"), None);
        assert_eq!(fields.get("contact"), Some("phone"));
        assert_eq!(fields.get("attachment"), None);
        assert_eq!(fields.get("investment_range"), Some("1m-5m"));
        assert_eq!(fields.get("message"), Some("hello"));
        assert_eq!(fields.get("go"), None);
        assert_eq!(fields.get("other"), None);
        assert_eq!(fields.len(), 5);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn local_only_submit_resets_and_shows_then_removes_overlay() {
        if config::get_form_endpoint().is_some() {
            return;
        }
        let root = mount_root();
        yew::Renderer::<InvestForm>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        input(&root, "input[name=name]").set_value("Ada Lovelace");
        input(&root, "input[name=email]").set_value("ada@example.com");
        let range: HtmlSelectElement = root
            .query_selector("select[name=investment_range]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        range.set_value("250k-1m");

        let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();
        form.request_submit().unwrap();
        TimeoutFuture::new(10).await;

        assert_eq!(input(&root, "input[name=name]").value(), "");
        assert_eq!(input(&root, "input[name=email]").value(), "");
        assert!(root.query_selector(".success-message").unwrap().is_some());

        TimeoutFuture::new(CONFIRMATION_DISMISS_MS + CONFIRMATION_LEAVE_MS + 100).await;
        assert!(root.query_selector(".success-message").unwrap().is_none());
        root.remove();
    }
}
