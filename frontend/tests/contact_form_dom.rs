#![cfg(target_arch = "wasm32")]

mod common;

use chrono::Utc;
use common::*;
use site_frontend::components::contact_form::{deliver, ContactForm, ContactFormProps};
use site_frontend::validation::ContactMessage;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

const SEND_DELAY_MS: u32 = 80;

fn render(root: &Element) -> AppHandle<ContactForm> {
    yew::Renderer::<ContactForm>::with_root_and_props(
        root.clone(),
        ContactFormProps { endpoint: None, submit_delay_ms: SEND_DELAY_MS },
    )
    .render()
}

fn status(root: &Element) -> String {
    find(root, "#form-status").text_content().unwrap_or_default()
}

fn input(root: &Element, selector: &str) -> HtmlInputElement {
    find(root, selector).unchecked_into()
}

fn type_into(root: &Element, selector: &str, value: &str) {
    let field = find(root, selector);
    if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        field.unchecked_ref::<HtmlInputElement>().set_value(value);
    }
    fire(&field, "input");
}

fn fill(root: &Element) {
    type_into(root, "#name", "Dana");
    type_into(root, "#email", "dana@example.org");
    type_into(root, "#message", "Could you quote a landing page?");
}

#[wasm_bindgen_test]
async fn simulated_delivery_waits_then_succeeds() {
    let started = Utc::now();
    let outcome = deliver(None, 50, &ContactMessage::default()).await;
    let waited = (Utc::now() - started).num_milliseconds();

    assert!(outcome.is_ok());
    assert!(waited >= 45, "returned after {waited} ms");
}

#[wasm_bindgen_test]
async fn empty_submit_shows_every_error() {
    let root = mount_point();
    let app = render(&root);
    settle(10).await;

    fire(&find(&root, "#contact-form"), "submit");
    settle(10).await;

    assert_eq!(status(&root), "Please correct the errors above.");
    let name_error = find(&root, "#name-error");
    assert!(!name_error.hidden());
    assert_eq!(
        name_error.text_content().as_deref(),
        Some("Please enter your name (2+ characters).")
    );
    assert!(!find(&root, "#email-error").hidden());
    assert!(!find(&root, "#message-error").hidden());
    assert_eq!(find(&root, "#name").get_attribute("aria-invalid").as_deref(), Some("true"));

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn valid_submit_sends_then_resets() {
    let root = mount_point();
    let app = render(&root);
    settle(10).await;

    fill(&root);
    settle(10).await;
    fire(&find(&root, "#contact-form"), "submit");
    settle(10).await;
    assert_eq!(status(&root), "Sending…");

    settle(SEND_DELAY_MS + 60).await;
    assert_eq!(status(&root), "Message sent. Thank you!");
    assert_eq!(input(&root, "#name").value(), "");
    assert_eq!(input(&root, "#email").value(), "");
    assert_eq!(find(&root, "#message").unchecked_into::<HtmlTextAreaElement>().value(), "");
    assert!(find(&root, "#name-error").hidden());
    assert_eq!(find(&root, "#name").get_attribute("aria-invalid"), None);

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn second_submit_while_sending_is_ignored() {
    let root = mount_point();
    let app = render(&root);
    settle(10).await;

    fill(&root);
    settle(10).await;
    let form = find(&root, "#contact-form");
    // no render between these two
    fire(&form, "submit");
    fire(&form, "submit");
    settle(10).await;
    assert_eq!(status(&root), "Sending…");

    settle(SEND_DELAY_MS + 60).await;
    assert_eq!(status(&root), "Message sent. Thank you!");

    // a duplicate send would have finished on an empty form and flagged it
    settle(SEND_DELAY_MS + 60).await;
    assert_eq!(status(&root), "Message sent. Thank you!");
    assert!(find(&root, "#name-error").hidden());

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn fixing_the_fields_lets_the_form_send() {
    let root = mount_point();
    let app = render(&root);
    settle(10).await;

    let form = find(&root, "#contact-form");
    fire(&form, "submit");
    settle(10).await;
    assert_eq!(status(&root), "Please correct the errors above.");

    fill(&root);
    settle(10).await;
    fire(&form, "submit");
    settle(10).await;
    assert_eq!(status(&root), "Sending…");
    assert!(find(&root, "#name-error").hidden());

    settle(SEND_DELAY_MS + 60).await;
    assert_eq!(status(&root), "Message sent. Thank you!");

    app.destroy();
    root.remove();
}
