use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::validation::{validate_contact, ContactMessage, FieldError, FieldErrors};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("contact message could not be encoded: {0}")]
    Encode(#[source] gloo_net::Error),
    #[error("contact endpoint answered with status {0}")]
    Rejected(u16),
    #[error("could not reach the contact endpoint: {0}")]
    Network(#[from] gloo_net::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid,
    Sending,
    Sent,
    Failed,
    NetworkError,
}

impl FormStatus {
    pub fn text(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Invalid => "Please correct the errors above.",
            FormStatus::Sending => "Sending…",
            FormStatus::Sent => "Message sent. Thank you!",
            FormStatus::Failed => "Submission failed. Please try again later.",
            FormStatus::NetworkError => "Network error. Please try again later.",
        }
    }

    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => FormStatus::Sent,
            Err(SubmitError::Encode(_)) | Err(SubmitError::Rejected(_)) => FormStatus::Failed,
            Err(SubmitError::Network(_)) => FormStatus::NetworkError,
        }
    }
}

/// Sends the message. Without an endpoint the send is simulated by waiting
/// `delay_ms` and succeeding.
pub async fn deliver(
    endpoint: Option<&str>,
    delay_ms: u32,
    message: &ContactMessage,
) -> Result<(), SubmitError> {
    let Some(url) = endpoint else {
        TimeoutFuture::new(delay_ms).await;
        return Ok(());
    };

    let request = Request::post(url).json(message).map_err(SubmitError::Encode)?;
    let response = request.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Finished(FormStatus),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub message: ContactMessage,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl FormState {
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.message.name = value,
            Field::Email => self.message.email = value,
            Field::Message => self.message.message = value,
        }
    }

    /// Validates every field and moves to `Sending` when they all pass.
    /// Returns the message to send; `None` when the form is invalid or a send
    /// is already in flight.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.status == FormStatus::Sending {
            return None;
        }
        self.errors = validate_contact(&self.message);
        if !self.errors.is_clean() {
            self.status = FormStatus::Invalid;
            return None;
        }
        self.status = FormStatus::Sending;
        Some(self.message.clone())
    }

    /// Records the outcome of a send; a successful send clears the form.
    pub fn finish(&mut self, status: FormStatus) {
        if status == FormStatus::Sent {
            self.message = ContactMessage::default();
            self.errors = FieldErrors::default();
        }
        self.status = status;
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                next.submit();
            }
            FormAction::Finished(status) => next.finish(status),
        }
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: Option<&'static str>,
    pub submit_delay_ms: u32,
}

fn error_text(error: Option<FieldError>) -> String {
    error.map(|e| e.to_string()).unwrap_or_default()
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(FormState::default);
    // set synchronously, so two submits inside one render still send once
    let in_flight = use_mut_ref(|| false);

    let on_input = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let in_flight = in_flight.clone();
        let endpoint = props.endpoint;
        let delay_ms = props.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                log::debug!("Ignoring submit while a send is in flight");
                return;
            }
            // the reducer repeats this transition on the latest state
            let outgoing = (*state).clone().submit();
            state.dispatch(FormAction::Submit);
            let Some(message) = outgoing else {
                log::debug!("Contact form not sent: validation failed");
                return;
            };

            *in_flight.borrow_mut() = true;
            let in_flight = in_flight.clone();
            let dispatcher = state.dispatcher();
            spawn_local(async move {
                let outcome = deliver(endpoint, delay_ms, &message).await;
                *in_flight.borrow_mut() = false;
                match &outcome {
                    Ok(()) => log::info!("Contact message sent"),
                    Err(e) => log::error!("Contact form submission failed: {}", e),
                }
                dispatcher.dispatch(FormAction::Finished(FormStatus::from_outcome(&outcome)));
            });
        })
    };

    let invalid = |error: Option<FieldError>| error.map(|_| "true");
    let errors = &state.errors;

    html! {
        <form id="contact-form" class="contact-form" novalidate={true} {onsubmit}>
            <div class="field">
                <label class="label" for="name">{"Name"}</label>
                <input
                    id="name"
                    class="input"
                    type="text"
                    autocomplete="name"
                    value={state.message.name.clone()}
                    aria-describedby="name-error"
                    aria-invalid={invalid(errors.name)}
                    oninput={on_input(Field::Name)}
                />
                <p id="name-error" class="help is-danger" hidden={errors.name.is_none()}>
                    {error_text(errors.name)}
                </p>
            </div>
            <div class="field">
                <label class="label" for="email">{"Email"}</label>
                <input
                    id="email"
                    class="input"
                    type="email"
                    autocomplete="email"
                    value={state.message.email.clone()}
                    aria-describedby="email-error"
                    aria-invalid={invalid(errors.email)}
                    oninput={on_input(Field::Email)}
                />
                <p id="email-error" class="help is-danger" hidden={errors.email.is_none()}>
                    {error_text(errors.email)}
                </p>
            </div>
            <div class="field">
                <label class="label" for="message">{"Message"}</label>
                <textarea
                    id="message"
                    class="textarea"
                    rows="5"
                    value={state.message.message.clone()}
                    aria-describedby="message-error"
                    aria-invalid={invalid(errors.message)}
                    oninput={on_input(Field::Message)}
                />
                <p id="message-error" class="help is-danger" hidden={errors.message.is_none()}>
                    {error_text(errors.message)}
                </p>
            </div>
            <div class="field">
                <button class="button is-primary" type="submit" disabled={state.status == FormStatus::Sending}>
                    {"Send message"}
                </button>
            </div>
            <p id="form-status" role="status" aria-live="polite">{state.status.text()}</p>
        </form>
    }
}
