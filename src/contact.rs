use dioxus::prelude::*;
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config::RuntimeConfig;

const SUBMIT_DELAY_MS: u32 = 2000;
const STATUS_VISIBLE_MS: u32 = 5000;
const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

// First matching rule wins; a field carries at most one error.
pub fn validate_field(field: Field, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Some(format!("{} is required.", field.label()));
    }
    match field {
        Field::Email if !is_valid_email(value) => {
            Some("Please enter a valid email address.".to_string())
        }
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => Some(format!(
            "Message must be at least {MIN_MESSAGE_CHARS} characters long."
        )),
        Field::Name if value.chars().count() < MIN_NAME_CHARS => Some(format!(
            "Name must be at least {MIN_NAME_CHARS} characters long."
        )),
        _ => None,
    }
}

// local@domain.tld shape: no whitespace anywhere, a single '@' with a
// non-empty local part, and a dot strictly inside the domain.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let domain: Vec<char> = domain.chars().collect();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn build_payload(name: &str, email: &str, message: &str) -> ContactPayload {
    ContactPayload {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        message: message.trim().to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStrategy {
    Simulated { delay_ms: u32 },
    Endpoint { url: String },
}

impl SubmitStrategy {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        match &config.contact_endpoint {
            Some(url) => SubmitStrategy::Endpoint { url: url.clone() },
            None => SubmitStrategy::Simulated {
                delay_ms: SUBMIT_DELAY_MS,
            },
        }
    }

    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), String> {
        match self {
            SubmitStrategy::Simulated { delay_ms } => {
                #[cfg(target_arch = "wasm32")]
                TimeoutFuture::new(*delay_ms).await;
                #[cfg(not(target_arch = "wasm32"))]
                let _ = delay_ms;
                Ok(())
            }
            SubmitStrategy::Endpoint { url } => {
                let response = Request::post(url)
                    .json(payload)
                    .map_err(|err| format!("contact request failed: {err}"))?
                    .send()
                    .await
                    .map_err(|err| format!("contact request failed: {err}"))?;
                if !response.ok() {
                    return Err(format!("contact request failed: status {}", response.status()));
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "form-status success",
            StatusKind::Error => "form-status error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct FormStatus {
    kind: StatusKind,
    text: String,
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let strategy = SubmitStrategy::from_config(&config);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut name_error = use_signal(|| None::<String>);
    let mut email_error = use_signal(|| None::<String>);
    let mut message_error = use_signal(|| None::<String>);
    let mut sending = use_signal(|| false);
    let mut status = use_signal(|| None::<FormStatus>);
    let mut status_epoch = use_signal(|| 0u32);

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            novalidate: true,
            onsubmit: move |event| {
                event.prevent_default();
                let name_check = validate_field(Field::Name, &name());
                let email_check = validate_field(Field::Email, &email());
                let message_check = validate_field(Field::Message, &message());
                let blocked =
                    name_check.is_some() || email_check.is_some() || message_check.is_some();
                name_error.set(name_check);
                email_error.set(email_check);
                message_error.set(message_check);
                if blocked || sending() {
                    return;
                }
                let payload = build_payload(&name(), &email(), &message());
                let strategy = strategy.clone();
                spawn(async move {
                    sending.set(true);
                    status.set(None);
                    match strategy.submit(&payload).await {
                        Ok(()) => {
                            status.set(Some(FormStatus {
                                kind: StatusKind::Success,
                                text: format!(
                                    "Thank you, {}! Your message has been received.",
                                    payload.name
                                ),
                            }));
                            name.set(String::new());
                            email.set(String::new());
                            message.set(String::new());
                            name_error.set(None);
                            email_error.set(None);
                            message_error.set(None);
                        }
                        Err(err) => {
                            tracing::error!("contact submit failed: {err}");
                            status.set(Some(FormStatus {
                                kind: StatusKind::Error,
                                text: "Something went wrong. Please try again later.".to_string(),
                            }));
                        }
                    }
                    sending.set(false);
                    let epoch = status_epoch() + 1;
                    status_epoch.set(epoch);
                    #[cfg(target_arch = "wasm32")]
                    spawn(async move {
                        TimeoutFuture::new(STATUS_VISIBLE_MS).await;
                        // A newer status bumps the epoch; leave it alone.
                        if *status_epoch.peek() == epoch {
                            status.set(None);
                        }
                    });
                });
            },
            div { class: "form-field",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    value: "{name}",
                    disabled: sending(),
                    class: if name_error().is_some() { "form-input invalid" } else { "form-input" },
                    oninput: move |event| {
                        name.set(event.value());
                        name_error.set(None);
                    },
                    onblur: move |_| name_error.set(validate_field(Field::Name, &name())),
                }
                span { id: "name-error", class: "error-message",
                    if let Some(text) = name_error() {
                        "{text}"
                    }
                }
            }
            div { class: "form-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    value: "{email}",
                    disabled: sending(),
                    class: if email_error().is_some() { "form-input invalid" } else { "form-input" },
                    oninput: move |event| {
                        email.set(event.value());
                        email_error.set(None);
                    },
                    onblur: move |_| email_error.set(validate_field(Field::Email, &email())),
                }
                span { id: "email-error", class: "error-message",
                    if let Some(text) = email_error() {
                        "{text}"
                    }
                }
            }
            div { class: "form-field",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "6",
                    value: "{message}",
                    disabled: sending(),
                    class: if message_error().is_some() { "form-input form-textarea invalid" } else { "form-input form-textarea" },
                    oninput: move |event| {
                        message.set(event.value());
                        message_error.set(None);
                    },
                    onblur: move |_| message_error.set(validate_field(Field::Message, &message())),
                }
                span { id: "message-error", class: "error-message",
                    if let Some(text) = message_error() {
                        "{text}"
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn primary",
                disabled: sending(),
                if sending() {
                    "Sending..."
                } else {
                    "Send Message"
                }
            }
            if let Some(current) = status() {
                div { id: "form-status", class: current.kind.class(), "{current.text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_fields_are_required() {
        assert_eq!(
            validate_field(Field::Name, ""),
            Some("Name is required.".to_string())
        );
        assert_eq!(
            validate_field(Field::Email, "   "),
            Some("Email is required.".to_string())
        );
        assert_eq!(
            validate_field(Field::Message, "\t"),
            Some("Message is required.".to_string())
        );
    }

    #[test]
    fn short_name_is_rejected() {
        assert_eq!(
            validate_field(Field::Name, "a"),
            Some("Name must be at least 2 characters long.".to_string())
        );
        assert_eq!(validate_field(Field::Name, "Jo"), None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        assert_eq!(
            validate_field(Field::Email, "not-an-email"),
            Some("Please enter a valid email address.".to_string())
        );
        assert_eq!(validate_field(Field::Email, "user@example.com"), None);
    }

    #[test]
    fn required_wins_over_the_email_shape_rule() {
        assert_eq!(
            validate_field(Field::Email, ""),
            Some("Email is required.".to_string())
        );
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(
            validate_field(Field::Message, "123456789"),
            Some("Message must be at least 10 characters long.".to_string())
        );
        assert_eq!(validate_field(Field::Message, "1234567890"), None);
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        // 9 payload characters padded to more than 10.
        assert_eq!(
            validate_field(Field::Message, "  123456789  "),
            Some("Message must be at least 10 characters long.".to_string())
        );
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.com"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@com."));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn payload_is_trimmed() {
        let payload = build_payload("  Jo  ", " jo@example.com ", "  hello there  ");
        assert_eq!(payload.name, "Jo");
        assert_eq!(payload.email, "jo@example.com");
        assert_eq!(payload.message, "hello there");
    }

    #[test]
    fn strategy_follows_the_configured_endpoint() {
        let simulated = SubmitStrategy::from_config(&RuntimeConfig::default());
        assert_eq!(
            simulated,
            SubmitStrategy::Simulated {
                delay_ms: SUBMIT_DELAY_MS
            }
        );

        let config = RuntimeConfig {
            contact_endpoint: Some("https://example.test/contact".to_string()),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            SubmitStrategy::from_config(&config),
            SubmitStrategy::Endpoint {
                url: "https://example.test/contact".to_string()
            }
        );
    }
}
