//! Contact-sheet state and the notification seam.
//!
//! The sheet open/closed flag and its context tag are an explicit context
//! object provided at the app root, not a process-wide global; nested shells
//! and tests supply their own. Email delivery itself lives in the site
//! backend; this shell only validates the payload and hands it to a
//! [`NotificationSender`].

use std::sync::Arc;

use dioxus::prelude::*;

/// Where the contact sheet was opened from; attached to the payload so the
/// sales inbox knows which page prompted the enquiry.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetContext {
    General,
    Post { slug: String },
}

/// Contact-sheet state shared through Dioxus context.
#[derive(Clone, Copy)]
pub struct SheetState {
    open: Signal<bool>,
    context: Signal<SheetContext>,
}

impl SheetState {
    /// Creates the state and provides it to the component subtree. Call once
    /// at the app root.
    pub fn provide() -> Self {
        let open = use_signal(|| false);
        let context = use_signal(|| SheetContext::General);
        use_context_provider(|| Self { open, context })
    }

    pub fn open_for(&mut self, context: SheetContext) {
        self.context.set(context);
        self.open.set(true);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn context(&self) -> SheetContext {
        (self.context)()
    }
}

/// Hook: the sheet state provided by the nearest app root.
pub fn use_sheet_state() -> SheetState {
    use_context::<SheetState>()
}

/// A validated contact enquiry, ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub context: SheetContext,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("nafn vantar")]
    EmptyName,
    #[error("netfang er ógilt")]
    InvalidEmail,
    #[error("skilaboð vantar")]
    EmptyMessage,
}

impl ContactPayload {
    /// Validates the raw form fields. Whitespace-only fields count as empty;
    /// the email check is deliberately shallow (the mailer re-validates).
    pub fn validated(
        name: &str,
        email: &str,
        message: &str,
        context: SheetContext,
    ) -> Result<Self, PayloadError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(PayloadError::EmptyName);
        }
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'));
        if !valid_email {
            return Err(PayloadError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(PayloadError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            context,
        })
    }
}

/// Delivery seam for contact enquiries. Fire-and-forget: callers surface a
/// failure once and never retry.
pub trait NotificationSender: Send + Sync {
    fn send(&self, payload: &ContactPayload) -> anyhow::Result<()>;
}

pub type SharedSender = Arc<dyn NotificationSender>;

/// Stand-in sender that logs the enquiry. The production mailer is wired in
/// by the site backend, outside this shell.
pub struct LogSender;

impl NotificationSender for LogSender {
    fn send(&self, payload: &ContactPayload) -> anyhow::Result<()> {
        log::info!(
            "contact enquiry from {} <{}> ({:?})",
            payload.name,
            payload.email,
            payload.context
        );
        Ok(())
    }
}

/// The contact sheet overlay. Rendered empty while closed.
#[component]
pub fn ContactSheet() -> Element {
    let mut sheet = use_sheet_state();
    let sender = use_context::<SharedSender>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| None::<String>);
    let mut sending = use_signal(|| false);

    if !sheet.is_open() {
        return rsx! {};
    }

    rsx! {
        div { class: "sheet-backdrop", onclick: move |_| sheet.close() }
        div { class: "contact-sheet",
            h2 { "Hafðu samband" }
            input {
                class: "sheet-field",
                placeholder: "Nafn",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "sheet-field",
                placeholder: "Netfang",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            textarea {
                class: "sheet-field",
                placeholder: "Skilaboð",
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }
            button {
                class: "sheet-send",
                disabled: sending(),
                onclick: move |_| {
                    // At most one send in flight per invocation.
                    if sending() {
                        return;
                    }
                    match ContactPayload::validated(&name(), &email(), &message(), sheet.context()) {
                        Ok(payload) => {
                            sending.set(true);
                            match sender.send(&payload) {
                                Ok(()) => {
                                    status.set(None);
                                    sheet.close();
                                }
                                Err(e) => {
                                    log::warn!("contact enquiry failed: {e}");
                                    status.set(Some("Sending mistókst, reyndu aftur síðar.".to_string()));
                                }
                            }
                            sending.set(false);
                        }
                        Err(e) => status.set(Some(e.to_string())),
                    }
                },
                "Senda"
            }
            if let Some(text) = status() {
                p { class: "sheet-status", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_all_fields() {
        let err = |n, e, m| ContactPayload::validated(n, e, m, SheetContext::General).unwrap_err();
        assert_eq!(err("", "a@b.is", "halló"), PayloadError::EmptyName);
        assert_eq!(err("Anna", "ekki-netfang", "halló"), PayloadError::InvalidEmail);
        assert_eq!(err("Anna", "a@b", "halló"), PayloadError::InvalidEmail);
        assert_eq!(err("Anna", "a@b.is", "  "), PayloadError::EmptyMessage);
    }

    #[test]
    fn payload_trims_and_keeps_context() {
        let payload = ContactPayload::validated(
            " Anna ",
            " anna@stefna.is ",
            " Mig vantar tilboð. ",
            SheetContext::Post {
                slug: "seo-grunnur".to_string(),
            },
        )
        .unwrap();
        assert_eq!(payload.name, "Anna");
        assert_eq!(payload.email, "anna@stefna.is");
        assert_eq!(payload.message, "Mig vantar tilboð.");
        assert_eq!(
            payload.context,
            SheetContext::Post {
                slug: "seo-grunnur".to_string()
            }
        );
    }

    #[test]
    fn log_sender_accepts_a_valid_payload() {
        let payload =
            ContactPayload::validated("Anna", "anna@stefna.is", "Halló", SheetContext::General)
                .unwrap();
        assert!(LogSender.send(&payload).is_ok());
    }
}
