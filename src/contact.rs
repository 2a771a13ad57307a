//! Contact form state: draft fields, validation and the submission status
//! machine. The transport is a simulation seam; swapping in a real
//! form-relay call only has to honor [`ContactError::Transport`].

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Simulated network latency before a submission settles.
pub const SEND_LATENCY_MS: u64 = 2000;
/// How long the success state lingers before the form returns to idle.
pub const SUCCESS_LINGER_MS: u64 = 3000;
/// Below this many characters a message is rejected as empty noise.
pub const MIN_MESSAGE_LEN: usize = 10;

// Liberal well-formedness check; deliverability is the relay's problem.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Validated, trimmed payload handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Inline field-level messages produced by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("message failed to send: {0}")]
    Transport(String),
}

/// The form's single-writer state machine:
/// `Idle → Sending → Success → Idle`, with `Sending → Error` kept reachable
/// for real transports and surfaced as a retry affordance.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    // Editing a field clears its inline message so feedback tracks the
    // user's latest input, not a stale submit attempt.
    pub fn set_name(&mut self, value: String) {
        self.draft.name = value;
        self.errors.name = None;
    }

    pub fn set_email(&mut self, value: String) {
        self.draft.email = value;
        self.errors.email = None;
    }

    pub fn set_message(&mut self, value: String) {
        self.draft.message = value;
        self.errors.message = None;
    }

    pub fn validate(draft: &ContactDraft) -> Result<ContactMessage, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = draft.name.trim();
        let email = draft.email.trim();
        let message = draft.message.trim();
        if name.is_empty() {
            errors.name = Some("Please tell me your name");
        }
        if email.is_empty() {
            errors.email = Some("An email address is required");
        } else if !EMAIL_RE.is_match(email) {
            errors.email = Some("That doesn't look like an email address");
        }
        if message.is_empty() {
            errors.message = Some("A message is required");
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.message = Some("A few more words, please");
        }
        if errors.is_empty() {
            Ok(ContactMessage {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            })
        } else {
            Err(errors)
        }
    }

    /// Attempt a submission. On success the machine is `Sending` and the
    /// payload is returned for the transport; on validation failure the
    /// field messages are set instead. A no-op while already sending.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.status == SubmissionStatus::Sending {
            return None;
        }
        match Self::validate(&self.draft) {
            Ok(payload) => {
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Sending;
                Some(payload)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Transport completion. Success clears the draft; failure keeps it so
    /// the retry affordance resubmits the same message.
    pub fn complete(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.draft.clear();
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Return to idle after the success state has lingered.
    pub fn settle(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Simulated delivery; always succeeds, exactly like the original site's
/// fake network call. A real implementation POSTs `payload` to a form relay
/// and maps transport failures to [`ContactError::Transport`].
pub fn deliver(payload: &ContactMessage) -> Result<(), ContactError> {
    log::debug!(
        "contact payload ready: {}",
        serde_json::to_string(payload).unwrap_or_default()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("Ada Lovelace".to_string());
        form.set_email("ada@example.com".to_string());
        form.set_message("I have an engine that needs programming.".to_string());
        form
    }

    #[test]
    fn test_submit_walks_idle_sending_success_and_clears() {
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let payload = form.submit().expect("valid draft should submit");
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(payload.name, "Ada Lovelace");

        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.draft(), &ContactDraft::default());

        form.settle();
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_blank_fields_produce_inline_errors_and_no_transition() {
        let mut form = ContactForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        let errors = form.errors();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for bad in ["plainaddress", "missing@tld", "two@@example.com", "a b@example.com"] {
            let mut form = filled();
            form.set_email(bad.to_string());
            assert!(form.submit().is_none(), "{bad} should fail validation");
            assert!(form.errors().email.is_some());
        }
    }

    #[test]
    fn test_short_message_is_rejected() {
        let mut form = filled();
        form.set_message("hi".to_string());
        assert!(form.submit().is_none());
        assert!(form.errors().message.is_some());
    }

    #[test]
    fn test_editing_a_field_clears_its_error_only() {
        let mut form = ContactForm::new();
        form.submit();
        form.set_name("Ada".to_string());
        assert!(form.errors().name.is_none());
        assert!(form.errors().email.is_some());
        assert!(form.errors().message.is_some());
    }

    #[test]
    fn test_transport_failure_keeps_draft_for_retry() {
        let mut form = filled();
        let draft_before = form.draft().clone();
        form.submit().expect("valid draft should submit");
        form.complete(Err(ContactError::Transport("relay timed out".to_string())));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft(), &draft_before);

        // retry goes straight back to sending with the same payload
        let payload = form.submit().expect("retry should resubmit");
        assert_eq!(payload.name, draft_before.name.trim());
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_double_submit_while_sending_is_ignored() {
        let mut form = filled();
        form.submit().expect("first submit");
        assert!(form.submit().is_none());
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_settle_only_leaves_success() {
        let mut form = filled();
        form.submit();
        form.complete(Err(ContactError::Transport("offline".to_string())));
        form.settle();
        // error state waits for an explicit retry, not a timer
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_simulated_delivery_succeeds() {
        let payload = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "A sufficiently long message.".to_string(),
        };
        assert!(deliver(&payload).is_ok());
    }
}
