use std::time::Duration;

use thiserror::Error;

/// Message cap in UTF-16 code units, the unit the textarea's `maxlength` counts.
pub const MESSAGE_MAX_LEN: usize = 500;
/// Simulated network latency of a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);
/// How long a success or error message stays up.
pub const STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {}", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn update_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Message => self.message = truncate_utf16(value, MESSAGE_MAX_LEN),
        }
    }

    pub fn message_counter(&self) -> String {
        format!("{}/{}", utf16_len(&self.message), MESSAGE_MAX_LEN)
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Longest prefix of `value` within `max` UTF-16 units. Never splits a
/// surrogate pair.
fn truncate_utf16(value: &str, max: usize) -> String {
    let mut units = 0;
    for (idx, c) in value.char_indices() {
        units += c.len_utf16();
        if units > max {
            return value[..idx].to_string();
        }
    }
    value.to_string()
}

// Same shape the browser accepts for type="email": one '@', both sides non-empty.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Handed out by [`ContactState::begin_submit`]; identifies one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
    pub error: Option<ContactError>,
    is_submitting: bool,
    generation: u64,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.generation += 1;
        if let Err(e) = self.form.validate() {
            self.status = SubmitStatus::Error;
            self.error = Some(e.clone());
            return Err(e);
        }
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        self.error = None;
        Ok(Submission {
            generation: self.generation,
            message: ContactMessage {
                name: self.form.name.trim().to_string(),
                email: self.form.email.trim().to_string(),
                message: self.form.message.clone(),
            },
        })
    }

    pub fn finish(&mut self, submission: &Submission, outcome: Result<(), ContactError>) {
        if submission.generation != self.generation {
            return;
        }
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.error = None;
                self.form.clear();
            }
            Err(e) => {
                self.status = SubmitStatus::Error;
                self.error = Some(e);
            }
        }
    }

    /// Returns to idle unless a newer submission has started since `generation`.
    pub fn reset_status(&mut self, generation: u64) {
        if generation == self.generation && !self.is_submitting {
            self.status = SubmitStatus::Idle;
            self.error = None;
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Submission {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Simulated delivery: waits out [`SUBMIT_DELAY`] and always succeeds.
pub async fn deliver(message: &ContactMessage) -> Result<(), ContactError> {
    log::debug!("delivering message from {} <{}>", message.name, message.email);
    gloo_timers::future::sleep(SUBMIT_DELAY).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.update_field(Field::Name, "Ada");
        state.form.update_field(Field::Email, "ada@example.com");
        state.form.update_field(Field::Message, "Hello there");
        state
    }

    #[test]
    fn test_message_is_capped() {
        let mut form = ContactForm::default();
        form.update_field(Field::Message, &"x".repeat(600));
        assert_eq!(form.message.chars().count(), MESSAGE_MAX_LEN);
        assert_eq!(form.message_counter(), "500/500");

        // é is one UTF-16 unit, the whole 500 fit
        form.update_field(Field::Message, &"é".repeat(501));
        assert_eq!(form.message.chars().count(), MESSAGE_MAX_LEN);

        form.update_field(Field::Message, "short");
        assert_eq!(form.message_counter(), "5/500");
    }

    #[test]
    fn test_message_counts_utf16_units() {
        let mut form = ContactForm::default();
        // each emoji is a surrogate pair, as the browser's maxlength sees it
        form.update_field(Field::Message, &"😀".repeat(250));
        assert_eq!(form.message_counter(), "500/500");

        form.update_field(Field::Message, &"😀".repeat(300));
        assert_eq!(form.message.chars().count(), 250);
        assert_eq!(form.message_counter(), "500/500");

        // a pair that would straddle the cap is dropped whole
        form.update_field(Field::Message, &format!("{}😀", "a".repeat(499)));
        assert_eq!(form.message, "a".repeat(499));
        assert_eq!(form.message_counter(), "499/500");
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut state = filled();
        let submission = state.begin_submit().expect("filled form should submit");
        assert!(state.is_submitting());
        assert_eq!(submission.message.name, "Ada");

        // button is disabled, a second submit is refused
        assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert!(state.is_submitting());

        state.finish(&submission, Ok(()));
        assert!(!state.is_submitting());
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.form, ContactForm::default());

        state.reset_status(submission.generation());
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_delivery_failure_sets_error() {
        let mut state = filled();
        let submission = state.begin_submit().unwrap();
        state.finish(
            &submission,
            Err(ContactError::Delivery("offline".to_string())),
        );
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.form.name, "Ada");
        assert!(state.error.is_some());
    }

    #[test]
    fn test_validation() {
        let mut state = ContactState::default();
        assert_eq!(
            state.begin_submit(),
            Err(ContactError::MissingField(Field::Name))
        );
        assert_eq!(state.status, SubmitStatus::Error);
        assert!(!state.is_submitting());

        let mut state = filled();
        state.form.update_field(Field::Email, "not-an-email");
        assert_eq!(state.begin_submit(), Err(ContactError::InvalidEmail));

        state.form.update_field(Field::Email, "a@b@c");
        assert_eq!(state.begin_submit(), Err(ContactError::InvalidEmail));

        state.form.update_field(Field::Email, "a@b");
        state.form.update_field(Field::Message, "   ");
        assert_eq!(
            state.begin_submit(),
            Err(ContactError::MissingField(Field::Message))
        );
    }

    #[test]
    fn test_stale_reset_keeps_newer_status() {
        let mut state = filled();
        let first = state.begin_submit().unwrap();
        state.finish(&first, Ok(()));

        state.form.update_field(Field::Name, "Grace");
        state.form.update_field(Field::Email, "grace@example.com");
        state.form.update_field(Field::Message, "Again");
        let second = state.begin_submit().unwrap();
        state.finish(&second, Ok(()));

        state.reset_status(first.generation());
        assert_eq!(state.status, SubmitStatus::Success);
        state.reset_status(second.generation());
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Please fill in your email"
        );
    }
}
