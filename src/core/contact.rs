//! Contact form shown in the `script.js` pane.
//!
//! Delivery is simulated: a valid submission schedules one task on the
//! [`Scheduler`] and the form is only cleared once that task fires.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use tui_textarea::{CursorMove, TextArea};

use crate::core::constants::{CONTACT_PREVIEW_CHARS, CONTACT_SEND_DELAY};
use crate::core::scheduler::{Scheduler, TaskHandle};
use crate::core::terminal_log::LogSink;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Next field, or `None` after the message field.
    pub fn next(self) -> Option<Self> {
        match self {
            ContactField::Name => Some(ContactField::Email),
            ContactField::Email => Some(ContactField::Message),
            ContactField::Message => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            ContactField::Name => None,
            ContactField::Email => Some(ContactField::Name),
            ContactField::Message => Some(ContactField::Email),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// First characters of the message, as echoed back after delivery.
    pub fn preview(&self) -> String {
        self.message.chars().take(CONTACT_PREVIEW_CHARS).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => f.write_str("❌ Please fill in all fields"),
            ContactError::InvalidEmail => f.write_str("❌ Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ContactError {}

struct PendingSend {
    id: u64,
    handle: TaskHandle,
}

pub struct ContactForm {
    name: TextArea<'static>,
    email: TextArea<'static>,
    message: TextArea<'static>,
    pending: Vec<PendingSend>,
    next_send_id: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

fn field_area(placeholder: &str) -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text(placeholder.to_string());
    area
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: field_area("Your name"),
            email: field_area("you@example.com"),
            message: field_area("Say hello..."),
            pending: Vec::new(),
            next_send_id: 0,
        }
    }

    pub fn field(&self, field: ContactField) -> &TextArea<'static> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut TextArea<'static> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: ContactField) -> String {
        self.field(field).lines().join("\n")
    }

    pub fn set_value(&mut self, field: ContactField, text: &str) {
        let placeholder = self.field(field).placeholder_text().to_string();
        let mut area = TextArea::new(text.split('\n').map(str::to_string).collect());
        area.set_placeholder_text(placeholder);
        area.move_cursor(CursorMove::Bottom);
        area.move_cursor(CursorMove::End);
        *self.field_mut(field) = area;
    }

    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let submission = ContactSubmission {
            name: self.value(ContactField::Name),
            email: self.value(ContactField::Email),
            message: self.value(ContactField::Message),
        };
        if submission.name.is_empty()
            || submission.email.is_empty()
            || submission.message.is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(submission)
    }

    /// Validate and, when valid, schedule delivery. `make_task` wraps the send
    /// id and submission into whatever payload the scheduler carries.
    pub fn submit<T>(
        &mut self,
        scheduler: &mut Scheduler<T>,
        log: &mut dyn LogSink,
        make_task: impl FnOnce(u64, ContactSubmission) -> T,
    ) -> Result<u64, ContactError> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(err) => {
                log.log(&err.to_string());
                return Err(err);
            }
        };

        log.log(&format!("📧 Sending message from {}...", submission.name));
        let id = self.next_send_id;
        self.next_send_id += 1;
        let handle = scheduler.schedule_after(CONTACT_SEND_DELAY, make_task(id, submission));
        debug!(send_id = id, deadline = ?handle.deadline(), "scheduled contact delivery");
        self.pending.push(PendingSend { id, handle });
        Ok(id)
    }

    /// Complete the send `id`: report it and clear the form.
    pub fn deliver(&mut self, id: u64, submission: &ContactSubmission, log: &mut dyn LogSink) {
        self.pending.retain(|send| send.id != id);
        log.log("✅ Message sent successfully!");
        log.log(&format!("📝 From: {}", submission.email));
        log.log(&format!("💬 Message: \"{}...\"", submission.preview()));
        self.reset();
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Cancel every send still in flight. Returns whether anything was cancelled.
    pub fn cancel_pending(&mut self, log: &mut dyn LogSink) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        for send in self.pending.drain(..) {
            send.handle.cancel();
        }
        log.log("⚠️ Message send cancelled");
        true
    }

    pub fn reset(&mut self) {
        for field in ContactField::ALL {
            self.set_value(field, "");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terminal_log::RecordingSink;
    use std::time::Duration;

    type Delivery = (u64, ContactSubmission);

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(ContactField::Name, name);
        form.set_value(ContactField::Email, email);
        form.set_value(ContactField::Message, message);
        form
    }

    #[test]
    fn email_pattern_requires_user_domain_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn empty_field_is_rejected_first() {
        let mut form = filled("Ada", "", "hi");
        let mut scheduler: Scheduler<Delivery> = Scheduler::new();
        let mut log = RecordingSink::default();

        let result = form.submit(&mut scheduler, &mut log, |id, s| (id, s));

        assert_eq!(result, Err(ContactError::MissingFields));
        assert_eq!(log.messages, vec!["❌ Please fill in all fields"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn malformed_email_never_schedules_a_send() {
        let mut form = filled("Ada", "bad-email", "hello");
        let mut scheduler: Scheduler<Delivery> = Scheduler::new();
        let mut log = RecordingSink::default();

        let result = form.submit(&mut scheduler, &mut log, |id, s| (id, s));

        assert_eq!(result, Err(ContactError::InvalidEmail));
        assert_eq!(log.messages, vec!["❌ Please enter a valid email address"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(form.value(ContactField::Email), "bad-email");
    }

    #[test]
    fn valid_submission_delivers_once_after_the_delay() {
        let mut form = filled("Ada", "ada@example.com", "Let's build something together!");
        let mut scheduler: Scheduler<Delivery> = Scheduler::new();
        let mut log = RecordingSink::default();

        form.submit(&mut scheduler, &mut log, |id, s| (id, s)).unwrap();
        assert_eq!(log.messages, vec!["📧 Sending message from Ada..."]);
        assert_eq!(scheduler.pending(), 1);
        assert!(form.has_pending());

        assert!(scheduler.advance_by(Duration::from_millis(1499)).is_empty());
        let due = scheduler.advance_by(Duration::from_millis(1));
        assert_eq!(due.len(), 1);
        let (id, submission) = &due[0];
        form.deliver(*id, submission, &mut log);

        assert_eq!(
            &log.messages[1..],
            &[
                "✅ Message sent successfully!",
                "📝 From: ada@example.com",
                "💬 Message: \"Let's build something together!...\"",
            ]
        );
        assert!(!form.has_pending());
        assert_eq!(form.value(ContactField::Name), "");
        assert_eq!(form.value(ContactField::Message), "");
    }

    #[test]
    fn preview_is_cut_at_fifty_characters() {
        let submission = ContactSubmission {
            name: "n".into(),
            email: "e@x.io".into(),
            message: "é".repeat(80),
        };
        assert_eq!(submission.preview().chars().count(), 50);
    }

    #[test]
    fn preview_never_splits_an_emoji() {
        let submission = ContactSubmission {
            name: "n".into(),
            email: "e@x.io".into(),
            message: "👋".repeat(60),
        };
        assert_eq!(submission.preview(), "👋".repeat(50));
    }

    #[test]
    fn cancelling_stops_the_delivery() {
        let mut form = filled("Ada", "ada@example.com", "hi");
        let mut scheduler: Scheduler<Delivery> = Scheduler::new();
        let mut log = RecordingSink::default();
        form.submit(&mut scheduler, &mut log, |id, s| (id, s)).unwrap();

        assert!(form.cancel_pending(&mut log));
        assert!(!form.cancel_pending(&mut log));

        assert!(scheduler.advance_by(Duration::from_secs(5)).is_empty());
        assert_eq!(
            log.messages.last().map(String::as_str),
            Some("⚠️ Message send cancelled")
        );
        // The form keeps its contents so the user can try again.
        assert_eq!(form.value(ContactField::Name), "Ada");
    }

    #[test]
    fn multiline_messages_keep_their_newlines() {
        let form = filled("Ada", "ada@example.com", "line one\nline two");
        assert_eq!(form.validate().unwrap().message, "line one\nline two");
    }

    #[test]
    fn fields_cycle_in_form_order() {
        assert_eq!(ContactField::Name.next(), Some(ContactField::Email));
        assert_eq!(ContactField::Message.next(), None);
        assert_eq!(ContactField::Name.previous(), None);
    }
}
