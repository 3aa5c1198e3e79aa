//! Contact Form (simulated delivery)
//!
//! Two states, Idle and Submitting. A submit from Idle with every required
//! field filled moves to Submitting; after the fixed delay the message is
//! handed to a [`MessageSink`], a one-shot notification is produced, the
//! fields are cleared and the form is Idle again.
//!
//! Delivery is a simulation: the shipped sink logs the message and keeps it
//! in a bounded in-memory inbox. A real transport would implement
//! [`MessageSink`] and add its own failure handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{NOTICE_SENT_BODY, NOTICE_SENT_TITLE};

/// Raw field values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Required form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn value<'a>(&self, fields: &'a ContactFields) -> &'a str {
        match self {
            ContactField::Name => &fields.name,
            ContactField::Email => &fields.email,
            ContactField::Message => &fields.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Idle,
    Submitting,
}

/// One-shot toast shown after delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn message_sent() -> Self {
        Self {
            title: NOTICE_SENT_TITLE.to_string(),
            description: NOTICE_SENT_BODY.to_string(),
        }
    }
}

/// A submitted message
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl ContactMessage {
    fn from_fields(fields: &ContactFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            received_at: Utc::now(),
        }
    }
}

/// Form values plus submission state
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    state: FormState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_fields(ContactFields::default())
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            state: FormState::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    /// First required field left empty, same rule as the HTML `required` attribute
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.value(&self.fields).is_empty())
    }

    /// Idle → Submitting. Fails without changing state if a field is empty
    /// or a submission is already in flight.
    pub fn begin_submit(&mut self) -> AppResult<ContactMessage> {
        if self.is_submitting() {
            return Err(AppError::already_submitting());
        }
        if let Some(field) = self.missing_field() {
            return Err(AppError::missing_field(field.as_str()));
        }
        self.state = FormState::Submitting;
        Ok(ContactMessage::from_fields(&self.fields))
    }

    /// Submitting → Idle, clearing every field
    pub fn complete(&mut self) -> AppResult<Notification> {
        if !self.is_submitting() {
            return Err(AppError::not_submitting());
        }
        self.fields = ContactFields::default();
        self.state = FormState::Idle;
        Ok(Notification::message_sent())
    }
}

// ============================================
// Delivery
// ============================================

/// Destination for submitted messages
pub trait MessageSink: Send + Sync {
    fn deliver(&self, message: &ContactMessage);
}

/// Logs each message and keeps the most recent ones in memory
pub struct LoggingInbox {
    messages: RwLock<VecDeque<ContactMessage>>,
    capacity: usize,
}

impl LoggingInbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: RwLock::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest first
    pub fn recent(&self) -> Vec<ContactMessage> {
        self.messages
            .read()
            .map(|m| m.iter().rev().cloned().collect())
            .unwrap_or_default()
    }
}

impl MessageSink for LoggingInbox {
    fn deliver(&self, message: &ContactMessage) {
        info!(
            id = %message.id,
            from = %message.name,
            email = %message.email,
            chars = message.message.chars().count(),
            "📬 Contact message received"
        );
        if let Ok(mut messages) = self.messages.write() {
            if messages.len() >= self.capacity {
                messages.pop_front();
            }
            messages.push_back(message.clone());
        }
    }
}

/// A form in the Submitting state waiting for its delivery delay
#[derive(Debug)]
pub struct Submission {
    form: ContactForm,
    message: ContactMessage,
}

impl Submission {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }
}

/// Runs the simulated delivery: wait, hand to the sink, reset the form.
///
/// The wait is an ordinary future. Dropping it (client disconnect, page
/// unmount) cancels the submission: nothing is delivered and the form is
/// discarded with it.
#[derive(Clone)]
pub struct ContactDesk {
    delay: Duration,
    sink: Arc<dyn MessageSink>,
}

impl ContactDesk {
    pub fn new(delay: Duration, sink: Arc<dyn MessageSink>) -> Self {
        Self { delay, sink }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Idle → Submitting
    pub fn begin(&self, mut form: ContactForm) -> Result<Submission, (ContactForm, AppError)> {
        match form.begin_submit() {
            Ok(message) => {
                debug!(id = %message.id, "✉️ Contact submission started");
                Ok(Submission { form, message })
            }
            Err(err) => Err((form, err)),
        }
    }

    /// Wait out the delay, deliver, Submitting → Idle
    pub async fn finish(&self, submission: Submission) -> AppResult<(ContactForm, Notification)> {
        let Submission { mut form, message } = submission;
        tokio::time::sleep(self.delay).await;
        self.sink.deliver(&message);
        let notification = form.complete()?;
        Ok((form, notification))
    }

    /// `begin` + `finish`
    pub async fn submit(&self, form: ContactForm) -> AppResult<(ContactForm, Notification)> {
        let submission = self.begin(form).map_err(|(_, err)| err)?;
        self.finish(submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    fn desk(inbox: Arc<LoggingInbox>) -> ContactDesk {
        ContactDesk::new(Duration::from_millis(1500), inbox)
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let mut form = ContactForm::with_fields(filled());
        assert_eq!(form.state(), FormState::Idle);
        form.begin_submit().unwrap();
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn test_missing_field_stays_idle() {
        for field in ContactField::ALL {
            let mut form = ContactForm::with_fields(filled());
            form.set_field(field, "");
            let err = form.begin_submit().unwrap_err();
            assert_eq!(err.code, ErrorCode::FormMissingField);
            assert!(err.message.contains(field.as_str()));
            assert_eq!(form.state(), FormState::Idle);
            assert_eq!(form.missing_field(), Some(field));
        }
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = ContactForm::with_fields(filled());
        form.begin_submit().unwrap();
        let err = form.begin_submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::FormAlreadySubmitting);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_complete_requires_submitting() {
        let mut form = ContactForm::with_fields(filled());
        assert_eq!(form.complete().unwrap_err().code, ErrorCode::FormNotSubmitting);
        assert_eq!(form.fields(), &filled());
    }

    #[test]
    fn test_inbox_is_bounded() {
        let inbox = LoggingInbox::new(2);
        for name in ["a", "b", "c"] {
            let mut fields = filled();
            fields.name = name.to_string();
            inbox.deliver(&ContactMessage::from_fields(&fields));
        }
        let names: Vec<String> = inbox.recent().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_desk_clears_fields_after_delay() {
        let inbox = Arc::new(LoggingInbox::new(10));
        let desk = desk(inbox.clone());

        let submission = desk.begin(ContactForm::with_fields(filled())).unwrap();
        assert_eq!(submission.form().state(), FormState::Submitting);
        assert!(inbox.is_empty());

        let started = tokio::time::Instant::now();
        let (form, notification) = desk.finish(submission).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(started.elapsed() < Duration::from_millis(1600));
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.fields().is_empty());
        assert_eq!(notification, Notification::message_sent());
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_desk_rejects_empty_form_without_waiting() {
        let inbox = Arc::new(LoggingInbox::new(10));
        let desk = desk(inbox.clone());

        let (form, err) = desk.begin(ContactForm::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::FormMissingField);
        assert_eq!(form.state(), FormState::Idle);
        assert!(inbox.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_delivers_nothing() {
        let inbox = Arc::new(LoggingInbox::new(10));
        let desk = desk(inbox.clone());

        let result = tokio::time::timeout(
            Duration::from_millis(500),
            desk.submit(ContactForm::with_fields(filled())),
        )
        .await;
        assert!(result.is_err());

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(inbox.is_empty());
    }
}
