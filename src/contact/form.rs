//! Contact form state, field editing and validation.
//!
//! The form walks through `Idle → Submitting → Sent | Failed`. Only one
//! submission can be outstanding: [`ContactForm::begin_submit`] refuses while a
//! previous attempt is in flight, and every attempt ends in exactly one call to
//! [`ContactForm::finish`].

use super::mail::ContactOutcome;
use serde::{Deserialize, Serialize};

/// Subjects offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    General,
    Support,
    Contribute,
    Feedback,
    Other,
}

impl Subject {
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Support,
        Self::Contribute,
        Self::Feedback,
        Self::Other,
    ];

    /// Value sent to the mail template.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Support => "support",
            Self::Contribute => "contribute",
            Self::Feedback => "feedback",
            Self::Other => "other",
        }
    }

    /// Text shown in the subject selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Support => "Technical Support",
            Self::Contribute => "Portfolio Submission",
            Self::Feedback => "Feedback",
            Self::Other => "Other",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Editable fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ORDER: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Field caption in the form pane.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    /// Dimmed hint shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Select a subject",
            Self::Message => "How can we help you?",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// A validation failure attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    fn new(field: ContactField, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Sent { message: String, at: i64 },
    Failed { message: String },
}

/// Validated, trimmed form contents ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

/// The contact form being edited.
///
/// # Examples
///
/// ```
/// use folio::contact::{ContactForm, ContactField};
///
/// let mut form = ContactForm::default();
/// for c in "Ada".chars() { form.push_char(c); }
/// form.focus_next();
/// assert_eq!(form.focus(), ContactField::Email);
/// assert!(form.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
    focus: ContactField,
    status: FormStatus,
    errors: Vec<FieldError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: None,
            message: String::new(),
            focus: ContactField::Name,
            status: FormStatus::Idle,
            errors: Vec::new(),
        }
    }
}

impl ContactForm {
    /// The field receiving keystrokes.
    #[must_use]
    pub const fn focus(&self) -> ContactField {
        self.focus
    }

    /// Where the current submission stands.
    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Validation errors from the last rejected submission, in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The inline error for `field`, if it failed validation.
    ///
    /// # Returns
    ///
    /// The message shown under the field, cleared once the field is edited.
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether a delivery is outstanding. Edits and new submissions are
    /// ignored until it finishes.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    /// Text of a field as currently typed.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => self.subject.map_or("", Subject::label),
            ContactField::Message => &self.message,
        }
    }

    /// Moves focus to the next field, wrapping after the message.
    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % ContactField::ORDER.len();
        self.focus = ContactField::ORDER[next];
    }

    /// Moves focus to the previous field, wrapping before the name.
    pub fn focus_prev(&mut self) {
        let len = ContactField::ORDER.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = ContactField::ORDER[prev];
    }

    /// Types a character into the focused text field.
    ///
    /// On the subject field a space advances the selection instead. Edits are
    /// ignored while a submission is outstanding.
    pub fn push_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        match self.focus {
            ContactField::Name => self.name.push(c),
            ContactField::Email => self.email.push(c),
            ContactField::Message => self.message.push(c),
            ContactField::Subject => {
                if c == ' ' {
                    self.cycle_subject();
                }
                return;
            }
        }
        self.clear_error(self.focus);
    }

    /// Deletes the last character of the focused text field. Clears the
    /// subject when it has focus.
    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        match self.focus {
            ContactField::Name => {
                self.name.pop();
            }
            ContactField::Email => {
                self.email.pop();
            }
            ContactField::Message => {
                self.message.pop();
            }
            ContactField::Subject => self.subject = None,
        }
    }

    /// Selects the next subject, wrapping around; the first call selects the
    /// first subject.
    pub fn cycle_subject(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.subject = Some(match self.subject {
            None => Subject::ALL[0],
            Some(s) => Subject::ALL[(s.position() + 1) % Subject::ALL.len()],
        });
        self.clear_error(ContactField::Subject);
    }

    /// Checks every field and returns the trimmed submission.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per invalid field, in tab order.
    pub fn validate(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new(ContactField::Name, "Please enter your name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new(ContactField::Email, "Please enter your email"));
        } else if !is_plausible_email(email) {
            errors.push(FieldError::new(ContactField::Email, "Please enter a valid email address"));
        }

        if self.subject.is_none() {
            errors.push(FieldError::new(ContactField::Subject, "Please select a subject"));
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::new(ContactField::Message, "Please enter a message"));
        }

        match (errors.is_empty(), self.subject) {
            (true, Some(subject)) => Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                subject,
                message: message.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Starts a submission attempt.
    ///
    /// Returns `None` when an attempt is already outstanding or the form is
    /// invalid (errors are recorded for display). Otherwise moves to
    /// `Submitting` and returns the submission to deliver.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting() {
            tracing::debug!("contact submission already in flight");
            return None;
        }

        match self.validate() {
            Ok(submission) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(submission)
            }
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.len(), "contact form invalid");
                if let Some(first) = errors.first() {
                    self.focus = first.field;
                }
                self.errors = errors;
                None
            }
        }
    }

    /// Records the terminal outcome of the outstanding attempt.
    ///
    /// A success clears the fields. An outcome arriving while nothing is in
    /// flight is ignored and `false` is returned.
    pub fn finish(&mut self, outcome: ContactOutcome) -> bool {
        if !self.is_submitting() {
            tracing::debug!("ignoring contact outcome with no submission in flight");
            return false;
        }

        if outcome.success {
            *self = Self {
                status: FormStatus::Sent {
                    message: outcome.message,
                    at: chrono::Utc::now().timestamp(),
                },
                ..Self::default()
            };
        } else {
            self.status = FormStatus::Failed { message: outcome.message };
        }
        true
    }

    /// Returns a finished form to `Idle`, keeping its fields.
    pub fn acknowledge(&mut self) {
        if matches!(self.status, FormStatus::Sent { .. } | FormStatus::Failed { .. }) {
            self.status = FormStatus::Idle;
        }
    }

    fn clear_error(&mut self, field: ContactField) {
        self.errors.retain(|e| e.field != field);
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
