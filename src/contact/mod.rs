//! Contact form and its delivery through EmailJS.
//!
//! - `form`: fields, validation and the submission state machine
//! - `mail`: mail credentials, request building and reply handling

pub mod form;
pub mod mail;

pub use form::{ContactField, ContactForm, ContactSubmission, FieldError, FormStatus, Subject};
pub use mail::{
    interpret_response, prepare_delivery, ContactError, ContactOutcome, MailConfig, MailRequest,
    DEFAULT_CONTACT_EMAIL, DEFAULT_ENDPOINT,
};
