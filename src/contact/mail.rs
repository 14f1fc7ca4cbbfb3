//! EmailJS delivery: request construction and response interpretation.
//!
//! Nothing here performs I/O. [`prepare_delivery`] builds the HTTP request that
//! the plugin shim hands to the host, and [`interpret_response`] turns the
//! host's reply back into a result.

use super::form::ContactSubmission;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_CONTACT_EMAIL: &str = "hello@portfolioideas.com";
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const SENT_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
const NOT_CONFIGURED_MESSAGE: &str =
    "Email service is not properly configured. Please contact the administrator.";
const FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

/// Why a contact submission was not delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Credentials are missing; nothing was sent.
    #[error("email service is not configured")]
    NotConfigured,

    /// The service answered with a non-success status.
    #[error("delivery rejected with status {status}: {detail}")]
    DeliveryFailed { status: u16, detail: String },

    /// Transport failure or anything else.
    #[error("unexpected delivery error: {0}")]
    Unexpected(String),
}

/// Mail service credentials, built once from the plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub contact_email: String,
    pub endpoint: String,
}

impl MailConfig {
    /// Builds a config, returning `None` unless all three credentials are
    /// non-empty. Blank `contact_email` and `endpoint` fall back to defaults.
    #[must_use]
    pub fn new(
        service_id: &str,
        template_id: &str,
        public_key: &str,
        contact_email: Option<&str>,
        endpoint: Option<&str>,
    ) -> Option<Self> {
        let (service_id, template_id, public_key) =
            (service_id.trim(), template_id.trim(), public_key.trim());
        if service_id.is_empty() || template_id.is_empty() || public_key.is_empty() {
            return None;
        }

        let non_blank = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Some(Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
            contact_email: non_blank(contact_email, DEFAULT_CONTACT_EMAIL),
            endpoint: non_blank(endpoint, DEFAULT_ENDPOINT),
        })
    }
}

/// A ready-to-send HTTP POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    to_email: &'a str,
    reply_to: &'a str,
}

/// Builds the EmailJS send request for a validated submission.
///
/// # Errors
///
/// [`ContactError::NotConfigured`] when `config` is `None`;
/// [`ContactError::Unexpected`] if the body cannot be encoded.
pub fn prepare_delivery(
    config: &Option<MailConfig>,
    submission: &ContactSubmission,
) -> Result<MailRequest, ContactError> {
    let config = config.as_ref().ok_or(ContactError::NotConfigured)?;

    let body = SendBody {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: TemplateParams {
            from_name: &submission.name,
            from_email: &submission.email,
            subject: submission.subject.value(),
            message: &submission.message,
            to_email: &config.contact_email,
            reply_to: &submission.email,
        },
    };
    let body = serde_json::to_vec(&body).map_err(|e| ContactError::Unexpected(e.to_string()))?;

    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    tracing::debug!(endpoint = %config.endpoint, bytes = body.len(), "contact request prepared");

    Ok(MailRequest { url: config.endpoint.clone(), headers, body })
}

/// Maps the service's HTTP reply to a delivery result.
///
/// # Errors
///
/// [`ContactError::DeliveryFailed`] for any status other than 200.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<(), ContactError> {
    if status == 200 {
        return Ok(());
    }
    Err(ContactError::DeliveryFailed {
        status,
        detail: String::from_utf8_lossy(body).trim().to_string(),
    })
}

/// The terminal, user-facing result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOutcome {
    pub success: bool,
    pub message: String,
}

impl ContactOutcome {
    /// The thank-you outcome for an accepted message.
    #[must_use]
    pub fn sent() -> Self {
        Self { success: true, message: SENT_MESSAGE.to_string() }
    }

    /// A failed outcome carrying `message` for the banner.
    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self { success: false, message: message.to_string() }
    }

    /// User-facing outcome for a delivery result. Details stay in the logs.
    #[must_use]
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => Self::sent(),
            Err(ContactError::NotConfigured) => Self::failed(NOT_CONFIGURED_MESSAGE),
            Err(err) => {
                tracing::warn!(error = %err, "contact delivery failed");
                Self::failed(FAILED_MESSAGE)
            }
        }
    }
}
