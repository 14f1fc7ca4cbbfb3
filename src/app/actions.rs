//! Side effects requested by the event handler.
//!
//! The handler never touches the host. It returns [`Action`]s and the plugin
//! shim carries them out with the Zellij API.

use crate::contact::MailRequest;
use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide the plugin pane.
    CloseFocus,

    /// Send a request to the catalog worker.
    PostToWorker(WorkerMessage),

    /// Open a record link with the configured opener command.
    OpenUrl { url: String },

    /// POST the contact form to the mail service. The reply comes back as
    /// `Event::ContactDelivered` or `Event::ContactTransportFailed`.
    SendContact(MailRequest),
}
