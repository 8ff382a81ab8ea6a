//! Outbound mail.

use async_trait::async_trait;
use mockall::automock;

pub mod errors;
pub mod smtp;

pub use errors::MailTransportError;
pub use smtp::{SmtpConfig, SmtpMailer};

/// A file attached to an outgoing message, still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content_type: String,
    pub base64_data: String,
}

/// A rendered notification ready for delivery to the shop inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub subject: String,
    pub html: String,
    pub reply_to: String,
    pub attachments: Vec<MailAttachment>,
}

#[automock]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver a message to the configured recipient.
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailTransportError>;
}
