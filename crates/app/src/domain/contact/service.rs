//! Contact service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::contact::{
        errors::ContactError,
        models::{ContactAttachment, ContactSubmission},
        render,
    },
    mail::{MailAttachment, MailTransport, OutgoingMail, smtp::DEFAULT_FROM_NAME},
};

/// Relays contact submissions to the shop inbox.
#[derive(Clone)]
pub struct MailContactService {
    transport: Option<Arc<dyn MailTransport>>,
    from_name: String,
}

impl std::fmt::Debug for MailContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailContactService")
            .field("transport_configured", &self.transport.is_some())
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl MailContactService {
    #[must_use]
    pub fn new(transport: Option<Arc<dyn MailTransport>>, from_name: impl Into<String>) -> Self {
        Self {
            transport,
            from_name: from_name.into(),
        }
    }

    /// A contact relay with no transport. Every submission fails with
    /// [`ContactError::NotConfigured`].
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::new(None, DEFAULT_FROM_NAME)
    }
}

#[async_trait]
impl ContactService for MailContactService {
    fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    #[tracing::instrument(
        name = "contact.submit",
        skip(self, body),
        fields(body_bytes = body.len(), form_type = tracing::field::Empty),
        err(Display)
    )]
    async fn submit(&self, body: &[u8]) -> Result<(), ContactError> {
        let transport = self.transport.as_ref().ok_or(ContactError::NotConfigured)?;

        let submission: ContactSubmission = serde_json::from_slice(body).map_err(|error| {
            debug!(error = %error, "rejecting malformed contact body");
            ContactError::InvalidJson
        })?;

        let request = submission
            .into_request()
            .ok_or(ContactError::MissingFields)?;

        tracing::Span::current().record("form_type", tracing::field::debug(request.form_type));

        let mail = OutgoingMail {
            subject: render::subject(&request),
            html: render::html(&request, &self.from_name),
            reply_to: request.email.clone(),
            attachments: request.attachments.into_iter().map(into_mail_attachment).collect(),
        };

        let attachments = mail.attachments.len();

        transport.send(mail).await?;

        info!(attachments, "contact notification sent");

        Ok(())
    }
}

fn into_mail_attachment(attachment: ContactAttachment) -> MailAttachment {
    MailAttachment {
        filename: attachment.name,
        content_type: attachment.content_type,
        base64_data: attachment.data,
    }
}

#[automock]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Whether a mail transport is wired up.
    fn is_configured(&self) -> bool;

    /// Validate a raw submission body and deliver it to the shop inbox.
    async fn submit(&self, body: &[u8]) -> Result<(), ContactError>;
}
