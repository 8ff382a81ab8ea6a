//! SMTP relay delivery.

use std::fmt;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::{self, authentication::Credentials},
};
use zeroize::Zeroizing;

use crate::mail::{MailAttachment, MailTransport, MailTransportError, OutgoingMail};

/// Default relay host.
pub const DEFAULT_RELAY: &str = "smtp.gmail.com";

/// Shop inbox that receives contact notifications by default.
pub const DEFAULT_RECIPIENT: &str = "windsormaterialandretailsupply@gmail.com";

/// Display name on the sender mailbox by default.
pub const DEFAULT_FROM_NAME: &str = "Windsor Materials";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Configuration for the SMTP relay.
#[derive(Clone)]
pub struct SmtpConfig {
    /// Relay hostname, e.g. `"smtp.gmail.com"`.
    pub relay: String,

    /// Account the message is sent from. Also the login name.
    pub username: String,

    /// Account password or app password.
    pub password: Zeroizing<String>,

    /// Inbox every notification is delivered to.
    pub recipient: String,

    /// Display name on the sender mailbox.
    pub from_name: String,
}

impl SmtpConfig {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            relay: DEFAULT_RELAY.to_owned(),
            username: username.into(),
            password: Zeroizing::new(password.into()),
            recipient: DEFAULT_RECIPIENT.to_owned(),
            from_name: DEFAULT_FROM_NAME.to_owned(),
        }
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("relay", &self.relay)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("recipient", &self.recipient)
            .field("from_name", &self.from_name)
            .finish()
    }
}

/// Delivers contact notifications over an authenticated SMTP relay.
#[derive(Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SmtpMailer {
    /// Build a mailer for the configured relay. No connection is opened
    /// until the first message is sent.
    ///
    /// # Errors
    ///
    /// Returns an error when the relay's TLS parameters cannot be built.
    pub fn new(config: SmtpConfig) -> Result<Self, smtp::Error> {
        let credentials = Credentials::new(
            config.username.clone(),
            config.password.as_str().to_owned(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(credentials)
            .build();

        Ok(Self { config, transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    #[tracing::instrument(
        name = "mail.smtp.send",
        skip(self, mail),
        fields(relay = %self.config.relay, attachments = mail.attachments.len()),
        err
    )]
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailTransportError> {
        let message = build_message(&self.config, mail)?;

        self.transport.send(message).await.map_err(|error| {
            let code = error.status().map(|code| code.to_string());
            MailTransportError::from_relay(code.as_deref(), error.to_string())
        })?;

        Ok(())
    }
}

/// Assemble the MIME message: an HTML part followed by each attachment.
pub(crate) fn build_message(
    config: &SmtpConfig,
    mail: OutgoingMail,
) -> Result<Message, MailTransportError> {
    let from = Mailbox::new(Some(config.from_name.clone()), parse_address(&config.username)?);
    let to = Mailbox::new(None, parse_address(&config.recipient)?);
    let reply_to = Mailbox::new(None, parse_address(&mail.reply_to)?);

    let mut body = MultiPart::mixed().singlepart(SinglePart::html(mail.html));

    for attachment in &mail.attachments {
        body = body.singlepart(attachment_part(attachment)?);
    }

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(mail.subject)
        .multipart(body)
        .map_err(|error| MailTransportError::InvalidMessage(error.to_string()))
}

fn parse_address(raw: &str) -> Result<Address, MailTransportError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|error| MailTransportError::InvalidMessage(format!("{raw:?}: {error}")))
}

fn attachment_part(attachment: &MailAttachment) -> Result<SinglePart, MailTransportError> {
    let bytes = decode_base64(&attachment.base64_data).map_err(|error| {
        MailTransportError::InvalidMessage(format!(
            "attachment {:?} is not valid base64: {error}",
            attachment.filename
        ))
    })?;

    let content_type = ContentType::parse(&attachment.content_type)
        .or_else(|_| ContentType::parse(FALLBACK_CONTENT_TYPE))
        .map_err(|error| MailTransportError::InvalidMessage(error.to_string()))?;

    Ok(Attachment::new(attachment.filename.clone()).body(bytes, content_type))
}

/// Decode base64 attachment data, tolerating a `data:` URL prefix and
/// embedded whitespace.
fn decode_base64(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = if data.starts_with("data:") {
        data.split_once(',').map_or(data, |(_, payload)| payload)
    } else {
        data
    };

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    BASE64.decode(compact)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig::new("shop@example.com", "app-password")
    }

    fn mail(attachments: Vec<MailAttachment>) -> OutgoingMail {
        OutgoingMail {
            subject: "Custom Order Request from Ada".to_owned(),
            html: "<p>hello</p>".to_owned(),
            reply_to: "ada@example.org".to_owned(),
            attachments,
        }
    }

    #[test]
    fn message_carries_headers_and_attachment() -> TestResult {
        let message = build_message(
            &config(),
            mail(vec![MailAttachment {
                filename: "sketch.png".to_owned(),
                content_type: "image/png".to_owned(),
                base64_data: BASE64.encode(b"png-bytes"),
            }]),
        )?;

        let formatted = String::from_utf8(message.formatted())?;

        assert!(formatted.contains("Subject: Custom Order Request from Ada"), "{formatted}");
        assert!(formatted.contains("Reply-To: ada@example.org"), "{formatted}");
        assert!(formatted.contains("To: windsormaterialandretailsupply@gmail.com"), "{formatted}");
        assert!(formatted.contains("Windsor Materials"), "{formatted}");
        assert!(formatted.contains("<shop@example.com>"), "{formatted}");
        assert!(formatted.contains("sketch.png"), "{formatted}");
        assert!(formatted.contains("image/png"), "{formatted}");

        Ok(())
    }

    #[test]
    fn unknown_content_type_falls_back_to_octet_stream() -> TestResult {
        let message = build_message(
            &config(),
            mail(vec![MailAttachment {
                filename: "mystery".to_owned(),
                content_type: "not a mime type".to_owned(),
                base64_data: BASE64.encode(b"??"),
            }]),
        )?;

        let formatted = String::from_utf8(message.formatted())?;

        assert!(formatted.contains(FALLBACK_CONTENT_TYPE), "{formatted}");

        Ok(())
    }

    #[test]
    fn invalid_base64_is_invalid_message() {
        let result = build_message(
            &config(),
            mail(vec![MailAttachment {
                filename: "broken.png".to_owned(),
                content_type: "image/png".to_owned(),
                base64_data: "***".to_owned(),
            }]),
        );

        assert!(
            matches!(result, Err(MailTransportError::InvalidMessage(_))),
            "expected InvalidMessage, got {result:?}"
        );
    }

    #[test]
    fn invalid_reply_to_is_invalid_message() {
        let mut outgoing = mail(Vec::new());
        outgoing.reply_to = "not-an-address".to_owned();

        let result = build_message(&config(), outgoing);

        assert!(
            matches!(result, Err(MailTransportError::InvalidMessage(_))),
            "expected InvalidMessage, got {result:?}"
        );
    }

    #[test]
    fn data_url_prefix_and_whitespace_are_tolerated() -> TestResult {
        let bytes = decode_base64("data:image/png;base64,aGVs\nbG8=")?;

        assert_eq!(bytes, b"hello");

        Ok(())
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", config());

        assert!(!rendered.contains("app-password"), "password leaked: {rendered}");
    }

    #[tokio::test]
    async fn mailer_builds_without_connecting() -> TestResult {
        let mailer = SmtpMailer::new(config())?;

        assert!(format!("{mailer:?}").contains("smtp.gmail.com"), "unexpected debug output");

        Ok(())
    }
}
