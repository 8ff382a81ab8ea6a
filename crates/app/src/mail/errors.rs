//! Mail transport errors.

use thiserror::Error;

/// SMTP reply codes that mean the relay refused our credentials.
const AUTH_REPLY_CODES: [&str; 3] = ["530", "534", "535"];

#[derive(Debug, Error)]
pub enum MailTransportError {
    /// The relay rejected the configured credentials.
    #[error("mail relay rejected credentials: {0}")]
    Authentication(String),

    /// The relay could not be reached or refused the message.
    #[error("mail delivery failed: {0}")]
    Delivery(String),

    /// The message could not be assembled.
    #[error("invalid mail message: {0}")]
    InvalidMessage(String),
}

impl MailTransportError {
    /// Classify a relay failure from its reply code and description.
    #[must_use]
    pub fn from_relay(code: Option<&str>, description: String) -> Self {
        if is_auth_failure(code, &description) {
            Self::Authentication(description)
        } else {
            Self::Delivery(description)
        }
    }
}

fn is_auth_failure(code: Option<&str>, description: &str) -> bool {
    code.is_some_and(|code| AUTH_REPLY_CODES.contains(&code))
        || description.contains("Invalid login")
        || description.contains("auth")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_reply_codes_classify_as_authentication() {
        let error = MailTransportError::from_relay(Some("535"), "5.7.8 Username and Password not accepted".to_owned());

        assert!(
            matches!(error, MailTransportError::Authentication(_)),
            "expected Authentication, got {error:?}"
        );
    }

    #[test]
    fn auth_wording_classifies_as_authentication() {
        for description in ["Invalid login: 535-5.7.8", "authentication failed", "no auth mechanism offered"] {
            let error = MailTransportError::from_relay(None, description.to_owned());

            assert!(
                matches!(error, MailTransportError::Authentication(_)),
                "expected Authentication for {description:?}, got {error:?}"
            );
        }
    }

    #[test]
    fn auth_wording_match_is_case_sensitive() {
        for description in ["AUTH PLAIN not supported", "Author header rejected", "Mailbox unavailable"] {
            let error = MailTransportError::from_relay(Some("550"), description.to_owned());

            assert!(
                matches!(error, MailTransportError::Delivery(_)),
                "expected Delivery for {description:?}, got {error:?}"
            );
        }
    }

    #[test]
    fn other_failures_classify_as_delivery() {
        let error = MailTransportError::from_relay(Some("421"), "service not available".to_owned());

        assert!(
            matches!(error, MailTransportError::Delivery(_)),
            "expected Delivery, got {error:?}"
        );
    }
}
