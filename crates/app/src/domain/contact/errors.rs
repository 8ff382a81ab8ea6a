//! Contact errors.

use thiserror::Error;

use crate::mail::MailTransportError;

/// Reasons a contact submission was not delivered. The display text of each
/// variant is safe to show to visitors.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Email service not configured. Please contact support.")]
    NotConfigured,

    #[error("Invalid JSON body.")]
    InvalidJson,

    #[error("Missing required fields: name, phone, email, and product are required")]
    MissingFields,

    #[error("Email authentication failed. Please check email credentials.")]
    AuthenticationFailed(#[source] MailTransportError),

    #[error("Failed to send email. Please try again or contact us directly.")]
    DeliveryFailed(#[source] MailTransportError),
}

impl ContactError {
    /// Whether the visitor can fix this by changing the submission.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidJson | Self::MissingFields)
    }

    /// Short stable label for logs and metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::InvalidJson => "invalid_json",
            Self::MissingFields => "missing_fields",
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::DeliveryFailed(_) => "delivery_failed",
        }
    }
}

impl From<MailTransportError> for ContactError {
    fn from(error: MailTransportError) -> Self {
        match error {
            MailTransportError::Authentication(_) => Self::AuthenticationFailed(error),
            MailTransportError::Delivery(_) | MailTransportError::InvalidMessage(_) => {
                Self::DeliveryFailed(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_auth_failure_maps_to_authentication_failed() {
        let error = ContactError::from(MailTransportError::Authentication("535".to_owned()));

        assert!(
            matches!(error, ContactError::AuthenticationFailed(_)),
            "expected AuthenticationFailed, got {error:?}"
        );
        assert!(!error.is_client_error());
    }

    #[test]
    fn malformed_message_maps_to_delivery_failed() {
        let error = ContactError::from(MailTransportError::InvalidMessage("bad base64".to_owned()));

        assert!(
            matches!(error, ContactError::DeliveryFailed(_)),
            "expected DeliveryFailed, got {error:?}"
        );
    }
}
