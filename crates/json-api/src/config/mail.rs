//! Mail Config

use clap::Args;

use windsor_app::mail::{
    SmtpConfig,
    smtp::{DEFAULT_FROM_NAME, DEFAULT_RECIPIENT, DEFAULT_RELAY},
};

use super::non_blank;

/// SMTP relay settings.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// Mailbox used to log in to the relay and send from
    #[arg(long, env = "GMAIL_EMAIL")]
    pub gmail_email: Option<String>,

    /// Password (or app password) for the sending mailbox
    #[arg(long, env = "GMAIL_PASSWORD", hide_env_values = true)]
    pub gmail_password: Option<String>,

    /// SMTP relay host
    #[arg(long, env = "SMTP_RELAY", default_value = DEFAULT_RELAY)]
    pub smtp_relay: String,

    /// Inbox that receives contact notifications
    #[arg(long, env = "CONTACT_RECIPIENT", default_value = DEFAULT_RECIPIENT)]
    pub contact_recipient: String,

    /// Display name on outgoing mail
    #[arg(long, env = "MAIL_FROM_NAME", default_value = DEFAULT_FROM_NAME)]
    pub mail_from_name: String,
}

impl MailConfig {
    /// Relay settings, or `None` unless both the mailbox and password are set.
    pub(crate) fn to_smtp_config(&self) -> Option<SmtpConfig> {
        let username = non_blank(self.gmail_email.as_deref())?;
        let password = non_blank(self.gmail_password.as_deref())?;

        Some(SmtpConfig {
            relay: self.smtp_relay.clone(),
            recipient: self.contact_recipient.clone(),
            from_name: self.mail_from_name.clone(),
            ..SmtpConfig::new(username, password)
        })
    }
}
