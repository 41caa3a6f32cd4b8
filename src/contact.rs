//! Contact form submission. Messages are handed to the visitor's mail
//! client through a `mailto:` link; nothing is sent from the page.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

use crate::content::ContactFormSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("{0:?} doesn't look like an email address")]
    InvalidEmail(String),
    #[error("The message is empty")]
    MissingMessage,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !looks_like_email(&self.email) {
            return Err(ContactFormError::InvalidEmail(self.email.clone()));
        }
        if self.message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(())
    }

    /// Validates the message and builds the link that opens it in a mail
    /// client.
    pub fn mailto_href(&self, settings: &ContactFormSettings) -> Result<String, ContactFormError> {
        self.validate()?;
        let subject = format!("{} {}", settings.subject_prefix, self.name);
        let body = format!("{}\n\n{} <{}>", self.message, self.name, self.email);
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            settings.recipient,
            encode_component(&subject),
            encode_component(&body)
        ))
    }
}

// A form field only needs one '@' with something on both sides and a dot
// in the domain; the mail client does the real checking.
pub(crate) fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

// form_urlencoded writes spaces as '+', which mail clients show literally.
// A literal '+' is already escaped as %2B, so every remaining '+' is a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ContactFormSettings {
        ContactFormSettings {
            recipient: "jack@example.com".to_string(),
            subject_prefix: "Hello from".to_string(),
        }
    }

    #[test]
    fn test_new_trims_fields() {
        let msg = ContactMessage::new("  Ada ", "\tada@example.com\n", "  hi  ");
        assert_eq!(
            msg,
            ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_validation() {
        assert_eq!(ContactMessage::new("Ada", "ada@example.com", "hi").validate(), Ok(()));
        assert_eq!(
            ContactMessage::new("   ", "ada@example.com", "hi").validate(),
            Err(ContactFormError::MissingName)
        );
        assert_eq!(
            ContactMessage::new("Ada", "ada@example.com", "").validate(),
            Err(ContactFormError::MissingMessage)
        );
        for bad in ["", "ada", "@example.com", "ada@", "ada@example", "ada@.com", "a@b@c.com", "a da@example.com"] {
            assert_eq!(
                ContactMessage::new("Ada", bad, "hi").validate(),
                Err(ContactFormError::InvalidEmail(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_mailto_href() {
        let msg = ContactMessage::new("Ada Lovelace", "ada@example.com", "Fish & chips? 1+1=2");
        let href = msg.mailto_href(&settings()).unwrap();
        assert_eq!(
            href,
            "mailto:jack@example.com\
             ?subject=Hello%20from%20Ada%20Lovelace\
             &body=Fish%20%26%20chips%3F%201%2B1%3D2%0A%0AAda%20Lovelace%20%3Cada%40example.com%3E"
        );
        assert!(!href.contains('+'));
    }

    #[test]
    fn test_mailto_href_requires_valid_message() {
        let msg = ContactMessage::new("Ada", "not-an-email", "hi");
        assert_eq!(
            msg.mailto_href(&settings()),
            Err(ContactFormError::InvalidEmail("not-an-email".to_string()))
        );
    }
}
