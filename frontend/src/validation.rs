use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Length the way the browser reports `value.length`: UTF-16 code units.
fn browser_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// A rejected contact field. The display text is what the form shows under
/// the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name (2+ characters).")]
    Name,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please provide a brief message (10+ characters).")]
    Message,
}

/// Body posted to the contact endpoint.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if browser_len(value.trim()) >= MIN_NAME_CHARS {
        Ok(())
    } else {
        Err(FieldError::Name)
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::Email)
    }
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    if browser_len(value.trim()) >= MIN_MESSAGE_CHARS {
        Ok(())
    } else {
        Err(FieldError::Message)
    }
}

/// Checks every field; one bad field does not hide the others.
pub fn validate_contact(form: &ContactMessage) -> FieldErrors {
    FieldErrors {
        name: validate_name(&form.name).err(),
        email: validate_email(&form.email).err(),
        message: validate_message(&form.message).err(),
    }
}
