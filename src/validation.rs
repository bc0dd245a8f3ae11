use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()-]+$").expect("valid phone regex"));

const MIN_PHONE_LEN: usize = 10;

/// Input types the contact form distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

/// Checks one field value. Format checks apply only to non-empty values, so
/// an optional email or phone may be left blank.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !PHONE_RE.is_match(value) || value.chars().count() < MIN_PHONE_LEN => {
            Err(FieldError::InvalidPhone)
        }
        _ => Ok(()),
    }
}
