//! Person domain model and submission payloads.
//!
//! This module defines the [`Person`] record mirrored from the directory
//! service, the [`PersonDraft`] payload used to create a record, and the
//! structurally distinct [`PersonPatch`] payload used to change a subset of
//! fields. Drafts and patches share one normalization rule: required names are
//! trimmed, and an optional field that is empty or whitespace-only after
//! trimming becomes *absent* and is never serialized.
//!
//! Validation happens here, before any network call: required names must be
//! non-empty after trimming, names and phone numbers respect the service's
//! length limits, and an email (when present) must match a minimal
//! `local@domain.tld` shape — exactly one `@`, a non-empty local part, and a
//! domain with an interior dot.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DirectoryError, Result};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Maximum length of `first_name` and `last_name`, mirroring the service.
const MAX_NAME_LEN: usize = 100;

/// Maximum length of `phone`, mirroring the service.
const MAX_PHONE_LEN: usize = 20;

/// Opaque identifier of a directory record.
///
/// Issued by the service on create and immutable afterwards. The wire form is
/// a plain string, so the newtype serializes transparently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A contact record as held by the directory service.
///
/// Identity and both timestamps are service-assigned and read-only from this
/// side; the local mirror only ever stores representations the service
/// returned, never client-guessed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Person {
    /// Returns the display name, `"first_name last_name"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns a human-readable string describing how long ago the record
    /// was last updated.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn updated_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.updated_at.timestamp();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Payload for creating a new record.
///
/// The service assigns `id`, `created_at` and `updated_at`; the caller
/// supplies the names and any optional contact fields. Absent optionals are
/// not serialized at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PersonDraft {
    /// Applies the submission normalization rule.
    ///
    /// Required names are trimmed; optional fields that are blank after
    /// trimming become `None` so they are never sent.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = normalize_optional(self.email);
        self.phone = normalize_optional(self.phone);
        self.address = normalize_optional(self.address);
        self
    }

    /// Checks the draft against the caller-side rules.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when a required name is empty
    /// or over-long, the phone exceeds the service limit, or the email does
    /// not match the minimal shape.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.first_name, "first_name")?;
        validate_name(&self.last_name, "last_name")?;
        validate_contact_fields(self.email.as_deref(), self.phone.as_deref())
    }
}

/// Payload for changing a subset of a record's fields.
///
/// Structurally distinct from [`PersonDraft`]: every field is optional, and
/// only fields actually present are serialized. A field left absent is left
/// untouched service-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PersonPatch {
    /// Applies the submission normalization rule.
    ///
    /// Any field that is blank after trimming becomes absent — "blank means
    /// leave unchanged", never "clear the field".
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.first_name = normalize_optional(self.first_name);
        self.last_name = normalize_optional(self.last_name);
        self.email = normalize_optional(self.email);
        self.phone = normalize_optional(self.phone);
        self.address = normalize_optional(self.address);
        self
    }

    /// Returns `true` when no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }

    /// Checks the present fields against the caller-side rules.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when a present name is
    /// over-long, the phone exceeds the service limit, or the email does not
    /// match the minimal shape.
    pub fn validate(&self) -> Result<()> {
        if let Some(first_name) = &self.first_name {
            validate_name(first_name, "first_name")?;
        }
        if let Some(last_name) = &self.last_name {
            validate_name(last_name, "last_name")?;
        }
        validate_contact_fields(self.email.as_deref(), self.phone.as_deref())
    }
}

/// Turns a blank optional into an absent one, trimming surviving values.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn validate_name(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(DirectoryError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_contact_fields(email: Option<&str>, phone: Option<&str>) -> Result<()> {
    if let Some(email) = email {
        if !email_shape_ok(email) {
            return Err(DirectoryError::Validation(format!(
                "invalid email format: {email}"
            )));
        }
    }
    if let Some(phone) = phone {
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(DirectoryError::Validation(format!(
                "phone must be at most {MAX_PHONE_LEN} characters"
            )));
        }
    }
    Ok(())
}

/// Minimal `local@domain.tld` shape check.
///
/// Exactly one `@`, a non-empty local part, no whitespace anywhere, and a
/// domain containing a dot that is neither its first nor its last character.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .find('.')
        .is_some_and(|dot| dot > 0 && dot + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str) -> PersonDraft {
        PersonDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..PersonDraft::default()
        }
    }

    #[test]
    fn normalization_trims_names_and_drops_blank_optionals() {
        let normalized = PersonDraft {
            first_name: "  Ada ".to_string(),
            last_name: " Lovelace".to_string(),
            email: Some("   ".to_string()),
            phone: Some(" 123 ".to_string()),
            address: Some(String::new()),
        }
        .normalized();

        assert_eq!(normalized.first_name, "Ada");
        assert_eq!(normalized.last_name, "Lovelace");
        assert_eq!(normalized.email, None);
        assert_eq!(normalized.phone, Some("123".to_string()));
        assert_eq!(normalized.address, None);
    }

    #[test]
    fn empty_required_name_is_rejected() {
        let result = draft("", "Lovelace").validate();
        assert!(matches!(result, Err(DirectoryError::Validation(_))));

        let result = draft("Ada", "   ").normalized().validate();
        assert!(matches!(result, Err(DirectoryError::Validation(_))));
    }

    #[test]
    fn over_long_fields_are_rejected() {
        let long_name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(draft(&long_name, "Lovelace").validate().is_err());

        let mut valid = draft("Ada", "Lovelace");
        valid.phone = Some("0".repeat(MAX_PHONE_LEN + 1));
        assert!(valid.validate().is_err());
    }

    #[test]
    fn email_shape_accepts_minimal_addresses() {
        for ok in ["ada@example.com", "a.b+c@sub.domain.org", "x@y.co"] {
            assert!(email_shape_ok(ok), "{ok} should pass");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for bad in [
            "not-an-email",
            "a@b",
            "@example.com",
            "a@.com",
            "a@com.",
            "a b@example.com",
            "a@b@example.com",
        ] {
            assert!(!email_shape_ok(bad), "{bad} should fail");
        }
    }

    #[test]
    fn draft_serialization_omits_absent_optionals() {
        let value = serde_json::to_value(draft("Ada", "Lovelace")).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 2);
        assert_eq!(object["first_name"], "Ada");
        assert_eq!(object["last_name"], "Lovelace");
    }

    #[test]
    fn patch_serializes_only_supplied_fields() {
        let patch = PersonPatch {
            phone: Some("123".to_string()),
            ..PersonPatch::default()
        };
        let value = serde_json::to_value(&patch).expect("serialize");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["phone"], "123");
    }

    #[test]
    fn blank_patch_fields_become_absent() {
        let patch = PersonPatch {
            first_name: Some("  ".to_string()),
            email: Some(String::new()),
            address: Some(" 1 Infinite Loop ".to_string()),
            ..PersonPatch::default()
        }
        .normalized();

        assert_eq!(patch.first_name, None);
        assert_eq!(patch.email, None);
        assert_eq!(patch.address, Some("1 Infinite Loop".to_string()));
        assert!(!patch.is_empty());
        assert!(PersonPatch::default().is_empty());
    }
}
