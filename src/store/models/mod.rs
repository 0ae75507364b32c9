pub mod assignment;
pub mod attendance;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod message;
pub mod resource;
pub mod submission;
pub mod user;

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::error::ApiError;

/// Accepted values for `users.role`
pub const ROLES: [&str; 3] = ["teacher", "student", "admin"];

/// Accepted values for `attendance.status`
pub const ATTENDANCE_STATUSES: [&str; 3] = ["present", "absent", "late"];

/// Deserializer for patch fields on nullable columns. A field that is
/// absent stays at the serde default (outer `None`, "leave unchanged");
/// a field that is present but `null` becomes `Some(None)` ("clear it").
/// Plain `Option<Option<T>>` cannot make that distinction on its own.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Finish a validation pass: empty map is success, anything else becomes
/// a 400 with per-field diagnostics.
pub(crate) fn reject_invalid(errors: HashMap<String, String>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "invalid request body",
            Some(errors),
        ))
    }
}

/// Shallow shape check, enough to reject obvious garbage before the store
/// sees it. Full RFC-compliant parsing is out of scope.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.len() > 320 || email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_email_shapes() {
        assert!(is_valid_email("anna@school.example"));
        assert!(is_valid_email("first.last@sub.school.example"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@school.example"));
        assert!(!is_valid_email("anna@"));
        assert!(!is_valid_email("anna@school"));
        assert!(!is_valid_email("anna b@school.example"));
        assert!(!is_valid_email("anna@.example"));
    }
}
