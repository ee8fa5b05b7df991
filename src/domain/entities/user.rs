//! User entity and the candidate record used for create/update.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::domain::StoreError;

/// Simple `local@domain.tld` shape check.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// A stored directory entry.
///
/// `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input data for creating or replacing a user.
///
/// Carries no id: ids are always allocated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks the name and email rules.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation { field: "name" });
        }

        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(StoreError::Validation { field: "email" });
        }

        Ok(())
    }

    pub(crate) fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        assert!(NewUser::new("Ada", "ada@x.io").validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        for name in ["", "   ", "\t\n"] {
            let result = NewUser::new(name, "ada@x.io").validate();
            assert!(matches!(
                result,
                Err(StoreError::Validation { field: "name" })
            ));
        }
    }

    #[test]
    fn test_email_pattern() {
        let bad = [
            "",
            "ada",
            "ada@x",
            "@x.io",
            "ada@.io",
            "ada@x.",
            "a da@x.io",
            "ada@@x.io",
        ];
        for email in bad {
            let result = NewUser::new("Ada", email).validate();
            assert!(
                matches!(result, Err(StoreError::Validation { field: "email" })),
                "expected {email:?} to be rejected"
            );
        }

        for email in ["ada@x.io", "john.doe@example.com", "a+b@sub.domain.org"] {
            assert!(NewUser::new("Ada", email).validate().is_ok(), "{email}");
        }
    }

    #[test]
    fn test_into_user_keeps_fields() {
        let user = NewUser::new("Ada", "ada@x.io").into_user(9);
        assert_eq!(user.id, 9);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@x.io");
    }
}
