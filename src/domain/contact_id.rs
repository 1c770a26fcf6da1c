use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use serde::Serialize;

use crate::domain::{
    validation::{check_length, Field, ValidationError},
    Config,
};

/// A validated contact identifier.
///
/// Identifiers are fixed for the lifetime of a contact and key it within a
/// [`Directory`](crate::Directory). Under the default [`Config`] an identifier
/// is at most 10 characters long.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Creates a new `ContactId` using the default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if the identifier is longer than
    /// 10 characters.
    pub fn new(s: String) -> Result<Self, ValidationError> {
        Self::with_config(s, &Config::default())
    }

    /// Creates a new `ContactId` using the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] if the identifier exceeds
    /// [`Config::max_id_len`], or [`ValidationError::Empty`] if it is empty
    /// and the rules forbid empty values.
    pub fn with_config(s: String, config: &Config) -> Result<Self, ValidationError> {
        check_length(Field::Id, &s, config.max_id_len(), config.allow_empty)?;
        Ok(Self(s))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for ContactId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
