use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::Serialize;

use crate::domain::{
    validation::{check_length, check_phone, Field, ValidationError},
    Config, ContactId,
};

/// A single entry in the contact directory.
///
/// The identifier is fixed at construction. The remaining fields can be
/// replaced through their setters, each of which re-applies the same rule as
/// construction and leaves the contact untouched on failure.
///
/// Two contacts are equal if and only if their identifiers are equal,
/// regardless of the other fields.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,

    /// The rules this contact was validated against.
    #[serde(skip)]
    rules: Config,
}

impl Contact {
    /// Creates a contact, validating every field against the default rules.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first invalid field, checked in
    /// the order: id, first name, last name, phone, address.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_config(&Config::default(), id, first_name, last_name, phone, address)
    }

    /// Creates a contact, validating every field against the given rules.
    ///
    /// The rules are retained, so later updates through the setters are held
    /// to the same constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first invalid field, checked in
    /// the order: id, first name, last name, phone, address.
    pub fn with_config(
        config: &Config,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = ContactId::with_config(id.into(), config)?;

        let first_name = first_name.into();
        check_first_name(config, &first_name)?;
        let last_name = last_name.into();
        check_last_name(config, &last_name)?;
        let phone = phone.into();
        check_phone(&phone, config.phone_digits())?;
        let address = address.into();
        check_address(config, &address)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            phone,
            address,
            rules: *config,
        })
    }

    /// The contact's identifier.
    #[must_use]
    pub const fn id(&self) -> &ContactId {
        &self.id
    }

    /// The contact's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The contact's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The contact's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The contact's address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The rules this contact is validated against.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.rules
    }

    /// Replaces the first name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is too long (or empty, when
    /// empty values are disallowed). The contact is unchanged on error.
    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_first_name(&self.rules, &value)?;
        self.first_name = value;
        Ok(())
    }

    /// Replaces the last name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is too long (or empty, when
    /// empty values are disallowed). The contact is unchanged on error.
    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_last_name(&self.rules, &value)?;
        self.last_name = value;
        Ok(())
    }

    /// Replaces the phone number.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless the value is exactly the configured
    /// number of ASCII digits. The contact is unchanged on error.
    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_phone(&value, self.rules.phone_digits())?;
        self.phone = value;
        Ok(())
    }

    /// Replaces the address.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the address is too long (or empty, when
    /// empty values are disallowed). The contact is unchanged on error.
    pub fn set_address(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        check_address(&self.rules, &value)?;
        self.address = value;
        Ok(())
    }
}

fn check_first_name(config: &Config, value: &str) -> Result<(), ValidationError> {
    check_length(Field::FirstName, value, config.max_name_len(), config.allow_empty)
}

fn check_last_name(config: &Config, value: &str) -> Result<(), ValidationError> {
    check_length(Field::LastName, value, config.max_name_len(), config.allow_empty)
}

fn check_address(config: &Config, value: &str) -> Result<(), ValidationError> {
    check_length(Field::Address, value, config.max_address_len(), config.allow_empty)
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, phone {}, address '{}')",
            self.id, self.first_name, self.last_name, self.phone, self.address
        )
    }
}
