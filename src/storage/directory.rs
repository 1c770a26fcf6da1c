//! An in-memory store of contacts
//!
//! The [`Directory`] owns every [`Contact`] it holds, keyed by [`ContactId`].
//! It guarantees identifiers are unique and that lookups, updates and deletes
//! only ever touch contacts that exist. Field validation is left to
//! [`Contact`] itself.

use std::collections::{hash_map::Entry, HashMap};

use tracing::instrument;

use crate::domain::{Config, Contact, ContactId, ValidationError};

/// An in-memory collection of contacts keyed by their identifiers.
///
/// Every key equals the identifier of the contact stored under it.
#[derive(Debug, Default)]
pub struct Directory {
    contacts: HashMap<ContactId, Contact>,

    /// Rules applied to contacts created by [`Directory::insert_new`].
    config: Config,
}

/// Errors that can occur when operating on a [`Directory`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A supplied identifier or field value violates its constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with the same identifier is already stored.
    #[error("contact with ID {0} already exists")]
    Duplicate(ContactId),

    /// No contact is stored under the identifier.
    #[error("contact with ID {0} does not exist")]
    NotFound(String),
}

/// The class of a directory [`Error`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Validation`].
    Validation,
    /// See [`Error::Duplicate`].
    Duplicate,
    /// See [`Error::NotFound`].
    NotFound,
}

impl Error {
    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Duplicate(_) => ErrorKind::Duplicate,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

impl Directory {
    /// Creates an empty directory using the default validation rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory whose new contacts follow `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            contacts: HashMap::new(),
            config,
        }
    }

    /// Creates an empty directory with room for `capacity` contacts, using
    /// the default validation rules.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config_and_capacity(Config::default(), capacity)
    }

    /// Creates an empty directory with room for `capacity` contacts whose new
    /// contacts follow `config`.
    #[must_use]
    pub fn with_config_and_capacity(config: Config, capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
            config,
        }
    }

    /// The rules applied to contacts created by this directory.
    ///
    /// Contacts added through [`Directory::insert`] keep the rules they were
    /// built with, so stored contacts need not satisfy these. Use
    /// [`Contact::config`] for the rules a given contact is held to.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Adds an existing contact.
    ///
    /// The contact keeps the rules it was created with, which need not match
    /// the directory's own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if a contact with the same identifier is
    /// already stored. The stored contact is left untouched.
    #[instrument(skip_all, fields(id = %contact.id()))]
    pub fn insert(&mut self, contact: Contact) -> Result<&Contact, Error> {
        match self.contacts.entry(contact.id().clone()) {
            Entry::Occupied(entry) => {
                tracing::debug!("Rejected duplicate contact: {}", entry.key());
                Err(Error::Duplicate(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                tracing::info!("Added contact: {}", entry.key());
                let contact: &Contact = entry.insert(contact);
                Ok(contact)
            }
        }
    }

    /// Creates a contact from its fields and adds it.
    ///
    /// The contact is validated against the directory's [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if any field is invalid, or
    /// [`Error::Duplicate`] if the identifier is already in use. Nothing is
    /// stored in either case.
    pub fn insert_new(
        &mut self,
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<&Contact, Error> {
        let contact =
            Contact::with_config(&self.config, id, first_name, last_name, phone, address)
                .inspect_err(|e| tracing::debug!("Rejected new contact: {e}"))?;
        self.insert(contact)
    }

    /// Removes a contact, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> Result<Contact, Error> {
        let contact = self
            .contacts
            .remove(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        tracing::info!("Removed contact: {id}");
        Ok(contact)
    }

    /// Looks up a contact.
    ///
    /// The returned reference is the stored contact itself, not a copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier.
    pub fn get(&self, id: &str) -> Result<&Contact, Error> {
        self.contacts
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Looks up a contact for modification.
    ///
    /// Changes go through the contact's validating setters, and its identifier
    /// cannot be changed, so the directory's invariants are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Contact, Error> {
        self.contacts
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Replaces the first name of a stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier, or
    /// [`Error::Validation`] if the name is invalid.
    #[instrument(level = "debug", skip(self, first_name))]
    pub fn update_first_name(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
    ) -> Result<(), Error> {
        self.get_mut(id)?.set_first_name(first_name)?;
        tracing::trace!("Updated first name of contact {id}");
        Ok(())
    }

    /// Replaces the last name of a stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier, or
    /// [`Error::Validation`] if the name is invalid.
    #[instrument(level = "debug", skip(self, last_name))]
    pub fn update_last_name(&mut self, id: &str, last_name: impl Into<String>) -> Result<(), Error> {
        self.get_mut(id)?.set_last_name(last_name)?;
        tracing::trace!("Updated last name of contact {id}");
        Ok(())
    }

    /// Replaces the phone number of a stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier, or
    /// [`Error::Validation`] if the phone number is invalid.
    #[instrument(level = "debug", skip(self, phone))]
    pub fn update_phone(&mut self, id: &str, phone: impl Into<String>) -> Result<(), Error> {
        self.get_mut(id)?.set_phone(phone)?;
        tracing::trace!("Updated phone number of contact {id}");
        Ok(())
    }

    /// Replaces the address of a stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no contact has this identifier, or
    /// [`Error::Validation`] if the address is invalid.
    #[instrument(level = "debug", skip(self, address))]
    pub fn update_address(&mut self, id: &str, address: impl Into<String>) -> Result<(), Error> {
        self.get_mut(id)?.set_address(address)?;
        tracing::trace!("Updated address of contact {id}");
        Ok(())
    }

    /// The number of stored contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a contact with this identifier is stored.
    ///
    /// Unlike [`Directory::get`], an unknown identifier is not an error.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    /// Iterates over the stored contacts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts.values()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::collections::hash_map::Values<'a, ContactId, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.values()
    }
}
