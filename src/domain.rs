//! Domain models for the contact directory.
//!
//! This module contains the contact record, its validated identifier, the
//! field validation rules, and their configuration.

/// Contact record and its validating setters.
pub mod contact;
pub use contact::Contact;

mod config;
pub use config::{Config, Error as ConfigError};

/// Validated contact identifiers.
pub mod contact_id;
pub use contact_id::ContactId;

mod validation;
pub use validation::{Field, ValidationError};
