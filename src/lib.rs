//! In-memory Contact Directory
//!
//! Contacts are uniquely identified records whose fields are validated on
//! creation and on every update.

pub mod domain;
pub use domain::{Config, ConfigError, Contact, ContactId, Field, ValidationError};

/// In-memory storage of contacts.
pub mod storage;
pub use storage::{Directory, Error, ErrorKind};
