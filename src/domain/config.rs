use std::{io, path::Path};

use serde::{Deserialize, Serialize};

/// Validation rules for contact fields.
///
/// The defaults reproduce the standard contact constraints: identifiers and
/// names of at most 10 characters, a 10-digit phone number, and an address of
/// at most 30 characters. Empty values are accepted unless `allow_empty` is
/// turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The maximum length of a contact ID, in characters.
    max_id_len: usize,

    /// The maximum length of a first or last name, in characters.
    max_name_len: usize,

    /// The exact number of digits in a phone number.
    phone_digits: usize,

    /// The maximum length of an address, in characters.
    max_address_len: usize,

    /// Whether empty IDs, names and addresses are accepted.
    ///
    /// Phone numbers are never empty, since they must have exactly
    /// `phone_digits` digits.
    ///
    /// Defaults to `true`.
    pub allow_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_id_len: default_max_id_len(),
            max_name_len: default_max_name_len(),
            phone_digits: default_phone_digits(),
            max_address_len: default_max_address_len(),
            allow_empty: default_allow_empty(),
        }
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),

    /// The file content is not a valid configuration.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the maximum contact ID length.
    #[must_use]
    pub const fn max_id_len(&self) -> usize {
        self.max_id_len
    }

    /// Returns the maximum first and last name length.
    #[must_use]
    pub const fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Returns the required number of phone digits.
    #[must_use]
    pub const fn phone_digits(&self) -> usize {
        self.phone_digits
    }

    /// Returns the maximum address length.
    #[must_use]
    pub const fn max_address_len(&self) -> usize {
        self.max_address_len
    }

    /// Sets the maximum contact ID length.
    pub const fn set_max_id_len(&mut self, value: usize) {
        self.max_id_len = value;
    }

    /// Sets the maximum first and last name length.
    pub const fn set_max_name_len(&mut self, value: usize) {
        self.max_name_len = value;
    }

    /// Sets the required number of phone digits.
    pub const fn set_phone_digits(&mut self, value: usize) {
        self.phone_digits = value;
    }

    /// Sets the maximum address length.
    pub const fn set_max_address_len(&mut self, value: usize) {
        self.max_address_len = value;
    }
}

const fn default_max_id_len() -> usize {
    10
}

const fn default_max_name_len() -> usize {
    10
}

const fn default_phone_digits() -> usize {
    10
}

const fn default_max_address_len() -> usize {
    30
}

const fn default_allow_empty() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_max_id_len")]
        max_id_len: usize,

        #[serde(default = "default_max_name_len")]
        max_name_len: usize,

        #[serde(default = "default_phone_digits")]
        phone_digits: usize,

        #[serde(default = "default_max_address_len")]
        max_address_len: usize,

        #[serde(default = "default_allow_empty")]
        allow_empty: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                max_id_len,
                max_name_len,
                phone_digits,
                max_address_len,
                allow_empty,
            } => Self {
                max_id_len,
                max_name_len,
                phone_digits,
                max_address_len,
                allow_empty,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            max_id_len: config.max_id_len,
            max_name_len: config.max_name_len,
            phone_digits: config.phone_digits,
            max_address_len: config.max_address_len,
            allow_empty: config.allow_empty,
        }
    }
}
