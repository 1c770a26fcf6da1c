//! Field-level validation rules shared by contact identifiers and records.

use std::fmt;

/// The contact field a value was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The immutable contact identifier.
    Id,
    /// The contact's first name.
    FirstName,
    /// The contact's last name.
    LastName,
    /// The contact's phone number.
    Phone,
    /// The contact's postal address.
    Address,
}

impl Field {
    /// A human-readable label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "contact ID",
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone number",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a supplied value violates its field's constraint.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty and the active rules forbid empty values.
    #[error("{0} cannot be empty")]
    Empty(Field),

    /// The value exceeds the maximum length for its field.
    #[error("{field} must be {max} characters or less, got {actual}")]
    TooLong {
        /// The field being validated.
        field: Field,
        /// The maximum permitted length, in characters.
        max: usize,
        /// The length of the rejected value, in characters.
        actual: usize,
    },

    /// The phone number is not the required number of characters.
    #[error("phone number must be exactly {expected} digits, got {actual} characters")]
    PhoneLength {
        /// The required number of digits.
        expected: usize,
        /// The length of the rejected value, in characters.
        actual: usize,
    },

    /// The phone number contains something other than ASCII digits.
    #[error("phone number must contain only digits, got '{0}'")]
    PhoneNotNumeric(String),
}

impl ValidationError {
    /// The field whose value was rejected.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Empty(field) | Self::TooLong { field, .. } => *field,
            Self::PhoneLength { .. } | Self::PhoneNotNumeric(_) => Field::Phone,
        }
    }
}

/// Checks a free-text value against a maximum length.
///
/// Length is measured in Unicode scalar values, not bytes.
pub(crate) fn check_length(
    field: Field,
    value: &str,
    max: usize,
    allow_empty: bool,
) -> Result<(), ValidationError> {
    if value.is_empty() && !allow_empty {
        return Err(ValidationError::Empty(field));
    }

    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

/// Checks that a phone number is exactly `digits` ASCII digits.
pub(crate) fn check_phone(value: &str, digits: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual != digits {
        return Err(ValidationError::PhoneLength {
            expected: digits,
            actual,
        });
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotNumeric(value.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", true; "empty allowed")]
    #[test_case("a", true; "single character")]
    #[test_case("abcdefghij", true; "at limit")]
    #[test_case("ÅÄÖåäöÉéÈè", true; "multibyte at limit")]
    fn accepts_within_limit(value: &str, allow_empty: bool) {
        assert_eq!(check_length(Field::FirstName, value, 10, allow_empty), Ok(()));
    }

    #[test]
    fn rejects_over_limit() {
        let error = check_length(Field::LastName, "abcdefghijk", 10, true).unwrap_err();
        assert_eq!(
            error,
            ValidationError::TooLong {
                field: Field::LastName,
                max: 10,
                actual: 11
            }
        );
        assert_eq!(error.field(), Field::LastName);
    }

    #[test]
    fn rejects_empty_when_disallowed() {
        let error = check_length(Field::Address, "", 30, false).unwrap_err();
        assert_eq!(error, ValidationError::Empty(Field::Address));
    }

    #[test_case("5551234567"; "ten digits")]
    #[test_case("0000000000"; "all zeroes")]
    fn accepts_phone(value: &str) {
        assert_eq!(check_phone(value, 10), Ok(()));
    }

    #[test_case("123456789", 9; "too short")]
    #[test_case("12345678901", 11; "too long")]
    #[test_case("", 0; "empty")]
    fn rejects_phone_length(value: &str, actual: usize) {
        assert_eq!(
            check_phone(value, 10),
            Err(ValidationError::PhoneLength {
                expected: 10,
                actual
            })
        );
    }

    #[test_case("123-456-78"; "dashes")]
    #[test_case("555123456a"; "trailing letter")]
    #[test_case("５５５１２３４５６７"; "full-width digits")]
    fn rejects_non_numeric_phone(value: &str) {
        let error = check_phone(value, 10).unwrap_err();
        assert!(matches!(error, ValidationError::PhoneNotNumeric(_)));
        assert_eq!(error.field(), Field::Phone);
    }

    #[test]
    fn error_messages_name_the_field() {
        let error = ValidationError::TooLong {
            field: Field::Id,
            max: 10,
            actual: 11,
        };
        assert_eq!(
            error.to_string(),
            "contact ID must be 10 characters or less, got 11"
        );
    }
}
