//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for catalog, availability, and
//! booking operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::room::RoomNumber;

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(104)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
///
/// Every variant is local and recoverable; no booking failure is fatal to
/// the process, and a failed operation leaves the catalog unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced room number is absent from the catalog.
    #[error("room {number} not found")]
    RoomNotFound {
        /// The number that matched no room.
        number: RoomNumber,
    },

    /// A booking was attempted on an occupied room.
    #[error("room {number} is already booked")]
    AlreadyBooked {
        /// The occupied room.
        number: RoomNumber,
    },

    /// A checkout was attempted on a vacant room.
    #[error("room {number} is not booked")]
    NotBooked {
        /// The vacant room.
        number: RoomNumber,
    },

    /// A non-positive day count was supplied.
    #[error("invalid stay length {days}: must be at least one day")]
    InvalidDays {
        /// The rejected day count.
        days: u32,
    },

    /// An identity string failed the 12-digit shape check.
    #[error("invalid identity number: {reason}")]
    InvalidIdentity {
        /// The reason the identity was rejected. Never echoes the digits.
        reason: String,
    },

    /// A floor-plan configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl From<crate::room::InvalidNumberRangeError> for Error {
    fn from(err: crate::room::InvalidNumberRangeError) -> Self {
        Self::Validation {
            field: "range".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<crate::room::InvalidPriceError> for Error {
    fn from(err: crate::room::InvalidPriceError) -> Self {
        Self::Validation {
            field: "price".to_string(),
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if the error indicates a missing room.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Error, RoomNumber};
    ///
    /// let err = Error::RoomNotFound { number: RoomNumber::new(404) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound { .. })
    }

    /// Check if the error is a rejected booking input (days or identity).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidDays { .. } | Self::InvalidIdentity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_not_found_error() {
        let err = Error::RoomNotFound {
            number: RoomNumber::new(250),
        };
        let display = format!("{err}");
        assert!(display.contains("room 250"));
        assert!(display.contains("not found"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_already_booked_error() {
        let err = Error::AlreadyBooked {
            number: RoomNumber::new(104),
        };
        let display = format!("{err}");
        assert!(display.contains("104"));
        assert!(display.contains("already booked"));
    }

    #[test]
    fn test_not_booked_error() {
        let err = Error::NotBooked {
            number: RoomNumber::new(171),
        };
        assert!(format!("{err}").contains("not booked"));
    }

    #[test]
    fn test_invalid_days_error() {
        let err = Error::InvalidDays { days: 0 };
        let display = format!("{err}");
        assert!(display.contains("at least one day"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_identity_error_does_not_echo_digits() {
        let err = Error::InvalidIdentity {
            reason: "must be exactly 12 digits".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("identity"));
        assert!(!display.contains("123456789012"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "capacity".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("capacity"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u16> {
            Err(Error::InvalidDays { days: 0 })
        }
        assert!(returns_result().is_err());
    }
}
