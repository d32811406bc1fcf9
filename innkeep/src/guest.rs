//! Guest records and identity numbers.
//!
//! A guest exists only while a room is booked; vacating the room drops the
//! record. The identity number is kept out of every reporting type and is
//! overwritten in place at checkout.

use std::fmt;
use std::time::SystemTime;

/// A 12-digit guest identity number.
///
/// The digits are stored as a fixed byte array so checkout can overwrite
/// them in place. `Debug` and `Display` are redacted; the raw digits are
/// only reachable through [`IdentityNumber::digits`].
///
/// # Examples
///
/// ```
/// use innkeep::IdentityNumber;
///
/// let id = IdentityNumber::parse("123456789012").unwrap();
/// assert_eq!(id.digits(), "123456789012");
/// assert_eq!(format!("{id}"), "************");
///
/// assert!(IdentityNumber::parse("12345678901").is_err());   // 11 digits
/// assert!(IdentityNumber::parse("1234567890ab").is_err());  // non-digit
/// assert!(IdentityNumber::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IdentityNumber([u8; Self::LEN]);

impl IdentityNumber {
    /// Number of digits in an identity number.
    pub const LEN: usize = 12;

    /// Parses an identity number from free-form input.
    ///
    /// Input longer than 12 characters is truncated to the first 12 before
    /// the shape check; excess length alone never rejects an identity. The
    /// truncated input must then be exactly 12 ASCII decimal digits.
    ///
    /// # Errors
    ///
    /// Returns an error if the (truncated) input is not exactly 12 decimal
    /// digits. The error never echoes the supplied characters.
    pub fn parse(input: &str) -> Result<Self, InvalidIdentityError> {
        let truncated: String = input.chars().take(Self::LEN).collect();
        if truncated.len() != Self::LEN || !truncated.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidIdentityError {
                reason: "must be exactly 12 digits".to_string(),
            });
        }
        let mut digits = [0u8; Self::LEN];
        digits.copy_from_slice(truncated.as_bytes());
        Ok(Self(digits))
    }

    /// Returns the digits as a string slice.
    ///
    /// This is the only way to read the digits back; use it sparingly.
    #[must_use]
    pub fn digits(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("")
    }

    /// Overwrites the stored digits in place.
    ///
    /// Best-effort erasure within process memory; copies the allocator or
    /// operating system may have made are out of scope.
    pub fn wipe(&mut self) {
        self.0 = [b'0'; Self::LEN];
    }
}

impl fmt::Debug for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityNumber(************)")
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "************")
    }
}

/// Error type for rejected identity input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdentityError {
    /// Why the input was rejected. Never contains the input itself.
    pub reason: String,
}

impl fmt::Display for InvalidIdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid identity number: {}", self.reason)
    }
}

impl std::error::Error for InvalidIdentityError {}

impl From<InvalidIdentityError> for crate::Error {
    fn from(err: InvalidIdentityError) -> Self {
        Self::InvalidIdentity { reason: err.reason }
    }
}

/// A guest occupying a room.
///
/// Constructed only by a successful booking; dropped (with the identity
/// wiped first) by checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    name: String,
    days: u32,
    identity: IdentityNumber,
    booked_at: SystemTime,
}

impl Guest {
    /// Maximum stored guest name length, in characters.
    pub const MAX_NAME_LEN: usize = 64;

    /// Creates a guest record, truncating the name to the stored bound.
    ///
    /// Day-count and identity validation belong to the booking operation;
    /// this constructor only applies the name bound and stamps the booking
    /// time.
    #[must_use]
    pub fn new(name: &str, days: u32, identity: IdentityNumber) -> Self {
        let name = if name.chars().count() > Self::MAX_NAME_LEN {
            name.chars().take(Self::MAX_NAME_LEN).collect()
        } else {
            name.to_string()
        };
        Self {
            name,
            days,
            identity,
            booked_at: SystemTime::now(),
        }
    }

    /// Returns the guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the booked stay length in days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Returns when the booking was made.
    #[must_use]
    pub const fn booked_at(&self) -> SystemTime {
        self.booked_at
    }

    /// Overwrites the identity digits in place.
    pub(crate) fn wipe_identity(&mut self) {
        self.identity.wipe();
    }
}
