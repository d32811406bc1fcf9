//! Room number, range, type, and price types.
//!
//! This module provides the vocabulary types for the room catalog: room
//! numbers, inclusive number ranges, room types, and nightly prices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A room number.
///
/// Room numbers are plain identifiers; whether a number denotes a real room
/// is decided by the floor plan, not by the number itself.
///
/// # Examples
///
/// ```
/// use innkeep::RoomNumber;
///
/// let number = RoomNumber::new(104);
/// assert_eq!(number.value(), 104);
/// assert_eq!(format!("{number}"), "104");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u16);

impl RoomNumber {
    /// Creates a room number.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for RoomNumber {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive range of room numbers.
///
/// # Examples
///
/// ```
/// use innkeep::{NumberRange, RoomNumber};
///
/// let range = NumberRange::new(RoomNumber::new(100), RoomNumber::new(129)).unwrap();
/// assert_eq!(range.len(), 30);
/// assert!(range.contains(RoomNumber::new(104)));
/// assert!(!range.contains(RoomNumber::new(130)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    first: RoomNumber,
    last: RoomNumber,
}

impl NumberRange {
    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns an error if `last` is less than `first`.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{NumberRange, RoomNumber};
    ///
    /// assert!(NumberRange::new(RoomNumber::new(100), RoomNumber::new(199)).is_ok());
    /// assert!(NumberRange::new(RoomNumber::new(199), RoomNumber::new(100)).is_err());
    /// ```
    pub fn new(first: RoomNumber, last: RoomNumber) -> Result<Self, InvalidNumberRangeError> {
        if last < first {
            Err(InvalidNumberRangeError {
                first,
                last,
                reason: "last must be greater than or equal to first".into(),
            })
        } else {
            Ok(Self { first, last })
        }
    }

    /// Creates a range from constants already known to be ordered.
    pub(crate) const fn new_unchecked(first: RoomNumber, last: RoomNumber) -> Self {
        Self { first, last }
    }

    /// Returns the first number in the range.
    #[must_use]
    pub const fn first(&self) -> RoomNumber {
        self.first
    }

    /// Returns the last number in the range.
    #[must_use]
    pub const fn last(&self) -> RoomNumber {
        self.last
    }

    /// Returns `true` if the range contains the given number.
    #[must_use]
    pub const fn contains(&self, number: RoomNumber) -> bool {
        number.value() >= self.first.value() && number.value() <= self.last.value()
    }

    /// Returns `true` if this range shares any number with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{NumberRange, RoomNumber};
    ///
    /// let a = NumberRange::new(RoomNumber::new(100), RoomNumber::new(129)).unwrap();
    /// let b = NumberRange::new(RoomNumber::new(129), RoomNumber::new(169)).unwrap();
    /// let c = NumberRange::new(RoomNumber::new(130), RoomNumber::new(169)).unwrap();
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.first.value() <= other.last.value() && other.first.value() <= self.last.value()
    }

    /// Returns the number of rooms in the range (inclusive).
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.last.value() - self.first.value() + 1
    }

    /// Returns `true` if the range contains no numbers.
    ///
    /// Never true for a constructed `NumberRange` since `last >= first` is
    /// validated, but provided for completeness.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over all numbers in this range, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{NumberRange, RoomNumber};
    ///
    /// let range = NumberRange::new(RoomNumber::new(100), RoomNumber::new(102)).unwrap();
    /// let numbers: Vec<u16> = range.iter().map(RoomNumber::value).collect();
    /// assert_eq!(numbers, vec![100, 101, 102]);
    /// ```
    #[must_use]
    pub fn iter(self) -> NumberRangeIter {
        NumberRangeIter {
            range: self,
            current: u32::from(self.first.value()),
        }
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

impl IntoIterator for NumberRange {
    type Item = RoomNumber;
    type IntoIter = NumberRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over room numbers in a `NumberRange`.
///
/// The cursor is wider than `u16` so a range ending at `u16::MAX` terminates
/// instead of wrapping.
#[derive(Debug)]
pub struct NumberRangeIter {
    range: NumberRange,
    current: u32,
}

impl Iterator for NumberRangeIter {
    type Item = RoomNumber;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current <= u32::from(self.range.last.value()) {
            #[allow(clippy::cast_possible_truncation)]
            let number = RoomNumber(self.current as u16);
            self.current += 1;
            Some(number)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current <= u32::from(self.range.last.value()) {
            let remaining = (u32::from(self.range.last.value()) - self.current + 1) as usize;
            (remaining, Some(remaining))
        } else {
            (0, Some(0))
        }
    }
}

impl ExactSizeIterator for NumberRangeIter {
    fn len(&self) -> usize {
        self.size_hint().0
    }
}

/// Error type for invalid room number ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumberRangeError {
    /// The first number of the attempted range.
    pub first: RoomNumber,
    /// The last number of the attempted range.
    pub last: RoomNumber,
    /// The reason the range is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidNumberRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid room range {}-{}: {}",
            self.first, self.last, self.reason
        )
    }
}

impl std::error::Error for InvalidNumberRangeError {}

/// The category a room belongs to.
///
/// The type of a room is a pure function of its number: the floor plan
/// assigns each configured number range to exactly one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Single-occupancy room.
    Single,
    /// Double-occupancy room.
    Double,
    /// Suite.
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Double => write!(f, "Double"),
            Self::Suite => write!(f, "Suite"),
        }
    }
}

/// A nightly price in fixed-point currency (stored as paise).
///
/// Prices are exact integers internally so that billing arithmetic never
/// drifts; `Display` renders the conventional two-decimal form.
///
/// # Examples
///
/// ```
/// use innkeep::Price;
///
/// let price = Price::from_paise(199_900);
/// assert_eq!(format!("{price}"), "1999.00");
/// assert_eq!(format!("{}", price.total_for_days(3)), "5997.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// Creates a price from a paise amount.
    #[must_use]
    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    /// Creates a price from a decimal currency amount (e.g. `1999.0`).
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative, not finite, or too large
    /// to represent.
    pub fn from_decimal(amount: f64) -> Result<Self, InvalidPriceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidPriceError { amount });
        }
        let paise = (amount * 100.0).round();
        #[allow(clippy::cast_precision_loss)]
        if paise > u64::MAX as f64 {
            return Err(InvalidPriceError { amount });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let paise = paise as u64;
        Ok(Self(paise))
    }

    /// Returns the price in paise.
    #[must_use]
    pub const fn paise(self) -> u64 {
        self.0
    }

    /// Returns `true` for a zero price.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the total for a stay of `days` nights.
    #[must_use]
    pub const fn total_for_days(self, days: u32) -> Self {
        Self(self.0 * days as u64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Error type for invalid price amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPriceError {
    /// The rejected amount.
    pub amount: f64,
}

impl fmt::Display for InvalidPriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid price {}: must be a non-negative amount", self.amount)
    }
}

impl std::error::Error for InvalidPriceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_value_and_display() {
        let number = RoomNumber::new(104);
        assert_eq!(number.value(), 104);
        assert_eq!(format!("{number}"), "104");
    }

    #[test]
    fn test_room_number_ordering() {
        assert!(RoomNumber::new(100) < RoomNumber::new(101));
        assert!(RoomNumber::new(199) > RoomNumber::new(130));
    }

    #[test]
    fn test_number_range_creation() {
        let range = NumberRange::new(RoomNumber::new(100), RoomNumber::new(129)).unwrap();
        assert_eq!(range.first().value(), 100);
        assert_eq!(range.last().value(), 129);
        assert_eq!(range.len(), 30);
    }

    #[test]
    fn test_number_range_invalid() {
        let result = NumberRange::new(RoomNumber::new(129), RoomNumber::new(100));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.reason.contains("greater than or equal"));
    }

    #[test]
    fn test_number_range_single_number() {
        let range = NumberRange::new(RoomNumber::new(150), RoomNumber::new(150)).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contains(RoomNumber::new(150)));
    }

    #[test]
    fn test_number_range_contains() {
        let range = NumberRange::new(RoomNumber::new(130), RoomNumber::new(169)).unwrap();
        assert!(range.contains(RoomNumber::new(130)));
        assert!(range.contains(RoomNumber::new(150)));
        assert!(range.contains(RoomNumber::new(169)));
        assert!(!range.contains(RoomNumber::new(129)));
        assert!(!range.contains(RoomNumber::new(170)));
    }

    #[test]
    fn test_number_range_overlaps() {
        let singles = NumberRange::new(RoomNumber::new(100), RoomNumber::new(129)).unwrap();
        let doubles = NumberRange::new(RoomNumber::new(130), RoomNumber::new(169)).unwrap();
        let crossing = NumberRange::new(RoomNumber::new(125), RoomNumber::new(135)).unwrap();
        assert!(!singles.overlaps(&doubles));
        assert!(singles.overlaps(&crossing));
        assert!(doubles.overlaps(&crossing));
    }

    #[test]
    fn test_number_range_display() {
        let range = NumberRange::new(RoomNumber::new(170), RoomNumber::new(199)).unwrap();
        assert_eq!(format!("{range}"), "170-199");
    }

    #[test]
    fn test_number_range_iterator() {
        let range = NumberRange::new(RoomNumber::new(100), RoomNumber::new(102)).unwrap();
        let numbers: Vec<u16> = range.iter().map(RoomNumber::value).collect();
        assert_eq!(numbers, vec![100, 101, 102]);
    }

    #[test]
    fn test_number_range_iterator_exact_size() {
        let range = NumberRange::new(RoomNumber::new(100), RoomNumber::new(109)).unwrap();
        let mut iter = range.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        assert_eq!(iter.len(), 9);
    }

    #[test]
    fn test_room_type_display() {
        assert_eq!(format!("{}", RoomType::Single), "Single");
        assert_eq!(format!("{}", RoomType::Double), "Double");
        assert_eq!(format!("{}", RoomType::Suite), "Suite");
    }

    #[test]
    fn test_room_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&RoomType::Suite).unwrap(), "\"suite\"");
        let parsed: RoomType = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(parsed, RoomType::Double);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(format!("{}", Price::from_paise(199_900)), "1999.00");
        assert_eq!(format!("{}", Price::from_paise(599_905)), "5999.05");
        assert_eq!(format!("{}", Price::from_paise(0)), "0.00");
    }

    #[test]
    fn test_price_from_decimal() {
        assert_eq!(Price::from_decimal(1999.0).unwrap(), Price::from_paise(199_900));
        assert_eq!(Price::from_decimal(2999.5).unwrap(), Price::from_paise(299_950));
        assert!(Price::from_decimal(-1.0).is_err());
        assert!(Price::from_decimal(f64::NAN).is_err());
        assert!(Price::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_total_for_days() {
        let nightly = Price::from_paise(299_900);
        assert_eq!(nightly.total_for_days(3), Price::from_paise(899_700));
        assert_eq!(nightly.total_for_days(1), nightly);
    }

    #[test]
    fn test_price_serialize_as_string() {
        let json = serde_json::to_string(&Price::from_paise(199_900)).unwrap();
        assert_eq!(json, "\"1999.00\"");
    }
}
