//! Floor-plan configuration.
//!
//! The floor plan is the catalog's construction recipe: a scan range, a
//! capacity ceiling, and the wings that assign number ranges to room types
//! and nightly prices. The compiled-in default matches the standard hotel
//! layout; a YAML file with the same shape may override it.
//!
//! ```yaml
//! capacity: 100
//! scan:
//!   start: 100
//!   end: 199
//! wings:
//!   - type: single
//!     start: 100
//!     end: 129
//!     price: 1999.00
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::room::{NumberRange, Price, RoomNumber, RoomType};

/// Default capacity ceiling for the catalog.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default scan range (100-199 inclusive).
const DEFAULT_SCAN: (u16, u16) = (100, 199);

/// Default wings: number range, type, nightly price in paise.
const DEFAULT_WINGS: [(u16, u16, RoomType, u64); 3] = [
    (100, 129, RoomType::Single, 199_900),
    (130, 169, RoomType::Double, 299_900),
    (170, 199, RoomType::Suite, 599_900),
];

/// Raw floor-plan file contents, straight from YAML.
///
/// Every section is optional; missing sections fall back to the default
/// layout. Converted into a validated [`FloorPlan`] before use.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FloorPlanFile {
    /// Catalog capacity ceiling.
    pub capacity: Option<usize>,

    /// Number range scanned at initialization.
    pub scan: Option<ScanEntry>,

    /// Wing definitions.
    pub wings: Option<Vec<WingEntry>>,
}

/// Raw scan range entry.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanEntry {
    /// First number scanned.
    pub start: u16,
    /// Last number scanned.
    pub end: u16,
}

/// Raw wing entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct WingEntry {
    /// Room type assigned to the wing.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// First number of the wing.
    pub start: u16,
    /// Last number of the wing.
    pub end: u16,
    /// Nightly price as a decimal currency amount.
    pub price: f64,
}

impl FloorPlanFile {
    /// Validates the raw file and produces a usable floor plan.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted scan range or wing range,
    /// a zero capacity, a non-positive price, overlapping wings, or an empty
    /// wing list.
    pub fn into_plan(self) -> Result<FloorPlan> {
        let capacity = self.capacity.unwrap_or(DEFAULT_CAPACITY);
        if capacity == 0 {
            return Err(Error::Validation {
                field: "capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let scan = match self.scan {
            Some(entry) => {
                NumberRange::new(RoomNumber::new(entry.start), RoomNumber::new(entry.end))?
            }
            None => default_scan(),
        };

        let wings = match self.wings {
            Some(entries) => {
                if entries.is_empty() {
                    return Err(Error::Validation {
                        field: "wings".to_string(),
                        message: "at least one wing is required".to_string(),
                    });
                }
                let mut wings = Vec::with_capacity(entries.len());
                for entry in entries {
                    let range =
                        NumberRange::new(RoomNumber::new(entry.start), RoomNumber::new(entry.end))?;
                    let price = Price::from_decimal(entry.price)?;
                    if price.is_zero() {
                        return Err(Error::Validation {
                            field: "price".to_string(),
                            message: format!(
                                "wing {range} must have a price greater than zero"
                            ),
                        });
                    }
                    wings.push(Wing {
                        room_type: entry.room_type,
                        range,
                        price,
                    });
                }
                wings
            }
            None => default_wings(),
        };

        for (i, a) in wings.iter().enumerate() {
            for b in &wings[i + 1..] {
                if a.range.overlaps(&b.range) {
                    return Err(Error::Validation {
                        field: "wings".to_string(),
                        message: format!("wings {} and {} overlap", a.range, b.range),
                    });
                }
            }
        }

        Ok(FloorPlan {
            capacity,
            scan,
            wings,
        })
    }
}

/// A contiguous number range owned by one room type at one nightly price.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    /// The room type every number in the wing maps to.
    pub room_type: RoomType,
    /// The numbers the wing claims.
    pub range: NumberRange,
    /// The nightly price for the wing.
    pub price: Price,
}

/// A validated floor plan.
///
/// # Examples
///
/// ```
/// use innkeep::{FloorPlan, RoomNumber, RoomType};
///
/// let plan = FloorPlan::default();
/// let wing = plan.classify(RoomNumber::new(104)).unwrap();
/// assert_eq!(wing.room_type, RoomType::Single);
/// assert!(plan.classify(RoomNumber::new(250)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    capacity: usize,
    scan: NumberRange,
    wings: Vec<Wing>,
}

impl FloorPlan {
    /// Loads a floor plan from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, fails to parse, or
    /// fails validation.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: FloorPlanFile = serde_yaml::from_str(&contents)?;
        file.into_plan()
    }

    /// Returns the capacity ceiling.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the initialization scan range.
    #[must_use]
    pub const fn scan(&self) -> NumberRange {
        self.scan
    }

    /// Returns the configured wings.
    #[must_use]
    pub fn wings(&self) -> &[Wing] {
        &self.wings
    }

    /// Returns the wing that claims `number`, if any.
    ///
    /// A number no wing claims is not a room at all: it is excluded from
    /// the catalog, not marked unknown.
    #[must_use]
    pub fn classify(&self, number: RoomNumber) -> Option<&Wing> {
        self.wings.iter().find(|wing| wing.range.contains(number))
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            scan: default_scan(),
            wings: default_wings(),
        }
    }
}

const fn default_scan() -> NumberRange {
    NumberRange::new_unchecked(
        RoomNumber::new(DEFAULT_SCAN.0),
        RoomNumber::new(DEFAULT_SCAN.1),
    )
}

fn default_wings() -> Vec<Wing> {
    DEFAULT_WINGS
        .iter()
        .map(|&(start, end, room_type, paise)| Wing {
            room_type,
            range: NumberRange::new_unchecked(RoomNumber::new(start), RoomNumber::new(end)),
            price: Price::from_paise(paise),
        })
        .collect()
}
