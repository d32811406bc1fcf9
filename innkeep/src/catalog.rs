//! The room catalog: the fixed set of rooms for a run.
//!
//! The catalog is built once from a floor plan and never grows or shrinks
//! afterwards. Rooms are keyed by number in an ordered map, so iteration is
//! always ascending by room number.

use std::collections::BTreeMap;

use crate::config::FloorPlan;
use crate::error::{Error, Result};
use crate::guest::Guest;
use crate::room::{Price, RoomNumber, RoomType};

/// A single bookable room.
///
/// Number, type, and nightly price are derived from the floor plan at
/// construction and never change. Occupancy is the only mutable state:
/// `guest` is `Some` exactly while the room is booked, so an unbooked room
/// carries no residual guest data by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    price_per_night: Price,
    guest: Option<Guest>,
}

impl Room {
    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> RoomNumber {
        self.number
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Price {
        self.price_per_night
    }

    /// Returns `true` if a guest currently occupies the room.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.guest.is_some()
    }

    /// Returns the occupying guest, if any.
    #[must_use]
    pub const fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    pub(crate) fn install_guest(&mut self, guest: Guest) {
        self.guest = Some(guest);
    }

    pub(crate) fn take_guest(&mut self) -> Option<Guest> {
        self.guest.take()
    }
}

/// The complete, fixed-size set of rooms for a run.
///
/// # Examples
///
/// ```
/// use innkeep::{FloorPlan, RoomCatalog, RoomNumber};
///
/// let catalog = RoomCatalog::initialize(&FloorPlan::default());
/// assert_eq!(catalog.len(), 100);
///
/// let room = catalog.lookup(RoomNumber::new(104)).unwrap();
/// assert!(!room.is_booked());
/// assert!(catalog.lookup(RoomNumber::new(250)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: BTreeMap<RoomNumber, Room>,
    capacity: usize,
}

impl RoomCatalog {
    /// Builds the catalog from a floor plan.
    ///
    /// Scans the plan's range in ascending order, skipping numbers no wing
    /// claims, and creates one unbooked room per claimed number. Stops once
    /// the capacity ceiling is reached, even if the range has not been fully
    /// scanned.
    #[must_use]
    pub fn initialize(plan: &FloorPlan) -> Self {
        let mut rooms = BTreeMap::new();
        for number in plan.scan() {
            if rooms.len() >= plan.capacity() {
                break;
            }
            let Some(wing) = plan.classify(number) else {
                continue;
            };
            rooms.insert(
                number,
                Room {
                    number,
                    room_type: wing.room_type,
                    price_per_night: wing.price,
                    guest: None,
                },
            );
        }
        Self {
            rooms,
            capacity: plan.capacity(),
        }
    }

    /// Looks up the room with the given number.
    ///
    /// This is the sole access path into the catalog; a number no wing
    /// claimed was never created, so it simply does not exist here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if the number matches no room.
    pub fn lookup(&self, number: RoomNumber) -> Result<&Room> {
        self.rooms
            .get(&number)
            .ok_or(Error::RoomNotFound { number })
    }

    pub(crate) fn lookup_mut(&mut self, number: RoomNumber) -> Result<&mut Room> {
        self.rooms
            .get_mut(&number)
            .ok_or(Error::RoomNotFound { number })
    }

    /// Returns the number of rooms in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the catalog holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns the configured capacity ceiling.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over all rooms, ascending by number.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}
