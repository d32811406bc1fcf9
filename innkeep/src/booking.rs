//! Booking lifecycle operations: book, checkout, search.
//!
//! Each operation is all-or-nothing: every failure path returns before any
//! catalog mutation. Checkout wipes the guest's identity digits before the
//! record is dropped.

use std::time::SystemTime;

use crate::availability::available_count;
use crate::catalog::RoomCatalog;
use crate::error::{Error, Result};
use crate::guest::{Guest, IdentityNumber};
use crate::room::{Price, RoomNumber, RoomType};

/// Parameters for a booking.
///
/// The identity is carried as raw operator input; it is validated (and
/// truncated to the stored bound) by [`book`], so a malformed identity
/// rejects the whole request without touching the catalog.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// The room to book.
    pub number: RoomNumber,
    /// Guest name; truncated to the stored bound, never rejected for length.
    pub guest_name: String,
    /// Stay length in days; must be positive.
    pub days: u32,
    /// Raw identity input; must be 12 decimal digits after truncation.
    pub identity: String,
}

impl BookingRequest {
    /// Creates a booking request.
    #[must_use]
    pub fn new(
        number: RoomNumber,
        guest_name: impl Into<String>,
        days: u32,
        identity: impl Into<String>,
    ) -> Self {
        Self {
            number,
            guest_name: guest_name.into(),
            days,
            identity: identity.into(),
        }
    }
}

/// Confirmation data reported by a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// The booked room.
    pub number: RoomNumber,
    /// The booked room's type.
    pub room_type: RoomType,
    /// The stored (possibly truncated) guest name.
    pub guest_name: String,
    /// The booked stay length.
    pub days: u32,
}

/// Billing data reported by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutBill {
    /// The vacated room.
    pub number: RoomNumber,
    /// The departing guest's name.
    pub guest_name: String,
    /// The stay length that was billed.
    pub days: u32,
    /// `days × price_per_night`.
    pub total: Price,
}

/// Read-only view of a room returned by [`search`].
///
/// The identity number is not part of this type in any state; the privacy
/// boundary is enforced by construction, not by call-site discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStatus {
    /// The room number.
    pub number: RoomNumber,
    /// The room type.
    pub room_type: RoomType,
    /// The nightly price.
    pub price_per_night: Price,
    /// Present exactly while the room is booked.
    pub occupancy: Option<Occupancy>,
}

/// Guest-facing occupancy details within a [`RoomStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    /// The occupying guest's name.
    pub guest_name: String,
    /// The booked stay length.
    pub days: u32,
    /// When the booking was made.
    pub booked_at: SystemTime,
}

/// Books a room for a guest.
///
/// # Errors
///
/// - [`Error::RoomNotFound`] if the number matches no room.
/// - [`Error::AlreadyBooked`] if the room is occupied (no mutation).
/// - [`Error::InvalidDays`] if the stay length is zero.
/// - [`Error::InvalidIdentity`] if the identity input fails the 12-digit
///   shape check.
///
/// # Examples
///
/// ```
/// use innkeep::{book, BookingRequest, FloorPlan, RoomCatalog, RoomNumber, RoomType};
///
/// let mut catalog = RoomCatalog::initialize(&FloorPlan::default());
/// let request = BookingRequest::new(RoomNumber::new(104), "Alice", 3, "123456789012");
/// let receipt = book(&mut catalog, &request).unwrap();
/// assert_eq!(receipt.room_type, RoomType::Single);
/// assert_eq!(receipt.days, 3);
/// ```
pub fn book(catalog: &mut RoomCatalog, request: &BookingRequest) -> Result<BookingReceipt> {
    let room = catalog.lookup_mut(request.number)?;
    if room.is_booked() {
        return Err(Error::AlreadyBooked {
            number: request.number,
        });
    }
    if request.days == 0 {
        return Err(Error::InvalidDays { days: request.days });
    }
    let identity = IdentityNumber::parse(&request.identity)?;

    let guest = Guest::new(&request.guest_name, request.days, identity);
    let receipt = BookingReceipt {
        number: room.number(),
        room_type: room.room_type(),
        guest_name: guest.name().to_string(),
        days: guest.days(),
    };
    room.install_guest(guest);
    Ok(receipt)
}

/// Checks a guest out of a room and computes the bill.
///
/// On success the room returns to the available state with every guest
/// field gone; the identity digits are overwritten before the guest record
/// is dropped, so they are irrecoverable from the catalog afterwards.
///
/// # Errors
///
/// - [`Error::RoomNotFound`] if the number matches no room.
/// - [`Error::NotBooked`] if the room is already vacant (no mutation).
pub fn checkout(catalog: &mut RoomCatalog, number: RoomNumber) -> Result<CheckoutBill> {
    let room = catalog.lookup_mut(number)?;
    let Some(mut guest) = room.take_guest() else {
        return Err(Error::NotBooked { number });
    };

    let bill = CheckoutBill {
        number,
        guest_name: guest.name().to_string(),
        days: guest.days(),
        total: room.price_per_night().total_for_days(guest.days()),
    };
    guest.wipe_identity();
    drop(guest);
    Ok(bill)
}

/// Reports a room's state without changing it.
///
/// # Errors
///
/// Returns [`Error::RoomNotFound`] if the number matches no room.
pub fn search(catalog: &RoomCatalog, number: RoomNumber) -> Result<RoomStatus> {
    let room = catalog.lookup(number)?;
    Ok(RoomStatus {
        number: room.number(),
        room_type: room.room_type(),
        price_per_night: room.price_per_night(),
        occupancy: room.guest().map(|guest| Occupancy {
            guest_name: guest.name().to_string(),
            days: guest.days(),
            booked_at: guest.booked_at(),
        }),
    })
}

/// Convenience report of catalog occupancy totals.
#[must_use]
pub fn occupancy_totals(catalog: &RoomCatalog) -> (usize, usize) {
    let total = catalog.len();
    (total, available_count(catalog))
}
