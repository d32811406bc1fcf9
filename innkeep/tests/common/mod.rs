//! Shared helpers for integration tests.

use innkeep::{book, BookingRequest, FloorPlan, NumberRange, RoomCatalog, RoomNumber};

/// A catalog built from the default floor plan.
#[allow(dead_code)]
pub fn default_catalog() -> RoomCatalog {
    RoomCatalog::initialize(&FloorPlan::default())
}

/// Books each listed room for one day under a throwaway guest.
#[allow(dead_code)]
pub fn book_rooms(catalog: &mut RoomCatalog, numbers: &[u16]) {
    for &n in numbers {
        let request = BookingRequest::new(RoomNumber::new(n), "Guest", 1, "123456789012");
        book(catalog, &request).expect("test booking should succeed");
    }
}

/// An inclusive span of room numbers.
#[allow(dead_code)]
pub fn span(first: u16, last: u16) -> NumberRange {
    NumberRange::new(RoomNumber::new(first), RoomNumber::new(last)).expect("valid test span")
}
