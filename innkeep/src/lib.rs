#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for managing a hotel room catalog and its booking lifecycle.
//!
//! The catalog is a fixed set of rooms built once from a floor plan: each
//! configured wing assigns a contiguous number range to a room type and a
//! nightly price. Rooms move between Available and Booked through the
//! booking operations, and availability is reported as contiguous number
//! runs.
//!
//! ## Core Types
//!
//! - [`RoomNumber`] and [`NumberRange`]: room numbering with validation
//! - [`FloorPlan`]: the catalog's construction recipe
//! - [`RoomCatalog`] and [`Room`]: the fixed room inventory
//! - [`BookingRequest`] and the [`book`]/[`checkout`]/[`search`] operations
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use innkeep::{
//!     book, checkout, render_range_summary, BookingRequest, FloorPlan, NumberRange,
//!     RoomCatalog, RoomNumber,
//! };
//!
//! let mut catalog = RoomCatalog::initialize(&FloorPlan::default());
//! assert_eq!(catalog.len(), 100);
//!
//! let request = BookingRequest::new(RoomNumber::new(100), "Alice", 3, "123456789012");
//! book(&mut catalog, &request).unwrap();
//!
//! let singles = NumberRange::new(RoomNumber::new(100), RoomNumber::new(129)).unwrap();
//! assert_eq!(
//!     render_range_summary(&catalog, singles, "Single"),
//!     "Single (29 available): 101-129"
//! );
//!
//! let bill = checkout(&mut catalog, RoomNumber::new(100)).unwrap();
//! assert_eq!(format!("{}", bill.total), "5997.00");
//! ```

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod guest;
pub mod logging;
pub mod room;

// Re-export key types at crate root for convenience
pub use availability::{
    available_count, available_count_in_range, available_runs, format_runs,
    render_range_summary, AvailabilityRun,
};
pub use booking::{
    book, checkout, occupancy_totals, search, BookingReceipt, BookingRequest, CheckoutBill,
    Occupancy, RoomStatus,
};
pub use catalog::{Room, RoomCatalog};
pub use config::{FloorPlan, FloorPlanFile, Wing};
pub use error::{Error, Result};
pub use guest::{Guest, IdentityNumber};
pub use logging::{init_logger, LogLevel, Logger};
pub use room::{NumberRange, Price, RoomNumber, RoomType};
