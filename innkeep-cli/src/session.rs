//! Interactive front-desk session.
//!
//! The session owns the in-memory catalog for its lifetime: bookings live
//! until checkout or process exit. Input and output are generic so the menu
//! loop can be driven by tests without a terminal.

use std::io::{self, BufRead, Write};

use innkeep::{
    book, checkout, occupancy_totals, render_range_summary, search, BookingRequest, Error,
    FloorPlan, RoomCatalog, RoomNumber,
};

use crate::utils::format_timestamp;

const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

const MENU: &str =
    "1. Display All Rooms | 2. Book Room | 3. Checkout Room | 4. Search Room | 5. Exit";

/// An interactive session over a room catalog.
pub struct Session<R, W> {
    plan: FloorPlan,
    catalog: RoomCatalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a freshly initialized catalog.
    pub fn new(plan: FloorPlan, input: R, output: W) -> Self {
        let catalog = RoomCatalog::initialize(&plan);
        Self {
            plan,
            catalog,
            input,
            output,
        }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "===== HOTEL ROOM MANAGEMENT SYSTEM =====")?;
        let (total, available) = occupancy_totals(&self.catalog);
        writeln!(self.output, "Total Rooms: {total} | Available: {available}")?;

        loop {
            self.show_availability_summary()?;
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt(">> Enter your choice: ")? else {
                // End of input is treated as an exit without the banner.
                break;
            };
            match choice.trim() {
                "1" => self.display_rooms()?,
                "2" => self.book_room()?,
                "3" => self.checkout_room()?,
                "4" => self.search_room()?,
                "5" => {
                    self.farewell()?;
                    break;
                }
                other => {
                    if other.parse::<u32>().is_ok() {
                        writeln!(self.output, ">> Invalid choice. Please try again.")?;
                    } else {
                        writeln!(self.output, ">> Invalid input. Please try again.")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn show_availability_summary(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Availability Summary ---")?;
        for wing in self.plan.wings() {
            let label = wing.room_type.to_string();
            let line = render_range_summary(&self.catalog, wing.range, &label);
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn display_rooms(&mut self) -> io::Result<()> {
        if self.catalog.is_empty() {
            return writeln!(self.output, "No rooms configured.");
        }

        let (total, available) = occupancy_totals(&self.catalog);
        writeln!(self.output)?;
        writeln!(
            self.output,
            "--- Room List ({total} total, {available} available) ---"
        )?;
        writeln!(
            self.output,
            "Room  | Type    | Price/Night | Status     | Guest (if booked)"
        )?;
        writeln!(
            self.output,
            "---------------------------------------------------------------"
        )?;
        for room in self.catalog.iter() {
            let status = if room.is_booked() { "Booked" } else { "Available" };
            let guest = room
                .guest()
                .map(|guest| format!(" | {}", guest.name()))
                .unwrap_or_default();
            writeln!(
                self.output,
                "{:<5} | {:<7} | \u{20b9}{:<10} | {:<10}{}",
                room.number().to_string(),
                room.room_type().to_string(),
                room.price_per_night().to_string(),
                status,
                guest
            )?;
        }
        Ok(())
    }

    fn book_room(&mut self) -> io::Result<()> {
        let Some(number) = self.prompt_room_number("Enter Room Number to Book: ")? else {
            return Ok(());
        };

        // The room is checked before any guest fields are collected.
        match search(&self.catalog, number) {
            Err(err) => return self.report(&err),
            Ok(status) if status.occupancy.is_some() => {
                return self.report(&Error::AlreadyBooked { number });
            }
            Ok(_) => {}
        }

        let Some(name) = self.prompt("Enter Guest Name: ")? else {
            return Ok(());
        };
        let Some(days_raw) = self.prompt("Enter Number of Days: ")? else {
            return Ok(());
        };
        let Ok(days) = days_raw.trim().parse::<u32>() else {
            return writeln!(self.output, "Invalid number of days.");
        };
        let Some(identity) = self.prompt("Enter 12-digit Identity Number: ")? else {
            return Ok(());
        };

        let request = BookingRequest::new(number, name, days, identity.trim());
        match book(&mut self.catalog, &request) {
            Ok(receipt) => writeln!(
                self.output,
                "Room {} ({}) booked successfully for {} for {} days!",
                receipt.number, receipt.room_type, receipt.guest_name, receipt.days
            ),
            Err(err) => self.report(&err),
        }
    }

    fn checkout_room(&mut self) -> io::Result<()> {
        let Some(number) = self.prompt_room_number("Enter Room Number for Checkout: ")? else {
            return Ok(());
        };

        match checkout(&mut self.catalog, number) {
            Ok(bill) => {
                writeln!(self.output)?;
                writeln!(self.output, "Guest {} checked out.", bill.guest_name)?;
                writeln!(self.output, "Total Bill: \u{20b9}{}", bill.total)?;
                writeln!(
                    self.output,
                    "Identity data deleted securely for room {number}."
                )
            }
            Err(err) => self.report(&err),
        }
    }

    fn search_room(&mut self) -> io::Result<()> {
        let Some(number) = self.prompt_room_number("Enter Room Number to Search: ")? else {
            return Ok(());
        };

        match search(&self.catalog, number) {
            Ok(status) => {
                writeln!(self.output)?;
                writeln!(self.output, "Room Number: {}", status.number)?;
                writeln!(self.output, "Type: {}", status.room_type)?;
                writeln!(
                    self.output,
                    "Price per Night: \u{20b9}{}",
                    status.price_per_night
                )?;
                let state = if status.occupancy.is_some() {
                    "Booked"
                } else {
                    "Available"
                };
                writeln!(self.output, "Status: {state}")?;
                if let Some(occupancy) = status.occupancy {
                    writeln!(self.output, "Booked By: {}", occupancy.guest_name)?;
                    writeln!(self.output, "Days Booked: {}", occupancy.days)?;
                    writeln!(
                        self.output,
                        "Booked At: {}",
                        format_timestamp(occupancy.booked_at)
                    )?;
                    // The identity number is never displayed.
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "{GREEN}")?;
        writeln!(self.output, "===============================================")?;
        writeln!(self.output, "THANK YOU FOR CHOOSING US!")?;
        writeln!(self.output, "Have a wonderful day ahead. Stay happy!")?;
        writeln!(self.output, "===============================================")?;
        writeln!(self.output, "{RESET}")
    }

    /// Maps operation errors to the operator-facing messages.
    fn report(&mut self, err: &Error) -> io::Result<()> {
        let message = match err {
            Error::RoomNotFound { .. } => "Room not found.".to_string(),
            Error::AlreadyBooked { .. } => "Sorry, this room is already booked.".to_string(),
            Error::NotBooked { number } => format!("Room {number} is not booked."),
            Error::InvalidDays { .. } => "Invalid number of days.".to_string(),
            Error::InvalidIdentity { .. } => {
                "Invalid identity number. It must be exactly 12 digits.".to_string()
            }
            other => format!("Error: {other}"),
        };
        writeln!(self.output, "{message}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for a room number; unparsable input aborts the command.
    fn prompt_room_number(&mut self, text: &str) -> io::Result<Option<RoomNumber>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.trim().parse::<u16>() {
            Ok(n) => Ok(Some(RoomNumber::new(n))),
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                Ok(None)
            }
        }
    }
}
