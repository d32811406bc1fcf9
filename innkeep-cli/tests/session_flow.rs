//! Integration tests for the interactive session.
//!
//! These tests drive the menu loop through stdin and assert on the rendered
//! output: availability summaries, booking confirmations, checkout billing,
//! and the farewell banner.

mod common;

use common::{innkeep, write_plan, SMALL_PLAN};
use predicates::prelude::*;

#[test]
fn bare_invocation_starts_the_session_and_exits() {
    innkeep()
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("HOTEL ROOM MANAGEMENT SYSTEM"))
        .stdout(predicate::str::contains("Total Rooms: 100 | Available: 100"))
        .stdout(predicate::str::contains("THANK YOU FOR CHOOSING US!"));
}

#[test]
fn run_subcommand_shows_wing_summaries() {
    innkeep()
        .arg("run")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single (30 available): 100-129"))
        .stdout(predicate::str::contains("Double (40 available): 130-169"))
        .stdout(predicate::str::contains("Suite (30 available): 170-199"));
}

#[test]
fn booking_flow_updates_the_summary() {
    innkeep()
        .arg("run")
        .write_stdin("2\n104\nAlice\n3\n123456789012\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Room 104 (Single) booked successfully for Alice for 3 days!",
        ))
        .stdout(predicate::str::contains(
            "Single (29 available): 100-103, 105-129",
        ));
}

#[test]
fn checkout_prints_the_bill() {
    innkeep()
        .arg("run")
        .write_stdin("2\n171\nBob\n2\n999988887777\n3\n171\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest Bob checked out."))
        .stdout(predicate::str::contains("Total Bill: \u{20b9}11998.00"))
        .stdout(predicate::str::contains(
            "Identity data deleted securely for room 171.",
        ));
}

#[test]
fn invalid_identity_aborts_without_booking() {
    innkeep()
        .arg("run")
        .write_stdin("2\n104\nAlice\n3\n12345\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid identity number. It must be exactly 12 digits.",
        ))
        .stdout(predicate::str::contains("Single (30 available): 100-129"));
}

#[test]
fn search_never_prints_the_identity() {
    innkeep()
        .arg("run")
        .write_stdin("2\n104\nAlice\n3\n123456789012\n4\n104\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Booked By: Alice"))
        .stdout(predicate::str::contains("123456789012").not());
}

#[test]
fn errors_do_not_end_the_session() {
    innkeep()
        .arg("run")
        .write_stdin("2\n250\n3\n250\n4\n250\nbogus\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room not found."))
        .stdout(predicate::str::contains(">> Invalid input. Please try again."))
        .stdout(predicate::str::contains("THANK YOU FOR CHOOSING US!"));
}

#[test]
fn custom_floor_plan_drives_the_session() {
    let plan = write_plan(SMALL_PLAN);
    innkeep()
        .arg("--config")
        .arg(plan.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Rooms: 5 | Available: 5"))
        .stdout(predicate::str::contains("Single (3 available): 1-3"))
        .stdout(predicate::str::contains("Suite (2 available): 8-9"));
}

#[test]
fn missing_config_file_fails_with_config_exit_code() {
    innkeep()
        .arg("--config")
        .arg("/nonexistent/floorplan.yaml")
        .arg("run")
        .write_stdin("5\n")
        .assert()
        .failure()
        .code(7);
}
