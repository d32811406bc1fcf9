//! Shared helpers for CLI integration tests.

use std::io::Write;

use assert_cmd::Command;

/// Builds a command for the innkeep binary.
pub fn innkeep() -> Command {
    Command::cargo_bin("innkeep").expect("innkeep binary should build")
}

/// Writes floor-plan YAML to a temp file and returns the handle.
pub fn write_plan(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp floor plan");
    file.write_all(contents.as_bytes())
        .expect("write temp floor plan");
    file
}

/// A tiny two-wing layout used by several tests.
pub const SMALL_PLAN: &str = r"
capacity: 5
scan:
  start: 1
  end: 10
wings:
  - type: single
    start: 1
    end: 3
    price: 100.00
  - type: suite
    start: 8
    end: 9
    price: 900.00
";
