//! Board definitions and the static pin catalog.
//!
//! A board is a compile target: an FQBN-like identifier plus a fixed,
//! ordered catalog of physical pins with capability sets. The catalog
//! is process-wide immutable data, built once and shared by any number
//! of concurrent readers.

mod catalog;
mod types;

pub use catalog::{board_pins, boards, find_board};
pub use types::{Board, BoardPin, PinCapability, Voltage};
