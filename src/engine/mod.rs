//! Game controller: turn sequencing around the board and the machine
//! opponent.
//!
//! Renderers and input layers talk to a `GameController`; when they run on
//! another thread they share it through a `SharedGame` so reads never
//! overlap the single mutation that ends each turn.

mod controller;

pub use controller::{shared, GameController, SharedGame};
