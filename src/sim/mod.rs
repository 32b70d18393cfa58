//! Simulation module
//!
//! All ball movement lives here. This module is pure state + math:
//! - No rendering or surface dependencies
//! - Seeded RNG only (launch direction)
//! - Safe to call arbitrarily often; the loop is unthrottled

pub mod bounce;
pub mod state;

pub use bounce::{Edge, first_crossed_edge, reflect};
pub use state::{Ball, SimState, TouchId, Viewport};
