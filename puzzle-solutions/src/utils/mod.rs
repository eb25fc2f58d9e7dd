//! Helpers shared between days

pub mod intcode;
pub mod math;
