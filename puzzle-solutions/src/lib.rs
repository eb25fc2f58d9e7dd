//! Advent of Code 2019 puzzle solutions with automatic registration
//!
//! One module per day. Each solution uses the `DaySolver` and
//! `AutoRegister` derive macros so linking this crate is enough for the
//! solvers to show up in the registry.

pub mod days;
pub mod utils;
