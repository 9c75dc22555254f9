//! Command-line front end for playing and comparing search strategies
//!
//! The library stays free of console I/O; everything that prints or reads
//! from a terminal lives here.

pub mod commands;
pub mod human;
pub mod output;

pub use human::HumanStrategy;
