//! Subcommands of the `gamesearch` binary

pub mod compare;
pub mod play;
