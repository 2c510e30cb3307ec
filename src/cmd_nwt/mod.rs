//! Subcommand modules for the `nwt` binary.

pub mod indent;
pub mod label;
pub mod order;
pub mod stat;
