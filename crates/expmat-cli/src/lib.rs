//! Command implementations behind the `expmat` binary.
pub mod commands;
