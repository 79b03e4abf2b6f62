//! Subcommand implementations.

pub mod read;
pub mod stamp;
pub mod version;
