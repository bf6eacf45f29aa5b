//! shipload CLI library.
//!
//! Terminal styling and output rendering shared by the `shipload-cli`
//! subcommands.

pub mod output;
pub mod terminal;
