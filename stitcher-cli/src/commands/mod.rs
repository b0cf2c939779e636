//! CLI subcommands

pub mod process;
pub mod rules;
