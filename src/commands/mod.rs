//! CLI subcommands

pub mod ids;
pub mod list;
pub mod new;
pub mod show;
pub mod tags;
