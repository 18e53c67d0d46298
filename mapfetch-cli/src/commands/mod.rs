//! CLI subcommands.

pub mod common;
pub mod providers;
pub mod static_map;
pub mod tile;
