// this_file: crates/filigree-cli/src/commands/mod.rs

//! Command implementations for the filigree CLI.

pub mod profile;
pub mod render;
