// crates/clout-cli/src/commands/mod.rs
//
// Command module declarations for the Clout CLI.

pub mod get;
pub mod status;
pub mod submit;
