//! Command-line workflow, decoupled from clap argument parsing.

pub mod orchestration;
