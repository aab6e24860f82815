//! CLI subcommands

pub mod config;
pub mod doctor;
pub mod optimize;
pub mod serve;
