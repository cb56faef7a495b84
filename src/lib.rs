pub mod cli;
pub mod config;
pub mod core;
#[cfg(feature = "gui")]
pub mod gui;
pub mod operation;
pub mod python;
