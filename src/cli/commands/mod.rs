pub mod config;
pub mod doctor;
pub mod gui;
pub mod operation;
