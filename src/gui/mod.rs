//! Native desktop front-end (cargo feature `gui`).

mod app;

pub use app::{run, PipApp};
