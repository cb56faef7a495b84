pub mod interpreter;
pub mod pip;

pub use interpreter::default_interpreter;
pub use pip::{parse_show_version, PipManager};
