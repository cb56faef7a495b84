pub mod error;
pub mod fs;
pub mod process;

pub use error::{PipMgrError, Result};
pub use fs::{ensure_dir_exists, ensure_parent_exists};
pub use process::{CapturedOutput, ProcessExecutor};
