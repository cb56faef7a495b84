pub mod manager;
pub mod schema;
pub mod validation;

pub use manager::ConfigManager;
pub use schema::{PipConfig, DEFAULT_CONFIG_FILE};
pub use validation::validate_python_path;
