pub mod integrator;

pub use integrator::{ConfigError, IntegratorConfig, DEFAULT_CONFIG_FILE_NAME};
