pub mod config;
pub mod engineering;
pub mod leaky_integrator;
pub mod sample;

pub use config::{ConfigError, IntegratorConfig};
pub use engineering::{format_engineering, SuffixStyle};
pub use leaky_integrator::{blend, LeakyIntegrator, DEFAULT_GAIN};
pub use sample::{Sample, SampleError};
