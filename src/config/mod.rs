//! Configuration loading and storage
//!
//! Settings live in `~/.cookbook/config.toml`; every section is optional.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ApiConfig, Config, ImagesConfig, OutputConfig, CONFIG_KEYS, DEFAULT_BASE_URL};
