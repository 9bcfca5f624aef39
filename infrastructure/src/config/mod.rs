//! Configuration file loading for fashionos-insights
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FASHIONOS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./fashionos.toml` or `./.fashionos.toml`
//! 4. Global: `$XDG_CONFIG_HOME/fashionos/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileDispatchConfig, FileLogConfig, FileOutputConfig};
pub use loader::{ConfigLoader, ConfigSource};
