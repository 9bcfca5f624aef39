//! Log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Where to append the JSONL insight log; unset disables it
    pub insight_log: Option<PathBuf>,
}
