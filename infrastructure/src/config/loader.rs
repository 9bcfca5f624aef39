//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fashionos";
const PROJECT_FILES: [&str; 2] = ["fashionos.toml", ".fashionos.toml"];
const ENV_PREFIX: &str = "FASHIONOS_";

/// Where a configuration layer comes from, for `--show-config`
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: Option<PathBuf>,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `FASHIONOS_SECTION__KEY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./fashionos.toml` or `./.fashionos.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/fashionos/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        // An explicit path that does not exist is an error, not a skip
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `$XDG_CONFIG_HOME/fashionos/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// The first project-level config file present in the working directory
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every file layer in priority order, lowest first
    pub fn sources(config_path: Option<&Path>) -> Vec<ConfigSource> {
        let global = Self::global_config_path();
        let mut sources = vec![
            ConfigSource {
                label: "Default",
                path: None,
                found: true,
            },
            ConfigSource {
                label: "Global",
                found: global.as_ref().is_some_and(|p| p.exists()),
                path: global,
            },
        ];

        let project = Self::project_config_path();
        sources.push(ConfigSource {
            label: "Project",
            found: project.is_some(),
            path: project.or_else(|| Some(PathBuf::from(PROJECT_FILES[0]))),
        });

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                found: path.exists(),
                path: Some(path.to_path_buf()),
            });
        }

        sources
    }
}
