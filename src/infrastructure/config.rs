use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    model::todo_list::BlankTaskPolicy, presentation::config::keybindings, utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_BASE_PATH: &str = "/path/to/images/";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub images: Vec<String>,
    /// Prefix shown in front of every image identifier
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            base_path: default_base_path(),
        }
    }
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct TodoConfig {
    #[serde(default = "default_reject_blank_tasks")]
    pub reject_blank_tasks: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            reject_blank_tasks: default_reject_blank_tasks(),
        }
    }
}

fn default_reject_blank_tasks() -> bool {
    true
}

impl TodoConfig {
    pub fn blank_task_policy(&self) -> BlankTaskPolicy {
        if self.reject_blank_tasks {
            BlankTaskPolicy::Reject
        } else {
            BlankTaskPolicy::Accept
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub todo: TodoConfig,
}

impl Config {
    /// The built-in configuration alone
    pub fn from_defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Load the user configuration, if any, on top of the built-in defaults
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::from_defaults()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg.merge_defaults(default_config))
    }

    /// Fill whatever the user left out from `defaults`
    pub fn merge_defaults(mut self, defaults: Config) -> Self {
        for (scope, default_bindings) in defaults.keybindings.iter() {
            let user_bindings = self.keybindings.entry(*scope).or_default();
            for (keys, action) in default_bindings.iter() {
                user_bindings.entry(keys.clone()).or_insert(*action);
            }
        }

        if self.carousel.images.is_empty() {
            self.carousel.images = defaults.carousel.images;
        }

        self
    }
}
