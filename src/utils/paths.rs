//! Project directories and version information

use std::{env, path::PathBuf};

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> = env::var(format!("{}_DATA", *PROJECT_NAME))
        .ok()
        .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", *PROJECT_NAME))
            .ok()
            .map(PathBuf::from);
    pub static ref GIT_COMMIT_HASH: String = option_env!("_GIT_INFO")
        .unwrap_or(env!("CARGO_PKG_VERSION"))
        .to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(data_dir) = DATA_FOLDER.clone() {
        data_dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(config_dir) = CONFIG_FOLDER.clone() {
        config_dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

/// Long version string shown by `--version`
pub fn version() -> String {
    let commit_hash = GIT_COMMIT_HASH.clone();
    let config_dir_path = get_config_dir().display().to_string();
    let data_dir_path = get_data_dir().display().to_string();

    format!(
        "\
{commit_hash}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_env_names() {
        assert_eq!(PROJECT_NAME.as_str(), "WIDGETUI");
        assert_eq!(LOG_ENV.as_str(), "WIDGETUI_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "widgetui.log");
    }

    #[test]
    fn test_version_lists_directories() {
        let version = version();
        assert!(version.starts_with(GIT_COMMIT_HASH.as_str()));
        assert!(version.contains("Config directory: "));
        assert!(version.contains("Data directory: "));
    }
}
