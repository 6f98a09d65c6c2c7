//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading encanto configuration files
//! from the data directory and the project tree.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "encanto.yaml";

/// File name of the user configuration inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use encanto::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `{data_dir}/config.yaml` (precedence 1)
    /// 2. The nearest `encanto.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => crate::database::resolve_data_dir()?.join(USER_CONFIG_FILE),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest `encanto.yaml` at or above `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                log::debug!("using project config {}", candidate.display());
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        // An empty file is an empty config.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&child).unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "output_format: csv\n",
        )
        .unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_load_all_sorts_by_precedence() {
        let data_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(data_dir.path().join(USER_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "output_format: tsv\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(data_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
