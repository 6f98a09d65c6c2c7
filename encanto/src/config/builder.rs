//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from every source in precedence order.
///
/// # Examples
///
/// ```
/// use encanto::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { path_separator: Some("/".into()), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.separator(), "/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder that reads files from the current directory and the
    /// resolved data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project config discovery from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Read the user config from `dir` instead of the resolved data
    /// directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignore configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ENCANTO_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged result is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                log::debug!("loaded config {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_file_beats_user_file() {
        let data_dir = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(data_dir.path().join("config.yaml"), "output_format: csv\npath_separator: /\n")
            .unwrap();
        fs::write(project.path().join("encanto.yaml"), "output_format: json\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(data_dir.path())
            .with_working_dir(project.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.separator(), "/");
    }

    #[test]
    fn test_overrides_win() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("encanto.yaml"), "output_format: json\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(project.path().join("nowhere"))
            .with_working_dir(project.path())
            .skip_env()
            .with_config(Config {
                output_format: Some(OutputFormat::Table),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Table));
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                path_separator: Some(String::new()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
