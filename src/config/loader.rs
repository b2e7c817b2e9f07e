use super::{Config, CONFIG_FILE_NAME};
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tokio::fs;

/// Builds a [`Config`] from defaults, a TOML file and the environment
pub struct ConfigLoader {
    config: Config,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Load `path`, failing if it does not exist
    pub async fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if config.default_amount == 0 {
            return Err(anyhow!(
                "default_amount in {} must be at least 1",
                path.display()
            ));
        }

        tracing::debug!("Loaded configuration from {}", path.display());
        self.config = config;
        Ok(())
    }

    /// Load `movierate.toml` from `dir` if it exists
    pub async fn load_project(&mut self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            self.load_file(&config_path).await?;
        }
        Ok(())
    }

    pub fn merge_env_vars(&mut self) {
        self.config.merge_env_vars();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_project_without_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();

        loader.load_project(temp_dir.path()).await.unwrap();

        assert_eq!(loader.config(), &Config::default());
    }

    #[tokio::test]
    async fn test_load_project_reads_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "data_path = \"netflix.json\"\ndefault_amount = 25\n",
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_project(temp_dir.path()).await.unwrap();
        let config = loader.into_config();

        assert_eq!(config.data_path, PathBuf::from("netflix.json"));
        assert_eq!(config.default_amount, 25);
        assert!(config.strict);
    }

    #[tokio::test]
    async fn test_zero_default_amount_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "default_amount = 0\n").unwrap();

        let mut loader = ConfigLoader::new();
        let err = loader.load_file(&path).await.unwrap_err();

        assert!(err.to_string().contains("default_amount"));
    }

    #[tokio::test]
    async fn test_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();

        let result = loader.load_file(&temp_dir.path().join("nope.toml")).await;
        assert!(result.is_err());
    }
}
