use anyhow::{Context, Result};
use directories::ProjectDirs;
use keepsake_core::ports::{AppConfig, ConfigStore};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based configuration store that implements ConfigStore
pub struct FileConfigStore {
    config_path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Result<Self> {
        let config_path = Self::get_default_config_path()?;
        Ok(Self { config_path })
    }

    pub fn with_path<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "keepsake")
            .context("Failed to determine project directories")?;

        Ok(proj_dirs.config_dir().join("keepsake.toml"))
    }

    /// Create default config if it doesn't exist
    fn ensure_config_exists(&self) -> Result<()> {
        if !self.config_path.exists() {
            if let Some(parent) = self.config_path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            self.save(&AppConfig::default())?;
        }
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<AppConfig> {
        self.ensure_config_exists()?;

        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {}", self.config_path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", self.config_path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let contents = toml::to_string_pretty(config)
            .context("Failed to serialize config to TOML")?;

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", self.config_path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::domain::MemoryCard;
    use tempfile::TempDir;

    #[test]
    fn test_config_load_nonexistent_creates_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("keepsake.toml");

        let store = FileConfigStore::with_path(&config_path);
        let config = store.load()?;

        assert_eq!(config, AppConfig::default());
        assert!(config_path.exists());

        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");
        let store = FileConfigStore::with_path(&config_path);

        let mut config = AppConfig::default();
        config.ui.hearts_per_message = 30;
        config.video.player = "vlc".to_string();
        config.cards = vec![MemoryCard {
            title: "Beach".to_string(),
            message: "Sand everywhere".to_string(),
            video: Some(PathBuf::from("/clips/beach.mp4")),
        }];

        store.save(&config)?;
        assert_eq!(store.load()?, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(
            &config_path,
            r#"
version = 1

[dates]
journey_start = "2024-02-14T18:30:00"
countdown_target = "2025-02-14T00:00:00"

[ui]
card_press_ms = 500
"#,
        )?;

        let config = FileConfigStore::with_path(&config_path).load()?;
        assert_eq!(config.dates.journey_start.to_string(), "2024-02-14 18:30:00");
        assert_eq!(config.ui.card_press_ms, 500);
        assert_eq!(config.ui.tick_interval_ms, 1000);
        assert_eq!(config.ui.initial_hearts, 15);
        assert_eq!(config.video.player, "mpv");
        assert!(config.cards.is_empty());

        Ok(())
    }

    #[test]
    fn test_invalid_config_reports_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "version = \"one\"")?;

        let err = FileConfigStore::with_path(&config_path).load().unwrap_err();
        assert!(err.to_string().contains("broken.toml"));

        Ok(())
    }

    #[test]
    fn test_get_default_config_path() -> Result<()> {
        let path = FileConfigStore::get_default_config_path()?;
        assert!(path.ends_with("keepsake.toml"));
        Ok(())
    }
}
