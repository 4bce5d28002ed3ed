use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};

/// Application configuration: UI chrome settings only.
///
/// Theme documents and extraction results are deliberately never persisted;
/// they live only between one validation and the next.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme_choice: crate::theme::ThemeChoice,
    /// Re-run validation on every edit instead of waiting for the button
    #[serde(default)]
    pub auto_validate: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_choice: crate::theme::ThemeChoice::default(),
            auto_validate: false, // OFF by default; explicit Validate is the primary flow
        }
    }
}

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(mut path) = get_data_dir() {
        let json = serde_json::to_string_pretty(config)?;

        let mut temp_path = path.clone();
        temp_path.push("config.json.tmp");

        path.push("config.json");

        // Create file with restrictive permissions from the start to prevent
        // race condition where file is briefly world-readable
        #[cfg(unix)]
        {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .mode(0o600)
                .open(&temp_path)
                .await?;

            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        #[cfg(not(unix))]
        {
            use tokio::io::AsyncWriteExt;

            let mut file = tokio::fs::File::create(&temp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        // Atomic rename
        tokio::fs::rename(temp_path, path).await?;
    }
    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config() -> AppConfig {
    if let Some(mut path) = get_data_dir() {
        path.push("config.json");
        if let Ok(json) = tokio::fs::read_to_string(&path).await
            && let Ok(config) = serde_json::from_str::<AppConfig>(&json)
        {
            return config;
        }
    }
    AppConfig::default()
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// This blocks the current thread and should only be used in `State::new()` where
/// async initialization isn't possible. Everywhere else should use async `load_config()`.
pub fn load_config_blocking() -> AppConfig {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.block_on(load_config())
    } else {
        tokio::runtime::Runtime::new()
            .expect("Failed to create runtime")
            .block_on(load_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme_choice, crate::theme::ThemeChoice::Nord);
        assert!(!config.auto_validate);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            theme_choice: crate::theme::ThemeChoice::PaperLight,
            auto_validate: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme_choice, config.theme_choice);
        assert!(back.auto_validate);
    }

    #[test]
    fn test_config_tolerates_missing_fields() {
        let back: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(back.theme_choice, crate::theme::ThemeChoice::Nord);
    }
}
