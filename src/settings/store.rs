//! Settings persistence.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use fs2::FileExt;

use super::Settings;

/// External persistence for the settings object.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<Settings>;
    async fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings stored as a TOML file on disk.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prefpane")
            .join("settings.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for TomlFileStore {
    /// A missing file is first run: defaults, not an error.
    async fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read settings file: {}", self.path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings file: {}", self.path.display()))?;
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        let content =
            toml::to_string_pretty(settings).context("failed to serialize settings")?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .context("settings write task failed")?
    }
}

/// Atomic write with file locking.
///
/// 1. An exclusive lock (separate lock file, so the rename below never
///    clobbers the lock itself) keeps concurrent writers out.
/// 2. Temp file + `sync_all` + rename keeps a crash from corrupting the
///    settings file.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create settings directory: {}", parent.display())
        })?;
    }

    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("failed to create lock file: {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .context("failed to acquire settings lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("failed to write settings content")?;
    temp_file
        .sync_all()
        .context("failed to sync settings file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename settings file: {}", path.display()))?;

    // Lock released when lock_file drops.
    Ok(())
}
