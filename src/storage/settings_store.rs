//! User settings storage implementation
//!
//! This module persists user preferences as a single pretty-printed JSON
//! document, including serialization, atomic replacement and serialized
//! read-modify-write cycles.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use crate::models::{Language, PreferenceMap, UserPreference};
use crate::utils::errors::Result;

/// JSON-file backed preference storage
///
/// Every operation re-reads the whole document. Clones share one lock, so
/// updates issued through any clone never interleave.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the settings document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full preference mapping
    ///
    /// A missing file yields an empty mapping; malformed content is an error.
    pub async fn load(&self) -> Result<PreferenceMap> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Settings file not found, starting empty");
                return Ok(PreferenceMap::new());
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read settings file");
                return Err(e.into());
            }
        };

        match serde_json::from_str::<PreferenceMap>(&content) {
            Ok(map) => {
                debug!(path = %self.path.display(), users = map.len(), "Settings loaded");
                Ok(map)
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Malformed settings file");
                Err(e.into())
            }
        }
    }

    /// Overwrite the settings document with `map`
    ///
    /// The document is written to a sibling temporary file and renamed into
    /// place, so readers see either the old or the new document.
    pub async fn save(&self, map: &PreferenceMap) -> Result<()> {
        let serialized = to_pretty_json(map)?;
        let tmp_path = self.temp_path();

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&tmp_path, serialized).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            error!(path = %self.path.display(), error = %e, "Failed to replace settings file");
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), users = map.len(), "Settings saved");
        Ok(())
    }

    /// Ensure a preference record exists for `user_id`, returning its language
    pub async fn ensure_user(&self, user_id: &str) -> Result<Language> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;

        if let Some(pref) = map.get(user_id) {
            return Ok(pref.language);
        }

        map.insert(user_id.to_string(), UserPreference::default());
        self.save(&map).await?;
        info!(user_id = user_id, "Created preference record");

        Ok(Language::default())
    }

    /// Language of `user_id`, or the default when the user has no record
    pub async fn language_of(&self, user_id: &str) -> Result<Language> {
        let map = self.load().await?;
        Ok(map.get(user_id).map(|pref| pref.language).unwrap_or_default())
    }

    /// Set and persist the language of `user_id`, creating the record if needed
    pub async fn set_language(&self, user_id: &str, language: Language) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;

        map.entry(user_id.to_string())
            .or_default()
            .language = language;
        self.save(&map).await?;
        info!(user_id = user_id, language = %language, "Language preference updated");

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serialize with four-space indentation, keeping non-ASCII text literal
fn to_pretty_json(map: &PreferenceMap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    map.serialize(&mut ser)?;
    Ok(buf)
}
