use appver_core::{UpdatePolicy, strip_tag_prefix};
use appver_platform::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub update: UpdatePolicy,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            update: UpdatePolicy::default(),
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl AppSettings {
    /// Read settings from `paths`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(paths: &AppPaths) -> Self {
        Self::load_from(&paths.settings_file())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, paths: &AppPaths) -> Result<(), SettingsError> {
        paths.ensure_dirs()?;

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), content)?;
        Ok(())
    }

    /// Add `version` to the skip list. Returns `false` if an equal version is
    /// already skipped.
    pub fn skip_version(&mut self, version: &str) -> bool {
        let already_skipped = self
            .update
            .skipped_versions
            .iter()
            .any(|skipped| {
                appver_core::compare_versions(strip_tag_prefix(skipped), strip_tag_prefix(version))
                    .is_eq()
            });
        if already_skipped {
            return false;
        }
        self.update.skipped_versions.push(version.to_string());
        true
    }
}
