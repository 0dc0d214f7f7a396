//! Persisted light/dark preference
//!
//! The preference is a one-field JSON record, `{"dark": true}`. Storage is
//! best effort: a missing or broken file reads as dark mode, and the caller
//! decides what to do with a failed write. The running app always trusts its
//! in-memory flag.

use crate::error::StorageResult;
use crate::storage::{config_dir, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that relocates the preference file.
pub const THEME_FILE_ENV: &str = "NEONCALC_THEME_FILE";

const THEME_FILE_NAME: &str = "theme.json";

/// Dark mode unless told otherwise.
pub const DEFAULT_DARK: bool = true;

fn default_dark() -> bool {
    DEFAULT_DARK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    #[serde(default = "default_dark")]
    pub dark: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { dark: DEFAULT_DARK }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at `$NEONCALC_THEME_FILE`, or `theme.json` in the user's
    /// config directory.
    pub fn default_location() -> Self {
        let path = std::env::var_os(THEME_FILE_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir("neoncalc").join(THEME_FILE_NAME));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> StorageResult<bool> {
        let pref: ThemePreference = read_json(&self.path)?;
        Ok(pref.dark)
    }

    /// The stored flag, or [`DEFAULT_DARK`] when it can't be read.
    pub fn load(&self) -> bool {
        match self.try_load() {
            Ok(dark) => dark,
            Err(e) => {
                log::debug!("theme preference unavailable at {}: {}", self.path.display(), e);
                DEFAULT_DARK
            }
        }
    }

    /// Overwrite the stored flag.
    pub fn save(&self, dark: bool) -> StorageResult<()> {
        write_json(&self.path, &ThemePreference { dark })
    }
}
