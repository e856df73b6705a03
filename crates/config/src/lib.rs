//! Settings for the spell tome renaming pass.
//!
//! Settings are layered with [figment], later sources winning:
//!
//! 1. Built-in defaults ([`Settings::default`]).
//! 2. A JSON settings file: the path given explicitly, otherwise
//!    `./settings.json` when present, otherwise `settings.json` in the
//!    platform configuration directory (see [`default_path`]).
//! 3. Environment variables prefixed with `SPELLTOME_`, e.g.
//!    `SPELLTOME_FORMAT="<spell> (<level>)"`.
//!
//! Callers can merge further providers (such as command-line overrides) onto
//! [`Settings::figment`] before handing it to [`Settings::from_figment`].

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the settings file looked up by default.
pub const SETTINGS_FILE: &str = "settings.json";
/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SPELLTOME_";
pub const DEFAULT_FORMAT: &str = "Spell Tome (<level>): <spell>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template for new spell tome names. Recognizes `<level>`, `<school>`,
    /// `<spell>` and `<plugin>`.
    pub format: String,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}
impl Settings {
    /// Loads settings from every source, see the [module docs](self).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_figment(Self::figment(path)?)
    }

    /// Builds the layered configuration without extracting it.
    ///
    /// An explicit `path` must exist; the implicit locations are skipped when
    /// they don't.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        let file = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => default_path(),
        };
        if let Some(file) = file {
            tracing::debug!(path = %file.display(), "Reading settings file");
            figment = figment.merge(Json::file(file));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extracts and validates settings from an already layered [`Figment`].
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment.extract().or_raise(|| ErrorKind::Invalid)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.format.trim().is_empty() {
            exn::bail!(ErrorKind::EmptyFormat);
        }
        Ok(())
    }
}

/// The settings file used when none is given: `./settings.json` if it exists,
/// else the one in the platform configuration directory (if that exists).
pub fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE);
    if local.is_file() {
        return Some(local);
    }
    ProjectDirs::from("", "", "spelltome")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .filter(|path| path.is_file())
}
