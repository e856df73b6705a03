use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The kind of plugin file, as told by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModKind {
    /// Master file (.esm)
    Master,
    /// Regular plugin (.esp)
    Plugin,
    /// Light master (.esl)
    Light,
}
impl ModKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ModKind::Master => "esm",
            ModKind::Plugin => "esp",
            ModKind::Light => "esl",
        }
    }
}

/// Identifies a plugin within a load order, e.g. `Skyrim.esm`.
///
/// Equality and hashing ignore ASCII case, matching how the game treats plugin
/// file names.
#[derive(Debug, Clone)]
pub struct ModKey {
    name: Cow<'static, str>,
    kind: ModKind,
}
impl ModKey {
    /// Builds a key from a file name without extension and its kind.
    pub fn new(name: impl Into<String>, kind: ModKind) -> Self {
        Self { name: Cow::Owned(name.into()), kind }
    }

    /// Usable in `const` contexts for well-known plugins.
    pub const fn from_static(name: &'static str, kind: ModKind) -> Self {
        Self { name: Cow::Borrowed(name), kind }
    }

    /// File name without the extension, e.g. `Skyrim`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModKind {
        self.kind
    }

    /// Full file name, e.g. `Skyrim.esm`.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}
impl PartialEq for ModKey {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name.eq_ignore_ascii_case(&other.name)
    }
}
impl Eq for ModKey {}
impl Hash for ModKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}
impl FromStr for ModKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((name, ext)) = trimmed.rsplit_once('.') else {
            exn::bail!(ErrorKind::InvalidModKey(s.to_string()));
        };
        let kind = match ext.to_ascii_lowercase().as_str() {
            "esm" => ModKind::Master,
            "esp" => ModKind::Plugin,
            "esl" => ModKind::Light,
            _ => exn::bail!(ErrorKind::InvalidModKey(s.to_string())),
        };
        // Plugins live flat in the data folder; anything path-like is a mistake.
        if name.is_empty() || name.contains(['/', '\\', '\0']) {
            exn::bail!(ErrorKind::InvalidModKey(s.to_string()));
        }
        Ok(Self::new(name, kind))
    }
}
impl TryFrom<String> for ModKey {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl Display for ModKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.name, self.kind.extension())
    }
}
impl Serialize for ModKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for ModKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: Error| serde::de::Error::custom(&*e))
    }
}
