use super::ModKey;
use crate::error::{Error, ErrorKind};
use exn::ResultExt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Largest local record ID; the top byte of a raw FormID is the load order
/// index, which a [`FormKey`] replaces with the owning [`ModKey`].
const MAX_LOCAL_ID: u32 = 0x00FF_FFFF;

/// Load-order independent record identifier: a local ID plus the plugin that
/// originally defined the record.
///
/// Text form is `0937A5:Skyrim.esm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormKey {
    id: u32,
    mod_key: ModKey,
}
impl FormKey {
    /// Local IDs wider than 24 bits are truncated.
    pub const fn new(id: u32, mod_key: ModKey) -> Self {
        Self { id: id & MAX_LOCAL_ID, mod_key }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The plugin that first defined this record (not necessarily the one
    /// that wins in a load order).
    pub fn mod_key(&self) -> &ModKey {
        &self.mod_key
    }
}
impl FromStr for FormKey {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((id, mod_key)) = s.trim().split_once(':') else {
            exn::bail!(ErrorKind::InvalidFormKey(s.to_string()));
        };
        if id.is_empty() || id.len() > 6 {
            exn::bail!(ErrorKind::InvalidFormKey(s.to_string()));
        }
        let id = u32::from_str_radix(id, 16).or_raise(|| ErrorKind::InvalidFormKey(s.to_string()))?;
        let mod_key = mod_key.parse::<ModKey>().or_raise(|| ErrorKind::InvalidFormKey(s.to_string()))?;
        Ok(Self::new(id, mod_key))
    }
}
impl TryFrom<String> for FormKey {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl Display for FormKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:06X}:{}", self.id, self.mod_key)
    }
}
impl Serialize for FormKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for FormKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: Error| serde::de::Error::custom(&*e))
    }
}
