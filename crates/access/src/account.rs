//! Account flags as read from the user record.

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// The role-bearing flags of a user record.
///
/// Every other field of the record (name, email, address, ...) is ignored.
/// Missing and `null` flags read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "falsy")]
    pub is_superuser: bool,

    #[serde(default, deserialize_with = "falsy")]
    pub is_admin_account: bool,

    #[serde(default, deserialize_with = "falsy")]
    pub is_staff: bool,

    #[serde(default, deserialize_with = "falsy")]
    pub is_staff_account: bool,

    #[serde(default, deserialize_with = "falsy")]
    pub is_volunteer: bool,
}

fn falsy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Account {
    /// An account with no role flags set.
    pub fn member() -> Self {
        Self::default()
    }

    pub fn superuser() -> Self {
        Self {
            is_superuser: true,
            ..Self::default()
        }
    }

    pub fn admin_account() -> Self {
        Self {
            is_admin_account: true,
            ..Self::default()
        }
    }

    pub fn staff() -> Self {
        Self {
            is_staff: true,
            ..Self::default()
        }
    }

    pub fn staff_account() -> Self {
        Self {
            is_staff_account: true,
            ..Self::default()
        }
    }

    pub fn volunteer() -> Self {
        Self {
            is_volunteer: true,
            ..Self::default()
        }
    }

    /// Flag-wise OR of two accounts.
    pub fn merge(self, other: Account) -> Self {
        Self {
            is_superuser: self.is_superuser || other.is_superuser,
            is_admin_account: self.is_admin_account || other.is_admin_account,
            is_staff: self.is_staff || other.is_staff,
            is_staff_account: self.is_staff_account || other.is_staff_account,
            is_volunteer: self.is_volunteer || other.is_volunteer,
        }
    }

    /// Load an account from a JSON user record on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load a user record that may be `null`.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse_optional(&content)
    }

    /// Parse an account from a JSON user record. The record must be an object.
    pub fn parse(json: &str) -> Result<Self> {
        Self::parse_optional(json)?
            .ok_or_else(|| Error::Parse("account record must be a JSON object".to_string()))
    }

    /// Parse a user record, reading a `null` document as no account.
    pub fn parse_optional(json: &str) -> Result<Option<Self>> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
        if value.is_null() {
            return Ok(None);
        }
        if !value.is_object() {
            return Err(Error::Parse("account record must be a JSON object".to_string()));
        }
        Self::deserialize(value)
            .map(Some)
            .map_err(|e| Error::Parse(e.to_string()))
    }
}
