use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a node in the option tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(String);

impl MenuId {
    pub const ROOT: &'static str = "root";
    pub const RECRUITER: &'static str = "recruiter";
    pub const CLIENT: &'static str = "client";
    /// Terminal node: installs no options.
    pub const BROWSING: &'static str = "browsing";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self::new(Self::ROOT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
