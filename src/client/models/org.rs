//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: u64,

    /// Organization login (the URL-safe handle)
    pub login: String,

    /// Display name (optional, not all orgs set one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Organization description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
