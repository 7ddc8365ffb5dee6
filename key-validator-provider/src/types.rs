//! Public data types

use serde::{Deserialize, Serialize};

/// Account summary returned by a successful key validation.
///
/// Only `total_balance` is shown to users; the other fields are kept so callers
/// can use them without another round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Account identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Creation timestamp, as sent by the service.
    #[serde(default)]
    pub created_at: String,
    /// Pre-formatted total balance (for example `"42.00"`). Empty when the
    /// service omits it.
    #[serde(default, rename = "totalBalance")]
    pub total_balance: String,
}

/// Static description of an account-info service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier, used as the log prefix.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Default user-info endpoint.
    pub endpoint: &'static str,
}
