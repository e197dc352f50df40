//! Storefront configuration.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Storefront configuration.
///
/// Every section is optional in the TOML source; missing sections and keys
/// take the defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Shop identity.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Outbound messaging handoff.
    #[serde(default)]
    pub messaging: MessagingConfig,
}

impl StorefrontConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }
}

/// Shop identity used in the order message header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Shop name.
    #[serde(default = "default_shop_name")]
    pub name: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
        }
    }
}

fn default_shop_name() -> String {
    "Batik Naela".to_string()
}

/// Where checkout messages are handed off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessagingConfig {
    /// Messaging service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Recipient identifier appended to the base URL.
    #[serde(default = "default_recipient")]
    pub recipient: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recipient: default_recipient(),
        }
    }
}

fn default_base_url() -> String {
    "https://wa.me".to_string()
}

fn default_recipient() -> String {
    "087845178824".to_string()
}
