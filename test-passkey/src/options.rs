//! Passkey creation options
//!
//! Only `rp_id` is required. Every other field overrides a generated default
//! and is copied into the credential verbatim.

use serde::{Deserialize, Serialize};

/// What to do with the AAGUID when the caller does not supply one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AaguidPolicy {
    /// Leave the AAGUID unset
    #[default]
    Omit,
    /// Generate 16 random bytes and Base64-encode them
    Random,
}

/// Options for [`create_test_passkey`](crate::create_test_passkey)
///
/// Deserializes from the camelCase shape used by JSON fixtures:
///
/// ```json
/// { "rpId": "example.com", "signCount": 3, "aaguidPolicy": "random" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestPasskeyOptions {
    /// Relying party ID the credential is registered against
    pub rp_id: String,

    /// Base64 credential ID (random UUID when absent or empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,

    /// Base64 AAGUID (see [`AaguidPolicy`] when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aaguid: Option<String>,

    /// Initial signature counter (0 when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_count: Option<u32>,

    /// AAGUID defaulting policy
    #[serde(default)]
    pub aaguid_policy: AaguidPolicy,
}

impl CreateTestPasskeyOptions {
    /// Create new options for the given relying party
    pub fn new(rp_id: impl Into<String>) -> Self {
        Self {
            rp_id: rp_id.into(),
            credential_id: None,
            aaguid: None,
            sign_count: None,
            aaguid_policy: AaguidPolicy::default(),
        }
    }

    /// Set an explicit Base64 credential ID
    pub fn with_credential_id(mut self, credential_id: impl Into<String>) -> Self {
        self.credential_id = Some(credential_id.into());
        self
    }

    /// Set an explicit Base64 AAGUID
    pub fn with_aaguid(mut self, aaguid: impl Into<String>) -> Self {
        self.aaguid = Some(aaguid.into());
        self
    }

    /// Set the initial signature counter
    pub fn with_sign_count(mut self, sign_count: u32) -> Self {
        self.sign_count = Some(sign_count);
        self
    }

    /// Set the AAGUID defaulting policy
    pub fn with_aaguid_policy(mut self, policy: AaguidPolicy) -> Self {
        self.aaguid_policy = policy;
        self
    }
}
