use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const HASH_PREFIX: &str = "sha256:";

/// One entry of the user directory (`users.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Plaintext, or `sha256:<lowercase hex>`.
    pub password: String,
    #[serde(default)]
    pub preferred_first_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.preferred_first_name.trim().is_empty() {
            &self.username
        } else {
            &self.preferred_first_name
        }
    }

    /// Trimmed, case-insensitive username match.
    pub fn matches_username(&self, input: &str) -> bool {
        self.username.eq_ignore_ascii_case(input.trim())
    }

    pub fn check_password(&self, input: &str) -> bool {
        match self.password.strip_prefix(HASH_PREFIX) {
            Some(hex) => hash_password(input).eq_ignore_ascii_case(hex),
            None => self.password == input,
        }
    }
}

/// SHA-256 of the password as lowercase hex.
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// The form stored in `users.json`.
pub fn stored_hash(password: &str) -> String {
    format!("{HASH_PREFIX}{}", hash_password(password))
}
