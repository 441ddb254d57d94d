//! Crate configuration.
//!
//! Embedders point this at a TOML file; every field has a default so a
//! missing file or an empty table is valid.  Unknown keys are tolerated to
//! keep old configs working across upgrades.
//!
//! ```toml
//! confirm_sign_out = true
//!
//! [delegated_auth]
//! issuer = "https://id.example.org"
//! discovery_timeout_secs = 10
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default OIDC discovery timeout (seconds).
const DEFAULT_DISCOVERY_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionGuardConfig {
    /// Ask before signing out other devices on the interactive path.
    #[serde(default = "default_true")]
    pub confirm_sign_out: bool,
    /// Delegated-auth (OIDC) settings.
    pub delegated_auth: DelegatedAuthConfig,
}

/// Delegated-auth discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatedAuthConfig {
    /// OIDC issuer to discover against.  Unset disables delegated auth.
    pub issuer: Option<String>,
    /// Timeout for the discovery request.
    pub discovery_timeout_secs: u64,
}

impl Default for DelegatedAuthConfig {
    fn default() -> Self {
        Self {
            issuer: None,
            discovery_timeout_secs: DEFAULT_DISCOVERY_TIMEOUT_SECS,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Default for SessionGuardConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl SessionGuardConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::defaults());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config at {}", path.display()))?;
        Ok(config)
    }

    /// The built-in defaults (confirmation on, delegated auth off).
    pub fn defaults() -> Self {
        Self {
            confirm_sign_out: true,
            delegated_auth: DelegatedAuthConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_confirm_and_disable_delegated_auth() {
        let config = SessionGuardConfig::defaults();
        assert!(config.confirm_sign_out);
        assert_eq!(config.delegated_auth.issuer, None);
        assert_eq!(
            config.delegated_auth.discovery_timeout_secs,
            DEFAULT_DISCOVERY_TIMEOUT_SECS
        );
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionGuardConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.confirm_sign_out);
    }

    #[test]
    fn parses_a_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessionguard.toml");
        std::fs::write(
            &path,
            r#"
confirm_sign_out = false

[delegated_auth]
issuer = "https://id.example.org"
discovery_timeout_secs = 3
"#,
        )
        .unwrap();

        let config = SessionGuardConfig::load(&path).unwrap();
        assert!(!config.confirm_sign_out);
        assert_eq!(
            config.delegated_auth.issuer.as_deref(),
            Some("https://id.example.org")
        );
        assert_eq!(config.delegated_auth.discovery_timeout_secs, 3);
    }

    #[test]
    fn tolerates_unknown_keys_and_partial_tables() {
        let config: SessionGuardConfig = toml::from_str(
            r#"
some_future_flag = "yes"

[delegated_auth]
issuer = "https://id.example.org"
"#,
        )
        .unwrap();

        assert!(config.confirm_sign_out);
        assert_eq!(config.delegated_auth.discovery_timeout_secs, 10);
    }
}
