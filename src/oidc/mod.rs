//! Delegated-auth (OIDC) discovery.
//!
//! When the account lives behind an OpenID Connect provider, devices other
//! than the current one must be signed out through the provider's account
//! manager rather than the local interactive-auth flow.  Whether that mode
//! is active is discovered from the issuer's well-known metadata: the
//! `account_management_uri` field of `/.well-known/openid-configuration`.
//!
//! ## Design
//! - Discovery runs once per component lifetime and the result is cached,
//!   including the negative result ("no delegated auth").
//! - A missing `account_management_uri` is not an error; the issuer simply
//!   does not delegate session management.
//! - Network or parse failures are logged and cached as "no delegated
//!   auth" — the panel falls back to the interactive-auth flow.

use serde::Deserialize;
use tokio::sync::OnceCell;

// ── Context ──────────────────────────────────────────────────────

/// Resolved delegated-auth mode.
///
/// Presence means every non-current device must be signed out via the
/// provider's account manager, one device at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedAuthContext {
    /// Where the provider manages account sessions.
    pub account_management_url: String,
}

// ── Discovery ────────────────────────────────────────────────────

/// The slice of the OIDC provider metadata we read.
#[derive(Debug, Deserialize)]
struct ProviderMetadata {
    account_management_uri: Option<String>,
}

/// Fetch the issuer's well-known metadata and extract the account
/// management URL, if the provider advertises one.
pub async fn discover(
    issuer: &str,
    http: &reqwest::Client,
) -> anyhow::Result<Option<String>> {
    let url = format!(
        "{}/.well-known/openid-configuration",
        issuer.trim_end_matches('/')
    );

    let resp = http.get(&url).send().await?.error_for_status()?;
    let metadata: ProviderMetadata = resp.json().await?;

    Ok(metadata.account_management_uri)
}

// ── Resolver ─────────────────────────────────────────────────────

/// Resolves the delegated-auth context once and caches it.
///
/// Mirrors a settings panel's lifetime: discovery kicks off when the panel
/// mounts and every later sign-out request reads the cached answer.
pub struct DelegatedAuthResolver {
    issuer: Option<String>,
    http: reqwest::Client,
    cached: OnceCell<Option<DelegatedAuthContext>>,
}

impl DelegatedAuthResolver {
    /// Resolver for the given issuer.  `None` disables delegated auth.
    pub fn new(issuer: Option<String>, http: reqwest::Client) -> Self {
        Self {
            issuer,
            http,
            cached: OnceCell::new(),
        }
    }

    /// Resolver that never reports delegated auth (local-auth deployments).
    pub fn disabled() -> Self {
        Self::new(None, reqwest::Client::new())
    }

    /// Resolver wired from the crate config (issuer + discovery timeout).
    pub fn from_config(config: &crate::config::SessionGuardConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.delegated_auth.discovery_timeout_secs,
            ))
            .build()?;
        Ok(Self::new(config.delegated_auth.issuer.clone(), http))
    }

    /// Resolver with a pre-resolved context (tests, embedders that already
    /// know the account manager URL).
    pub fn with_context(ctx: DelegatedAuthContext) -> Self {
        let cached = OnceCell::new();
        cached
            .set(Some(ctx))
            .expect("fresh OnceCell accepts a value");
        Self {
            issuer: None,
            http: reqwest::Client::new(),
            cached,
        }
    }

    /// The delegated-auth context, discovering it on first call.
    pub async fn resolve(&self) -> Option<DelegatedAuthContext> {
        self.cached
            .get_or_init(|| async {
                let issuer = self.issuer.as_deref()?;
                match discover(issuer, &self.http).await {
                    Ok(Some(url)) => {
                        tracing::debug!(issuer, url = %url, "delegated auth active");
                        Some(DelegatedAuthContext {
                            account_management_url: url,
                        })
                    }
                    Ok(None) => {
                        tracing::debug!(issuer, "issuer does not delegate session management");
                        None
                    }
                    Err(e) => {
                        tracing::warn!(issuer, error = %e, "OIDC discovery failed; using interactive auth");
                        None
                    }
                }
            })
            .await
            .clone()
    }
}
