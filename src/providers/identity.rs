//! Identity provider verification
//!
//! Login hands us a provider-issued access token; one outbound GET to the
//! provider's profile endpoint both validates the token and yields the
//! profile used to upsert the user row. Any non-success provider response
//! maps to 401.

use crate::core::AppError;
use crate::entities::AuthProviderKind;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

const MICROSOFT_GRAPH_ME: &str = "https://graph.microsoft.com/v1.0/me";
const FACEBOOK_GRAPH_ME: &str = "https://graph.facebook.com/me";

/// Profile as reported by the identity provider.
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub provider_kind: AuthProviderKind,
    pub provider_id: String,
    pub name: String,
    pub photo_url: Option<String>,
}

#[derive(Deserialize)]
struct MicrosoftProfile {
    id: String,
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Deserialize)]
struct FacebookProfile {
    id: String,
    name: String,
    picture: Option<FacebookPicture>,
}

#[derive(Deserialize)]
struct FacebookPicture {
    data: FacebookPictureData,
}

#[derive(Deserialize)]
struct FacebookPictureData {
    url: Option<String>,
}

pub struct IdentityClient {
    http: reqwest::Client,
    demo_mode: bool,
}

impl IdentityClient {
    pub fn new(demo_mode: bool) -> Self {
        Self {
            http: reqwest::Client::new(),
            demo_mode,
        }
    }

    /// Resolves a provider token into a profile. The demo provider (and
    /// every provider while demo mode is on) needs no outbound call: the
    /// token itself is the demo identity.
    #[instrument(skip(self, token, name), fields(provider = ?provider))]
    pub async fn verify(
        &self,
        provider: AuthProviderKind,
        token: &str,
        name: Option<&str>,
    ) -> Result<ProviderProfile, AppError> {
        if self.demo_mode || provider == AuthProviderKind::Demo {
            debug!("Resolving demo identity");
            return Ok(ProviderProfile {
                provider_kind: provider,
                provider_id: token.to_string(),
                name: name.unwrap_or("Demo User").to_string(),
                photo_url: None,
            });
        }

        match provider {
            AuthProviderKind::Microsoft => self.verify_microsoft(token).await,
            AuthProviderKind::Facebook => self.verify_facebook(token).await,
            AuthProviderKind::Demo => unreachable!("handled above"),
        }
    }

    async fn verify_microsoft(&self, token: &str) -> Result<ProviderProfile, AppError> {
        let response = self
            .http
            .get(MICROSOFT_GRAPH_ME)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Microsoft Graph rejected the token: {}", response.status());
            return Err(AppError::unauthorized("Identity provider rejected the token"));
        }

        let profile: MicrosoftProfile = response.json().await?;
        Ok(ProviderProfile {
            provider_kind: AuthProviderKind::Microsoft,
            provider_id: profile.id,
            name: profile.display_name,
            photo_url: None,
        })
    }

    async fn verify_facebook(&self, token: &str) -> Result<ProviderProfile, AppError> {
        let response = self
            .http
            .get(FACEBOOK_GRAPH_ME)
            .query(&[("fields", "id,name,picture"), ("access_token", token)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Facebook Graph rejected the token: {}", response.status());
            return Err(AppError::unauthorized("Identity provider rejected the token"));
        }

        let profile: FacebookProfile = response.json().await?;
        Ok(ProviderProfile {
            provider_kind: AuthProviderKind::Facebook,
            provider_id: profile.id,
            name: profile.name,
            photo_url: profile.picture.and_then(|p| p.data.url),
        })
    }
}
