//! Firebase ID token verification against Google's securetoken key set.

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

pub const GOOGLE_JWK_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

const JWK_CACHE_KEY: &str = "jwk";

#[derive(Clone)]
pub struct FirebaseAuthService {
    client: Client,
    project_id: String,
    jwk_url: String,
    keys: Arc<Cache<String, Vec<GooglePublicKey>>>,
}

/// One RSA key from the JWK endpoint; n and e are base64url-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePublicKey {
    pub kid: String,
    pub n: String,
    pub e: String,
}

#[derive(Debug, Deserialize)]
struct JwkResponse {
    keys: Vec<GooglePublicKey>,
}

/// Decoded identity claims. Everything downstream keys off the email.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseClaims {
    pub sub: String,
    pub email: Option<String>,
}

impl FirebaseAuthService {
    pub fn new(project_id: String, jwk_url: String) -> Self {
        let keys = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(3600)) // Google rotates keys slowly
            .build();

        Self {
            client: Client::new(),
            project_id,
            jwk_url,
            keys: Arc::new(keys),
        }
    }

    /// Verify a Firebase ID token: RS256 signature against Google's current
    /// key set, audience = project id, issuer = securetoken issuer for the
    /// project. Returns the decoded claims.
    pub async fn verify_id_token(
        &self,
        token: &str,
    ) -> Result<FirebaseClaims, Box<dyn std::error::Error + Send + Sync>> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or("token header has no key id")?;

        let keys = self.signing_keys().await?;
        let key = keys
            .iter()
            .find(|k| k.kid == kid)
            .ok_or("no matching Google signing key")?;

        let decoding_key = DecodingKey::from_rsa_components(&key.n, &key.e)?;
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!(
            "https://securetoken.google.com/{}",
            self.project_id
        )]);

        let data = decode::<FirebaseClaims>(token, &decoding_key, &validation)?;
        Ok(data.claims)
    }

    async fn signing_keys(
        &self,
    ) -> Result<Vec<GooglePublicKey>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(cached) = self.keys.get(JWK_CACHE_KEY).await {
            tracing::debug!("Signing key cache hit");
            return Ok(cached);
        }

        tracing::info!("Fetching Google signing keys");

        let response = self.client.get(&self.jwk_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Google JWK endpoint error {}: {}", status, error_text).into());
        }

        let data: JwkResponse = response.json().await?;

        self.keys
            .insert(JWK_CACHE_KEY.to_string(), data.keys.clone())
            .await;

        Ok(data.keys)
    }
}
