use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::credentials::ServiceAccountKey;
use crate::error::{AppError, AppResult};

/// Scopes needed for spreadsheet read/write plus Drive file management
/// (lookup, creation, sharing).
pub const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";

const ASSERTION_TTL_SECS: i64 = 3600;
/// Refresh this long before the cached token actually expires.
const EXPIRY_SLACK_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: i64,
}

/// Exchanges a signed service-account assertion for short-lived bearer
/// tokens and caches them until shortly before expiry.
#[derive(Clone)]
pub struct TokenProvider {
    key: Arc<ServiceAccountKey>,
    http: reqwest::Client,
    cached: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenProvider {
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Self {
        Self {
            key: Arc::new(key),
            http,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn bearer_token(&self) -> AppResult<String> {
        let now = Utc::now().timestamp();

        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.expires_at - EXPIRY_SLACK_SECS > now {
                return Ok(cached.token.clone());
            }
        }

        let fresh = self.fetch_token(now).await?;
        let token = fresh.token.clone();
        *self.cached.write().await = Some(fresh);
        Ok(token)
    }

    async fn fetch_token(&self, now: i64) -> AppResult<CachedToken> {
        let assertion = self.sign_assertion(now)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("malformed token response: {e}")))?;

        Ok(CachedToken {
            token: token.access_token,
            expires_at: now + token.expires_in,
        })
    }

    fn sign_assertion(&self, now: i64) -> AppResult<String> {
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SCOPES,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };

        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| AppError::Auth(format!("credential private key rejected: {e}")))?;

        encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .map_err(|e| AppError::Auth(format!("failed to sign token assertion: {e}")))
    }
}
