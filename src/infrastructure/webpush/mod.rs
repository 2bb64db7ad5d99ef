use crate::domain::push::{PushDeliveryError, PushGateway, PushSubscription};
use crate::infrastructure::config::VapidConfig;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::header::{AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_TTL_SECS: u32 = 24 * 60 * 60;
const VAPID_TOKEN_LIFETIME_SECS: i64 = 12 * 60 * 60;

// PKCS#8 wrapping of a P-256 private key, split around the 32 byte scalar
// and the 65 byte uncompressed public point.
const PKCS8_PREFIX: [u8; 36] = [
    0x30, 0x81, 0x87, 0x02, 0x01, 0x00, 0x30, 0x13, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d,
    0x02, 0x01, 0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, 0x04, 0x6d, 0x30,
    0x6b, 0x02, 0x01, 0x01, 0x04, 0x20,
];
const PKCS8_PUBLIC_KEY_TAG: [u8; 5] = [0xa1, 0x44, 0x03, 0x42, 0x00];

#[derive(Debug, Serialize)]
struct VapidClaims<'a> {
    aud: &'a str,
    exp: i64,
    sub: &'a str,
}

/// Web Push delivery with VAPID authentication and aes128gcm payloads
pub struct VapidPushGateway {
    client: reqwest::Client,
    public_key: String,
    signing_key: EncodingKey,
    subject: String,
    ttl_secs: u32,
}

impl VapidPushGateway {
    pub fn new(config: &VapidConfig) -> anyhow::Result<Self> {
        let public_key = decode_key(&config.public_key).context("VAPID_PUBLIC_KEY")?;
        let private_key = decode_key(&config.private_key).context("VAPID_PRIVATE_KEY")?;

        if public_key.len() != 65 || public_key[0] != 0x04 {
            return Err(anyhow!("VAPID public key must be an uncompressed P-256 point"));
        }
        if private_key.len() != 32 {
            return Err(anyhow!("VAPID private key must be 32 bytes"));
        }

        let mut der = Vec::with_capacity(138);
        der.extend_from_slice(&PKCS8_PREFIX);
        der.extend_from_slice(&private_key);
        der.extend_from_slice(&PKCS8_PUBLIC_KEY_TAG);
        der.extend_from_slice(&public_key);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            public_key: config.public_key.trim_end_matches('=').to_string(),
            signing_key: EncodingKey::from_ec_der(&der),
            subject: config.subject.clone(),
            ttl_secs: DEFAULT_TTL_SECS,
        })
    }

    /// Signed token scoped to the origin of the push service
    fn vapid_token(&self, endpoint: &str) -> Result<String, PushDeliveryError> {
        let audience = reqwest::Url::parse(endpoint)
            .map(|url| url.origin().ascii_serialization())
            .map_err(|e| PushDeliveryError::Rejected(format!("invalid endpoint: {}", e)))?;

        let claims = VapidClaims {
            aud: &audience,
            exp: Utc::now().timestamp() + VAPID_TOKEN_LIFETIME_SECS,
            sub: &self.subject,
        };

        encode(&Header::new(Algorithm::ES256), &claims, &self.signing_key)
            .map_err(|e| PushDeliveryError::Rejected(format!("failed to sign VAPID token: {}", e)))
    }
}

/// Browsers hand out keys as base64url, sometimes padded
fn decode_key(value: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(value.trim().trim_end_matches('='))
}

#[async_trait]
impl PushGateway for VapidPushGateway {
    fn public_key(&self) -> &str {
        &self.public_key
    }

    async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &[u8],
    ) -> Result<(), PushDeliveryError> {
        let p256dh = decode_key(&subscription.keys.p256dh)
            .map_err(|e| PushDeliveryError::Rejected(format!("invalid p256dh key: {}", e)))?;
        let auth = decode_key(&subscription.keys.auth)
            .map_err(|e| PushDeliveryError::Rejected(format!("invalid auth secret: {}", e)))?;

        let body = ece::encrypt(&p256dh, &auth, payload)
            .map_err(|e| PushDeliveryError::Rejected(format!("encryption failed: {}", e)))?;
        let token = self.vapid_token(&subscription.endpoint)?;

        let response = self
            .client
            .post(&subscription.endpoint)
            .header(AUTHORIZATION, format!("vapid t={}, k={}", token, self.public_key))
            .header("TTL", self.ttl_secs.to_string())
            .header(CONTENT_ENCODING, "aes128gcm")
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await
            .map_err(|e| PushDeliveryError::Rejected(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND | StatusCode::GONE => Err(PushDeliveryError::Gone),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(PushDeliveryError::Rejected(format!("{}: {}", status, body)))
            }
        }
    }
}
