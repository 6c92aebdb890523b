//! Request signing.
//!
//! Every authenticated request carries `apiKey`, `bizCode`, `msgNo` and
//! `timestamp` next to its own parameters. The whole mapping is sorted by key,
//! joined as `k1=v1&k2=v2`, and signed with HMAC-SHA256 using the secret; the
//! lowercase hex digest goes into `signature`. The exchange recomputes the same
//! string, so the ordering must not depend on insertion order.

use crate::common::{BithumbError, Result};
use crate::types::{Action, Params, ParamValue};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_FIELD: &str = "signature";

/// API key and secret. The secret is only ever used as the HMAC key and is
/// redacted from `Debug` output.
#[derive(Debug)]
pub struct Credentials {
    api_key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            api_key: api_key.into(),
            secret: SecretString::from(secret),
        }
    }

    /// Check if credentials are usable (non-empty)
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.secret.expose_secret().is_empty()
    }
}

#[derive(Debug)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Result<Self> {
        if !credentials.is_valid() {
            return Err(BithumbError::MissingCredentials(
                "API key and secret must both be non-empty".to_string(),
            ));
        }
        Ok(Self { credentials })
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// `k1=v1&k2=v2...` in ascending key order.
    pub fn canonical_string(params: &Params) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Lowercase hex HMAC-SHA256 of the canonical string.
    pub fn sign(&self, params: &Params) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(Self::canonical_string(params).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Builds the signed request body for `action`.
    ///
    /// `timestamp_ms` is used both as nonce (`msgNo`) and `timestamp`. Caller
    /// parameters override the envelope fields of the same name; a caller
    /// supplied `signature` is discarded.
    pub fn sign_envelope(&self, action: Action, params: Params, timestamp_ms: u64) -> Params {
        let nonce = timestamp_ms.to_string();

        let mut envelope = Params::new();
        envelope.insert("apiKey".into(), self.api_key().into());
        envelope.insert("bizCode".into(), action.biz_code().into());
        envelope.insert("msgNo".into(), nonce.clone().into());
        envelope.insert("timestamp".into(), nonce.into());
        envelope.extend(params);
        envelope.remove(SIGNATURE_FIELD);

        let signature = self.sign(&envelope);
        envelope.insert(SIGNATURE_FIELD.into(), ParamValue::Text(signature));
        envelope
    }
}
