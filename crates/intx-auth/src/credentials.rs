//! API credentials and HMAC-SHA256 request signing
//!
//! INTX authenticates a request with four headers computed from the
//! credential set: access key, passphrase, signature, and timestamp. The
//! signature is HMAC-SHA256 over `timestamp + method + path + body` keyed
//! with the decoded signing key, transmitted in the same encoding the
//! signing key was supplied in.
//!
//! # Security
//!
//! The signing key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the JSON credential blob
pub const CREDENTIALS_ENV_VAR: &str = "INTX_CREDENTIALS";

/// Wire encoding of the signing key
///
/// The signature digest is transmitted in the same encoding the signing
/// key was supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// Standard base64 with padding
    Base64,
    /// Lowercase or uppercase hex
    Hex,
}

impl KeyEncoding {
    fn decode(&self, key: &str) -> AuthResult<Vec<u8>> {
        match self {
            Self::Base64 => BASE64.decode(key).map_err(|e| {
                AuthError::InvalidCredentials(format!("invalid base64 signing key: {}", e))
            }),
            Self::Hex => hex::decode(key).map_err(|e| {
                AuthError::InvalidCredentials(format!("invalid hex signing key: {}", e))
            }),
        }
    }

    fn encode(&self, digest: &[u8]) -> String {
        match self {
            Self::Base64 => BASE64.encode(digest),
            Self::Hex => hex::encode(digest),
        }
    }
}

/// The four authentication header values for one signed request
///
/// Ephemeral: built per outbound call and discarded once the headers are
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `CB-ACCESS-KEY` value
    pub api_key: String,
    /// `CB-ACCESS-PASSPHRASE` value
    pub passphrase: String,
    /// `CB-ACCESS-SIGN` value
    pub signature: String,
    /// `CB-ACCESS-TIMESTAMP` value (unix seconds, as sent)
    pub timestamp: String,
}

/// JSON shape of the `INTX_CREDENTIALS` environment variable
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvCredentials {
    access_key: String,
    passphrase: String,
    signing_key: String,
    #[serde(default)]
    portfolio_id: Option<String>,
}

/// API credentials for authenticated requests
///
/// Immutable once constructed; safe to share across tasks. The signing key
/// is decoded eagerly so malformed secrets fail here, before any network
/// activity.
pub struct Credentials {
    api_key: String,
    passphrase: String,
    /// Decoded signing key, zeroized on drop
    signing_key: SecretBox<Vec<u8>>,
    key_encoding: KeyEncoding,
    /// Default portfolio for operations that accept one
    portfolio_id: Option<String>,
}

impl Credentials {
    /// Create credentials, detecting the signing-key encoding
    ///
    /// Base64 is tried first (the encoding INTX issues keys in); a key
    /// that is not valid base64 but is valid hex is treated as hex.
    pub fn new(
        api_key: impl Into<String>,
        passphrase: impl Into<String>,
        signing_key: impl AsRef<str>,
    ) -> AuthResult<Self> {
        let key = signing_key.as_ref();
        let encoding = if BASE64.decode(key).is_ok() {
            KeyEncoding::Base64
        } else {
            KeyEncoding::Hex
        };
        Self::with_encoding(api_key, passphrase, key, encoding)
    }

    /// Create credentials with an explicit signing-key encoding
    pub fn with_encoding(
        api_key: impl Into<String>,
        passphrase: impl Into<String>,
        signing_key: impl AsRef<str>,
        encoding: KeyEncoding,
    ) -> AuthResult<Self> {
        let decoded = encoding.decode(signing_key.as_ref())?;

        Ok(Self {
            api_key: api_key.into(),
            passphrase: passphrase.into(),
            signing_key: SecretBox::new(Box::new(decoded)),
            key_encoding: encoding,
            portfolio_id: None,
        })
    }

    /// Create credentials from the environment
    ///
    /// Reads `INTX_CREDENTIALS`, a JSON object of the form
    /// `{"accessKey": "...", "passphrase": "...", "signingKey": "...",
    /// "portfolioId": "..."}`.
    pub fn from_env() -> AuthResult<Self> {
        Self::from_env_var(CREDENTIALS_ENV_VAR)
    }

    /// Create credentials from a named environment variable
    pub fn from_env_var(var: &str) -> AuthResult<Self> {
        let blob =
            std::env::var(var).map_err(|_| AuthError::EnvVarNotSet(var.to_string()))?;
        Self::from_json(&blob)
    }

    /// Create credentials from a JSON blob (the `INTX_CREDENTIALS` shape)
    pub fn from_json(blob: &str) -> AuthResult<Self> {
        let env: EnvCredentials = serde_json::from_str(blob).map_err(|e| {
            AuthError::InvalidCredentials(format!("malformed credential JSON: {}", e))
        })?;

        let mut creds = Self::new(env.access_key, env.passphrase, &env.signing_key)?;
        creds.portfolio_id = env.portfolio_id;
        Ok(creds)
    }

    /// Set the default portfolio identifier
    pub fn with_portfolio_id(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = Some(portfolio_id.into());
        self
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the passphrase
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Get the default portfolio identifier, if one was configured
    pub fn portfolio_id(&self) -> Option<&str> {
        self.portfolio_id.as_deref()
    }

    /// Get the signing-key encoding (also the signature wire encoding)
    pub fn key_encoding(&self) -> KeyEncoding {
        self.key_encoding
    }

    /// Sign one request, producing the four authentication header values
    ///
    /// The signing string is the concatenation
    /// `timestamp + method + path + body`:
    ///
    /// * `method` - HTTP verb, uppercase (`"GET"`, `"POST"`, ...)
    /// * `path` - request path with leading slash, no host or query
    /// * `body` - the exact serialized body that will be transmitted,
    ///   empty string when there is none
    /// * `timestamp` - unix seconds as of signing
    ///
    /// Pure function: identical inputs always produce identical output,
    /// and concurrent calls need no synchronization.
    pub fn sign(&self, method: &str, path: &str, body: &str, timestamp: i64) -> SignedHeaders {
        let timestamp = timestamp.to_string();

        let mut mac = HmacSha256::new_from_slice(self.signing_key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(body.as_bytes());
        let digest = mac.finalize().into_bytes();

        SignedHeaders {
            api_key: self.api_key.clone(),
            passphrase: self.passphrase.clone(),
            signature: self.key_encoding.encode(&digest),
            timestamp,
        }
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            passphrase: self.passphrase.clone(),
            signing_key: SecretBox::new(Box::new(self.signing_key.expose_secret().clone())),
            key_encoding: self.key_encoding,
            portfolio_id: self.portfolio_id.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key_prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", key_prefix))
            .field("passphrase", &"[REDACTED]")
            .field("signing_key", &"[REDACTED]")
            .field("portfolio_id", &self.portfolio_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B64_KEY: &str = "dGVzdF9zaWduaW5nX2tleQ==";

    fn test_creds() -> Credentials {
        Credentials::new("test_access_key", "test_passphrase", B64_KEY).unwrap()
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = test_creds();
        let a = creds.sign("GET", "/api/v1/portfolios", "", 1700000000);
        let b = creds.sign("GET", "/api/v1/portfolios", "", 1700000000);
        assert_eq!(a.signature, b.signature);
        assert_eq!(a.timestamp, "1700000000");
    }

    #[test]
    fn test_each_input_affects_signature() {
        let creds = test_creds();
        let base = creds.sign("GET", "/api/v1/orders", r#"{"a":1}"#, 1700000000);

        let method = creds.sign("POST", "/api/v1/orders", r#"{"a":1}"#, 1700000000);
        let path = creds.sign("GET", "/api/v1/orders2", r#"{"a":1}"#, 1700000000);
        let body = creds.sign("GET", "/api/v1/orders", r#"{"a":2}"#, 1700000000);
        let ts = creds.sign("GET", "/api/v1/orders", r#"{"a":1}"#, 1700000001);

        assert_ne!(base.signature, method.signature);
        assert_ne!(base.signature, path.signature);
        assert_ne!(base.signature, body.signature);
        assert_ne!(base.signature, ts.signature);
    }

    #[test]
    fn test_no_boundary_collision() {
        // "GET" + "/a/b" and "GETA" + "/b" must not concatenate to the
        // same signing string.
        let creds = test_creds();
        let a = creds.sign("GET", "/a/b", "", 1700000000);
        let b = creds.sign("GETA", "/b", "", 1700000000);
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_signature_encoding_follows_key_encoding() {
        let b64 = test_creds();
        let sig = b64.sign("GET", "/api/v1/assets", "", 1700000000).signature;
        assert!(BASE64.decode(&sig).is_ok());

        let hx = Credentials::with_encoding(
            "key",
            "phrase",
            "746573745f7369676e696e675f6b6579",
            KeyEncoding::Hex,
        )
        .unwrap();
        let sig = hx.sign("GET", "/api/v1/assets", "", 1700000000).signature;
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
        // SHA-256 digest is 32 bytes
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn test_same_secret_same_signature_across_encodings() {
        // "test_signing_key" in base64 and hex decode to the same bytes,
        // so the raw digests agree even though the wire encodings differ.
        let b64 = test_creds();
        let hx = Credentials::with_encoding(
            "test_access_key",
            "test_passphrase",
            "746573745f7369676e696e675f6b6579",
            KeyEncoding::Hex,
        )
        .unwrap();

        let sig_b64 = b64.sign("GET", "/x", "", 1).signature;
        let sig_hex = hx.sign("GET", "/x", "", 1).signature;
        assert_eq!(
            BASE64.decode(&sig_b64).unwrap(),
            hex::decode(&sig_hex).unwrap()
        );
    }

    #[test]
    fn test_invalid_signing_key_rejected() {
        let result = Credentials::with_encoding("k", "p", "not base64!!!", KeyEncoding::Base64);
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));

        let result = Credentials::with_encoding("k", "p", "zzzz", KeyEncoding::Hex);
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_from_json_blob() {
        let creds = Credentials::from_json(
            r#"{"accessKey":"ak","passphrase":"pp","signingKey":"dGVzdF9zaWduaW5nX2tleQ==","portfolioId":"1wp37qsc-1-0"}"#,
        )
        .unwrap();
        assert_eq!(creds.api_key(), "ak");
        assert_eq!(creds.passphrase(), "pp");
        assert_eq!(creds.portfolio_id(), Some("1wp37qsc-1-0"));
        assert_eq!(creds.key_encoding(), KeyEncoding::Base64);
    }

    #[test]
    fn test_malformed_json_blob_rejected() {
        let result = Credentials::from_json("{not json");
        assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = test_creds();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("test_signing_key"));
        assert!(!debug.contains("test_passphrase"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_handles_multibyte_api_key() {
        // A multibyte character inside the truncated prefix must not
        // split a char boundary.
        let creds = Credentials::new("ключ-доступа", "pp", B64_KEY).unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("ключ-дос..."));
    }
}
