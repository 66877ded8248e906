//! Request signing for the Coinbase International Exchange (INTX) API
//!
//! Every private INTX endpoint requires four authentication headers derived
//! from an HMAC-SHA256 signature over the request. This crate holds the
//! credential material and produces those headers; it performs no I/O.
//!
//! # Example
//!
//! ```no_run
//! use intx_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from the INTX_CREDENTIALS environment variable
//!     let creds = Credentials::from_env()?;
//!
//!     // Sign a request
//!     let headers = creds.sign("GET", "/api/v1/portfolios", "", 1700000000);
//!     println!("signature: {}", headers.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Security
//!
//! The signing key is stored with the `secrecy` crate: zeroized on drop,
//! redacted in `Debug` output, and only exposed at the HMAC boundary.

mod credentials;
mod error;

pub use credentials::{Credentials, KeyEncoding, SignedHeaders};
pub use error::{AuthError, AuthResult};

/// Header carrying the API key identifier.
pub const HEADER_ACCESS_KEY: &str = "CB-ACCESS-KEY";
/// Header carrying the API passphrase.
pub const HEADER_ACCESS_PASSPHRASE: &str = "CB-ACCESS-PASSPHRASE";
/// Header carrying the computed signature.
pub const HEADER_ACCESS_SIGN: &str = "CB-ACCESS-SIGN";
/// Header carrying the unix-seconds timestamp the signature covers.
pub const HEADER_ACCESS_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
