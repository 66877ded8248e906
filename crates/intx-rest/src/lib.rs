//! REST API client for the Coinbase International Exchange (INTX)
//!
//! This crate covers the full private REST surface: portfolios, orders,
//! instruments, assets, transfers, indices, rankings, fee rates, position
//! offsets, and the address book.
//!
//! # Authentication
//!
//! Every request carries four `CB-ACCESS-*` headers computed by
//! [`intx_auth::Credentials`] (HMAC-SHA256 over
//! `timestamp + method + path + body`).
//!
//! # Example
//!
//! ```no_run
//! use intx_auth::Credentials;
//! use intx_rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::from_env()?;
//!
//!     let instruments = client.instruments().list().await?;
//!     println!("{} tradable instruments", instruments.len());
//!
//!     for portfolio in client.portfolios().list().await? {
//!         println!("{}: {}", portfolio.portfolio_id, portfolio.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! The client never retries on its own. `ApiError` and transport failures
//! surface immediately so the caller can decide per operation - replaying
//! a `POST /orders` without an idempotency token would risk a duplicate
//! fill.

pub mod client;
pub mod error;
pub mod query;
pub mod services;

// Re-export main types
pub use client::{ClientConfig, RestClient, DEFAULT_BASE_URL};
pub use error::{RestError, RestResult};
pub use query::QueryParams;

// Re-export the crates callers need alongside the client
pub use intx_auth::{AuthError, Credentials};
pub use intx_types as types;
