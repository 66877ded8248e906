//! Shared types for the Coinbase International Exchange (INTX) SDK
//!
//! This crate contains the wire-level vocabulary every other SDK crate
//! speaks: closed enums for the string constants the API uses (order side,
//! time in force, transfer status, ...), the response models, and the
//! pagination types.
//!
//! Decimal quantities deserialize into [`rust_decimal::Decimal`] - the API
//! transmits them as strings and they must never pass through a float.

pub mod enums;
pub mod models;
pub mod pagination;

pub use enums::{
    EventType, Granularity, InstrumentType, OrderSide, OrderType, RankingPeriod, TimeInForce,
    TransferStatus, TransferType,
};
pub use models::*;
pub use pagination::{Paginated, PaginationParams, PaginationResult};
