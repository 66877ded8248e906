//! Per-endpoint service groups
//!
//! Each service borrows the [`crate::RestClient`] and maps one API
//! operation to one method: build the path and query, dispatch, shape the
//! payload into a typed result.

pub mod address_book;
pub mod assets;
pub mod fee_rates;
pub mod index;
pub mod instruments;
pub mod orders;
pub mod portfolios;
pub mod position_offsets;
pub mod rankings;
pub mod transfers;

pub use address_book::AddressBookService;
pub use assets::AssetsService;
pub use fee_rates::FeeRatesService;
pub use index::IndexService;
pub use instruments::InstrumentsService;
pub use orders::OrdersService;
pub use portfolios::PortfoliosService;
pub use position_offsets::PositionOffsetsService;
pub use rankings::RankingsService;
pub use transfers::TransfersService;
