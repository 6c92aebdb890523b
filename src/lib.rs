//! `bithumb-global-rs`
//!
//! Signed REST binding for the Bithumb Global spot API: balances, order
//! placement / cancellation / queries, open-order pagination, order-book
//! depth, trading-pair configuration and withdrawals.
//!
//! ## Quickstart (public market data)
//!
//! ```no_run
//! use bithumb_global_rs::BithumbGlobal;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), bithumb_global_rs::BithumbError> {
//! let client = BithumbGlobal::public()?;
//! let depth = client.depth("BTC/USDT", 5).await?;
//! if let (Some(ask), Some(bid)) = (depth.asks.first(), depth.bids.first()) {
//!     println!("ask={} bid={}", ask.0, bid.0);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (signed actions)
//!
//! ```no_run
//! use bithumb_global_rs::{BithumbGlobal, direction};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), bithumb_global_rs::BithumbError> {
//! let client = BithumbGlobal::from_env()?;
//! let order_id = client
//!     .place_order("BTC/USDT", direction("bid")?, 25_000.0, 0.01)
//!     .await?;
//! println!("placed {}", order_id);
//! println!("open: {:?}", client.open_order_ids("BTC/USDT").await?);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod common;
pub mod config;
pub mod signer;
pub mod types;

// Re-export common types
pub use client::{BithumbGlobal, OPEN_ORDERS_PAGE_SIZE};
pub use common::{BithumbError, Result, Transport, create_http_client};
pub use config::{BITHUMB_API_BASE, ClientConfig, credentials_from_env, load_dotenv};
pub use signer::{Credentials, Signer};
pub use types::{
    Action, AssetType, Depth, Level, OpenOrdersPage, OrderListQuery, OrderStatus, OrderType,
    ParamValue, Params, Side, WithdrawRequest, direction,
};
