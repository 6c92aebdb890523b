pub mod client;
pub mod errors;
pub mod transport;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use errors::{BithumbError, Result};
pub use transport::Transport;
pub use utils::{format_decimal8, format_symbol, get_timestamp_millis, parse_f64};
