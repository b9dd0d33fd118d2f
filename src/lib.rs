pub mod core;
pub mod exchanges;

pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::{ExchangeError, ExchangeResult};
pub use crate::core::traits::{ExchangeConnector, ExchangeInfoSource};
pub use crate::core::types::*;
pub use crate::exchanges::kalshi::KalshiConnector;
