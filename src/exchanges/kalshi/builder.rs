use crate::core::{
    config::ExchangeConfig,
    errors::ExchangeError,
    kernel::{ReqwestRest, RestClientBuilder, RestClientConfig},
};
use crate::exchanges::kalshi::{connector::KalshiConnector, signer::KalshiSigner};
use std::sync::Arc;

pub const PROD_BASE_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";
pub const DEMO_BASE_URL: &str = "https://demo-api.kalshi.co/trade-api/v2";

/// Create a Kalshi connector from the given configuration
///
/// The private key is parsed here, once; a bad key aborts construction with
/// [`ExchangeError::KeyParse`] rather than failing on the first request.
pub fn build_connector(
    config: &ExchangeConfig,
) -> Result<KalshiConnector<ReqwestRest>, ExchangeError> {
    let base_url = config.base_url.clone().unwrap_or_else(|| {
        let default = if config.demo {
            DEMO_BASE_URL
        } else {
            PROD_BASE_URL
        };
        default.to_string()
    });

    let rest_config = RestClientConfig::new(base_url, "kalshi".to_string()).with_timeout(30);

    let signer = KalshiSigner::new(config.api_key_id(), config.private_key_pem())?;

    let rest = RestClientBuilder::new(rest_config)
        .with_signer(Arc::new(signer))
        .build()?;

    Ok(KalshiConnector::new(rest))
}
