use crate::core::errors::ExchangeError;
use crate::core::kernel::rest::RequestMethod;
use std::collections::HashMap;

/// Result type for signing operations: (headers, extra query params)
pub type SignatureResult = Result<(HashMap<String, String>, Vec<(String, String)>), ExchangeError>;

/// Signer trait for request authentication
///
/// Produces the authentication material the exchange expects on each
/// request. The kernel calls this exactly once per authenticated request,
/// with a timestamp read from the injected [`Clock`](super::Clock)
/// immediately beforehand.
pub trait Signer: Send + Sync {
    /// Sign a request and return headers plus query parameters to append
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - API endpoint path (may carry a query string; signers
    ///   that sign the bare path are responsible for stripping it)
    /// * `query_string` - Query string (without leading '?')
    /// * `body` - Raw request body bytes
    /// * `timestamp` - Request timestamp in milliseconds
    ///
    /// # Returns
    /// Tuple of (headers, extra query params). The kernel attaches the
    /// caller's query parameters unchanged; anything returned here is
    /// appended on top.
    fn sign_request(
        &self,
        method: RequestMethod,
        endpoint: &str,
        query_string: &str,
        body: &[u8],
        timestamp: u64,
    ) -> SignatureResult;
}
