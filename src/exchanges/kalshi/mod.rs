pub mod builder;
pub mod connector;
pub mod rest;
pub mod signer;

// Re-export main types for easier importing
pub use builder::{build_connector, DEMO_BASE_URL, PROD_BASE_URL};
pub use connector::KalshiConnector;
pub use rest::KalshiRestClient;
pub use signer::KalshiSigner;
