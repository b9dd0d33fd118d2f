use crate::core::errors::ExchangeError;
use crate::core::kernel::{RequestMethod, SignatureResult, Signer};
use base64::{engine::general_purpose, Engine as _};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::pss::{SigningKey, VerifyingKey};
use rsa::signature::{Keypair, RandomizedSigner, SignatureEncoding};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use std::collections::HashMap;
use std::path::Path;

pub const ACCESS_KEY_HEADER: &str = "KALSHI-ACCESS-KEY";
pub const ACCESS_SIGNATURE_HEADER: &str = "KALSHI-ACCESS-SIGNATURE";
pub const ACCESS_TIMESTAMP_HEADER: &str = "KALSHI-ACCESS-TIMESTAMP";

// Kalshi's verifier uses a PSS salt of digest length (32 for SHA-256).
const PSS_SALT_LEN: usize = 32;

/// Parse an unencrypted RSA private key from PEM text.
///
/// Accepts PKCS#8 (`BEGIN PRIVATE KEY`) and PKCS#1 (`BEGIN RSA PRIVATE KEY`)
/// encodings. Anything else, including valid PEM carrying a non-RSA key,
/// fails with [`ExchangeError::KeyParse`].
pub fn load_private_key(pem: &str) -> Result<RsaPrivateKey, ExchangeError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| ExchangeError::KeyParse(format!("not an RSA private key PEM: {}", e)))
}

/// RSA-PSS signer for Kalshi API requests
///
/// Signs the canonical message `{timestamp}{method}{path}` (path stripped of
/// its query string) with RSASSA-PSS/SHA-256, MGF1-SHA256, 32-byte salt, and
/// emits the three `KALSHI-ACCESS-*` headers the server requires.
///
/// The key is parsed once at construction; signing shares it across calls
/// without further state, so one signer can serve concurrent requests.
#[derive(Debug)]
pub struct KalshiSigner {
    api_key_id: String,
    signing_key: SigningKey<Sha256>,
}

impl KalshiSigner {
    /// Create a new signer from an API key id and private key PEM text
    ///
    /// Fails with [`ExchangeError::KeyParse`] on malformed or non-RSA keys;
    /// callers should treat that as fatal misconfiguration.
    pub fn new(
        api_key_id: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, ExchangeError> {
        let private_key = load_private_key(private_key_pem)?;

        Ok(Self {
            api_key_id: api_key_id.into(),
            signing_key: SigningKey::new_with_salt_len(private_key, PSS_SALT_LEN),
        })
    }

    /// Create a new signer reading the private key from a PEM file
    pub fn from_pem_file(
        api_key_id: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, ExchangeError> {
        let pem = std::fs::read_to_string(path)
            .map_err(|e| ExchangeError::KeyParse(format!("failed to read key file: {}", e)))?;
        Self::new(api_key_id, &pem)
    }

    /// Public counterpart of the signing key, for signature verification
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey<Sha256> {
        self.signing_key.verifying_key()
    }

    /// Sign the canonical request message and return it base64-encoded
    ///
    /// The message is hashed and padded in a single PSS operation; the salt
    /// is random, so repeated calls over identical input produce different
    /// but equally valid signatures.
    fn generate_signature(
        &self,
        timestamp: u64,
        method: RequestMethod,
        path: &str,
    ) -> Result<String, ExchangeError> {
        let path_without_query = path.split_once('?').map_or(path, |(prefix, _)| prefix);
        let message = format!("{timestamp}{method}{path_without_query}");

        let signature = self
            .signing_key
            .try_sign_with_rng(&mut rand::thread_rng(), message.as_bytes())
            .map_err(ExchangeError::Signing)?;

        Ok(general_purpose::STANDARD.encode(signature.to_vec()))
    }
}

impl Signer for KalshiSigner {
    fn sign_request(
        &self,
        method: RequestMethod,
        endpoint: &str,
        _query_string: &str,
        _body: &[u8],
        timestamp: u64,
    ) -> SignatureResult {
        let signature = self.generate_signature(timestamp, method, endpoint)?;

        let mut headers = HashMap::new();
        headers.insert(ACCESS_KEY_HEADER.to_string(), self.api_key_id.clone());
        headers.insert(ACCESS_SIGNATURE_HEADER.to_string(), signature);
        headers.insert(ACCESS_TIMESTAMP_HEADER.to_string(), timestamp.to_string());

        Ok((headers, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pss::Signature;
    use rsa::signature::Verifier;

    const TEST_KEY_PEM: &str = include_str!("../../../tests/fixtures/test_private_key.pem");
    const TEST_PKCS8_PEM: &str =
        include_str!("../../../tests/fixtures/test_private_key_pkcs8.pem");
    const TEST_EC_PEM: &str = include_str!("../../../tests/fixtures/test_ec_key.pem");
    const TEST_EC_PKCS8_PEM: &str = include_str!("../../../tests/fixtures/test_ec_key_pkcs8.pem");

    fn test_signer() -> KalshiSigner {
        KalshiSigner::new("fake-api-key-id", TEST_KEY_PEM).unwrap()
    }

    fn assert_verifies(signer: &KalshiSigner, message: &str, signature_b64: &str) {
        let bytes = general_purpose::STANDARD.decode(signature_b64).unwrap();
        let signature = Signature::try_from(bytes.as_slice()).unwrap();
        signer
            .verifying_key()
            .verify(message.as_bytes(), &signature)
            .unwrap();
    }

    #[test]
    fn signature_verifies_against_public_key() {
        let signer = test_signer();
        let signature = signer
            .generate_signature(1_700_000_000_000, RequestMethod::Get, "/exchange/status")
            .unwrap();

        assert_verifies(&signer, "1700000000000GET/exchange/status", &signature);
    }

    #[test]
    fn query_string_is_stripped_from_signed_message() {
        let signer = test_signer();
        let signature = signer
            .generate_signature(
                1_700_000_000_000,
                RequestMethod::Get,
                "/series/fee_changes?show_historical=true",
            )
            .unwrap();

        assert_verifies(&signer, "1700000000000GET/series/fee_changes", &signature);
    }

    #[test]
    fn path_without_query_is_signed_unchanged() {
        let signer = test_signer();
        let signature = signer
            .generate_signature(42, RequestMethod::Get, "/exchange/schedule")
            .unwrap();

        assert_verifies(&signer, "42GET/exchange/schedule", &signature);
    }

    #[test]
    fn post_method_uses_canonical_string() {
        let signer = test_signer();
        let signature = signer
            .generate_signature(0, RequestMethod::Post, "/portfolio/orders")
            .unwrap();

        assert_verifies(&signer, "0POST/portfolio/orders", &signature);
    }

    #[test]
    fn repeated_signatures_differ_but_both_verify() {
        // PSS salts are random; correctness is verifiability, not
        // reproducibility.
        let signer = test_signer();
        let first = signer
            .generate_signature(0, RequestMethod::Get, "/exchange/status")
            .unwrap();
        let second = signer
            .generate_signature(0, RequestMethod::Get, "/exchange/status")
            .unwrap();

        assert_ne!(first, second);
        assert_verifies(&signer, "0GET/exchange/status", &first);
        assert_verifies(&signer, "0GET/exchange/status", &second);
    }

    #[test]
    fn header_map_has_exactly_three_entries() {
        let signer = test_signer();
        let (headers, extra_params) = signer
            .sign_request(RequestMethod::Get, "/exchange/status", "", &[], 0)
            .unwrap();

        assert_eq!(headers.len(), 3);
        assert!(extra_params.is_empty());
        assert_eq!(headers[ACCESS_KEY_HEADER], "fake-api-key-id");
        assert!(headers.contains_key(ACCESS_SIGNATURE_HEADER));
        assert!(headers.contains_key(ACCESS_TIMESTAMP_HEADER));
    }

    #[test]
    fn timestamp_header_matches_signed_message() {
        let signer = test_signer();
        let (headers, _) = signer
            .sign_request(RequestMethod::Get, "/exchange/status", "", &[], 0)
            .unwrap();

        assert_eq!(headers[ACCESS_TIMESTAMP_HEADER], "0");
        // The header timestamp and the signed timestamp are the same value:
        // the signature must verify over a message built from the header.
        let message = format!("{}GET/exchange/status", headers[ACCESS_TIMESTAMP_HEADER]);
        assert_verifies(&signer, &message, &headers[ACCESS_SIGNATURE_HEADER]);
    }

    #[test]
    fn pkcs8_key_is_accepted() {
        let signer = KalshiSigner::new("fake-api-key-id", TEST_PKCS8_PEM).unwrap();
        let signature = signer
            .generate_signature(7, RequestMethod::Get, "/exchange/status")
            .unwrap();
        assert_verifies(&signer, "7GET/exchange/status", &signature);
    }

    #[test]
    fn plain_text_key_is_rejected() {
        let err = KalshiSigner::new("fake-api-key-id", "not a pem at all").unwrap_err();
        assert!(matches!(err, ExchangeError::KeyParse(_)));
    }

    #[test]
    fn non_rsa_key_is_rejected() {
        // SEC1 and PKCS#8 encodings of an EC key both fail: valid PEM is
        // not enough, the key algorithm must be RSA.
        let err = KalshiSigner::new("fake-api-key-id", TEST_EC_PEM).unwrap_err();
        assert!(matches!(err, ExchangeError::KeyParse(_)));

        let err = KalshiSigner::new("fake-api-key-id", TEST_EC_PKCS8_PEM).unwrap_err();
        assert!(matches!(err, ExchangeError::KeyParse(_)));
    }
}
