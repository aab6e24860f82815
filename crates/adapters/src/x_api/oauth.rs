//! OAuth 1.0a request signing for the X API
//!
//! User-context writes are authorized with an HMAC-SHA1 signature over the
//! method, URL and OAuth parameters. JSON request bodies are not part of the
//! signature base string.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;
use time::OffsetDateTime;
use tweet_composer_domain::PublishError;

/// RFC 3986 unreserved characters are left as-is: ALPHA / DIGIT / "-" / "." / "_" / "~"
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// App and user credentials for OAuth 1.0a
#[derive(Debug)]
pub struct OAuthCredentials {
    pub consumer_key: SecretString,
    pub consumer_secret: SecretString,
    pub access_token: SecretString,
    pub access_token_secret: SecretString,
}

/// OAuth 1.0a signer for X API requests
#[derive(Debug)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request
    ///
    /// `url` must not carry a query string; pass query parameters in `params`.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, PublishError> {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp().to_string();
        self.sign_with(method, url, params, &timestamp, &generate_nonce())
    }

    pub(crate) fn sign_with(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        timestamp: &str,
        nonce: &str,
    ) -> Result<String, PublishError> {
        let creds = &self.credentials;

        let mut oauth_params = vec![
            ("oauth_consumer_key", creds.consumer_key.expose_secret()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_token", creds.access_token.expose_secret()),
            ("oauth_version", "1.0"),
        ];

        let mut all_params: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        all_params.sort();

        let param_string = all_params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(creds.consumer_secret.expose_secret()),
            percent_encode(creds.access_token_secret.expose_secret())
        );

        let signature = hmac_sha1(&signing_key, &base_string)?;
        oauth_params.push(("oauth_signature", &signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", header))
    }
}

fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn hmac_sha1(key: &str, data: &str) -> Result<String, PublishError> {
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .map_err(|e| PublishError::Auth(format!("Invalid signing key: {}", e)))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.into())
    }

    // Credentials from the X developer docs "Creating a signature" walkthrough
    fn documented_signer() -> OAuthSigner {
        OAuthSigner::new(OAuthCredentials {
            consumer_key: secret("xvz1evFS4wEEPTGEFPHBog"),
            consumer_secret: secret("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"),
            access_token: secret("370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            access_token_secret: secret("LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE"),
        })
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
        assert_eq!(percent_encode("foo=bar&baz"), "foo%3Dbar%26baz");
        assert_eq!(percent_encode("test-value_123.txt~"), "test-value_123.txt~");
        assert_eq!(percent_encode("☃"), "%E2%98%83");
    }

    #[test]
    fn test_generate_nonce() {
        let nonce1 = generate_nonce();
        let nonce2 = generate_nonce();

        assert_ne!(nonce1, nonce2);
        assert_eq!(nonce1.len(), 32);
        assert!(nonce1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_matches_documented_example() {
        let header = documented_signer()
            .sign_with(
                "post",
                "https://api.twitter.com/1.1/statuses/update.json",
                &[
                    ("include_entities", "true"),
                    (
                        "status",
                        "Hello Ladies + Gentlemen, a signed OAuth request!",
                    ),
                ],
                "1318622958",
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            )
            .unwrap();

        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
    }

    #[test]
    fn test_header_shape() {
        let header = documented_signer()
            .authorization_header("POST", "https://api.twitter.com/2/tweets", &[])
            .unwrap();

        assert!(header.starts_with("OAuth "));
        for key in [
            "oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_version=\"1.0\"",
            "oauth_nonce=",
            "oauth_timestamp=",
            "oauth_signature=",
        ] {
            assert!(header.contains(key), "missing {} in {}", key, header);
        }
    }
}
