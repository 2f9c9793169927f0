//! LINE webhook signature verification.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify the webhook signature from LINE.
///
/// The `x-line-signature` header carries the Base64-encoded HMAC-SHA256 of
/// the raw request body, keyed by the channel secret. No prefix, unlike some
/// other platforms' hex `sha256=` scheme.
pub fn verify_signature(body: &[u8], signature_header: &str, channel_secret: &str) -> bool {
    if signature_header.is_empty() {
        return false;
    }

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("failed to create HMAC");
            return false;
        }
    };

    mac.update(body);
    let computed = BASE64.encode(mac.finalize().into_bytes());

    // Constant-time comparison to prevent timing attacks.
    constant_time_eq(&computed, signature_header)
}

/// Constant-time string comparison.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        BASE64.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_matching_signature() {
        let body = br#"{"events":[]}"#;
        let secret = "test_channel_secret";

        let header = sign(secret, body);
        assert!(verify_signature(body, &header, secret));
    }

    #[test]
    fn rejects_signature_for_different_body() {
        let secret = "test_channel_secret";
        let header = sign(secret, b"original body");

        assert!(!verify_signature(b"tampered body", &header, secret));
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let body = b"payload";
        let header = sign("other_secret", body);

        assert!(!verify_signature(body, &header, "test_channel_secret"));
    }

    #[test]
    fn rejects_empty_and_garbage_headers() {
        let body = b"payload";
        assert!(!verify_signature(body, "", "secret"));
        assert!(!verify_signature(body, "not base64 at all", "secret"));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
        assert!(!constant_time_eq("", "a"));
    }
}
