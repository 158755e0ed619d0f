//! Signed Token Codec
//!
//! Compact bearer tokens in the `header.payload.signature` format:
//! both header and payload are base64url-encoded JSON, the signature is
//! HMAC-SHA256 over the dot-joined first two segments, keyed by a
//! server-held secret.
//!
//! Verification failures are deliberately opaque: a malformed token, a bad
//! signature, and an expired token all return the same [`TokenError`], so
//! callers cannot probe which check failed.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::value_object::user_role::UserRole;
use platform::crypto::{from_base64url, to_base64url};

type HmacSha256 = Hmac<Sha256>;

/// Single opaque verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid or expired token")]
pub struct TokenError;

/// Claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: Uuid,
    /// Role at issuance time (re-checked against storage on every request)
    pub role: UserRole,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

/// Stateless token encoder/verifier
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Issue a signed token for the given subject and role
    pub fn encode(&self, sub: Uuid, role: UserRole) -> String {
        self.encode_at(sub, role, Utc::now().timestamp())
    }

    /// Verify a token and return its claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    fn encode_at(&self, sub: Uuid, role: UserRole, now: i64) -> String {
        let header = serde_json::json!({ "typ": "JWT", "alg": "HS256" });
        let claims = Claims {
            sub,
            role,
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        let header_b64 = to_base64url(
            &serde_json::to_vec(&header).expect("token header serialization is infallible"),
        );
        let payload_b64 = to_base64url(
            &serde_json::to_vec(&claims).expect("claims serialization is infallible"),
        );

        let signature = self.sign(&header_b64, &payload_b64);
        format!("{}.{}.{}", header_b64, payload_b64, to_base64url(&signature))
    }

    /// Verify against an explicit clock; exposed for expiry-boundary tests
    pub(crate) fn decode_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut parts = token.split('.');
        let (header_b64, payload_b64, signature_b64) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(p), Some(s), None) => (h, p, s),
                _ => return Err(TokenError),
            };

        // Constant-time signature check before anything is parsed
        let signature = from_base64url(signature_b64).map_err(|_| TokenError)?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature).map_err(|_| TokenError)?;

        let payload = from_base64url(payload_b64).map_err(|_| TokenError)?;
        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| TokenError)?;

        if claims.exp <= now {
            return Err(TokenError);
        }

        Ok(claims)
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(ttl_secs: u64) -> TokenCodec {
        TokenCodec::new(*b"0123456789abcdef0123456789abcdef", Duration::from_secs(ttl_secs))
    }

    #[test]
    fn test_round_trip_before_expiry() {
        let codec = codec(3600);
        let sub = Uuid::new_v4();

        let token = codec.encode(sub, UserRole::User);
        let claims = codec.decode(&token).unwrap();

        assert_eq!(claims.sub, sub);
        assert_eq!(claims.role, UserRole::User);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = codec(3600).encode(Uuid::new_v4(), UserRole::Admin);
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_wrong_segment_count_is_invalid() {
        let codec = codec(3600);
        let token = codec.encode(Uuid::new_v4(), UserRole::User);
        let (head, _) = token.rsplit_once('.').unwrap();

        assert_eq!(codec.decode(head), Err(TokenError));
        assert_eq!(codec.decode(&format!("{}.extra", token)), Err(TokenError));
        assert_eq!(codec.decode(""), Err(TokenError));
    }

    #[test]
    fn test_any_single_signature_char_mutation_is_invalid() {
        let codec = codec(3600);
        let token = codec.encode(Uuid::new_v4(), UserRole::User);
        let (head, signature) = token.rsplit_once('.').unwrap();

        for i in 0..signature.len() {
            let mut mutated: Vec<char> = signature.chars().collect();
            mutated[i] = if mutated[i] == 'A' { 'B' } else { 'A' };
            let mutated: String = mutated.into_iter().collect();
            if mutated == signature {
                continue;
            }
            assert_eq!(
                codec.decode(&format!("{}.{}", head, mutated)),
                Err(TokenError),
                "mutation at signature char {} must be rejected",
                i
            );
        }
    }

    #[test]
    fn test_payload_tamper_is_invalid() {
        let codec = codec(3600);
        let token = codec.encode(Uuid::new_v4(), UserRole::User);
        let mut parts: Vec<&str> = token.split('.').collect();

        // Re-encode the payload with a different subject, keep the old signature
        let forged_payload = to_base64url(
            &serde_json::to_vec(&Claims {
                sub: Uuid::new_v4(),
                role: UserRole::Admin,
                iat: 0,
                exp: i64::MAX,
            })
            .unwrap(),
        );
        parts[1] = &forged_payload;
        assert_eq!(codec.decode(&parts.join(".")), Err(TokenError));
    }

    #[test]
    fn test_reversed_token_is_invalid() {
        let codec = codec(3600);
        let token = codec.encode(Uuid::new_v4(), UserRole::User);
        let reversed: String = token.chars().rev().collect();
        assert_eq!(codec.decode(&reversed), Err(TokenError));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let codec = codec(0);
        let token = codec.encode(Uuid::new_v4(), UserRole::User);
        assert_eq!(codec.decode(&token), Err(TokenError));
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec(3600);
        let now = 1_700_000_000;
        let token = codec.encode_at(Uuid::new_v4(), UserRole::User, now);

        // Valid strictly before the expiry instant
        assert!(codec.decode_at(&token, now).is_ok());
        assert!(codec.decode_at(&token, now + 3599).is_ok());
        // Invalid at and after the expiry instant
        assert_eq!(codec.decode_at(&token, now + 3600), Err(TokenError));
        assert_eq!(codec.decode_at(&token, now + 3601), Err(TokenError));
    }

    #[test]
    fn test_different_secret_is_invalid() {
        let token = codec(3600).encode(Uuid::new_v4(), UserRole::User);
        let other = TokenCodec::new(*b"another-secret-another-secret-ab", Duration::from_secs(3600));
        assert_eq!(other.decode(&token), Err(TokenError));
    }
}
