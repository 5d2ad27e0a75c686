//! Session Tokens
//!
//! Stateless, signed session tokens. The payload is the account's public id
//! and nothing else: no role, no email, no storage key. Format is
//! `"<public_id>.<base64url(HMAC-SHA256(public_id))>"`, keyed by the
//! application session secret, so a token cannot be forged or altered
//! without the key.
//!
//! Session state is derived per request from the presented token plus a
//! store lookup; no session table exists anywhere in the process.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::value_object::public_id::PublicId;

type HmacSha256 = Hmac<Sha256>;

/// Issue a signed session token bound to a public id.
pub fn issue(public_id: &PublicId, secret: &[u8; 32]) -> String {
    let payload = public_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        payload,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Verify a presented token and extract its public id.
///
/// Returns `None` for any malformed, forged, or tampered token. Callers
/// treat `None` as an anonymous session; no reason is reported, so a forged
/// token is indistinguishable from a missing one.
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<PublicId> {
    let (payload, signature_b64) = token.split_once('.')?;

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).ok()?;

    PublicId::parse_str(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];
    const OTHER_SECRET: [u8; 32] = [8u8; 32];

    #[test]
    fn test_issue_verify_roundtrip() {
        let id = PublicId::new();
        let token = issue(&id, &SECRET);
        assert_eq!(verify(&token, &SECRET), Some(id));
    }

    #[test]
    fn test_payload_is_public_id_only() {
        let id = PublicId::new();
        let token = issue(&id, &SECRET);
        let payload = token.split('.').next().unwrap();
        assert_eq!(payload, id.to_string());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let id = PublicId::new();
        let token = issue(&id, &SECRET);
        assert_eq!(verify(&token, &OTHER_SECRET), None);
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let id = PublicId::new();
        let token = issue(&id, &SECRET);

        let other = PublicId::new();
        let signature = token.split('.').nth(1).unwrap();
        let forged = format!("{}.{}", other, signature);
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        assert_eq!(verify("", &SECRET), None);
        assert_eq!(verify("no-dot-here", &SECRET), None);
        assert_eq!(verify("a.b.c", &SECRET), None);
        assert_eq!(verify("payload.!!!not-base64!!!", &SECRET), None);
    }
}
