// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;
pub const SALT_BYTES: usize = 16;
const LISTING_ID_BYTES: usize = 9;

/// Fresh session token from the OS RNG.
pub fn new_session_token() -> String {
    random_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// Short URL-safe id for a newly submitted listing.
pub fn new_listing_id() -> String {
    random_token(&mut OsRng, LISTING_ID_BYTES)
}

pub fn new_salt() -> [u8; SALT_BYTES] {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// URL-safe base64 (no padding) of `nbytes` random bytes.
/// 32 bytes -> 43 chars.
pub fn random_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// SHA-256 of a session token. This is what gets stored, never the token.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// SHA-256 over salt then password.
pub fn hash_password(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Compares without bailing out at the first differing byte.
pub fn hashes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn token_is_url_safe_no_pad() {
        let mut rng = StdRng::seed_from_u64(123);
        let t = random_token(&mut rng, SESSION_TOKEN_BYTES);

        assert!(t
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(t.len(), 43);
    }

    #[test]
    fn tokens_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_ne!(random_token(&mut rng, 32), random_token(&mut rng, 32));
        assert_ne!(new_listing_id(), new_listing_id());
    }

    #[test]
    fn password_hash_depends_on_salt() {
        let a = hash_password(b"salt-a", "owner123");
        let b = hash_password(b"salt-b", "owner123");
        assert_ne!(a, b);
        assert!(hashes_equal(&a, &hash_password(b"salt-a", "owner123")));
        assert!(!hashes_equal(&a, &hash_password(b"salt-a", "owner124")));
    }

    #[test]
    fn hashes_of_different_length_never_match() {
        assert!(!hashes_equal(b"abc", b"abcd"));
        assert_eq!(hash_token("hello"), hash_token("hello"));
    }
}
