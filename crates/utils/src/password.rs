use crate::create_random_secret;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Hashes the password with a fresh random salt.
/// The result has the form `salt$hex_digest`.
pub fn hash_password(password: &str) -> String {
    let salt = create_random_secret(SALT_LEN);
    let hash = digest(&salt, password);
    format!("{}{}{}", salt, SEPARATOR, hash)
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    match stored.split_once(SEPARATOR) {
        Some((salt, hash)) => digest(salt, password)
            .as_bytes()
            .ct_eq(hash.as_bytes())
            .into(),
        None => false,
    }
}
