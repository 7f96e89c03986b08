//! Credential hashing.

use sha2::{Digest as _, Sha256};

use base16::encode_lower;

use rand::{
    Rng,
    distr::{Alphanumeric, SampleString},
};

/// The length of a password salt.
pub const SALT_LEN: usize = 8;

/// Generates a new password salt.
pub fn generate_salt() -> String {
    generate_salt_with(&mut rand::rng())
}

/// Generates a new password salt.
pub fn generate_salt_with<R>(rng: &mut R) -> String
where
    R: Rng,
{
    Alphanumeric::default().sample_string(rng, SALT_LEN)
}

/// Generates a random initial password.
pub fn generate_password() -> String {
    Alphanumeric::default().sample_string(&mut rand::rng(), 16)
}

/// Hashes a raw password with its salt.
pub fn encode_password(raw: impl AsRef<str>, salt: impl AsRef<str>) -> String {
    let mut hasher = Sha256::new();

    hasher.update(raw.as_ref());
    hasher.update(salt.as_ref());

    let result = hasher.finalize();

    encode_lower(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_password_is_deterministic() {
        let a = encode_password("hunter2", "saltsalt");
        let b = encode_password("hunter2", "saltsalt");
        assert_eq!(a, b);
        // sha256 hex digest
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn salt_changes_the_hash() {
        let a = encode_password("hunter2", "saltsalt");
        let b = encode_password("hunter2", "pepperpe");
        assert_ne!(a, b);
    }

    #[test]
    fn generated_salts_have_expected_length() {
        let salt = generate_salt();
        assert_eq!(salt.len(), SALT_LEN);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
