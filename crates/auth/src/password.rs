use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

/// Prefix shared by every Argon2 PHC string.
const PHC_PREFIX: &str = "$argon2";

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Whether a configured password is an Argon2 hash rather than plaintext.
pub fn is_hashed(configured: &str) -> bool {
    configured.starts_with(PHC_PREFIX)
}

/// Checks a candidate against the configured password, plaintext or hashed.
/// Plaintext comparison is exact and case-sensitive.
pub fn matches(candidate: &str, configured: &str) -> bool {
    match is_hashed(configured) {
        true => verify(candidate, configured),
        false => super::Crypto::hash(candidate) == super::Crypto::hash(configured),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hashword = hash("correct horse").unwrap();
        assert!(is_hashed(&hashword));
        assert!(verify("correct horse", &hashword));
        assert!(!verify("Correct horse", &hashword));
    }

    #[test]
    fn plaintext_is_exact_and_case_sensitive() {
        assert!(matches("Hunter2", "Hunter2"));
        assert!(!matches("hunter2", "Hunter2"));
        assert!(!matches("Hunter2 ", "Hunter2"));
    }

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!matches("anything", "$argon2id$not-a-hash"));
    }
}
