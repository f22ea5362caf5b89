//! Argon2id password hashing.
//!
//! Both operations are CPU-bound on purpose and run on the blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::sync::OnceCell;

/// Hash checked when no account matches, so a login costs the same either way.
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

#[derive(Debug, PartialEq)]
pub enum Error {
    HashingFailed,
    Mismatch,
}

/// Salted PHC-format hash of `plaintext`.
pub async fn hash(plaintext: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash_blocking(&plaintext))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {}", err);
            Error::HashingFailed
        })?
}

/// Checks `plaintext` against a stored hash. A malformed hash never matches.
pub async fn verify(hash: String, plaintext: String) -> Result<(), Error> {
    tokio::task::spawn_blocking(move || verify_blocking(&hash, &plaintext))
        .await
        .map_err(|err| {
            tracing::error!("Password verification task failed: {}", err);
            Error::HashingFailed
        })?
}

/// Spends one verification's worth of work on `plaintext` and always fails.
pub async fn verify_dummy(plaintext: String) -> Error {
    let hash = match DUMMY_HASH
        .get_or_try_init(|| hash(String::from("food-ordering-dummy-password")))
        .await
    {
        Ok(hash) => hash.clone(),
        Err(err) => return err,
    };

    match verify(hash, plaintext).await {
        Err(err) => err,
        Ok(()) => Error::Mismatch,
    }
}

fn hash_blocking(plaintext: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::HashingFailed
        })
}

fn verify_blocking(hash: &str, plaintext: &str) -> Result<(), Error> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| Error::Mismatch)?;

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .map_err(|_| Error::Mismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_never_contains_the_plaintext() {
        let hashed = hash(String::from("hunter22")).await.unwrap();

        assert!(hashed.starts_with("$argon2id$"));
        assert!(!hashed.contains("hunter22"));
    }

    #[tokio::test]
    async fn same_password_hashes_differently() {
        let first = hash(String::from("hunter22")).await.unwrap();
        let second = hash(String::from("hunter22")).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn verifies_matching_password() {
        let hashed = hash(String::from("hunter22")).await.unwrap();

        assert_eq!(verify(hashed, String::from("hunter22")).await, Ok(()));
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let hashed = hash(String::from("hunter22")).await.unwrap();

        assert_eq!(
            verify(hashed, String::from("hunter23")).await,
            Err(Error::Mismatch)
        );
    }

    #[tokio::test]
    async fn dummy_verification_always_fails() {
        assert_eq!(verify_dummy(String::from("hunter22")).await, Error::Mismatch);
        assert_eq!(
            verify_dummy(String::from("food-ordering-dummy-password")).await,
            Error::Mismatch
        );
        assert!(DUMMY_HASH.get().is_some_and(|hash| hash.starts_with("$argon2id$")));
    }

    #[tokio::test]
    async fn rejects_malformed_hash() {
        assert_eq!(
            verify(String::from("not-a-hash"), String::from("hunter22")).await,
            Err(Error::Mismatch)
        );
    }
}
