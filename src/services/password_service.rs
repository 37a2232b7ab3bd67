//! Hash de contraseñas con bcrypt
//!
//! bcrypt es lento a propósito; la verificación corre en el pool bloqueante de
//! tokio para no frenar el runtime.

use bcrypt::{hash, verify};

use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash(password, self.cost).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
    }

    pub async fn hash_async(&self, password: &str) -> AppResult<String> {
        let hasher = *self;
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Hash task failed: {}", e)))?
    }

    /// Comparar una contraseña contra el hash guardado
    pub async fn verify(&self, password: &str, hashed_password: &str) -> AppResult<bool> {
        let password = password.to_string();
        let hashed_password = hashed_password.to_string();

        tokio::task::spawn_blocking(move || verify(&password, &hashed_password))
            .await
            .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))?
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4 /* bcrypt MIN_COST (private in bcrypt 0.15) */);
        let hashed = hasher.hash_async("test789").await.unwrap();

        assert_ne!(hashed, "test789");
        assert!(hasher.verify("test789", &hashed).await.unwrap());
        assert!(!hasher.verify("wrong", &hashed).await.unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4 /* bcrypt MIN_COST (private in bcrypt 0.15) */);
        let first = hasher.hash("test123").unwrap();
        let second = hasher.hash("test123").unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_hash_error() {
        let hasher = PasswordHasher::new(4 /* bcrypt MIN_COST (private in bcrypt 0.15) */);
        let error = hasher.verify("test123", "plaintext").await.unwrap_err();
        assert!(matches!(error, AppError::Hash(_)));
    }
}
