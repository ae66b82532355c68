//! Admin credential check backed by Argon2.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::ports::{AuthError, PasswordService};

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// The single admin account. Only a hash of the password is kept in memory.
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Hash the configured password once at startup.
    pub fn new(
        username: impl Into<String>,
        password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            username: username.into(),
            password_hash: passwords.hash(password)?,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password pair.
    pub fn check(
        &self,
        username: &str,
        password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<(), AuthError> {
        let password_ok = passwords.verify(password, &self.password_hash)?;
        if username == self.username && password_ok {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("admin123").unwrap();
        assert!(service.verify("admin123", &hash).unwrap());
        assert!(!service.verify("admin124", &hash).unwrap());
    }

    #[test]
    fn test_admin_credentials_check() {
        let service = Argon2PasswordService::new();
        let admin = AdminCredentials::new("admin", "admin123", &service).unwrap();

        assert!(admin.check("admin", "admin123", &service).is_ok());
        assert!(matches!(
            admin.check("admin", "wrong", &service),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            admin.check("root", "admin123", &service),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
