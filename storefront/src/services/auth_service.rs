// storefront/src/services/auth_service.rs

//! Password hashing/verification and the signup form's strength meter.

use crate::errors::StoreError;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

/// Hashes a password with Argon2 and a fresh random salt; returns the PHC string.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, StoreError> {
  if password.is_empty() {
    return Err(StoreError::validation("password", "Password cannot be empty"));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => {
      debug!("Password hashed.");
      Ok(hash.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 hashing failed.");
      Err(StoreError::Internal(format!("Password hashing failed: {}", argon_err)))
    }
  }
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display), fields(hash_len = stored_hash.len()))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, StoreError> {
  if provided_password.is_empty() {
    return Ok(false);
  }

  let parsed = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Stored password hash is not a valid PHC string.");
    StoreError::Internal(format!("Invalid stored password hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other) => {
      error!(error = %other, "Argon2 verification failed.");
      Err(StoreError::Internal(format!("Password verification failed: {}", other)))
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
  Weak,
  Fair,
  Strong,
}

impl StrengthBand {
  /// Bar colour used by the signup form.
  pub fn color(self) -> &'static str {
    match self {
      StrengthBand::Weak => "#e53e3e",
      StrengthBand::Fair => "#ed8936",
      StrengthBand::Strong => "#38a169",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
  /// 0, 25, 50, 75 or 100; doubles as the bar width in percent.
  pub score: u8,
  pub band: StrengthBand,
}

/// Naive meter: a quarter each for length >= 6, length >= 8, an uppercase
/// letter and a digit.
pub fn password_strength(password: &str) -> PasswordStrength {
  let len = password.chars().count();
  let checks = [
    len >= 6,
    len >= 8,
    password.chars().any(|c| c.is_ascii_uppercase()),
    password.chars().any(|c| c.is_ascii_digit()),
  ];
  let score = checks.iter().filter(|passed| **passed).count() as u8 * 25;
  let band = match score {
    s if s < 50 => StrengthBand::Weak,
    s if s < 75 => StrengthBand::Fair,
    _ => StrengthBand::Strong,
  };
  PasswordStrength { score, band }
}
