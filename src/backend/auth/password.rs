/**
 * Password Hashing
 *
 * One-way bcrypt hashing of user passwords. The work factor comes from
 * configuration and is fixed for the lifetime of the hasher; the salt and
 * cost are embedded in each hash, so verification needs only the hash.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused instead of silently truncated.
 */

use bcrypt::BcryptError;

/// Longest password bcrypt can hash without truncating it
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt hasher with a fixed cost factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher using the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Fails when the configured cost is outside bcrypt's range or the
    /// password is longer than [`MAX_PASSWORD_BYTES`].
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::non_truncating_hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed hash or an over-long password is treated the same as a
    /// mismatch.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::non_truncating_verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::debug!("Password hash could not be checked: {:?}", e);
                false
            }
        }
    }
}
