/**
 * Password Hashing
 *
 * One-way salted hashing of user passwords with bcrypt, and verification of
 * plaintext candidates against stored hashes.
 *
 * # Security
 *
 * - Each hash carries its own random salt: hashing the same password twice
 *   produces different strings
 * - Verification goes through bcrypt's constant-time comparison
 * - Empty plaintext is accepted and hashed as-is; length/strength policy is
 *   deliberately not enforced here
 */

/// bcrypt work factor. Balances brute-force resistance against login
/// latency; raising it by one doubles the hashing cost.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
///
/// # Errors
///
/// Returns the underlying bcrypt error when hashing fails.
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext candidate against a stored hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash cannot
/// be parsed.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plaintext, stored_hash)
}
