// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use uuid::Uuid;

/// Derives a fresh 64-bit seed from a random (v4) UUID.
///
/// Each call consumes one identifier's worth of OS entropy. Two calls differ
/// with overwhelming probability, but the result is not a secret: never use
/// it for security purposes.
pub fn generate_seed() -> u64 {
    fold_identifier(Uuid::new_v4().as_bytes())
}

/// Folds a 16-byte identifier to 64 bits: bytes `[0, 8)` XOR bytes `[7, 15)`,
/// both read little-endian.
pub fn fold_identifier(id: &[u8; 16]) -> u64 {
    let mut low = [0_u8; 8];
    let mut window = [0_u8; 8];
    low.copy_from_slice(&id[0..8]);
    window.copy_from_slice(&id[7..15]);
    u64::from_le_bytes(low) ^ u64::from_le_bytes(window)
}
