//! Hashing utilities for board comparison.
//!
//! Uses FNV-1a for fast, deterministic fingerprints of simulation state.
//! These hashes are not cryptographically secure; they exist for quick
//! equality checks in determinism tests and benchmarks.

use blob_board::Board;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash of a board's dimensions and every cell's state.
///
/// Floats are hashed by bit pattern, so boards that differ by one ulp
/// anywhere hash differently.
pub fn board_hash(board: &Board) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &board.width().to_le_bytes());
    hash = fnv1a_bytes(hash, &board.height().to_le_bytes());
    for (_, state) in board.cells() {
        hash = fnv1a_byte(hash, u8::from(state.touched));
        hash = fnv1a_bytes(hash, &state.food.to_bits().to_le_bytes());
        hash = fnv1a_bytes(hash, &state.intensity.to_bits().to_le_bytes());
    }
    hash
}
