//! First-name hashing.
//!
//! Keys are 64-bit XXH64 digests of the raw first-name bytes. The hash is
//! seedless and deterministic, so the same input file always produces the
//! same index structure regardless of when or where it is processed.

use xxhash_rust::xxh64::xxh64;

/// Fixed seed; keys must be reproducible across runs.
const SEED: u64 = 0;

/// Compute the dedup key for a first-name token.
///
/// The token is the raw bytes before the first space of a record line, with
/// no separator or line terminator included.
pub fn first_name_key(first_name: &[u8]) -> u64 {
    xxh64(first_name, SEED)
}
