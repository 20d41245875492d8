//! Room code generation.

use rand::Rng;

use crate::common::errors::RoomError;
use crate::common::types::RoomCode;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;
const MAX_ATTEMPTS: usize = 64;

/// Generates a random 6-character room code, each position drawn uniformly
/// from A-Z0-9.
pub fn generate() -> RoomCode {
    let mut rng = rand::thread_rng();
    let code: String = (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode(code)
}

/// Generates a code that `is_taken` rejects, retrying on collision. With a
/// 36^6 code space running out of retries means something is badly wrong,
/// but the loop is bounded so creation can fail instead of spinning.
pub fn generate_unique(is_taken: impl Fn(&RoomCode) -> bool) -> Result<RoomCode, RoomError> {
    for _ in 0..MAX_ATTEMPTS {
        let code = generate();
        if !is_taken(&code) {
            return Ok(code);
        }
    }
    Err(RoomError::CodeExhausted)
}
