//! Item identifiers: opaque UUIDs and short display tokens.

use rand::Rng;
use std::collections::HashSet;
use std::ops::Range;
use tracing::warn;
use uuid::Uuid;

/// Size of the display token space (five hex digits).
pub const TOKEN_SPACE: u32 = 1 << 20;

/// Prefix of every display name.
pub const NAME_PREFIX: &str = "it-";

/// Redraws allowed before uniqueness falls back to the item ordinal.
pub const MAX_TOKEN_RETRIES: usize = 100;

/// Generate a random UUID v4 using the provided RNG.
pub fn uuid_from_rng<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Upper-case, zero-padded five-hex-digit token.
pub fn format_token(token: u32) -> String {
    format!("{token:05X}")
}

/// Split the token space into `parts` disjoint contiguous ranges.
///
/// The last range absorbs the remainder so the union is the whole space.
pub fn partition_token_space(parts: usize) -> Vec<Range<u32>> {
    let parts = parts.clamp(1, TOKEN_SPACE as usize) as u32;
    let span = TOKEN_SPACE / parts;
    (0..parts)
        .map(|i| {
            let end = if i + 1 == parts { TOKEN_SPACE } else { (i + 1) * span };
            i * span..end
        })
        .collect()
}

/// Issues display names drawn from one token range, never repeating a token.
#[derive(Debug)]
pub struct TokenAllocator {
    range: Range<u32>,
    issued: HashSet<u32>,
}

impl TokenAllocator {
    pub fn new(range: Range<u32>) -> Self {
        Self {
            range,
            issued: HashSet::new(),
        }
    }

    /// Allocator over the whole token space.
    pub fn full() -> Self {
        Self::new(0..TOKEN_SPACE)
    }

    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Draw a fresh display name for the item at `ordinal`.
    ///
    /// After [`MAX_TOKEN_RETRIES`] collisions the last drawn token is
    /// suffixed with the ordinal, which is unique within a batch.
    pub fn allocate<R: Rng + ?Sized>(&mut self, ordinal: usize, rng: &mut R) -> String {
        let mut token = rng.gen_range(self.range.clone());
        let mut retries = 0;

        while self.issued.contains(&token) {
            if retries == MAX_TOKEN_RETRIES {
                warn!(
                    "Token space exhausted after {} retries, suffixing item {}",
                    MAX_TOKEN_RETRIES, ordinal
                );
                return format!("{NAME_PREFIX}{}-{ordinal}", format_token(token));
            }
            token = rng.gen_range(self.range.clone());
            retries += 1;
        }

        self.issued.insert(token);
        format!("{NAME_PREFIX}{}", format_token(token))
    }
}
