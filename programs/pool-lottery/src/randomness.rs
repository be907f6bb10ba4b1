//! Winner selection.
//!
//! The index is derived from values every validator can see before the
//! instruction lands: the most recent slot hash, the clock and the player
//! list. It is *not* cryptographically secure. The slot leader picks the slot
//! hash and timestamp, and anyone can simulate `pick_winner` to learn the
//! outcome in advance. Callers who need fair draws should use an oracle.

use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::error::ErrorCode;

/// Supplies the 32-byte seed that selects a winner.
pub trait EntropySource {
    fn seed(&self, players: &[Pubkey], round: u64) -> [u8; 32];
}

/// Entropy read from the chain at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEntropy {
    pub slot_hash: [u8; 32],
    pub slot: u64,
    pub unix_timestamp: i64,
}

impl ChainEntropy {
    /// Builds the source from raw `SlotHashes` sysvar data and the clock.
    pub fn new(slot_hashes: &[u8], clock: &Clock) -> Result<Self> {
        Ok(Self {
            slot_hash: most_recent_slot_hash(slot_hashes)?,
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
        })
    }
}

impl EntropySource for ChainEntropy {
    fn seed(&self, players: &[Pubkey], round: u64) -> [u8; 32] {
        let slot = self.slot.to_le_bytes();
        let timestamp = self.unix_timestamp.to_le_bytes();
        let round = round.to_le_bytes();

        let mut parts: Vec<&[u8]> = Vec::with_capacity(4 + players.len());
        parts.push(&self.slot_hash);
        parts.push(&slot);
        parts.push(&timestamp);
        parts.push(&round);
        parts.extend(players.iter().map(|player| player.as_ref()));

        keccak::hashv(&parts).to_bytes()
    }
}

/// Returns the newest hash stored in `SlotHashes` sysvar data.
///
/// Layout: `u64` entry count, then `(u64 slot, [u8; 32] hash)` entries,
/// newest first.
pub fn most_recent_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    let count = data
        .get(0..8)
        .and_then(|bytes| bytes.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or(ErrorCode::InvalidSlotHashes)?;
    require!(count > 0, ErrorCode::InvalidSlotHashes);

    data.get(16..48)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| error!(ErrorCode::InvalidSlotHashes))
}

/// Maps a seed onto `[0, len)`. `None` when there is nobody to pick.
pub fn pick_index(seed: &[u8; 32], len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut head = [0u8; 8];
    head.copy_from_slice(&seed[..8]);
    Some((u64::from_le_bytes(head) % len as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn players(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    fn entropy(unix_timestamp: i64) -> ChainEntropy {
        ChainEntropy {
            slot_hash: [3u8; 32],
            slot: 77,
            unix_timestamp,
        }
    }

    fn slot_hashes_data(entries: &[(u64, [u8; 32])]) -> Vec<u8> {
        let mut data = (entries.len() as u64).to_le_bytes().to_vec();
        for (slot, hash) in entries {
            data.extend_from_slice(&slot.to_le_bytes());
            data.extend_from_slice(hash);
        }
        data
    }

    #[test]
    fn test_pick_index_empty() {
        assert_eq!(pick_index(&[9u8; 32], 0), None);
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        for len in 1..=40usize {
            for byte in [0u8, 1, 7, 128, 255] {
                let index = pick_index(&[byte; 32], len).unwrap();
                assert!(index < len);
            }
        }
    }

    #[test]
    fn test_pick_index_reads_low_bytes() {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&7u64.to_le_bytes());
        assert_eq!(pick_index(&seed, 5), Some(2));
        assert_eq!(pick_index(&seed, 8), Some(7));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let players = players(3);
        assert_eq!(entropy(1_700_000_000).seed(&players, 4), entropy(1_700_000_000).seed(&players, 4));
    }

    #[test]
    fn test_seed_depends_on_round_and_players() {
        let players = players(3);
        let source = entropy(1_700_000_000);
        assert_ne!(source.seed(&players, 0), source.seed(&players, 1));
        assert_ne!(source.seed(&players, 0), source.seed(&players[..2], 0));
    }

    #[test]
    fn test_timestamp_control_steers_winner() {
        // Whoever sets the clock can search for a timestamp that picks the index they want.
        let players = players(4);
        let target = 2;
        let steered = (0..1_000i64)
            .find(|ts| pick_index(&entropy(*ts).seed(&players, 0), players.len()) == Some(target));
        assert!(steered.is_some());
    }

    #[test]
    fn test_most_recent_slot_hash() {
        let data = slot_hashes_data(&[(10, [7u8; 32]), (9, [8u8; 32])]);
        assert_eq!(most_recent_slot_hash(&data).unwrap(), [7u8; 32]);
    }

    #[test]
    fn test_most_recent_slot_hash_rejects_malformed() {
        let expected = Error::from(ErrorCode::InvalidSlotHashes);
        assert_eq!(most_recent_slot_hash(&[]).unwrap_err(), expected);
        assert_eq!(most_recent_slot_hash(&slot_hashes_data(&[])).unwrap_err(), expected);

        let mut truncated = slot_hashes_data(&[(10, [7u8; 32])]);
        truncated.truncate(30);
        assert_eq!(most_recent_slot_hash(&truncated).unwrap_err(), expected);
    }

    #[test]
    fn test_chain_entropy_from_clock() {
        let clock = Clock {
            slot: 42,
            unix_timestamp: 1_700_000_123,
            ..Clock::default()
        };
        let data = slot_hashes_data(&[(41, [5u8; 32])]);
        let source = ChainEntropy::new(&data, &clock).unwrap();
        assert_eq!(source.slot_hash, [5u8; 32]);
        assert_eq!(source.slot, 42);
        assert_eq!(source.unix_timestamp, 1_700_000_123);
    }
}
