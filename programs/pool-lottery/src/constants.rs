use anchor_lang::prelude::*;

/// Seed prefix of the pool PDA. The manager key is appended so each manager
/// owns at most one pool.
#[constant]
pub const SEED_POOL: &[u8] = b"pool";

/// Smallest accepted stake in lamports (0.02 SOL).
#[constant]
pub const MINIMUM_ENTRY: u64 = 20_000_000;

/// Capacity of the player list. The pool account is allocated once, and
/// `get_players` must fit its answer in the 1024-byte return data buffer.
pub const MAX_PLAYERS: usize = 31;
