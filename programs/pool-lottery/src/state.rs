use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, MINIMUM_ENTRY};
use crate::error::ErrorCode;
use crate::randomness::{pick_index, EntropySource};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The identity that created the pool. Only it may pick a winner.
    /// Set once at initialization and never changed.
    pub manager: Pubkey,

    /// Lamports staked in the current round. The account also holds its
    /// rent-exempt reserve, which is not part of the pot.
    pub balance: u64,

    /// Number of rounds closed so far. Mixed into the selection seed so
    /// consecutive rounds with the same players draw differently.
    pub round: u64,

    /// Players of the current round in entry order. A player that entered
    /// twice appears twice.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

/// Outcome of a closed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub index: usize,
    pub amount: u64,
}

impl Pool {
    pub fn new(manager: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            manager,
            balance: 0,
            round: 0,
            players: Vec::new(),
        }
    }

    /// Checks that `stake` may join the current round without changing anything.
    pub fn check_entry(&self, stake: u64) -> Result<()> {
        require!(stake >= MINIMUM_ENTRY, ErrorCode::InsufficientStake);
        require!(self.players.len() < MAX_PLAYERS, ErrorCode::PoolFull);
        self.balance
            .checked_add(stake)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Adds `player` to the round and `stake` to the pot.
    pub fn record_entry(&mut self, player: Pubkey, stake: u64) -> Result<()> {
        self.check_entry(stake)?;
        self.players.push(player);
        self.balance += stake;
        Ok(())
    }

    pub fn ensure_manager(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.manager, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Picks a winner, hands the whole pot to `disburse` and resets the round.
    ///
    /// `disburse` runs before any field is touched, so if it fails the pool is
    /// exactly as it was before the call.
    pub fn close_round<E, F>(&mut self, caller: &Pubkey, entropy: &E, disburse: F) -> Result<Payout>
    where
        E: EntropySource + ?Sized,
        F: FnOnce(&Pubkey, u64) -> Result<()>,
    {
        self.ensure_manager(caller)?;
        require!(!self.players.is_empty(), ErrorCode::NoParticipants);

        let seed = entropy.seed(&self.players, self.round);
        let index = pick_index(&seed, self.players.len()).ok_or(ErrorCode::NoParticipants)?;
        let next_round = self.round.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        let payout = Payout {
            winner: self.players[index],
            index,
            amount: self.balance,
        };

        disburse(&payout.winner, payout.amount)?;

        self.players.clear();
        self.balance = 0;
        self.round = next_round;
        Ok(payout)
    }
}
