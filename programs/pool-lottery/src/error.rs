use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Stake is below the minimum entry")]
    InsufficientStake,
    #[msg("Only the manager can do this")]
    Unauthorized,
    #[msg("No players have entered this round")]
    NoParticipants,
    #[msg("The pool has reached its player capacity")]
    PoolFull,
    #[msg("The selected winner's account was not supplied as writable")]
    WinnerAccountMissing,
    #[msg("Pool account cannot cover the payout and stay rent exempt")]
    InsufficientPoolFunds,
    #[msg("Math operation overflow")]
    MathOverflow,
    #[msg("Slot hashes sysvar data is malformed")]
    InvalidSlotHashes,
}
