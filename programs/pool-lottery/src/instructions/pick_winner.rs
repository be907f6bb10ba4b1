use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::SEED_POOL;
use crate::error::ErrorCode;
use crate::randomness::ChainEntropy;
use crate::state::Pool;

/// Accounts required to close the round and pay the winner.
///
/// The winner is only known once the handler runs, so the caller passes the
/// candidate player accounts as writable remaining accounts. The payout goes
/// to the one whose key matches the draw.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// Must be the pool's manager.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The pool being drawn.
    #[account(
        mut,
        seeds = [SEED_POOL, pool.manager.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: Address is pinned to the SlotHashes sysvar; the data is parsed in the handler.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn process_pick_winner<'info>(ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>) -> Result<()> {
    let clock = Clock::get()?;
    let entropy = ChainEntropy::new(&ctx.accounts.slot_hashes.try_borrow_data()?, &clock)?;

    let pool_info = ctx.accounts.pool.to_account_info();
    let reserve = Rent::get()?.minimum_balance(pool_info.data_len());
    let candidates = ctx.remaining_accounts;
    let caller = ctx.accounts.manager.key();

    let pool = &mut ctx.accounts.pool;
    msg!("Round: {}", pool.round);
    msg!("Players: {}", pool.players.len());

    let mut paid = 0u64;
    let payout = pool.close_round(&caller, &entropy, |winner, pot| {
        let winner_info = find_winner(candidates, winner)?;
        paid = sweep_lamports(&pool_info, winner_info, pot, reserve)?;
        Ok(())
    })?;

    msg!("Winner: {} (index {})", payout.winner, payout.index);
    msg!(
        "Paid: {} lamports, {} above the staked pot",
        paid,
        paid.saturating_sub(payout.amount)
    );
    Ok(())
}

/// Returns the writable remaining account whose key is `winner`.
fn find_winner<'a, 'info>(
    candidates: &'a [AccountInfo<'info>],
    winner: &Pubkey,
) -> Result<&'a AccountInfo<'info>> {
    candidates
        .iter()
        .find(|account| account.key == winner && account.is_writable)
        .ok_or_else(|| {
            msg!("Winner account {} was not supplied as writable", winner);
            error!(ErrorCode::WinnerAccountMissing)
        })
}

/// Moves every lamport above `reserve` out of the program-owned pool.
///
/// Lamports sent to the pool outside `enter` go to the winner along with the
/// staked `pot`. Fails without moving anything when the pool cannot cover
/// `pot` and stay rent exempt.
fn sweep_lamports(pool: &AccountInfo, winner: &AccountInfo, pot: u64, reserve: u64) -> Result<u64> {
    let available = pool
        .lamports()
        .checked_sub(reserve)
        .ok_or(ErrorCode::InsufficientPoolFunds)?;
    require!(available >= pot, ErrorCode::InsufficientPoolFunds);
    let credited = winner
        .lamports()
        .checked_add(available)
        .ok_or(ErrorCode::MathOverflow)?;

    **pool.try_borrow_mut_lamports()? = reserve;
    **winner.try_borrow_mut_lamports()? = credited;
    Ok(available)
}
