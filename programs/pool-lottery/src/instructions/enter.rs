use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::SEED_POOL;
use crate::state::Pool;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The player staking lamports.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The pool receiving the stake.
    #[account(
        mut,
        seeds = [SEED_POOL, pool.manager.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    /// System program for the stake transfer.
    pub system_program: Program<'info, System>,
}

/// Stakes `stake` lamports and adds the signer to the round.
///
/// Rejected with `InsufficientStake` below `MINIMUM_ENTRY` and with `PoolFull`
/// once the player list is at capacity. Nothing is transferred on rejection.
pub fn process_enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
    ctx.accounts.pool.check_entry(stake)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.pool.to_account_info(),
            },
        ),
        stake,
    )?;

    let player = ctx.accounts.player.key();
    let pool = &mut ctx.accounts.pool;
    pool.record_entry(player, stake)?;

    msg!("Player {} entered with {} lamports", player, stake);
    msg!("Players: {}, pot: {}", pool.players.len(), pool.balance);
    Ok(())
}
