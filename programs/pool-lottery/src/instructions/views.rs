use anchor_lang::prelude::*;

use crate::constants::SEED_POOL;
use crate::state::Pool;

/// Read-only access to a pool. No signer is needed.
#[derive(Accounts)]
pub struct ViewPool<'info> {
    #[account(
        seeds = [SEED_POOL, pool.manager.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,
}

/// Players of the current round in entry order.
pub fn process_get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.pool.players.clone())
}

pub fn process_get_manager(ctx: Context<ViewPool>) -> Result<Pubkey> {
    Ok(ctx.accounts.pool.manager)
}

/// Lamports staked in the current round, excluding the rent reserve.
pub fn process_get_balance(ctx: Context<ViewPool>) -> Result<u64> {
    Ok(ctx.accounts.pool.balance)
}
