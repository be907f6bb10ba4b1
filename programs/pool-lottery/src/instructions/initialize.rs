use anchor_lang::prelude::*;

use crate::constants::SEED_POOL;
use crate::state::Pool;

/// Accounts required to open a pool.
/// The signer pays for the pool account and becomes its manager.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for the pool and authorized to pick winners.
    #[account(mut)]
    pub manager: Signer<'info>,

    /// The pool state account, one per manager.
    #[account(
        init,
        payer = manager,
        space = 8 + Pool::INIT_SPACE,
        seeds = [SEED_POOL, manager.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let manager = ctx.accounts.manager.key();
    ctx.accounts.pool.set_inner(Pool::new(manager, ctx.bumps.pool));

    msg!("Pool opened, manager: {}", manager);
    Ok(())
}
