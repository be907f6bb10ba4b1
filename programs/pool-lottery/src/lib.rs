use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod randomness;
pub mod state;

pub use instructions::*;

declare_id!("BWx5vZ2MQpZ2o2zotUptDTYjxxiMJwpTZPmvBfNgvCFk");

#[program]
pub mod pool_lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn enter(ctx: Context<Enter>, stake: u64) -> Result<()> {
        process_enter(ctx, stake)
    }

    pub fn pick_winner<'info>(ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<ViewPool>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn get_manager(ctx: Context<ViewPool>) -> Result<Pubkey> {
        process_get_manager(ctx)
    }

    pub fn get_balance(ctx: Context<ViewPool>) -> Result<u64> {
        process_get_balance(ctx)
    }
}
