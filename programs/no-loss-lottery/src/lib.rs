use anchor_lang::prelude::*;

pub mod constants;
pub mod entropy;
pub mod error;
pub mod events;
pub mod instructions;
pub mod selector;
pub mod state;
pub mod utils;
pub mod vault;
pub mod yield_source;

pub use instructions::*;
use state::{AccountPosition, ConfigUpdate, PoolParams, RoundSummary};

declare_id!("9dp7Qd7NSwojvoEhAAnDwPkTztTtzi9jMasdRAgwf9G4");

#[program]
pub mod no_loss_lottery {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, params: PoolParams) -> Result<()> {
        process_initialize_pool(ctx, params)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, update: ConfigUpdate) -> Result<()> {
        process_update_config(ctx, update)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        process_withdraw(ctx, amount)
    }

    pub fn harvest_yield(ctx: Context<HarvestYield>) -> Result<()> {
        process_harvest_yield(ctx)
    }

    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        process_close_round(ctx)
    }

    pub fn commit_beacon(ctx: Context<CommitBeacon>) -> Result<()> {
        process_commit_beacon(ctx)
    }

    pub fn finalize_round(ctx: Context<FinalizeRound>) -> Result<()> {
        process_finalize_round(ctx)
    }

    pub fn finalize_round_with_beacon(ctx: Context<FinalizeRoundWithBeacon>) -> Result<()> {
        process_finalize_round_with_beacon(ctx)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>, round_id: u64) -> Result<()> {
        process_claim_prize(ctx, round_id)
    }

    pub fn current_round_id(ctx: Context<ViewPool>) -> Result<u64> {
        process_current_round_id(ctx)
    }

    pub fn participant_count(ctx: Context<ViewPool>) -> Result<u32> {
        process_participant_count(ctx)
    }

    pub fn participants(ctx: Context<ViewPool>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
        process_participants(ctx, offset, limit)
    }

    pub fn round_summary(ctx: Context<ViewRound>) -> Result<RoundSummary> {
        process_round_summary(ctx)
    }

    pub fn time_remaining(ctx: Context<ViewRound>) -> Result<i64> {
        process_time_remaining(ctx)
    }

    pub fn account_position(ctx: Context<ViewPosition>) -> Result<AccountPosition> {
        process_account_position(ctx)
    }
}
