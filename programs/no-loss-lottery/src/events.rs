use anchor_lang::prelude::*;

use crate::state::EntropyMode;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub mint: Pubkey,
    pub authority: Pubkey,
    pub ticket_unit: u64,
}

#[event]
pub struct ConfigUpdated {
    pub pool: Pubkey,
    pub incentive_bps: u16,
    pub harvest_interval: i64,
    pub lottery_interval: i64,
    pub draw_delay_slots: u64,
    pub entropy_mode: EntropyMode,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub ticket_delta: u64,
    pub total_tickets: u64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub ticket_delta: u64,
    pub total_tickets: u64,
}

#[event]
pub struct YieldHarvested {
    pub caller: Pubkey,
    pub gross_yield: u64,
    pub incentive: u64,
    pub prize_contribution: u64,
    pub prize_pool: u64,
}

#[event]
pub struct RoundOpened {
    pub round_id: u64,
    pub close_deadline: i64,
}

#[event]
pub struct RoundClosed {
    pub round_id: u64,
    pub caller: Pubkey,
    pub draw_slot: u64,
    pub ticket_snapshot_total: u64,
    pub prize_amount: u64,
    pub close_incentive: u64,
    pub entropy_mode: EntropyMode,
}

#[event]
pub struct BeaconCommitted {
    pub round_id: u64,
    pub randomness_account: Pubkey,
    pub slot: u64,
}

#[event]
pub struct RoundFinalized {
    pub round_id: u64,
    pub caller: Pubkey,
    pub winner: Option<Pubkey>,
    pub prize_amount: u64,
    pub finalize_reward: u64,
    pub seed: [u8; 32],
}

#[event]
pub struct PrizeClaimed {
    pub round_id: u64,
    pub winner: Pubkey,
    pub amount: u64,
}
