pub const POOL_SEED: &[u8] = b"pool";
pub const TICKET_LEDGER_SEED: &[u8] = b"ticket_ledger";
pub const DEPOSITOR_SEED: &[u8] = b"depositor";
pub const ROUND_SEED: &[u8] = b"round";
pub const YIELD_RESERVE_SEED: &[u8] = b"yield_reserve";
pub const PRIZE_VAULT_SEED: &[u8] = b"prize_vault";

/// Denominator for every basis-point calculation.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound for `incentive_bps`. Close and finalize each take one
/// incentive from the frozen prize, so the winner always keeps >= 80%.
pub const MAX_INCENTIVE_BPS: u16 = 1_000;

/// Hard cap on accounts holding tickets at the same time. Finalize walks the
/// frozen record linearly, so this bounds its compute cost, and it keeps the
/// ledger account under the 10 KiB CPI allocation limit.
pub const MAX_PARTICIPANTS: usize = 200;

/// Number of recent slots kept by the SlotHashes sysvar.
pub const SLOT_HASH_WINDOW: u64 = 512;

/// Draw delay must leave room to finalize inside the SlotHashes window.
pub const MAX_DRAW_DELAY_SLOTS: u64 = SLOT_HASH_WINDOW / 2;

/// Slots after which an unrevealed beacon commitment may be replaced.
pub const BEACON_TIMEOUT_SLOTS: u64 = 1_500;

/// Largest page served by the `participants` view (return data is 1 KiB).
pub const MAX_PARTICIPANT_PAGE: u32 = 30;
