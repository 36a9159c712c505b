use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Ticket ledger
    #[msg("Amount must be a non-zero multiple of the ticket unit")]
    InvalidTicketAmount,
    #[msg("Withdrawal exceeds deposited principal")]
    InsufficientDeposit,
    #[msg("Token balance too low for this deposit")]
    InsufficientBalance,
    #[msg("Participant limit reached")]
    TooManyParticipants,

    // Harvest
    #[msg("Harvest interval has not elapsed")]
    HarvestTooSoon,
    #[msg("No participants hold tickets")]
    NoParticipants,

    // Rounds
    #[msg("Round is not active")]
    RoundNotActive,
    #[msg("Round has not reached its close deadline")]
    RoundNotEnded,
    #[msg("Round is not closed")]
    RoundNotClosed,
    #[msg("Draw slot has not been reached")]
    DrawBlockNotReached,
    #[msg("Slot hash for the draw slot is no longer available")]
    BlockhashNotAvailable,
    #[msg("Round has no winner")]
    NoWinnerSelected,
    #[msg("Round snapshot holds no tickets")]
    NoTickets,
    #[msg("No prize to claim")]
    NoPrize,
    #[msg("Round id does not match the pool's current round")]
    InvalidRoundId,
    #[msg("Signer is not the round winner")]
    NotWinner,

    // Entropy
    #[msg("SlotHashes sysvar data is malformed")]
    InvalidSlotHashes,
    #[msg("Randomness account does not match the committed beacon")]
    IncorrectRandomnessAccount,
    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,
    #[msg("Beacon entropy is not allowed for this round yet")]
    BeaconNotAllowed,
    #[msg("A beacon is already committed for this round")]
    BeaconAlreadyCommitted,
    #[msg("Committed beacon has been revealed and can no longer be replaced")]
    BeaconAlreadyRevealed,
    #[msg("Round must be finalized with its frozen entropy source")]
    WrongEntropySource,

    // Config and access
    #[msg("Invalid pool configuration")]
    InvalidConfig,
    #[msg("Unauthorized: only the pool authority can perform this action")]
    Unauthorized,
    #[msg("Math overflow occurred")]
    MathOverflow,
}
