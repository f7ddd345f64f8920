use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Stake is below the entrance fee")]
    InsufficientStake,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Raffle is paused")]
    Paused,
    #[msg("Caller is not authorized to perform this action")]
    Unauthorized,
    #[msg("Upkeep not needed: round cannot be triggered yet")]
    UpkeepNotNeeded,
    #[msg("Lamport transfer failed")]
    TransferFailed,
    #[msg("Vault holds no withdrawable funds")]
    NoFundsToWithdraw,
    #[msg("Cannot withdraw while participants are entered in the current round")]
    ActiveRoundWithdrawalBlocked,
    #[msg("Fulfillment does not match the pending randomness request")]
    InvalidCorrelation,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Round interval must be positive and at most one year")]
    InvalidInterval,
    #[msg("Request confirmations out of range")]
    InvalidRequestConfirmations,
    #[msg("Callback compute limit out of range")]
    InvalidCallbackComputeLimit,
    #[msg("Account is not the configured VRF coordinator")]
    InvalidCoordinator,
    #[msg("VRF coordinator did not return a request id")]
    RandomnessRequestFailed,
    #[msg("Fulfillment carried no random words")]
    MissingRandomWord,
    #[msg("Winner account does not match the selected participant")]
    WinnerAccountMismatch,
    #[msg("A payout is already in progress")]
    PayoutInProgress,
    #[msg("Participant index out of bounds")]
    ParticipantIndexOutOfBounds,
    #[msg("No participants in the current round")]
    NoParticipants,
    #[msg("Entry ledger account is too small for its participant table")]
    LedgerTooSmall,
}
