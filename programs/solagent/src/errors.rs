use anchor_lang::prelude::*;

/// Every failure kind the program can raise, one variant each. Every
/// `require!` resolves to one of these; none of them are persisted as
/// records.
#[error_code]
pub enum AgentEconError {
    // Shape
    #[msg("stored address does not match its derivation")]
    AddressMismatch,
    #[msg("account discriminator does not match the expected class")]
    WrongClass,
    #[msg("a required signer did not sign this instruction")]
    MissingSigner,
    #[msg("payload could not be deserialized")]
    BadSerialization,

    // Existence
    #[msg("account not found")]
    NotFound,
    #[msg("account already exists")]
    AlreadyExists,
    #[msg("owner has no initialized treasury")]
    NoTreasury,

    // Value
    #[msg("amount must be greater than zero")]
    BadAmount,
    #[msg("memo exceeds 256 bytes")]
    MemoTooLong,
    #[msg("expires_at must be in the future")]
    ExpiryInPast,
    #[msg("insufficient balance for this transfer")]
    Insufficient,

    // State
    #[msg("invoice is not Pending")]
    NotPending,
    #[msg("invoice has expired")]
    Expired,
    #[msg("invoice has not yet reached its expiry time")]
    NotYetExpired,
    #[msg("record is in a terminal state and cannot be mutated")]
    AlreadyTerminal,
    #[msg("referenced invoice is not Paid")]
    InvoiceNotPaid,
    #[msg("invoice recipient does not match the batch recipient")]
    WrongRecipient,
    #[msg("claimed total does not match the sum of invoice amounts")]
    SumMismatch,

    // Auth / role
    #[msg("signer is not a party to this record")]
    NotParty,
    #[msg("signer is not authorized to resolve this dispute")]
    NotArbiter,
    #[msg("provider is not active")]
    ProviderInactive,
    #[msg("capability is not offered by this provider")]
    UnknownCapability,
    #[msg("amount is below the provider's base price")]
    PriceBelowMinimum,

    // Batch / size
    #[msg("batch must contain at least one invoice")]
    EmptyBatch,
    #[msg("batch exceeds the maximum invoice count")]
    BatchTooLarge,
    #[msg("capability list exceeds the maximum size")]
    CapabilityListTooLarge,

    // Dispute
    #[msg("dispute window has elapsed")]
    WindowExpired,
    #[msg("request already has an open or resolved dispute")]
    AlreadyDisputed,
    #[msg("request has no open dispute")]
    NotDisputed,

    // Name/description bounds reused by the registry so RegisterAgent/
    // UpdateProfile fail precisely.
    #[msg("name exceeds 32 bytes")]
    NameTooLong,
    #[msg("description exceeds 256 bytes")]
    DescriptionTooLong,

    // Streaming
    #[msg("stream is paused")]
    StreamPaused,
    #[msg("stream is not paused")]
    StreamNotPaused,
    #[msg("stream is not active")]
    StreamNotActive,
    #[msg("nothing available to withdraw")]
    NothingToWithdraw,
    #[msg("end_time must be after start_time")]
    BadStreamWindow,

    // Dispute resolution payload
    #[msg("split ratio must be in the open interval (0, 1)")]
    BadSplitRatio,
}
