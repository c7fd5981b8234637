use anchor_lang::prelude::*;

/// `ratio = numerator / denominator`, required to satisfy
/// `0 < ratio < 1` i.e. `0 < numerator < denominator`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Resolution {
    Unresolved,
    RefundRequester,
    PayProvider,
    Split { numerator: u64, denominator: u64 },
}

/// Opened when either party contests a `ServiceRequest` inside the dispute
/// window. `window_seconds` is captured at
/// open time from `request.created_at`, not re-evaluated later — closing
/// windows never retroactively affect already-opened disputes.
#[account]
#[derive(InitSpace)]
pub struct Dispute {
    pub request_id: [u8; 32],
    pub initiator: Pubkey,
    pub opened_at: i64,
    pub resolution: Resolution,
    pub resolved_at: Option<i64>,
    pub window_seconds: i64,
    pub bump: u8,
}
