use anchor_lang::prelude::*;

/// One event per state-changing operation. Subscribers are external;
/// absence of a subscriber never affects state.

#[event]
pub struct TreasuryInitialized {
    pub treasury: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct InvoiceCreated {
    pub invoice: Pubkey,
    pub id: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
    pub expires_at: i64,
}

#[event]
pub struct InvoicePaid {
    pub invoice: Pubkey,
    pub payer: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct InvoiceExpired {
    pub invoice: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct InvoiceCancelled {
    pub invoice: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct BatchSettled {
    pub batch: Pubkey,
    pub settler: Pubkey,
    pub recipient: Pubkey,
    pub count: u32,
    pub total_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct AgentRegistered {
    pub agent: Pubkey,
    pub owner: Pubkey,
    pub name: String,
    pub timestamp: i64,
}

#[event]
pub struct ProfileUpdated {
    pub agent: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ServiceRequested {
    pub request: Pubkey,
    pub requester: Pubkey,
    pub provider: Pubkey,
    pub capability: String,
    pub amount: u64,
}

#[event]
pub struct ServiceCompleted {
    pub request: Pubkey,
    pub provider: Pubkey,
    pub amount: u64,
    pub result_hash: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct DisputeInitiated {
    pub dispute: Pubkey,
    pub request: Pubkey,
    pub initiator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DisputeResolved {
    pub dispute: Pubkey,
    pub request: Pubkey,
    pub arbiter: Pubkey,
    pub provider_payout: u64,
    pub requester_payout: u64,
    pub timestamp: i64,
}

#[event]
pub struct StreamCreated {
    pub stream: Pubkey,
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct StreamWithdrawn {
    pub stream: Pubkey,
    pub amount: u64,
    pub withdrawn_amount: u64,
}

#[event]
pub struct StreamPaused {
    pub stream: Pubkey,
    pub paused_at: i64,
}

#[event]
pub struct StreamResumed {
    pub stream: Pubkey,
    pub new_end_time: i64,
}

#[event]
pub struct StreamCancelled {
    pub stream: Pubkey,
    pub refunded_to_sender: u64,
}

#[event]
pub struct StreamCompleted {
    pub stream: Pubkey,
    pub timestamp: i64,
}
