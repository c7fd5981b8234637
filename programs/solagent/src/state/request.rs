use crate::constants::MAX_CAPABILITY_LEN;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Disputed,
    Refunded,
}

/// Request/escrow/deliver/dispute lifecycle between a requester and a
/// provider, bound to a capability tag. The escrow itself is a bare PDA
/// (`derive("request_escrow", id)`, bump cached here) holding exactly
/// `amount` lamports while `status ∈ {Pending, InProgress, Disputed}`.
///
/// `arbiter` decides dispute authority: `Some(key)` designates a neutral
/// resolver; `None` falls back to the provider-resolves-in-their-favor /
/// requester-resolves-in-their-favor policy documented in `DESIGN.md`.
#[account]
#[derive(InitSpace)]
pub struct ServiceRequest {
    pub id: [u8; 32],
    pub requester: Pubkey,
    pub provider: Pubkey,
    #[max_len(MAX_CAPABILITY_LEN)]
    pub capability: String,
    pub amount: u64,
    pub status: RequestStatus,
    pub created_at: i64,
    pub completed_at: Option<i64>,
    pub result_hash: Option<[u8; 32]>,
    pub arbiter: Option<Pubkey>,
    pub bump: u8,
    pub escrow_bump: u8,
}

impl ServiceRequest {
    pub fn is_open_for_dispute(&self) -> bool {
        matches!(self.status, RequestStatus::Pending | RequestStatus::InProgress)
    }
}
