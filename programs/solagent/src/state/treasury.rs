use anchor_lang::prelude::*;

/// Per-principal accounting record: no value sits in this account. It only
/// tracks cumulative received/settled totals and the live Pending-invoice
/// count for `owner`. A Treasury exists for a principal iff that principal
/// completed `InitializeTreasury`.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    pub owner: Pubkey,
    pub bump: u8,
    pub total_received: u64,
    pub total_settled: u64,
    pub pending_invoices: u64,
    pub created_at: i64,
}
