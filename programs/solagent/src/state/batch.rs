use crate::constants::MAX_BATCH;
use anchor_lang::prelude::*;

/// Atomic statement that a set of previously-Paid invoices is reconciled.
/// Created at most once per `batch_id`; never amended.
#[account]
#[derive(InitSpace)]
pub struct BatchSettlement {
    pub id: [u8; 32],
    pub settler: Pubkey,
    pub recipient: Pubkey,
    #[max_len(MAX_BATCH)]
    pub invoice_ids: Vec<[u8; 32]>,
    pub total_amount: u64,
    pub settled_at: i64,
    pub bump: u8,
}
