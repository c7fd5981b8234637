use crate::constants::MAX_MEMO_LEN;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Expired,
    Cancelled,
}

/// Single payer→recipient obligation. Terminal once `status` leaves
/// `Pending`.
#[account]
#[derive(InitSpace)]
pub struct Invoice {
    pub id: [u8; 32],
    pub recipient: Pubkey,
    pub amount: u64,
    #[max_len(MAX_MEMO_LEN)]
    pub memo: String,
    pub status: InvoiceStatus,
    pub created_at: i64,
    pub expires_at: i64,
    pub paid_at: Option<i64>,
    pub payer: Option<Pubkey>,
    pub bump: u8,
}

impl Invoice {
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, InvoiceStatus::Pending)
    }
}
