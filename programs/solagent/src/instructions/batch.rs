use crate::constants::{BATCH_SEED, MAX_BATCH, TREASURY_SEED};
use crate::errors::AgentEconError;
use crate::events::BatchSettled;
use crate::state::{BatchSettlement, Invoice, InvoiceStatus, Treasury};
use anchor_lang::prelude::*;

/// Reconciles a batch of already-paid invoices for one recipient. Batches
/// never move value (it moved during `PayInvoice`);
/// this only advances the recipient's settled-cursor and creates an
/// auditable record of which invoices are considered reconciled.
///
/// Invoice accounts are passed via `ctx.remaining_accounts` because their
/// count is runtime-variable (1..=MAX_BATCH); each is independently loaded,
/// discriminator- and owner-checked via `Account::<Invoice>::try_from`, and
/// cross-checked against the caller-supplied `invoice_ids` so a caller
/// cannot substitute an invoice account that doesn't match its claimed ID.
pub fn settle_batch(
    ctx: Context<SettleBatch>,
    batch_id: [u8; 32],
    invoice_ids: Vec<[u8; 32]>,
    claimed_total: u64,
) -> Result<()> {
    require!(!invoice_ids.is_empty(), AgentEconError::EmptyBatch);
    require!(invoice_ids.len() <= MAX_BATCH, AgentEconError::BatchTooLarge);
    require!(
        ctx.remaining_accounts.len() == invoice_ids.len(),
        AgentEconError::BadSerialization
    );

    let recipient_key = ctx.accounts.recipient.key();
    let program_id = ctx.program_id;
    let mut sum: u64 = 0;

    for (expected_id, account_info) in invoice_ids.iter().zip(ctx.remaining_accounts.iter()) {
        let (expected_address, _bump) =
            Pubkey::find_program_address(&[crate::constants::INVOICE_SEED, expected_id.as_ref()], program_id);
        require_keys_eq!(*account_info.key, expected_address, AgentEconError::AddressMismatch);

        let invoice: Account<Invoice> = Account::try_from(account_info)?;
        require!(invoice.status == InvoiceStatus::Paid, AgentEconError::InvoiceNotPaid);
        require_keys_eq!(invoice.recipient, recipient_key, AgentEconError::WrongRecipient);

        sum = sum
            .checked_add(invoice.amount)
            .ok_or(AgentEconError::BadAmount)?;
    }

    require!(sum == claimed_total, AgentEconError::SumMismatch);

    let batch = &mut ctx.accounts.batch;
    batch.id = batch_id;
    batch.settler = ctx.accounts.settler.key();
    batch.recipient = recipient_key;
    batch.invoice_ids = invoice_ids;
    batch.total_amount = claimed_total;
    batch.settled_at = Clock::get()?.unix_timestamp;
    batch.bump = ctx.bumps.batch;

    ctx.accounts.treasury.total_settled += claimed_total;

    emit!(BatchSettled {
        batch: batch.key(),
        settler: batch.settler,
        recipient: recipient_key,
        count: batch.invoice_ids.len() as u32,
        total_amount: claimed_total,
        timestamp: batch.settled_at,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(batch_id: [u8; 32])]
pub struct SettleBatch<'info> {
    #[account(
        init,
        payer = settler,
        space = 8 + BatchSettlement::INIT_SPACE,
        seeds = [BATCH_SEED, batch_id.as_ref()],
        bump,
    )]
    pub batch: Account<'info, BatchSettlement>,
    #[account(
        mut,
        seeds = [TREASURY_SEED, recipient.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
    #[account(mut)]
    pub settler: Signer<'info>,
    /// CHECK: only used as a pubkey to derive `treasury` and tag the batch.
    pub recipient: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}
