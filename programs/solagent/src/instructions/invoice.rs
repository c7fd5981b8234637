use crate::constants::{INVOICE_SEED, MAX_MEMO_LEN, TREASURY_SEED};
use crate::derive::load_treasury;
use crate::errors::AgentEconError;
use crate::events::{InvoiceCancelled, InvoiceCreated, InvoiceExpired, InvoicePaid};
use crate::state::{Invoice, InvoiceStatus, Treasury};
use crate::transfer::transfer_from_signer;
use anchor_lang::prelude::*;

/// Opens a new `Pending` invoice and bumps the recipient's pending count.
pub fn create_invoice(
    ctx: Context<CreateInvoice>,
    id: [u8; 32],
    amount: u64,
    memo: String,
    expires_at: i64,
) -> Result<()> {
    require!(amount > 0, AgentEconError::BadAmount);
    require!(memo.len() <= MAX_MEMO_LEN, AgentEconError::MemoTooLong);
    let now = Clock::get()?.unix_timestamp;
    require!(expires_at > now, AgentEconError::ExpiryInPast);

    let mut treasury = load_treasury(&ctx.accounts.treasury.to_account_info(), ctx.program_id)?;

    let invoice = &mut ctx.accounts.invoice;
    invoice.id = id;
    invoice.recipient = ctx.accounts.recipient.key();
    invoice.amount = amount;
    invoice.memo = memo;
    invoice.status = InvoiceStatus::Pending;
    invoice.created_at = now;
    invoice.expires_at = expires_at;
    invoice.paid_at = None;
    invoice.payer = None;
    invoice.bump = ctx.bumps.invoice;

    treasury.pending_invoices += 1;
    treasury.exit(ctx.program_id)?;

    emit!(InvoiceCreated {
        invoice: invoice.key(),
        id,
        recipient: invoice.recipient,
        amount,
        expires_at,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct CreateInvoice<'info> {
    #[account(
        init,
        payer = recipient,
        space = 8 + Invoice::INIT_SPACE,
        seeds = [INVOICE_SEED, id.as_ref()],
        bump,
    )]
    pub invoice: Account<'info, Invoice>,
    /// CHECK: may be uninitialized; loaded manually via `load_treasury` so
    /// a missing treasury surfaces `NoTreasury` rather than Anchor's
    /// generic account-loading error.
    #[account(
        mut,
        seeds = [TREASURY_SEED, recipient.key().as_ref()],
        bump,
    )]
    pub treasury: UncheckedAccount<'info>,
    #[account(mut)]
    pub recipient: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Pays a pending invoice in full. An invoice already past its deadline is
/// rejected here, but the `Expired` transition is never persisted by this
/// handler: returning `Err` rolls back every account write staged in the
/// same instruction, so a write-then-error here would never actually reach
/// the ledger. Persisting the transition is `expire_invoice`'s job — the
/// only way to commit it is a call that returns `Ok(())`.
pub fn pay_invoice(ctx: Context<PayInvoice>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let invoice = &mut ctx.accounts.invoice;
    require!(!invoice.is_terminal(), AgentEconError::NotPending);
    require!(now < invoice.expires_at, AgentEconError::Expired);

    let amount = invoice.amount;
    transfer_from_signer(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        amount,
    )?;

    invoice.status = InvoiceStatus::Paid;
    invoice.paid_at = Some(now);
    invoice.payer = Some(ctx.accounts.payer.key());

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_received += amount;
    treasury.pending_invoices = treasury.pending_invoices.saturating_sub(1);

    emit!(InvoicePaid {
        invoice: invoice.key(),
        payer: ctx.accounts.payer.key(),
        recipient: invoice.recipient,
        amount,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PayInvoice<'info> {
    #[account(mut)]
    pub invoice: Account<'info, Invoice>,
    #[account(
        mut,
        seeds = [TREASURY_SEED, invoice.recipient.as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
    #[account(mut)]
    pub payer: Signer<'info>,
    /// CHECK: must equal `invoice.recipient`; checked below.
    #[account(mut, address = invoice.recipient @ AgentEconError::AddressMismatch)]
    pub recipient: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

/// Cancels a pending invoice. Only the recipient may cancel.
pub fn cancel_invoice(ctx: Context<CancelInvoice>) -> Result<()> {
    let invoice = &mut ctx.accounts.invoice;
    require!(!invoice.is_terminal(), AgentEconError::NotPending);

    invoice.status = InvoiceStatus::Cancelled;
    ctx.accounts.treasury.pending_invoices =
        ctx.accounts.treasury.pending_invoices.saturating_sub(1);

    emit!(InvoiceCancelled {
        invoice: invoice.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelInvoice<'info> {
    #[account(mut, has_one = recipient @ AgentEconError::NotParty)]
    pub invoice: Account<'info, Invoice>,
    #[account(
        mut,
        seeds = [TREASURY_SEED, recipient.key().as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
    pub recipient: Signer<'info>,
}

/// Permissionlessly persists the `Pending -> Expired` transition for an
/// invoice whose deadline has passed. Spec §4.4 marks this observation as
/// optional and anytime-observable; this is the instruction that actually
/// commits it, since `pay_invoice` can only observe and reject, never
/// persist (see its doc comment). Any fee-paying signer may call it — there
/// is no value transfer and nothing here favors one party over another.
pub fn expire_invoice(ctx: Context<ExpireInvoice>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let invoice = &mut ctx.accounts.invoice;
    require!(!invoice.is_terminal(), AgentEconError::NotPending);
    require!(now >= invoice.expires_at, AgentEconError::NotYetExpired);

    invoice.status = InvoiceStatus::Expired;
    ctx.accounts.treasury.pending_invoices =
        ctx.accounts.treasury.pending_invoices.saturating_sub(1);

    emit!(InvoiceExpired {
        invoice: invoice.key(),
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ExpireInvoice<'info> {
    #[account(mut)]
    pub invoice: Account<'info, Invoice>,
    #[account(
        mut,
        seeds = [TREASURY_SEED, invoice.recipient.as_ref()],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
    pub caller: Signer<'info>,
}
