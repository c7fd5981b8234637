use crate::constants::{STREAM_SEED, STREAM_VAULT_SEED};
use crate::errors::AgentEconError;
use crate::events::{
    StreamCancelled, StreamCompleted, StreamCreated, StreamPaused, StreamResumed, StreamWithdrawn,
};
use crate::state::{PaymentStream, StreamStatus};
use crate::transfer::{transfer_from_signer, transfer_from_vault};
use anchor_lang::prelude::*;

/// Opens a linear-rate payment stream and funds its vault up front.
pub fn create_stream(
    ctx: Context<CreateStream>,
    id: [u8; 32],
    total_amount: u64,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    require!(total_amount > 0, AgentEconError::BadAmount);
    require!(end_time > start_time, AgentEconError::BadStreamWindow);

    let stream = &mut ctx.accounts.stream;
    stream.id = id;
    stream.sender = ctx.accounts.sender.key();
    stream.recipient = ctx.accounts.recipient.key();
    stream.total_amount = total_amount;
    stream.start_time = start_time;
    stream.end_time = end_time;
    stream.withdrawn_amount = 0;
    stream.is_paused = false;
    stream.paused_at = None;
    stream.status = StreamStatus::Active;
    stream.bump = ctx.bumps.stream;
    stream.vault_bump = ctx.bumps.vault;

    transfer_from_signer(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.sender.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        total_amount,
    )?;

    emit!(StreamCreated {
        stream: stream.key(),
        sender: stream.sender,
        recipient: stream.recipient,
        total_amount,
        start_time,
        end_time,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct CreateStream<'info> {
    #[account(
        init,
        payer = sender,
        space = 8 + PaymentStream::INIT_SPACE,
        seeds = [STREAM_SEED, id.as_ref()],
        bump,
    )]
    pub stream: Account<'info, PaymentStream>,
    /// CHECK: bare value-holding PDA funded here.
    #[account(mut, seeds = [STREAM_VAULT_SEED, id.as_ref()], bump)]
    pub vault: UncheckedAccount<'info>,
    #[account(mut)]
    pub sender: Signer<'info>,
    /// CHECK: payment destination only.
    pub recipient: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

/// Pays out a stream's currently available balance to the recipient.
pub fn withdraw_stream(ctx: Context<WithdrawStream>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let stream = &mut ctx.accounts.stream;
    let amount = stream.available(now);
    require!(amount > 0, AgentEconError::NothingToWithdraw);

    let stream_id = stream.id;
    transfer_from_vault(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        amount,
        &[STREAM_VAULT_SEED, stream_id.as_ref(), &[stream.vault_bump]],
    )?;

    stream.withdrawn_amount += amount;
    if stream.withdrawn_amount >= stream.total_amount && stream.status == StreamStatus::Active {
        stream.status = StreamStatus::Completed;
        emit!(StreamCompleted {
            stream: stream.key(),
            timestamp: now,
        });
    }

    emit!(StreamWithdrawn {
        stream: stream.key(),
        amount,
        withdrawn_amount: stream.withdrawn_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawStream<'info> {
    #[account(mut, has_one = recipient @ AgentEconError::NotParty)]
    pub stream: Account<'info, PaymentStream>,
    /// CHECK: value-holding PDA drained to `recipient`.
    #[account(mut, seeds = [STREAM_VAULT_SEED, stream.id.as_ref()], bump = stream.vault_bump)]
    pub vault: UncheckedAccount<'info>,
    #[account(mut)]
    pub recipient: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Freezes accrual on an active stream. Sender-only.
pub fn pause_stream(ctx: Context<PauseStream>) -> Result<()> {
    let stream = &mut ctx.accounts.stream;
    require!(stream.status == StreamStatus::Active, AgentEconError::StreamNotActive);
    require!(!stream.is_paused, AgentEconError::StreamPaused);

    let now = Clock::get()?.unix_timestamp;
    stream.is_paused = true;
    stream.paused_at = Some(now);

    emit!(StreamPaused {
        stream: stream.key(),
        paused_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct PauseStream<'info> {
    #[account(mut, has_one = sender @ AgentEconError::NotParty)]
    pub stream: Account<'info, PaymentStream>,
    pub sender: Signer<'info>,
}

/// Resumes a paused stream. Sender-only; shifts `end_time` by the pause duration so
/// the recipient's total entitlement is unaffected by the pause.
pub fn resume_stream(ctx: Context<ResumeStream>) -> Result<()> {
    let stream = &mut ctx.accounts.stream;
    require!(stream.status == StreamStatus::Active, AgentEconError::StreamNotActive);
    let paused_at = stream.paused_at.ok_or(AgentEconError::StreamNotPaused)?;

    let now = Clock::get()?.unix_timestamp;
    let pause_duration = now - paused_at;
    stream.end_time += pause_duration;
    stream.is_paused = false;
    stream.paused_at = None;

    emit!(StreamResumed {
        stream: stream.key(),
        new_end_time: stream.end_time,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ResumeStream<'info> {
    #[account(mut, has_one = sender @ AgentEconError::NotParty)]
    pub stream: Account<'info, PaymentStream>,
    pub sender: Signer<'info>,
}

/// Cancels an active stream. Sender-only; refunds `total - withdrawn - available` to
/// the sender and leaves `available` claimable by the recipient (see
/// `PaymentStream::available`'s Cancelled branch).
pub fn cancel_stream(ctx: Context<CancelStream>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let stream = &mut ctx.accounts.stream;
    require!(stream.status == StreamStatus::Active, AgentEconError::StreamNotActive);

    let available = stream.available(now);
    let remaining = stream.total_amount.saturating_sub(stream.withdrawn_amount);
    let refund = remaining.saturating_sub(available);

    let stream_id = stream.id;
    if refund > 0 {
        transfer_from_vault(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.sender.to_account_info(),
            refund,
            &[STREAM_VAULT_SEED, stream_id.as_ref(), &[stream.vault_bump]],
        )?;
    }

    // The vault now physically holds only `available` lamports
    // (`remaining - refund`). Folding `refund` into `withdrawn_amount` keeps
    // `available()`'s Cancelled-branch formula (`total_amount -
    // withdrawn_amount`) in sync with the vault's real balance, so a
    // follow-up `withdraw_stream` never asks the vault for more than it has.
    stream.withdrawn_amount += refund;
    stream.status = StreamStatus::Cancelled;

    emit!(StreamCancelled {
        stream: stream.key(),
        refunded_to_sender: refund,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelStream<'info> {
    #[account(mut, has_one = sender @ AgentEconError::NotParty)]
    pub stream: Account<'info, PaymentStream>,
    /// CHECK: value-holding PDA, partially drained back to `sender`.
    #[account(mut, seeds = [STREAM_VAULT_SEED, stream.id.as_ref()], bump = stream.vault_bump)]
    pub vault: UncheckedAccount<'info>,
    #[account(mut)]
    pub sender: Signer<'info>,
    pub system_program: Program<'info, System>,
}
