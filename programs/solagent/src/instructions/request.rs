use crate::constants::{AGENT_SEED, REQUEST_ESCROW_SEED, REQUEST_SEED, TREASURY_SEED};
use crate::errors::AgentEconError;
use crate::events::{ServiceCompleted, ServiceRequested};
use crate::state::{AgentProfile, RequestStatus, ServiceRequest, Treasury};
use crate::transfer::{transfer_from_signer, transfer_from_vault};
use anchor_lang::prelude::*;

/// Opens a new service request against an active provider profile and
/// escrows the requester's payment up front.
pub fn request_service(
    ctx: Context<RequestService>,
    id: [u8; 32],
    capability: String,
    amount: u64,
    arbiter: Option<Pubkey>,
) -> Result<()> {
    let provider_profile = &ctx.accounts.provider_profile;
    require!(provider_profile.is_active, AgentEconError::ProviderInactive);
    require!(
        provider_profile.offers(&capability),
        AgentEconError::UnknownCapability
    );
    require!(
        amount >= provider_profile.base_price,
        AgentEconError::PriceBelowMinimum
    );

    let now = Clock::get()?.unix_timestamp;
    let request = &mut ctx.accounts.request;
    request.id = id;
    request.requester = ctx.accounts.requester.key();
    request.provider = provider_profile.owner;
    request.capability = capability.clone();
    request.amount = amount;
    request.status = RequestStatus::Pending;
    request.created_at = now;
    request.completed_at = None;
    request.result_hash = None;
    request.arbiter = arbiter;
    request.bump = ctx.bumps.request;
    request.escrow_bump = ctx.bumps.escrow;

    transfer_from_signer(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.requester.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        amount,
    )?;

    emit!(ServiceRequested {
        request: request.key(),
        requester: request.requester,
        provider: request.provider,
        capability,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(id: [u8; 32])]
pub struct RequestService<'info> {
    #[account(
        init,
        payer = requester,
        space = 8 + ServiceRequest::INIT_SPACE,
        seeds = [REQUEST_SEED, id.as_ref()],
        bump,
    )]
    pub request: Account<'info, ServiceRequest>,
    /// CHECK: bare value-holding PDA, funded here, drained by
    /// `complete_service`/`resolve_dispute`.
    #[account(mut, seeds = [REQUEST_ESCROW_SEED, id.as_ref()], bump)]
    pub escrow: UncheckedAccount<'info>,
    #[account(
        seeds = [AGENT_SEED, provider_profile.owner.as_ref()],
        bump = provider_profile.bump,
    )]
    pub provider_profile: Account<'info, AgentProfile>,
    #[account(mut)]
    pub requester: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Releases a request's escrow to the provider once work is delivered.
pub fn complete_service(ctx: Context<CompleteService>, result_hash: [u8; 32]) -> Result<()> {
    let request = &mut ctx.accounts.request;
    require!(
        request.provider == ctx.accounts.provider.key(),
        AgentEconError::NotParty
    );
    require!(request.is_open_for_dispute(), AgentEconError::AlreadyTerminal);

    // AgentProfile.treasury is a cached convenience field; re-derive it so a
    // stale or tampered cache can never point completion's payout bookkeeping
    // at the wrong treasury record.
    crate::derive::require_derived(
        &ctx.accounts.provider_profile.treasury,
        &[TREASURY_SEED, ctx.accounts.provider.key.as_ref()],
        ctx.program_id,
    )?;
    require_keys_eq!(
        ctx.accounts.provider_profile.treasury,
        ctx.accounts.provider_treasury.key(),
        AgentEconError::AddressMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let amount = request.amount;
    let request_id = request.id;

    transfer_from_vault(
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        ctx.accounts.provider.to_account_info(),
        amount,
        &[REQUEST_ESCROW_SEED, request_id.as_ref(), &[request.escrow_bump]],
    )?;

    request.status = RequestStatus::Completed;
    request.completed_at = Some(now);
    request.result_hash = Some(result_hash);

    let treasury = &mut ctx.accounts.provider_treasury;
    treasury.total_received += amount;

    let profile = &mut ctx.accounts.provider_profile;
    profile.total_requests += 1;
    profile.total_earnings += amount;
    profile.last_active_at = now;

    emit!(ServiceCompleted {
        request: request.key(),
        provider: ctx.accounts.provider.key(),
        amount,
        result_hash,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CompleteService<'info> {
    #[account(mut)]
    pub request: Account<'info, ServiceRequest>,
    /// CHECK: value-holding PDA drained to `provider` below.
    #[account(mut, seeds = [REQUEST_ESCROW_SEED, request.id.as_ref()], bump = request.escrow_bump)]
    pub escrow: UncheckedAccount<'info>,
    #[account(
        mut,
        seeds = [AGENT_SEED, provider.key().as_ref()],
        bump = provider_profile.bump,
    )]
    pub provider_profile: Account<'info, AgentProfile>,
    #[account(
        mut,
        seeds = [TREASURY_SEED, provider.key().as_ref()],
        bump = provider_treasury.bump,
    )]
    pub provider_treasury: Account<'info, Treasury>,
    #[account(mut)]
    pub provider: Signer<'info>,
    pub system_program: Program<'info, System>,
}
