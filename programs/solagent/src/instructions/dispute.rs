use crate::constants::{
    AGENT_SEED, DISPUTE_SEED, DISPUTE_WINDOW_SECONDS, REQUEST_ESCROW_SEED, REQUEST_SEED,
    TREASURY_SEED,
};
use crate::errors::AgentEconError;
use crate::events::{DisputeInitiated, DisputeResolved};
use crate::state::{AgentProfile, Dispute, RequestStatus, Resolution, ServiceRequest, Treasury};
use crate::transfer::transfer_from_vault;
use anchor_lang::prelude::*;

/// Opens a dispute over a still-open request. The window is checked against
/// `request.created_at`, never the dispute's own open time, so a party can't
/// extend their own filing deadline by waiting to initiate.
pub fn initiate_dispute(ctx: Context<InitiateDispute>) -> Result<()> {
    let request = &ctx.accounts.request;
    let signer = ctx.accounts.initiator.key();
    require!(
        signer == request.requester || signer == request.provider,
        AgentEconError::NotParty
    );
    require!(request.is_open_for_dispute(), AgentEconError::AlreadyDisputed);

    let now = Clock::get()?.unix_timestamp;
    require!(
        now - request.created_at <= DISPUTE_WINDOW_SECONDS,
        AgentEconError::WindowExpired
    );

    let dispute = &mut ctx.accounts.dispute;
    dispute.request_id = request.id;
    dispute.initiator = signer;
    dispute.opened_at = now;
    dispute.resolution = Resolution::Unresolved;
    dispute.resolved_at = None;
    dispute.window_seconds = DISPUTE_WINDOW_SECONDS;
    dispute.bump = ctx.bumps.dispute;

    ctx.accounts.request.status = RequestStatus::Disputed;

    emit!(DisputeInitiated {
        dispute: dispute.key(),
        request: ctx.accounts.request.key(),
        initiator: signer,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitiateDispute<'info> {
    #[account(
        init,
        payer = initiator,
        space = 8 + Dispute::INIT_SPACE,
        seeds = [DISPUTE_SEED, request.id.as_ref()],
        bump,
    )]
    pub dispute: Account<'info, Dispute>,
    #[account(mut)]
    pub request: Account<'info, ServiceRequest>,
    #[account(mut)]
    pub initiator: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Resolves an open dispute and splits the escrow accordingly.
/// `request.arbiter` decides authority when set; otherwise the party who
/// benefits from a given resolution may resolve it unilaterally
/// (provider for `PayProvider`/`Split`, requester for `RefundRequester`),
/// documented as a known weak point in `DESIGN.md`.
pub fn resolve_dispute(ctx: Context<ResolveDispute>, resolution: Resolution) -> Result<()> {
    let request = &ctx.accounts.request;
    require!(request.status == RequestStatus::Disputed, AgentEconError::NotDisputed);

    let signer = ctx.accounts.arbiter.key();
    match request.arbiter {
        Some(designated) => require!(signer == designated, AgentEconError::NotArbiter),
        None => match resolution {
            Resolution::PayProvider | Resolution::Split { .. } => {
                require!(signer == request.provider, AgentEconError::NotArbiter);
            }
            Resolution::RefundRequester => {
                require!(signer == request.requester, AgentEconError::NotArbiter);
            }
            Resolution::Unresolved => return err!(AgentEconError::NotArbiter),
        },
    }

    let amount = request.amount;
    let request_id = request.id;
    let escrow_bump = request.escrow_bump;
    let escrow_seeds: &[&[u8]] = &[REQUEST_ESCROW_SEED, request_id.as_ref(), &[escrow_bump]];

    let (provider_payout, requester_payout) = match resolution {
        Resolution::RefundRequester => (0u64, amount),
        Resolution::PayProvider => (amount, 0u64),
        Resolution::Split { numerator, denominator } => {
            require!(
                denominator > 0 && numerator > 0 && numerator < denominator,
                AgentEconError::BadSplitRatio
            );
            let provider_share = (amount as u128)
                .checked_mul(numerator as u128)
                .and_then(|v| v.checked_div(denominator as u128))
                .ok_or(AgentEconError::BadSplitRatio)? as u64;
            // Integer truncation favors the requester: any residual unit
            // from the floor division lands in `requester_payout` so
            // `provider_payout + requester_payout == amount` exactly.
            (provider_share, amount - provider_share)
        }
        Resolution::Unresolved => return err!(AgentEconError::BadSplitRatio),
    };

    if provider_payout > 0 {
        transfer_from_vault(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.escrow.to_account_info(),
            ctx.accounts.provider.to_account_info(),
            provider_payout,
            escrow_seeds,
        )?;
    }
    if requester_payout > 0 {
        transfer_from_vault(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.escrow.to_account_info(),
            ctx.accounts.requester.to_account_info(),
            requester_payout,
            escrow_seeds,
        )?;
    }

    let now = Clock::get()?.unix_timestamp;

    if provider_payout > 0 {
        let treasury = &mut ctx.accounts.provider_treasury;
        treasury.total_received += provider_payout;
        let profile = &mut ctx.accounts.provider_profile;
        profile.total_requests += 1;
        profile.total_earnings += provider_payout;
        profile.last_active_at = now;
    }

    let request = &mut ctx.accounts.request;
    request.status = match resolution {
        Resolution::RefundRequester => RequestStatus::Refunded,
        Resolution::PayProvider | Resolution::Split { .. } => RequestStatus::Completed,
        Resolution::Unresolved => unreachable!("rejected above"),
    };
    request.completed_at = Some(now);

    let dispute = &mut ctx.accounts.dispute;
    dispute.resolution = resolution;
    dispute.resolved_at = Some(now);

    emit!(DisputeResolved {
        dispute: dispute.key(),
        request: request.key(),
        arbiter: signer,
        provider_payout,
        requester_payout,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ResolveDispute<'info> {
    #[account(mut, seeds = [DISPUTE_SEED, request.id.as_ref()], bump = dispute.bump)]
    pub dispute: Account<'info, Dispute>,
    #[account(mut)]
    pub request: Account<'info, ServiceRequest>,
    /// CHECK: value-holding PDA drained between `requester` and `provider`.
    #[account(mut, seeds = [REQUEST_ESCROW_SEED, request.id.as_ref()], bump = request.escrow_bump)]
    pub escrow: UncheckedAccount<'info>,
    /// CHECK: must equal `request.requester`; checked in the handler via
    /// the payout logic and `address` constraint.
    #[account(mut, address = request.requester @ AgentEconError::AddressMismatch)]
    pub requester: UncheckedAccount<'info>,
    /// CHECK: must equal `request.provider`; checked via `address` below.
    #[account(mut, address = request.provider @ AgentEconError::AddressMismatch)]
    pub provider: UncheckedAccount<'info>,
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
    pub arbiter: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_truncation_favors_requester() {
        // amount=10, ratio=1/3 -> provider floor(10/3)=3, requester=7
        let amount: u128 = 10;
        let numerator: u128 = 1;
        let denominator: u128 = 3;
        let provider_share = (amount * numerator / denominator) as u64;
        let requester_share = amount as u64 - provider_share;
        assert_eq!(provider_share, 3);
        assert_eq!(requester_share, 7);
        assert_eq!(provider_share + requester_share, amount as u64);
    }
}
