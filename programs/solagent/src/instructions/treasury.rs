use crate::constants::TREASURY_SEED;
use crate::events::TreasuryInitialized;
use crate::state::Treasury;
use anchor_lang::prelude::*;

/// Creates a zeroed accounting record for `owner`, once per owner.
pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.owner = ctx.accounts.owner.key();
    treasury.bump = ctx.bumps.treasury;
    treasury.total_received = 0;
    treasury.total_settled = 0;
    treasury.pending_invoices = 0;
    treasury.created_at = Clock::get()?.unix_timestamp;

    msg!("treasury initialized for {}", treasury.owner);
    emit!(TreasuryInitialized {
        treasury: treasury.key(),
        owner: treasury.owner,
        timestamp: treasury.created_at,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [TREASURY_SEED, owner.key().as_ref()],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}
