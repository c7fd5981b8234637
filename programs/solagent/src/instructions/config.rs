use crate::constants::CONFIG_SEED;
use crate::state::ProtocolConfig;
use anchor_lang::prelude::*;

/// Initializes the protocol-wide singleton once — an ambient anchor point
/// for protocol-level parameters, independent of any individual principal's
/// treasury or invoices.
pub fn initialize_protocol(ctx: Context<InitializeProtocol>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.bump = ctx.bumps.config;
    config.initialized_at = Clock::get()?.unix_timestamp;
    msg!("agent_econ protocol initialized, authority {}", config.authority);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + ProtocolConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, ProtocolConfig>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}
