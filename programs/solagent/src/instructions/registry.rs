use crate::constants::{
    AGENT_SEED, MAX_CAPABILITIES, MAX_CAPABILITY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
    TREASURY_SEED,
};
use crate::derive::load_treasury;
use crate::errors::AgentEconError;
use crate::events::{AgentRegistered, ProfileUpdated};
use crate::state::{canonicalize_capabilities, AgentProfile};
use anchor_lang::prelude::*;

/// Registers a new capability-advertising profile for an owner who already
/// holds a treasury.
pub fn register_agent(
    ctx: Context<RegisterAgent>,
    name: String,
    description: String,
    capabilities: Vec<String>,
    base_price: u64,
) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, AgentEconError::NameTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        AgentEconError::DescriptionTooLong
    );
    require!(
        capabilities.len() <= MAX_CAPABILITIES,
        AgentEconError::CapabilityListTooLarge
    );
    for cap in &capabilities {
        require!(cap.len() <= MAX_CAPABILITY_LEN, AgentEconError::CapabilityListTooLarge);
    }

    load_treasury(&ctx.accounts.treasury.to_account_info(), ctx.program_id)?;

    let capabilities = canonicalize_capabilities(capabilities);
    let now = Clock::get()?.unix_timestamp;

    let agent = &mut ctx.accounts.agent;
    agent.owner = ctx.accounts.owner.key();
    agent.treasury = ctx.accounts.treasury.key();
    agent.bump = ctx.bumps.agent;
    agent.name = name.clone();
    agent.description = description;
    agent.capabilities = capabilities;
    agent.base_price = base_price;
    agent.is_active = true;
    agent.total_requests = 0;
    agent.total_earnings = 0;
    agent.registered_at = now;
    agent.last_active_at = now;

    emit!(AgentRegistered {
        agent: agent.key(),
        owner: agent.owner,
        name,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + AgentProfile::INIT_SPACE,
        seeds = [AGENT_SEED, owner.key().as_ref()],
        bump,
    )]
    pub agent: Account<'info, AgentProfile>,
    /// CHECK: may be uninitialized; loaded manually via `load_treasury` so
    /// a missing treasury surfaces `NoTreasury` rather than Anchor's
    /// generic account-loading error.
    #[account(seeds = [TREASURY_SEED, owner.key().as_ref()], bump)]
    pub treasury: UncheckedAccount<'info>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Updates a profile's `name`, `description`, `capabilities`, `base_price`,
/// and `is_active` fields. Each is wrapped in `Option` so a call can touch
/// any subset without clobbering the rest.
pub fn update_profile(
    ctx: Context<UpdateProfile>,
    name: Option<String>,
    description: Option<String>,
    capabilities: Option<Vec<String>>,
    base_price: Option<u64>,
    is_active: Option<bool>,
) -> Result<()> {
    let agent = &mut ctx.accounts.agent;

    if let Some(name) = name {
        require!(name.len() <= MAX_NAME_LEN, AgentEconError::NameTooLong);
        agent.name = name;
    }
    if let Some(description) = description {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            AgentEconError::DescriptionTooLong
        );
        agent.description = description;
    }
    if let Some(capabilities) = capabilities {
        require!(
            capabilities.len() <= MAX_CAPABILITIES,
            AgentEconError::CapabilityListTooLarge
        );
        for cap in &capabilities {
            require!(
                cap.len() <= MAX_CAPABILITY_LEN,
                AgentEconError::CapabilityListTooLarge
            );
        }
        agent.capabilities = canonicalize_capabilities(capabilities);
    }
    if let Some(base_price) = base_price {
        agent.base_price = base_price;
    }
    if let Some(is_active) = is_active {
        agent.is_active = is_active;
    }
    agent.last_active_at = Clock::get()?.unix_timestamp;

    emit!(ProfileUpdated {
        agent: agent.key(),
        timestamp: agent.last_active_at,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    #[account(mut, has_one = owner @ AgentEconError::NotParty)]
    pub agent: Account<'info, AgentProfile>,
    pub owner: Signer<'info>,
}
