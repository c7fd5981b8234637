use anchor_lang::prelude::*;

/// Protocol-wide singleton. Carries the one thing this program needs at the
/// protocol level today (an upgrade authority anchor point) — no fee
/// schedule, no global counters.
#[account]
#[derive(InitSpace)]
pub struct ProtocolConfig {
    pub authority: Pubkey,
    pub bump: u8,
    pub initialized_at: i64,
}
