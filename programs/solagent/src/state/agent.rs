use crate::constants::{MAX_CAPABILITIES, MAX_CAPABILITY_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use anchor_lang::prelude::*;

/// Agent profile + capability list + activity counters. `treasury` is
/// cached here for convenience but must always match
/// `derive("treasury", owner)` — checked against `AddressMismatch`
/// wherever it's read.
#[account]
#[derive(InitSpace)]
pub struct AgentProfile {
    pub owner: Pubkey,
    pub treasury: Pubkey,
    pub bump: u8,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    #[max_len(MAX_CAPABILITIES, MAX_CAPABILITY_LEN)]
    pub capabilities: Vec<String>,
    pub base_price: u64,
    pub is_active: bool,
    pub total_requests: u64,
    pub total_earnings: u64,
    pub registered_at: i64,
    pub last_active_at: i64,
}

impl AgentProfile {
    pub fn offers(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}

/// Order-preserving dedup of a capability list: the first occurrence of
/// each tag is kept, later duplicates dropped.
pub fn canonicalize_capabilities(caps: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(caps.len());
    let mut out = Vec::with_capacity(caps.len());
    for cap in caps {
        if seen.insert(cap.clone()) {
            out.push(cap);
        }
    }
    out
}
