use crate::errors::AgentEconError;
use crate::state::Treasury;
use anchor_lang::prelude::*;

/// Recomputes `Pubkey::find_program_address(seeds, program_id)` for a tag +
/// ordered seed list and requires a stored address to match it exactly,
/// failing with `AddressMismatch` otherwise. `find_program_address` is
/// Solana's off-curve, deterministic address construction, so this is a thin
/// assertion helper rather than a custom derivation scheme.
pub fn require_derived(stored: &Pubkey, seeds: &[&[u8]], program_id: &Pubkey) -> Result<()> {
    let (expected, _bump) = Pubkey::find_program_address(seeds, program_id);
    require_keys_eq!(*stored, expected, AgentEconError::AddressMismatch);
    Ok(())
}

/// Loads a Treasury PDA that the caller asserts must already exist.
///
/// An `Account<'info, Treasury>` field in a `#[derive(Accounts)]` struct
/// would reject a never-initialized treasury too, but with Anchor's own
/// generic account-loading error (`AccountOwnedByWrongProgram` /
/// `AccountDiscriminatorNotFound`) — that check runs before any
/// handler-level `constraint =` clause ever gets a chance to report this
/// program's own `NoTreasury` variant. Entry points that need spec's
/// `NoTreasury` failure mode (`CreateInvoice`, `RegisterAgent`) instead take
/// the treasury as an `UncheckedAccount` and call this from the handler
/// body.
pub fn load_treasury<'info>(
    info: &AccountInfo<'info>,
    program_id: &Pubkey,
) -> Result<Account<'info, Treasury>> {
    require_keys_eq!(*info.owner, *program_id, AgentEconError::NoTreasury);
    Account::try_from(info).map_err(|_| error!(AgentEconError::NoTreasury))
}
