use crate::errors::AgentEconError;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Signer wallet → signer wallet or PDA, via a System Program CPI. Used
/// whenever the source is a `Signer` (e.g. `PayInvoice`'s payer,
/// `RequestService`'s requester funding escrow).
pub fn transfer_from_signer<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(from.lamports() >= amount, AgentEconError::Insufficient);
    system_program::transfer(
        CpiContext::new(system_program, system_program::Transfer { from, to }),
        amount,
    )
}

/// PDA vault → any account, via a System Program CPI signed with the PDA's
/// own seeds. Used whenever the source is a bare program-derived vault that
/// cannot sign for itself (request escrow, stream vault) — the standard
/// Anchor mechanism for a program authorizing a transfer out of a PDA it
/// controls, rather than mutating the vault's lamports by hand.
pub fn transfer_from_vault<'info>(
    system_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    require!(vault.lamports() >= amount, AgentEconError::Insufficient);
    system_program::transfer(
        CpiContext::new_with_signer(system_program, system_program::Transfer { from: vault, to }, &[vault_seeds]),
        amount,
    )
}
