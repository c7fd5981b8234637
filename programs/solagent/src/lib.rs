use anchor_lang::prelude::*;

pub mod constants;
pub mod derive;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod transfer;

use instructions::*;
use state::Resolution;

declare_id!("AgEcon1111111111111111111111111111111111111");

/// Agent Economy Treasury Protocol
///
/// On-chain state machine for four instrument classes shared by autonomous
/// service agents: per-principal treasuries, time-bound invoices, atomic
/// batch settlements, and an escrowed request/deliver/dispute lifecycle
/// backed by a capability registry. A linear-rate payment stream rounds out
/// the escrow primitives for continuous, pull-based payouts.
///
/// Every entry point below is all-or-nothing: a failed `require!` anywhere
/// rolls back every write and value transfer already staged in that call.
#[program]
pub mod agent_econ {
    use super::*;

    // ----------------------------------------------------------------
    // Protocol config
    // ----------------------------------------------------------------

    pub fn initialize_protocol(ctx: Context<InitializeProtocol>) -> Result<()> {
        instructions::config::initialize_protocol(ctx)
    }

    // ----------------------------------------------------------------
    // Treasury subsystem
    // ----------------------------------------------------------------

    pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
        instructions::treasury::initialize_treasury(ctx)
    }

    // ----------------------------------------------------------------
    // Invoice subsystem
    // ----------------------------------------------------------------

    pub fn create_invoice(
        ctx: Context<CreateInvoice>,
        id: [u8; 32],
        amount: u64,
        memo: String,
        expires_at: i64,
    ) -> Result<()> {
        instructions::invoice::create_invoice(ctx, id, amount, memo, expires_at)
    }

    pub fn pay_invoice(ctx: Context<PayInvoice>) -> Result<()> {
        instructions::invoice::pay_invoice(ctx)
    }

    pub fn cancel_invoice(ctx: Context<CancelInvoice>) -> Result<()> {
        instructions::invoice::cancel_invoice(ctx)
    }

    pub fn expire_invoice(ctx: Context<ExpireInvoice>) -> Result<()> {
        instructions::invoice::expire_invoice(ctx)
    }

    // ----------------------------------------------------------------
    // Batch subsystem
    // ----------------------------------------------------------------

    pub fn settle_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, SettleBatch<'info>>,
        batch_id: [u8; 32],
        invoice_ids: Vec<[u8; 32]>,
        claimed_total: u64,
    ) -> Result<()> {
        instructions::batch::settle_batch(ctx, batch_id, invoice_ids, claimed_total)
    }

    // ----------------------------------------------------------------
    // Registry subsystem
    // ----------------------------------------------------------------

    pub fn register_agent(
        ctx: Context<RegisterAgent>,
        name: String,
        description: String,
        capabilities: Vec<String>,
        base_price: u64,
    ) -> Result<()> {
        instructions::registry::register_agent(ctx, name, description, capabilities, base_price)
    }

    pub fn update_profile(
        ctx: Context<UpdateProfile>,
        name: Option<String>,
        description: Option<String>,
        capabilities: Option<Vec<String>>,
        base_price: Option<u64>,
        is_active: Option<bool>,
    ) -> Result<()> {
        instructions::registry::update_profile(
            ctx,
            name,
            description,
            capabilities,
            base_price,
            is_active,
        )
    }

    // ----------------------------------------------------------------
    // Service request subsystem
    // ----------------------------------------------------------------

    pub fn request_service(
        ctx: Context<RequestService>,
        id: [u8; 32],
        capability: String,
        amount: u64,
        arbiter: Option<Pubkey>,
    ) -> Result<()> {
        instructions::request::request_service(ctx, id, capability, amount, arbiter)
    }

    pub fn complete_service(ctx: Context<CompleteService>, result_hash: [u8; 32]) -> Result<()> {
        instructions::request::complete_service(ctx, result_hash)
    }

    // ----------------------------------------------------------------
    // Dispute subsystem
    // ----------------------------------------------------------------

    pub fn initiate_dispute(ctx: Context<InitiateDispute>) -> Result<()> {
        instructions::dispute::initiate_dispute(ctx)
    }

    pub fn resolve_dispute(ctx: Context<ResolveDispute>, resolution: Resolution) -> Result<()> {
        instructions::dispute::resolve_dispute(ctx, resolution)
    }

    // ----------------------------------------------------------------
    // Streaming subsystem
    // ----------------------------------------------------------------

    pub fn create_stream(
        ctx: Context<CreateStream>,
        id: [u8; 32],
        total_amount: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::stream::create_stream(ctx, id, total_amount, start_time, end_time)
    }

    pub fn withdraw_stream(ctx: Context<WithdrawStream>) -> Result<()> {
        instructions::stream::withdraw_stream(ctx)
    }

    pub fn pause_stream(ctx: Context<PauseStream>) -> Result<()> {
        instructions::stream::pause_stream(ctx)
    }

    pub fn resume_stream(ctx: Context<ResumeStream>) -> Result<()> {
        instructions::stream::resume_stream(ctx)
    }

    pub fn cancel_stream(ctx: Context<CancelStream>) -> Result<()> {
        instructions::stream::cancel_stream(ctx)
    }
}
