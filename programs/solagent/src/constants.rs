/// Seed prefixes for every derived account class.
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const INVOICE_SEED: &[u8] = b"invoice";
pub const BATCH_SEED: &[u8] = b"batch";
pub const AGENT_SEED: &[u8] = b"agent";
pub const REQUEST_SEED: &[u8] = b"request";
pub const REQUEST_ESCROW_SEED: &[u8] = b"request_escrow";
pub const DISPUTE_SEED: &[u8] = b"dispute";
pub const STREAM_SEED: &[u8] = b"stream";
pub const STREAM_VAULT_SEED: &[u8] = b"stream_vault";
pub const CONFIG_SEED: &[u8] = b"config";

/// Maximum invoices a single `SettleBatch` call may reconcile.
pub const MAX_BATCH: usize = 50;

/// Default dispute window, in seconds, from `ServiceRequest.created_at`.
pub const DISPUTE_WINDOW_SECONDS: i64 = 86_400;

/// Field size caps for invoice memos and agent profile fields.
pub const MAX_MEMO_LEN: usize = 256;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_CAPABILITY_LEN: usize = 32;
pub const MAX_CAPABILITIES: usize = 10;
pub const MAX_BATCH_IDS_SPACE: usize = MAX_BATCH;
