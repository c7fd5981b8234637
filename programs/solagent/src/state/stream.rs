use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum StreamStatus {
    Active,
    Cancelled,
    Completed,
}

/// Linear-rate release with pause/resume/cancel and pull-based withdrawal.
/// Backed by a bare PDA vault (`derive("stream_vault",
/// stream_id)`, bump cached here) holding `total_amount - withdrawn_amount`
/// lamports at any instant the stream is Active and unpaused.
#[account]
#[derive(InitSpace)]
pub struct PaymentStream {
    pub id: [u8; 32],
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub total_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub withdrawn_amount: u64,
    pub is_paused: bool,
    pub paused_at: Option<i64>,
    pub status: StreamStatus,
    pub bump: u8,
    pub vault_bump: u8,
}

impl PaymentStream {
    /// Linear rate in base units per second, integer division. The duration
    /// is guaranteed positive at creation time (`BadStreamWindow` rejects
    /// `end_time <= start_time`).
    pub fn rate_per_second(&self) -> u64 {
        let duration = (self.end_time - self.start_time) as u64;
        self.total_amount / duration
    }

    /// Available balance at time `t`:
    ///
    /// ```text
    /// if paused or status != Active: 0
    /// elif t < start_time: 0
    /// else: rate * (min(t, end_time) - start_time) - withdrawn_amount
    /// ```
    ///
    /// One case needs to deviate from the literal "status != Active => 0"
    /// reading: `Cancel` refunds the sender `total - withdrawn - available`
    /// at cancellation time and leaves `available` itself claimable by the
    /// recipient until a follow-up withdrawal. `cancel_stream` folds that
    /// refund into `withdrawn_amount` as it pays it out, so
    /// `total_amount - withdrawn_amount` is exactly the frozen `available`
    /// snapshot left in the vault — a Cancelled stream reports it in full
    /// rather than falling through to 0, and a follow-up withdrawal never
    /// asks the vault for more than it physically holds.
    ///
    /// The Active-branch result is clamped so the final withdrawal never
    /// pays out more than `total_amount - withdrawn_amount` — the last
    /// withdrawal absorbs the integer-division remainder rather than under-
    /// or over-paying.
    pub fn available(&self, t: i64) -> u64 {
        if self.status == StreamStatus::Cancelled {
            return self.total_amount.saturating_sub(self.withdrawn_amount);
        }
        if self.is_paused || self.status != StreamStatus::Active {
            return 0;
        }
        if t < self.start_time {
            return 0;
        }
        let elapsed = (t.min(self.end_time) - self.start_time) as u64;
        let accrued = self.rate_per_second().saturating_mul(elapsed);
        let remaining = self.total_amount.saturating_sub(self.withdrawn_amount);
        if t >= self.end_time {
            // fully elapsed: the whole remainder is claimable, absorbing
            // the truncation the per-second rate left on the table.
            remaining
        } else {
            accrued.saturating_sub(self.withdrawn_amount).min(remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(total: u64, start: i64, end: i64) -> PaymentStream {
        PaymentStream {
            id: [0u8; 32],
            sender: Pubkey::default(),
            recipient: Pubkey::default(),
            total_amount: total,
            start_time: start,
            end_time: end,
            withdrawn_amount: 0,
            is_paused: false,
            paused_at: None,
            status: StreamStatus::Active,
            bump: 0,
            vault_bump: 0,
        }
    }

    #[test]
    fn available_is_zero_before_start() {
        let s = stream(1_000, 100, 200);
        assert_eq!(s.available(50), 0);
    }

    #[test]
    fn available_accrues_linearly() {
        let s = stream(1_000, 0, 100);
        assert_eq!(s.rate_per_second(), 10);
        assert_eq!(s.available(10), 100);
        assert_eq!(s.available(50), 500);
    }

    #[test]
    fn available_absorbs_remainder_at_end() {
        // 1_000 / 300 = 3 (rate), leaving 1_000 - 3*300 = 100 base units
        // that would otherwise never be claimable.
        let s = stream(1_000, 0, 300);
        assert_eq!(s.rate_per_second(), 3);
        assert_eq!(s.available(300), 1_000);
        assert_eq!(s.available(1_000), 1_000);
    }

    #[test]
    fn available_is_zero_when_paused() {
        let mut s = stream(1_000, 0, 100);
        s.is_paused = true;
        assert_eq!(s.available(50), 0);
    }

    #[test]
    fn available_is_zero_when_completed() {
        let mut s = stream(1_000, 0, 100);
        s.status = StreamStatus::Completed;
        assert_eq!(s.available(50), 0);
    }

    #[test]
    fn available_nets_out_prior_withdrawals() {
        let mut s = stream(1_000, 0, 100);
        s.withdrawn_amount = 300;
        assert_eq!(s.available(50), 500 - 300);
    }

    #[test]
    fn cancelled_stream_leaves_frozen_amount_claimable() {
        let mut s = stream(1_000, 0, 100);
        s.withdrawn_amount = 400;
        s.status = StreamStatus::Cancelled;
        // whatever is left in the vault after the sender's refund remains
        // fully claimable by the recipient, independent of `t`.
        assert_eq!(s.available(0), 600);
        assert_eq!(s.available(9_999), 600);
    }
}
