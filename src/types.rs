multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Round Status — derived from the clock, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum RoundStatus {
    /// `now < start_time`
    NotStarted,
    /// `start_time <= now <= end_time`
    Active,
    /// `now > end_time`. Checked first, so a window lying entirely
    /// in the past always reports Ended.
    Ended,
}

impl RoundStatus {
    pub fn at(start_time: u64, end_time: u64, now: u64) -> Self {
        if now > end_time {
            RoundStatus::Ended
        } else if now < start_time {
            RoundStatus::NotStarted
        } else {
            RoundStatus::Active
        }
    }
}

// ============================================================
// Auction Round — one time-boxed fundraising window
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AuctionRound<M: ManagedTypeApi> {
    /// Target floor. Only checked at creation, never against contributions.
    pub minimum_wei: BigUint<M>,
    /// Hard cap on cumulative accepted value.
    pub maximum_wei: BigUint<M>,
    pub start_time: u64,
    pub end_time: u64,
    /// Cumulative accepted value, never above `maximum_wei`.
    pub actual_wei: BigUint<M>,
}

impl<M: ManagedTypeApi> AuctionRound<M> {
    pub fn new(
        minimum_wei: BigUint<M>,
        maximum_wei: BigUint<M>,
        start_time: u64,
        end_time: u64,
    ) -> Self {
        AuctionRound {
            minimum_wei,
            maximum_wei,
            start_time,
            end_time,
            actual_wei: BigUint::zero(),
        }
    }

    /// Index 0 of the round sequence. Its window is already over, so
    /// contributing to it before any real round exists reports "ended".
    pub fn sentinel() -> Self {
        Self::new(BigUint::zero(), BigUint::zero(), 0, 0)
    }

    pub fn status(&self, now: u64) -> RoundStatus {
        RoundStatus::at(self.start_time, self.end_time, now)
    }

    /// Capacity left under `maximum_wei`.
    pub fn remaining(&self) -> BigUint<M> {
        remaining_capacity(&self.maximum_wei, &self.actual_wei)
    }
}

/// `ceiling - used`, floored at zero.
pub fn remaining_capacity<M: ManagedTypeApi>(ceiling: &BigUint<M>, used: &BigUint<M>) -> BigUint<M> {
    if used >= ceiling {
        BigUint::zero()
    } else {
        ceiling - used
    }
}
