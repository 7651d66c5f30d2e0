multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{AuctionRound, RoundStatus};
use crate::{MIN_AUCTION_LEAD_TIME, MIN_AUCTION_LENGTH, OWNER_FACTOR};

/// Timing and target-amount rules for a new round, in reporting order.
/// The creator check runs before this and the overlap check after it.
pub fn validate_round_request<M: ManagedTypeApi>(
    minimum_wei: &BigUint<M>,
    maximum_wei: &BigUint<M>,
    start_time: u64,
    end_time: u64,
    now: u64,
) -> Result<(), &'static str> {
    if end_time <= start_time {
        return Err(ERR_INVALID_TIMING);
    }
    if end_time - start_time < MIN_AUCTION_LENGTH {
        return Err(ERR_INVALID_AUCTION_LENGTH);
    }
    if start_time <= now {
        return Err(ERR_START_IN_PAST);
    }
    if start_time - now < MIN_AUCTION_LEAD_TIME {
        return Err(ERR_LEAD_TIME_TOO_SHORT);
    }
    if minimum_wei >= maximum_wei {
        return Err(ERR_INVALID_TARGET_AMOUNTS);
    }
    let floor = minimum_wei * OWNER_FACTOR;
    if maximum_wei < &floor {
        return Err(ERR_INVALID_MIN_WEI);
    }
    Ok(())
}

/// Only the most recently appended round is consulted. Rounds are assumed
/// to be created in chronological order.
pub fn check_no_overlap(start_time: u64, last_end_time: u64) -> Result<(), &'static str> {
    if start_time < last_end_time {
        return Err(ERR_AUCTION_OVERLAP);
    }
    Ok(())
}

#[multiversx_sc::module]
pub trait RoundRegistryModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: createAuctionRound
    // ========================================================

    #[endpoint(createAuctionRound)]
    fn create_auction_round(
        &self,
        minimum_wei: BigUint,
        maximum_wei: BigUint,
        start_time: u64,
        end_time: u64,
    ) -> usize {
        self.require_creator();

        let now = self.blockchain().get_block_timestamp();
        if let Err(reason) =
            validate_round_request(&minimum_wei, &maximum_wei, start_time, end_time, now)
        {
            sc_panic!(reason);
        }

        let last_round = self.latest_round();
        if let Err(reason) = check_no_overlap(start_time, last_round.end_time) {
            sc_panic!(reason);
        }

        let round = AuctionRound::new(minimum_wei, maximum_wei, start_time, end_time);
        self.rounds().push(&round);

        let round_index = self.get_round_count() - 1;
        self.round_created_event(round_index, start_time, end_time, &round.maximum_wei);

        round_index
    }

    // ========================================================
    // INTERNAL: round access
    // ========================================================

    /// Appends the sentinel at index 0. Called once from `init`.
    fn push_sentinel_round(&self) {
        if self.rounds().is_empty() {
            self.rounds().push(&AuctionRound::sentinel());
        }
    }

    fn require_valid_round_index(&self, round_index: usize) {
        require!(round_index < self.rounds().len(), ERR_INVALID_ROUND_INDEX);
    }

    // VecMapper positions start at 1; round indices start at 0.
    fn load_round(&self, round_index: usize) -> AuctionRound<Self::Api> {
        self.require_valid_round_index(round_index);
        self.rounds().get(round_index + 1)
    }

    fn store_round(&self, round_index: usize, round: &AuctionRound<Self::Api>) {
        self.rounds().set(round_index + 1, round);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(latestRound)]
    fn latest_round(&self) -> AuctionRound<Self::Api> {
        let count = self.get_round_count();
        require!(count > 0, ERR_INVALID_ROUND_INDEX);
        self.load_round(count - 1)
    }

    #[view(getRound)]
    fn get_round(&self, round_index: usize) -> AuctionRound<Self::Api> {
        self.load_round(round_index)
    }

    /// Includes the sentinel round.
    #[view(getRoundCount)]
    fn get_round_count(&self) -> usize {
        self.rounds().len()
    }

    #[view(getRoundStatus)]
    fn get_round_status(&self, round_index: usize) -> RoundStatus {
        let now = self.blockchain().get_block_timestamp();
        self.load_round(round_index).status(now)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("rounds")]
    fn rounds(&self) -> VecMapper<AuctionRound<Self::Api>>;
}
