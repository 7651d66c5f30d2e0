#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod contribution_ledger;
pub mod errors;
pub mod events;
pub mod film_auction_proxy;
pub mod round_registry;
pub mod types;

use types::AuctionRound;

// ============================================================
// Constants
// ============================================================

/// Shortest allowed round window: 24 hours in seconds
pub const MIN_AUCTION_LENGTH: u64 = 86_400;

/// A round must be announced at least this long before it opens: 1 hour
pub const MIN_AUCTION_LEAD_TIME: u64 = 3_600;

/// `maximum_wei` must be at least this multiple of `minimum_wei`
pub const OWNER_FACTOR: u64 = 10;

// ============================================================
// Contract
// ============================================================

/// Sequential, non-overlapping fundraising rounds with a per-round cap
/// and a per-contributor cap. Whatever a contribution offers beyond
/// either cap is refunded in the same transaction.
#[multiversx_sc::contract]
pub trait FilmAuction:
    config::ConfigModule
    + round_registry::RoundRegistryModule
    + contribution_ledger::ContributionLedgerModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the creator: the only address allowed to open
    /// rounds, change limits and collect round funds.
    #[init]
    fn init(&self, max_contribution: BigUint, max_gas_price: u64) {
        let creator = self.blockchain().get_caller();
        self.creator().set(&creator);
        self.max_contribution().set(&max_contribution);
        self.max_gas_price().set(max_gas_price);
        self.push_sentinel_round();
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// Every round after the sentinel, oldest first.
    #[view(getRounds)]
    fn get_rounds(&self) -> MultiValueEncoded<AuctionRound<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for round in self.rounds().iter().skip(1) {
            result.push(round);
        }
        result
    }
}
