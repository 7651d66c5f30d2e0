multiversx_sc::imports!();

use crate::errors::{ERR_GAS_PRICE_TOO_HIGH, ERR_NOT_CREATOR};
use crate::{MIN_AUCTION_LEAD_TIME, MIN_AUCTION_LENGTH, OWNER_FACTOR};

/// Creator identity and the process-wide limits shared by every round.
#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS — creator only
    // ========================================================

    /// Takes effect on the next contribution, including contributions
    /// to rounds that are already running.
    #[endpoint(setMaxContribution)]
    fn set_max_contribution(&self, new_ceiling: BigUint) {
        self.require_creator();
        self.max_contribution().set(&new_ceiling);
        self.max_contribution_changed_event(&new_ceiling);
    }

    #[endpoint(setMaxGasPrice)]
    fn set_max_gas_price(&self, new_ceiling: u64) {
        self.require_creator();
        self.max_gas_price().set(new_ceiling);
        self.max_gas_price_changed_event(new_ceiling);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_creator(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.creator().get(), ERR_NOT_CREATOR);
    }

    /// The VM does not expose the transaction gas price, so the caller
    /// declares it. An undeclared price is left to the host's own check.
    fn require_gas_price_within_ceiling(&self, gas_price: OptionalValue<u64>) {
        if let OptionalValue::Some(price) = gas_price {
            require!(price <= self.max_gas_price().get(), ERR_GAS_PRICE_TOO_HIGH);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(MIN_AUCTION_LENGTH)]
    fn min_auction_length(&self) -> u64 {
        MIN_AUCTION_LENGTH
    }

    #[view(MIN_AUCTION_LEAD_TIME)]
    fn min_auction_lead_time(&self) -> u64 {
        MIN_AUCTION_LEAD_TIME
    }

    #[view(OWNER_FACTOR)]
    fn owner_factor(&self) -> u64 {
        OWNER_FACTOR
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<BigUint, u64, u64, u64, u64> {
        let max_contribution = self.max_contribution().get();
        let max_gas_price = self.max_gas_price().get();
        (
            max_contribution,
            max_gas_price,
            MIN_AUCTION_LENGTH,
            MIN_AUCTION_LEAD_TIME,
            OWNER_FACTOR,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getCreator)]
    #[storage_mapper("creator")]
    fn creator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMaxContribution)]
    #[storage_mapper("maxContribution")]
    fn max_contribution(&self) -> SingleValueMapper<BigUint>;

    #[view(maxGasPrice)]
    #[storage_mapper("maxGasPrice")]
    fn max_gas_price(&self) -> SingleValueMapper<u64>;
}
