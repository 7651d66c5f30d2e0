multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("roundCreated")]
    fn round_created_event(
        &self,
        #[indexed] round_index: usize,
        #[indexed] start_time: u64,
        #[indexed] end_time: u64,
        maximum_wei: &BigUint,
    );

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] round_index: usize,
        #[indexed] contributor: &ManagedAddress,
        #[indexed] refund: &BigUint,
        accepted: &BigUint,
    );

    #[event("maxContributionChanged")]
    fn max_contribution_changed_event(&self, new_ceiling: &BigUint);

    #[event("maxGasPriceChanged")]
    fn max_gas_price_changed_event(&self, new_ceiling: u64);

    #[event("roundFundsWithdrawn")]
    fn round_funds_withdrawn_event(
        &self,
        #[indexed] round_index: usize,
        #[indexed] creator: &ManagedAddress,
        amount: &BigUint,
    );
}
