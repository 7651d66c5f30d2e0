multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{remaining_capacity, RoundStatus};

/// How an offered amount splits between what the round keeps and what
/// goes back to the contributor. `accepted + refund == offered`.
pub struct Acceptance<M: ManagedTypeApi> {
    pub accepted: BigUint<M>,
    pub refund: BigUint<M>,
}

/// Capped acceptance: keep the smallest of the offer, the round's remaining
/// capacity and the contributor's remaining capacity. An exhausted round
/// or contributor rejects outright instead of accepting zero.
pub fn capped_acceptance<M: ManagedTypeApi>(
    offered: &BigUint<M>,
    round_remaining: &BigUint<M>,
    contributor_remaining: &BigUint<M>,
) -> Result<Acceptance<M>, &'static str> {
    if *offered == 0u64 {
        return Err(ERR_INVALID_CONTRIBUTION_VALUE);
    }
    if *round_remaining == 0u64 {
        return Err(ERR_ROUND_MAX_REACHED);
    }
    if *contributor_remaining == 0u64 {
        return Err(ERR_MAX_CONTRIBUTION_REACHED);
    }

    let capacity = smaller(round_remaining, contributor_remaining);
    let accepted = smaller(offered, &capacity);
    let refund = offered - &accepted;

    Ok(Acceptance { accepted, refund })
}

fn smaller<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a < b {
        a.clone()
    } else {
        b.clone()
    }
}

#[multiversx_sc::module]
pub trait ContributionLedgerModule:
    crate::config::ConfigModule
    + crate::round_registry::RoundRegistryModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: contribute
    // Accepts what fits under both ceilings and refunds the rest
    // in the same transaction. A failed refund reverts everything.
    // ========================================================

    /// The gas-price guard only applies when the caller declares
    /// `gas_price`; an omitted argument skips it.
    #[payable("EGLD")]
    #[endpoint(contribute)]
    fn contribute(
        &self,
        round_index: usize,
        gas_price: OptionalValue<u64>,
    ) -> MultiValue2<BigUint, BigUint> {
        self.require_gas_price_within_ceiling(gas_price);

        let mut round = self.load_round(round_index);
        let now = self.blockchain().get_block_timestamp();
        match round.status(now) {
            RoundStatus::Ended => sc_panic!(ERR_ROUND_ENDED),
            RoundStatus::NotStarted => sc_panic!(ERR_ROUND_NOT_STARTED),
            RoundStatus::Active => {},
        }

        let caller = self.blockchain().get_caller();
        let offered = self.call_value().egld_value().clone_value();

        // Ceiling is read now, not when the round was created.
        let contributed = self.contributions(round_index, &caller).get();
        let contributor_remaining =
            remaining_capacity(&self.max_contribution().get(), &contributed);

        let acceptance =
            match capped_acceptance(&offered, &round.remaining(), &contributor_remaining) {
                Ok(acceptance) => acceptance,
                Err(reason) => sc_panic!(reason),
            };

        round.actual_wei += &acceptance.accepted;
        self.store_round(round_index, &round);
        self.contributions(round_index, &caller)
            .update(|total| *total += &acceptance.accepted);

        self.contribution_event(round_index, &caller, &acceptance.refund, &acceptance.accepted);

        if acceptance.refund > 0u64 {
            self.send().direct_egld(&caller, &acceptance.refund);
        }

        (acceptance.accepted, acceptance.refund).into()
    }

    // ========================================================
    // ENDPOINT: withdrawRoundFunds
    // Creator collects what one ended round raised. Each round
    // pays out once and only its own total.
    // ========================================================

    #[endpoint(withdrawRoundFunds)]
    fn withdraw_round_funds(&self, round_index: usize) -> BigUint {
        self.require_creator();

        let round = self.load_round(round_index);
        let now = self.blockchain().get_block_timestamp();
        require!(
            round.status(now) == RoundStatus::Ended,
            ERR_ROUND_NOT_ENDED
        );
        require!(
            !self.round_funds_withdrawn(round_index).get(),
            ERR_ALREADY_WITHDRAWN
        );
        require!(round.actual_wei > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.round_funds_withdrawn(round_index).set(true);

        let creator = self.blockchain().get_caller();
        self.send().direct_egld(&creator, &round.actual_wei);
        self.round_funds_withdrawn_event(round_index, &creator, &round.actual_wei);

        round.actual_wei
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContribution)]
    fn get_contribution(&self, round_index: usize, contributor: &ManagedAddress) -> BigUint {
        self.require_valid_round_index(round_index);
        self.contributions(round_index, contributor).get()
    }

    /// Largest amount the next contribution from `contributor` would keep.
    /// Zero outside the active window.
    #[view(getRemainingContribution)]
    fn get_remaining_contribution(
        &self,
        round_index: usize,
        contributor: &ManagedAddress,
    ) -> BigUint {
        let round = self.load_round(round_index);
        let now = self.blockchain().get_block_timestamp();
        if round.status(now) != RoundStatus::Active {
            return BigUint::zero();
        }

        let contributed = self.contributions(round_index, contributor).get();
        let contributor_remaining =
            remaining_capacity(&self.max_contribution().get(), &contributed);
        smaller(&round.remaining(), &contributor_remaining)
    }

    #[view(isRoundWithdrawn)]
    #[storage_mapper("roundFundsWithdrawn")]
    fn round_funds_withdrawn(&self, round_index: usize) -> SingleValueMapper<bool>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("contributions")]
    fn contributions(
        &self,
        round_index: usize,
        contributor: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
