use multiversx_sc::proxy_imports::*;

use crate::types::{AuctionRound, RoundStatus};

pub struct FilmAuctionProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FilmAuctionProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FilmAuctionProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FilmAuctionProxyMethods { wrapped_tx: tx }
    }
}

pub struct FilmAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FilmAuctionProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        max_contribution: Arg0,
        max_gas_price: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&max_contribution)
            .argument(&max_gas_price)
            .original_result()
    }
}

impl<Env, From, To, Gas> FilmAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> FilmAuctionProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Rounds ──

    pub fn create_auction_round<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        minimum_wei: Arg0,
        maximum_wei: Arg1,
        start_time: Arg2,
        end_time: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createAuctionRound")
            .argument(&minimum_wei)
            .argument(&maximum_wei)
            .argument(&start_time)
            .argument(&end_time)
            .original_result()
    }

    pub fn latest_round(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AuctionRound<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("latestRound")
            .original_result()
    }

    pub fn get_round<Arg0: ProxyArg<usize>>(
        self,
        round_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, AuctionRound<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRound")
            .argument(&round_index)
            .original_result()
    }

    pub fn get_rounds(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, AuctionRound<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRounds")
            .original_result()
    }

    pub fn get_round_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoundCount")
            .original_result()
    }

    pub fn get_round_status<Arg0: ProxyArg<usize>>(
        self,
        round_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, RoundStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRoundStatus")
            .argument(&round_index)
            .original_result()
    }

    // ── Contributions ──

    pub fn contribute<Arg0: ProxyArg<usize>, Arg1: ProxyArg<OptionalValue<u64>>>(
        self,
        round_index: Arg0,
        gas_price: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>> {
        self.wrapped_tx
            .raw_call("contribute")
            .argument(&round_index)
            .argument(&gas_price)
            .original_result()
    }

    pub fn withdraw_round_funds<Arg0: ProxyArg<usize>>(
        self,
        round_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawRoundFunds")
            .argument(&round_index)
            .original_result()
    }

    pub fn get_contribution<Arg0: ProxyArg<usize>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        round_index: Arg0,
        contributor: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContribution")
            .argument(&round_index)
            .argument(&contributor)
            .original_result()
    }

    pub fn get_remaining_contribution<
        Arg0: ProxyArg<usize>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        round_index: Arg0,
        contributor: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRemainingContribution")
            .argument(&round_index)
            .argument(&contributor)
            .original_result()
    }

    pub fn is_round_withdrawn<Arg0: ProxyArg<usize>>(
        self,
        round_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isRoundWithdrawn")
            .argument(&round_index)
            .original_result()
    }

    // ── Configuration ──

    pub fn set_max_contribution<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        new_ceiling: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxContribution")
            .argument(&new_ceiling)
            .original_result()
    }

    pub fn set_max_gas_price<Arg0: ProxyArg<u64>>(
        self,
        new_ceiling: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxGasPrice")
            .argument(&new_ceiling)
            .original_result()
    }

    pub fn min_auction_length(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("MIN_AUCTION_LENGTH")
            .original_result()
    }

    pub fn min_auction_lead_time(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("MIN_AUCTION_LEAD_TIME")
            .original_result()
    }

    pub fn owner_factor(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("OWNER_FACTOR")
            .original_result()
    }

    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue5<BigUint<Env::Api>, u64, u64, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }

    pub fn creator(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCreator")
            .original_result()
    }

    pub fn max_contribution(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxContribution")
            .original_result()
    }

    pub fn max_gas_price(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("maxGasPrice")
            .original_result()
    }
}
