//! Encoding of solutions into `GPv2Settlement.settle` calldata.

use {
    crate::{
        domain::{auction, eth, order, solution},
        infra::contracts::{ERC20, GPv2Settlement, UniswapV2Router},
    },
    alloy_primitives::{Bytes, FixedBytes},
    alloy_sol_types::SolCall,
    std::collections::BTreeMap,
};

/// Number of bytes appended to the calldata to store the auction id.
pub const META_DATA_LEN: usize = 8;

/// A solution in the shape of the settlement contract's `settle` arguments.
#[derive(Debug, Clone)]
pub struct Settlement {
    tokens: Vec<eth::TokenAddress>,
    clearing_prices: Vec<eth::U256>,
    trades: Vec<Trade>,
    /// Pre, intra and post interactions.
    interactions: [Vec<Interaction>; 3],
}

#[derive(Debug, Clone)]
struct Trade {
    sell_token_index: usize,
    buy_token_index: usize,
    receiver: eth::Address,
    sell_amount: eth::U256,
    buy_amount: eth::U256,
    valid_to: u32,
    app_data: order::AppData,
    flags: Flags,
    executed_amount: eth::U256,
    signature: Vec<u8>,
}

#[derive(Debug, Clone)]
struct Interaction {
    target: eth::Address,
    value: eth::U256,
    call_data: Vec<u8>,
    internalize: bool,
}

/// The two flavours of calldata a solution can be executed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calldata {
    /// Calldata without the interactions that can be internalized.
    pub internalized: Vec<u8>,
    /// Calldata executing every interaction.
    pub uninternalized: Vec<u8>,
}

impl Settlement {
    pub fn new(
        solution: &solution::Solution,
        settlement_contract: eth::ContractAddress,
    ) -> Result<Self, Error> {
        let prices = solution
            .prices
            .0
            .iter()
            .map(|(token, price)| (*token, *price))
            .collect::<BTreeMap<_, _>>();
        let tokens = prices.keys().copied().collect::<Vec<_>>();
        let clearing_prices = prices.into_values().collect();
        let index = |token: eth::TokenAddress| {
            tokens
                .binary_search(&token)
                .map_err(|_| Error::MissingPrice(token))
        };

        let mut trades = Vec::with_capacity(solution.trades.len());
        let mut pre = Vec::new();
        let mut post = Vec::new();
        for trade in &solution.trades {
            let order = trade.order();
            trades.push(Trade {
                sell_token_index: index(order.sell.token)?,
                buy_token_index: index(order.buy.token)?,
                receiver: order.receiver.unwrap_or_default(),
                sell_amount: order.sell.amount,
                buy_amount: order.buy.amount,
                valid_to: order.valid_to,
                app_data: order.app_data,
                flags: Flags::new(order),
                executed_amount: trade.executed(),
                signature: signature(order),
            });
            pre.extend(order.pre_interactions.iter().map(Interaction::hook));
            post.extend(order.post_interactions.iter().map(Interaction::hook));
        }

        // Swaps must not outlive any of the traded orders.
        let deadline = trades
            .iter()
            .map(|trade| trade.valid_to)
            .min()
            .unwrap_or(u32::MAX);
        let intra = solution
            .interactions
            .iter()
            .flat_map(|interaction| {
                Interaction::swap(interaction, settlement_contract, deadline)
            })
            .collect();

        Ok(Self {
            tokens,
            clearing_prices,
            trades,
            interactions: [pre, intra, post],
        })
    }

    /// Encodes the settlement for the given auction.
    pub fn calldata(&self, auction_id: auction::Id) -> Calldata {
        Calldata {
            internalized: self.encode(auction_id, true),
            uninternalized: self.encode(auction_id, false),
        }
    }

    fn encode(&self, auction_id: auction::Id, internalize: bool) -> Vec<u8> {
        let call = GPv2Settlement::settleCall {
            tokens: self.tokens.iter().map(|token| token.0).collect(),
            clearingPrices: self.clearing_prices.clone(),
            trades: self.trades.iter().map(Trade::encode).collect(),
            interactions: self.interactions.each_ref().map(|interactions| {
                interactions
                    .iter()
                    .filter(|interaction| !(internalize && interaction.internalize))
                    .map(Interaction::encode)
                    .collect()
            }),
        };
        let mut calldata = call.abi_encode();
        calldata.extend(auction_id.0.to_be_bytes());
        calldata
    }
}

impl Trade {
    fn encode(&self) -> GPv2Settlement::Trade {
        GPv2Settlement::Trade {
            sellTokenIndex: eth::U256::from(self.sell_token_index),
            buyTokenIndex: eth::U256::from(self.buy_token_index),
            receiver: self.receiver,
            sellAmount: self.sell_amount,
            buyAmount: self.buy_amount,
            validTo: self.valid_to,
            appData: FixedBytes(self.app_data.0),
            feeAmount: eth::U256::ZERO,
            flags: self.flags.0,
            executedAmount: self.executed_amount,
            signature: Bytes::from(self.signature.clone()),
        }
    }
}

impl Interaction {
    fn hook(interaction: &order::Interaction) -> Self {
        Self {
            target: interaction.target,
            value: interaction.value.0,
            call_data: interaction.call_data.clone(),
            internalize: false,
        }
    }

    /// Approves the router to spend the input token and swaps through it.
    fn swap(
        interaction: &solution::LiquidityInteraction,
        settlement_contract: eth::ContractAddress,
        deadline: u32,
    ) -> [Self; 2] {
        let router = interaction.liquidity.router.0;
        let approve = ERC20::approveCall {
            spender: router,
            amount: interaction.input.amount,
        };
        let swap = UniswapV2Router::swapExactTokensForTokensCall {
            amountIn: interaction.input.amount,
            amountOutMin: interaction.output.amount,
            path: vec![interaction.input.token.0, interaction.output.token.0],
            to: settlement_contract.0,
            deadline: eth::U256::from(deadline),
        };
        [
            Self {
                target: interaction.input.token.0,
                value: eth::U256::ZERO,
                call_data: approve.abi_encode(),
                internalize: interaction.internalize,
            },
            Self {
                target: router,
                value: eth::U256::ZERO,
                call_data: swap.abi_encode(),
                internalize: interaction.internalize,
            },
        ]
    }

    fn encode(&self) -> GPv2Settlement::Interaction {
        GPv2Settlement::Interaction {
            target: self.target,
            value: self.value,
            callData: Bytes::from(self.call_data.clone()),
        }
    }
}

/// Signature bytes in the format expected by the settlement contract.
fn signature(order: &order::Order) -> Vec<u8> {
    match order.signature.scheme {
        order::SigningScheme::Eip712 | order::SigningScheme::EthSign => {
            order.signature.data.clone()
        }
        order::SigningScheme::Eip1271 => [order.owner.as_slice(), &order.signature.data].concat(),
        order::SigningScheme::PreSign => order.owner.to_vec(),
    }
}

/// Trade flags are encoded in a 256-bit integer field. For more information on
/// how flags are encoded see:
/// <https://github.com/cowprotocol/contracts/blob/v1.0.0/src/contracts/libraries/GPv2Trade.sol#L58-L94>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flags(eth::U256);

impl Flags {
    fn new(order: &order::Order) -> Self {
        let mut flags = 0u8;
        if order.side == order::Side::Buy {
            flags |= 0b1;
        }
        if order.partially_fillable {
            flags |= 0b10;
        }
        flags |= match order.sell_token_balance {
            order::SellTokenBalance::Erc20 => 0,
            order::SellTokenBalance::External => 0b1000,
            order::SellTokenBalance::Internal => 0b1100,
        };
        flags |= match order.buy_token_balance {
            order::BuyTokenBalance::Erc20 => 0,
            order::BuyTokenBalance::Internal => 0b10000,
        };
        flags |= match order.signature.scheme {
            order::SigningScheme::Eip712 => 0b00,
            order::SigningScheme::EthSign => 0b01,
            order::SigningScheme::Eip1271 => 0b10,
            order::SigningScheme::PreSign => 0b11,
        } << 5;
        Self(eth::U256::from(flags))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing clearing price for token {0}")]
    MissingPrice(eth::TokenAddress),
}
