use {
    crate::domain::{auction, eth, liquidity, order},
    solvers_dto::auction as dto,
};

/// Converts the data transfer object into its domain object representation.
pub fn to_domain(auction: dto::Auction) -> auction::Auction {
    auction::Auction {
        id: auction.id.map(auction::Id),
        tokens: auction::Tokens(
            auction
                .tokens
                .into_iter()
                .map(|(address, token)| {
                    (
                        eth::TokenAddress(address),
                        auction::Token {
                            decimals: token.decimals,
                            symbol: token.symbol,
                            reference_price: token
                                .reference_price
                                .map(eth::Ether)
                                .map(auction::Price),
                            available_balance: token.available_balance,
                            trusted: token.trusted,
                        },
                    )
                })
                .collect(),
        ),
        orders: auction.orders.into_iter().map(order).collect(),
        liquidity: auction.liquidity.into_iter().map(liquidity).collect(),
        gas_price: auction::GasPrice(eth::Ether(auction.effective_gas_price)),
        deadline: auction::Deadline(auction.deadline),
    }
}

fn order(order: dto::Order) -> order::Order {
    order::Order {
        uid: order::Uid(order.uid),
        sell: eth::Asset {
            token: eth::TokenAddress(order.sell_token),
            amount: order.sell_amount,
        },
        buy: eth::Asset {
            token: eth::TokenAddress(order.buy_token),
            amount: order.buy_amount,
        },
        side: match order.kind {
            dto::Kind::Sell => order::Side::Sell,
            dto::Kind::Buy => order::Side::Buy,
        },
        class: match order.class {
            dto::Class::Market => order::Class::Market,
            dto::Class::Limit => order::Class::Limit,
        },
        partially_fillable: order.partially_fillable,
        valid_to: order.valid_to,
        owner: order.owner,
        receiver: order.receiver,
        app_data: order::AppData(order.app_data),
        sell_token_balance: match order.sell_token_source {
            dto::SellTokenSource::Erc20 => order::SellTokenBalance::Erc20,
            dto::SellTokenSource::External => order::SellTokenBalance::External,
            dto::SellTokenSource::Internal => order::SellTokenBalance::Internal,
        },
        buy_token_balance: match order.buy_token_destination {
            dto::BuyTokenDestination::Erc20 => order::BuyTokenBalance::Erc20,
            dto::BuyTokenDestination::Internal => order::BuyTokenBalance::Internal,
        },
        signature: order::Signature {
            scheme: match order.signing_scheme {
                dto::SigningScheme::Eip712 => order::SigningScheme::Eip712,
                dto::SigningScheme::EthSign => order::SigningScheme::EthSign,
                dto::SigningScheme::Eip1271 => order::SigningScheme::Eip1271,
                dto::SigningScheme::PreSign => order::SigningScheme::PreSign,
            },
            data: order.signature,
        },
        pre_interactions: order.pre_interactions.into_iter().map(interaction).collect(),
        post_interactions: order.post_interactions.into_iter().map(interaction).collect(),
    }
}

fn interaction(interaction: dto::InteractionData) -> order::Interaction {
    order::Interaction {
        target: interaction.target,
        value: eth::Ether(interaction.value),
        call_data: interaction.call_data,
    }
}

fn liquidity(liquidity: dto::Liquidity) -> liquidity::Liquidity {
    liquidity::Liquidity {
        id: liquidity::Id(liquidity.id),
        address: liquidity.address,
        router: eth::ContractAddress(liquidity.router),
        fee: liquidity.fee,
        // Estimates beyond `u64` are meaningless and get capped.
        gas: eth::Gas(u64::try_from(liquidity.gas_estimate).unwrap_or(u64::MAX)),
        kind: liquidity.kind,
        reserves: liquidity
            .tokens
            .into_iter()
            .map(|(token, reserve)| (eth::TokenAddress(token), reserve.balance))
            .collect(),
    }
}
