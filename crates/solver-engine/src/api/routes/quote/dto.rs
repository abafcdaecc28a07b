use {
    crate::{
        api::Quoter,
        domain::{auction, eth, order, quote},
        infra::config::QuoteFormat,
    },
    solvers_dto::{auction::Kind, quote as dto},
};

pub fn to_domain(req: &dto::Request) -> quote::Order {
    quote::Order {
        sell: eth::TokenAddress(req.sell_token),
        buy: eth::TokenAddress(req.buy_token),
        side: match req.kind {
            Kind::Sell => order::Side::Sell,
            Kind::Buy => order::Side::Buy,
        },
        amount: req.amount,
        deadline: auction::Deadline(req.deadline),
    }
}

/// Builds the response in the configured format. The legacy format only
/// carries the counter amount, which has to fit into 256 bits.
pub fn from_domain(quote: &quote::Quote, quoter: &Quoter) -> Result<dto::Response, quote::Error> {
    Ok(match quoter.format {
        QuoteFormat::Standard => dto::Response::Standard(dto::QuoteResponse {
            clearing_prices: quote
                .clearing_prices()
                .into_iter()
                .map(|(token, price)| (token.0, price))
                .collect(),
            pre_interactions: vec![],
            interactions: vec![],
            solver: quoter.solver,
            gas: quoter.gas.0,
            tx_origin: None,
            jit_orders: vec![],
        }),
        QuoteFormat::Legacy => dto::Response::Legacy(dto::LegacyQuoteResponse {
            amount: quote.counter_amount()?,
            interactions: vec![],
            solver: quoter.solver,
            gas: quoter.gas.0,
            tx_origin: None,
        }),
    })
}
