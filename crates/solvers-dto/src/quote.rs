use {
    crate::auction::{BuyTokenDestination, Kind, SellTokenSource, SigningScheme},
    alloy_primitives::{Address, U256},
    num::BigUint,
    number::serialization::{DecimalBigUint, DecimalU256},
    serde::{Deserialize, Serialize},
    serde_ext::{Hex, HexAddress},
    serde_with::serde_as,
    std::collections::HashMap,
};

/// Query string of a quote request.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde_as(as = "HexAddress")]
    pub sell_token: Address,
    #[serde_as(as = "HexAddress")]
    pub buy_token: Address,
    pub kind: Kind,
    #[serde_as(as = "DecimalU256")]
    pub amount: U256,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Standard(QuoteResponse),
    Legacy(LegacyQuoteResponse),
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde_as(as = "HashMap<HexAddress, DecimalBigUint>")]
    pub clearing_prices: HashMap<Address, BigUint>,
    pub pre_interactions: Vec<Interaction>,
    pub interactions: Vec<Interaction>,
    #[serde_as(as = "HexAddress")]
    pub solver: Address,
    pub gas: u64,
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_origin: Option<Address>,
    pub jit_orders: Vec<JitOrder>,
}

/// Quote format of older drivers which only report the counter amount.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyQuoteResponse {
    #[serde_as(as = "DecimalU256")]
    pub amount: U256,
    pub interactions: Vec<Interaction>,
    #[serde_as(as = "HexAddress")]
    pub solver: Address,
    pub gas: u64,
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_origin: Option<Address>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    #[serde_as(as = "HexAddress")]
    pub target: Address,
    #[serde_as(as = "DecimalU256")]
    pub value: U256,
    #[serde_as(as = "Hex")]
    pub call_data: Vec<u8>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JitOrder {
    #[serde_as(as = "HexAddress")]
    pub sell_token: Address,
    #[serde_as(as = "HexAddress")]
    pub buy_token: Address,
    #[serde_as(as = "DecimalU256")]
    pub sell_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub buy_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub executed_amount: U256,
    #[serde_as(as = "HexAddress")]
    pub receiver: Address,
    pub valid_to: u32,
    pub side: Kind,
    pub partially_fillable: bool,
    pub sell_token_source: SellTokenSource,
    pub buy_token_source: BuyTokenDestination,
    #[serde_as(as = "Hex")]
    pub app_data: [u8; 32],
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
    pub signing_scheme: SigningScheme,
}
