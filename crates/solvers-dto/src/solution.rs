use {
    alloy_primitives::{Address, U256},
    number::serialization::DecimalU256,
    serde::{Deserialize, Serialize},
    serde_ext::{Hex, HexAddress},
    serde_with::serde_as,
    std::collections::HashMap,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Solutions {
    pub solutions: Vec<Solution>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: u64,
    #[serde_as(as = "HashMap<HexAddress, DecimalU256>")]
    pub prices: HashMap<Address, U256>,
    pub trades: Vec<Trade>,
    pub interactions: Vec<Interaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
}

#[serde_as]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct OrderUid(#[serde_as(as = "Hex")] pub [u8; 56]);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Trade {
    Fulfillment(Fulfillment),
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub order: OrderUid,
    #[serde_as(as = "DecimalU256")]
    pub executed_amount: U256,
    #[serde_as(as = "Option<DecimalU256>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<U256>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Interaction {
    Liquidity(LiquidityInteraction),
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityInteraction {
    pub internalize: bool,
    pub id: String,
    #[serde_as(as = "HexAddress")]
    pub input_token: Address,
    #[serde_as(as = "HexAddress")]
    pub output_token: Address,
    #[serde_as(as = "DecimalU256")]
    pub input_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub output_amount: U256,
}

#[cfg(test)]
mod tests {
    use {super::*, crate::decode_value, serde_json::json};

    #[test]
    fn solution_round_trip() {
        let uid = format!("0x{}", "2a".repeat(56));
        let json = json!({
            "solutions": [{
                "id": 7,
                "prices": {
                    "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2": "25000000000000000000000",
                    "0xe41d2489571d322189246dafa5ebde1f4699f498": "1000000000000000000",
                },
                "trades": [{
                    "kind": "fulfillment",
                    "order": uid,
                    "executedAmount": "1000000000000000000",
                }],
                "interactions": [{
                    "kind": "liquidity",
                    "internalize": true,
                    "id": "0",
                    "inputToken": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                    "outputToken": "0xe41d2489571d322189246dafa5ebde1f4699f498",
                    "inputAmount": "1000000000000000000",
                    "outputAmount": "25000000000000000000000",
                }],
                "gas": 250000,
            }],
        });

        let solutions: Solutions = decode_value(json.clone()).unwrap();
        let Trade::Fulfillment(fulfillment) = &solutions.solutions[0].trades[0];
        assert_eq!(fulfillment.order, OrderUid([0x2a; 56]));
        assert_eq!(fulfillment.fee, None);
        assert_eq!(serde_json::to_value(&solutions).unwrap(), json);
    }

    #[test]
    fn rejects_unknown_trade_kind() {
        let err = decode_value::<Trade>(json!({
            "kind": "jit",
            "order": format!("0x{}", "2a".repeat(56)),
            "executedAmount": "1",
        }))
        .unwrap_err();
        assert!(err.message.contains("jit"), "{}", err.message);
    }
}
