use {
    alloy_primitives::{Address, U256},
    bigdecimal::BigDecimal,
    number::serialization::DecimalU256,
    serde::{Deserialize, Serialize},
    serde_ext::{Hex, HexAddress},
    serde_with::{DisplayFromStr, MapPreventDuplicates, PickFirst, serde_as},
    std::collections::HashMap,
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    #[serde(default)]
    pub id: Option<i64>,
    #[serde_as(as = "MapPreventDuplicates<HexAddress, _>")]
    pub tokens: HashMap<Address, Token>,
    pub orders: Vec<Order>,
    pub liquidity: Vec<Liquidity>,
    #[serde_as(as = "DecimalU256")]
    pub effective_gas_price: U256,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde_as(as = "Vec<HexAddress>")]
    #[serde(default)]
    pub surplus_capturing_jit_order_owners: Vec<Address>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde_as(as = "Hex")]
    pub uid: [u8; 56],
    #[serde_as(as = "HexAddress")]
    pub sell_token: Address,
    #[serde_as(as = "HexAddress")]
    pub buy_token: Address,
    #[serde_as(as = "DecimalU256")]
    pub sell_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub buy_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub full_sell_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub full_buy_amount: U256,
    pub valid_to: u32,
    pub kind: Kind,
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Address>,
    #[serde_as(as = "HexAddress")]
    pub owner: Address,
    pub partially_fillable: bool,
    #[serde_as(as = "Option<DecimalU256>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Created>,
    #[serde(default)]
    pub pre_interactions: Vec<InteractionData>,
    #[serde(default)]
    pub post_interactions: Vec<InteractionData>,
    pub sell_token_source: SellTokenSource,
    pub buy_token_destination: BuyTokenDestination,
    pub class: Class,
    #[serde_as(as = "Hex")]
    pub app_data: [u8; 32],
    pub signing_scheme: SigningScheme,
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
    #[serde(default)]
    pub protocol_fees: Vec<FeePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

/// Order creation time. Drivers send either a string or a number, it is
/// passed through in the representation it arrived in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Created {
    Number(u64),
    Text(String),
}

/// Destination for which the buyAmount should be transferred to order's
/// receiver to upon fulfillment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyTokenDestination {
    /// Pay trade proceeds as an ERC20 token transfer
    Erc20,
    /// Pay trade proceeds as a Vault internal balance transfer
    Internal,
}

/// Source from which the sellAmount should be drawn upon order fulfillment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellTokenSource {
    /// Direct ERC20 allowances to the Vault relayer contract
    Erc20,
    /// Internal balances to the Vault with GPv2 relayer approval
    External,
    /// ERC20 allowances to the Vault with GPv2 relayer approval
    Internal,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionData {
    #[serde_as(as = "HexAddress")]
    pub target: Address,
    #[serde_as(as = "DecimalU256")]
    pub value: U256,
    #[serde_as(as = "Hex")]
    pub call_data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningScheme {
    Eip712,
    EthSign,
    PreSign,
    Eip1271,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    Sell,
    Buy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Class {
    Market,
    Limit,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FeePolicy {
    #[serde(rename_all = "camelCase")]
    Surplus { factor: f64, max_volume_factor: f64 },
    #[serde(rename_all = "camelCase")]
    PriceImprovement {
        factor: f64,
        max_volume_factor: f64,
        quote: Quote,
    },
    #[serde(rename_all = "camelCase")]
    Volume { factor: f64 },
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde_as(as = "DecimalU256")]
    pub sell_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub buy_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub fee: U256,
    #[serde_as(as = "Option<HexAddress>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<Address>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde_as(as = "Option<DecimalU256>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_price: Option<U256>,
    #[serde_as(as = "DecimalU256")]
    pub available_balance: U256,
    pub trusted: bool,
}

/// An on-chain liquidity source. The `kind` tag is not interpreted and
/// passed through as is.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liquidity {
    pub id: String,
    #[serde_as(as = "HexAddress")]
    pub address: Address,
    #[serde_as(as = "HexAddress")]
    pub router: Address,
    pub fee: BigDecimal,
    #[serde_as(as = "DecimalU256")]
    pub gas_estimate: U256,
    pub kind: String,
    #[serde_as(as = "MapPreventDuplicates<HexAddress, _>")]
    pub tokens: HashMap<Address, Reserve>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    #[serde_as(as = "DecimalU256")]
    pub balance: U256,
}

#[cfg(test)]
mod tests {
    use {super::*, crate::decode_value, serde_json::json};

    fn order() -> serde_json::Value {
        json!({
            "uid": format!("0x{}", "11".repeat(56)),
            "sellToken": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            "buyToken": "0xe41d2489571d322189246dafa5ebde1f4699f498",
            "sellAmount": "1000000000000000000",
            "buyAmount": "25000000000000000000000",
            "fullSellAmount": "1000000000000000000",
            "fullBuyAmount": "25000000000000000000000",
            "validTo": 1700000000u32,
            "kind": "sell",
            "owner": "0x5b1e2c2762667331bc91648052f646d1b0d35984",
            "partiallyFillable": false,
            "preInteractions": [],
            "postInteractions": [{
                "target": "0x9008d19f58aabd9ed0d60971565aa8510560ab41",
                "value": "0",
                "callData": "0xdeadbeef",
            }],
            "sellTokenSource": "erc20",
            "buyTokenDestination": "internal",
            "class": "limit",
            "appData": format!("0x{}", "00".repeat(32)),
            "signingScheme": "eip712",
            "signature": "0x0102",
            "protocolFees": [
                { "kind": "surplus", "factor": 0.5, "maxVolumeFactor": 0.01 },
                { "kind": "volume", "factor": 0.1 },
            ],
        })
    }

    #[test]
    fn order_round_trip() {
        let decoded: Order = decode_value(order()).unwrap();
        assert_eq!(decoded.class, Class::Limit);
        assert_eq!(decoded.post_interactions[0].call_data, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decoded.protocol_fees.len(), 2);

        let mut expected = order();
        expected["sellToken"] = json!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        assert_eq!(serde_json::to_value(&decoded).unwrap(), expected);
    }

    #[test]
    fn created_keeps_its_representation() {
        for created in [json!("123456"), json!(123456), json!("2024-01-01T00:00:00Z")] {
            let mut json = order();
            json["created"] = created.clone();
            let decoded: Order = decode_value(json.clone()).unwrap();
            assert_eq!(serde_json::to_value(&decoded).unwrap()["created"], created);
        }

        let mut json = order();
        json["created"] = json!("123456");
        let decoded: Order = decode_value(json).unwrap();
        assert_eq!(decoded.created, Some(Created::Text("123456".to_owned())));
    }

    #[test]
    fn order_defaults() {
        let mut json = order();
        let object = json.as_object_mut().unwrap();
        object.remove("protocolFees");
        object.remove("preInteractions");
        object.remove("postInteractions");
        object.insert("created".into(), json!("123456"));
        object.insert("executed".into(), json!("7"));

        let order: Order = decode_value(json).unwrap();
        assert!(order.protocol_fees.is_empty());
        assert!(order.pre_interactions.is_empty());
        assert_eq!(order.created, Some(Created::Text("123456".to_owned())));
        assert_eq!(order.executed, Some(U256::from(7)));
        assert_eq!(order.receiver, None);
    }

    #[test]
    fn order_requires_class() {
        let mut json = order();
        json.as_object_mut().unwrap().remove("class");
        let err = decode_value::<Order>(json).unwrap_err();
        assert!(err.message.contains("class"), "{}", err.message);
    }

    #[test]
    fn order_rejects_numeric_amounts() {
        let mut json = order();
        json["sellAmount"] = json!(1000);
        let err = decode_value::<Order>(json).unwrap_err();
        assert_eq!(err.path, "sellAmount");
    }

    #[test]
    fn order_rejects_short_uid() {
        let mut json = order();
        json["uid"] = json!("0x1111");
        let err = decode_value::<Order>(json).unwrap_err();
        assert_eq!(err.path, "uid");
    }

    #[test]
    fn fee_policy_variants() {
        let quote = json!({ "sellAmount": "1", "buyAmount": "2", "fee": "3" });
        assert_eq!(
            decode_value::<FeePolicy>(json!({
                "kind": "surplus", "factor": 0.5, "maxVolumeFactor": 0.1,
            }))
            .unwrap(),
            FeePolicy::Surplus {
                factor: 0.5,
                max_volume_factor: 0.1,
            }
        );
        assert_eq!(
            decode_value::<FeePolicy>(json!({
                "kind": "priceImprovement",
                "factor": 0.5,
                "maxVolumeFactor": 0.01,
                "quote": quote,
            }))
            .unwrap(),
            FeePolicy::PriceImprovement {
                factor: 0.5,
                max_volume_factor: 0.01,
                quote: Quote {
                    sell_amount: U256::from(1),
                    buy_amount: U256::from(2),
                    fee: U256::from(3),
                    solver: None,
                },
            }
        );
        assert_eq!(
            decode_value::<FeePolicy>(json!({ "kind": "volume", "factor": 0.25 })).unwrap(),
            FeePolicy::Volume { factor: 0.25 }
        );
    }

    #[test]
    fn fee_policy_round_trip() {
        let policy = json!({
            "kind": "priceImprovement",
            "factor": 0.5,
            "maxVolumeFactor": 0.01,
            "quote": {
                "sellAmount": "10",
                "buyAmount": "20",
                "fee": "0",
                "solver": "0x0000000000000000000000000000000000000001",
            },
        });
        let decoded: FeePolicy = decode_value(policy.clone()).unwrap();
        assert_eq!(serde_json::to_value(decoded).unwrap(), policy);
    }

    #[test]
    fn fee_policy_rejects_malformed() {
        assert!(decode_value::<FeePolicy>(json!({ "kind": "surplus", "maxVolumeFactor": 0.1 })).is_err());
        assert!(decode_value::<FeePolicy>(json!({ "kind": "unknown", "factor": 0.1 })).is_err());
        assert!(decode_value::<FeePolicy>(json!({ "factor": 0.1 })).is_err());
    }

    #[test]
    fn auction_id_as_string_or_integer() {
        let auction = |id: serde_json::Value| {
            json!({
                "id": id,
                "tokens": {},
                "orders": [],
                "liquidity": [],
                "effectiveGasPrice": "15000000000",
                "deadline": "2106-01-01T00:00:00.000Z",
                "surplusCapturingJitOrderOwners": [],
            })
        };
        let from_string: Auction = decode_value(auction(json!("1234"))).unwrap();
        let from_integer: Auction = decode_value(auction(json!(1234))).unwrap();
        let missing: Auction = decode_value(auction(json!(null))).unwrap();
        assert_eq!(from_string.id, Some(1234));
        assert_eq!(from_integer.id, Some(1234));
        assert_eq!(missing.id, None);
        assert!(decode_value::<Auction>(auction(json!("12a"))).is_err());
    }

    #[test]
    fn liquidity() {
        let liquidity: Liquidity = decode_value(json!({
            "id": "0",
            "kind": "constantProduct",
            "address": "0x97b744df0b59d93a866304f97431d8efad29a08d",
            "router": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
            "gasEstimate": "110000",
            "fee": "0.003",
            "tokens": {
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2": { "balance": "100" },
            },
        }))
        .unwrap();
        assert_eq!(liquidity.kind, "constantProduct");
        assert_eq!(liquidity.fee, "0.003".parse::<BigDecimal>().unwrap());
        assert_eq!(liquidity.tokens.len(), 1);
    }

    #[test]
    fn token_maps_reject_addresses_differing_in_case() {
        let auction = json!({
            "tokens": {
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2": { "trusted": true, "availableBalance": "0" },
                "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2": { "trusted": false, "availableBalance": "0" },
            },
            "orders": [],
            "liquidity": [],
            "effectiveGasPrice": "15000000000",
            "deadline": "2106-01-01T00:00:00.000Z",
            "surplusCapturingJitOrderOwners": [],
        });
        let err = decode_value::<Auction>(auction).unwrap_err();
        assert!(err.path.starts_with("tokens"), "{}", err.path);

        let liquidity = json!({
            "id": "0",
            "kind": "constantProduct",
            "address": "0x97b744df0b59d93a866304f97431d8efad29a08d",
            "router": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
            "gasEstimate": "110000",
            "fee": "0.003",
            "tokens": {
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2": { "balance": "100" },
                "0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2": { "balance": "200" },
            },
        });
        assert!(decode_value::<Liquidity>(liquidity).is_err());
    }
}
