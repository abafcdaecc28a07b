use {
    crate::ValidationError,
    alloy_primitives::{Address, U256},
    number::serialization::DecimalU256,
    serde::Deserialize,
    serde_ext::{Hex, HexAddress},
    serde_json::Value,
    serde_with::{DisplayFromStr, PickFirst, serde_as},
    std::collections::BTreeSet,
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde_as(as = "Option<PickFirst<(DisplayFromStr, _)>>")]
    #[serde(default)]
    pub auction_id: Option<i64>,
    #[serde(default)]
    pub solution_id: Option<SolutionId>,
    #[serde(flatten)]
    pub kind: Kind,
}

impl Notification {
    /// Interprets an arbitrary JSON object as a notification.
    ///
    /// Objects that don't match any known notification shape are kept as
    /// [`Kind::Unrecognized`] together with whatever ids could be extracted.
    /// Only values that are not JSON objects are rejected.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(object) = &value else {
            return Err(ValidationError::new(
                ".",
                format!("expected a JSON object but got {value}"),
            ));
        };
        if let Ok(notification) = serde_json::from_value::<Self>(value.clone()) {
            return Ok(notification);
        }

        Ok(Self {
            auction_id: object.get("auctionId").and_then(|id| {
                id.as_i64()
                    .or_else(|| id.as_str().and_then(|id| id.parse().ok()))
            }),
            solution_id: object
                .get("solutionId")
                .and_then(|id| serde_json::from_value(id.clone()).ok()),
            kind: Kind::Unrecognized(object.get("kind").and_then(Value::as_str).map(str::to_owned)),
        })
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SolutionId {
    Single(#[serde_as(as = "PickFirst<(_, DisplayFromStr)>")] u64),
    Merged(Vec<u64>),
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Kind {
    Timeout,
    EmptySolution,
    DuplicatedSolutionId,
    #[serde(rename_all = "camelCase")]
    SimulationFailed {
        block: u64,
        tx: Tx,
        #[serde(default)]
        succeeded_once: bool,
    },
    InvalidClearingPrices,
    #[serde(rename_all = "camelCase")]
    MissingPrice {
        #[serde_as(as = "HexAddress")]
        token_address: Address,
    },
    InvalidExecutedAmount,
    NonBufferableTokensUsed {
        #[serde_as(as = "BTreeSet<HexAddress>")]
        tokens: BTreeSet<Address>,
    },
    SolverAccountInsufficientBalance {
        #[serde_as(as = "DecimalU256")]
        required: U256,
    },
    Success {
        #[serde_as(as = "Hex")]
        transaction: [u8; 32],
    },
    Revert {
        #[serde_as(as = "Hex")]
        transaction: [u8; 32],
    },
    DriverError {
        reason: String,
    },
    Cancelled,
    Fail,
    PostprocessingTimedOut,
    Banned {
        reason: String,
        until: u64,
    },
    /// A notification we don't know how to interpret, carrying its `kind` tag
    /// if there was one.
    #[serde(skip)]
    Unrecognized(Option<String>),
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tx {
    #[serde_as(as = "HexAddress")]
    pub from: Address,
    #[serde_as(as = "HexAddress")]
    pub to: Address,
    #[serde_as(as = "Hex")]
    pub input: Vec<u8>,
    #[serde_as(as = "DecimalU256")]
    pub value: U256,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn known_kinds() {
        let notification = Notification::from_value(json!({
            "auctionId": "123",
            "solutionId": 7,
            "kind": "timeout",
        }))
        .unwrap();
        assert_eq!(
            notification,
            Notification {
                auction_id: Some(123),
                solution_id: Some(SolutionId::Single(7)),
                kind: Kind::Timeout,
            }
        );

        let notification = Notification::from_value(json!({
            "auctionId": 123,
            "solutionId": [1, 2],
            "kind": "missingPrice",
            "tokenAddress": "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        }))
        .unwrap();
        assert_eq!(notification.auction_id, Some(123));
        assert_eq!(notification.solution_id, Some(SolutionId::Merged(vec![1, 2])));
        assert!(matches!(notification.kind, Kind::MissingPrice { .. }));

        let notification = Notification::from_value(json!({
            "kind": "success",
            "transaction": format!("0x{}", "ab".repeat(32)),
        }))
        .unwrap();
        assert_eq!(
            notification.kind,
            Kind::Success {
                transaction: [0xab; 32]
            }
        );
    }

    #[test]
    fn unknown_kinds_are_kept() {
        let notification = Notification::from_value(json!({
            "auctionId": 5,
            "solutionId": "9",
            "kind": "somethingNew",
            "extra": [1, 2, 3],
        }))
        .unwrap();
        assert_eq!(notification.auction_id, Some(5));
        assert_eq!(notification.solution_id, Some(SolutionId::Single(9)));
        assert_eq!(notification.kind, Kind::Unrecognized(Some("somethingNew".into())));
    }

    #[test]
    fn known_kind_with_unexpected_fields() {
        let notification = Notification::from_value(json!({
            "kind": "missingPrice",
            "tokenAddress": 42,
        }))
        .unwrap();
        assert_eq!(notification.kind, Kind::Unrecognized(Some("missingPrice".into())));
    }

    #[test]
    fn empty_object() {
        let notification = Notification::from_value(json!({})).unwrap();
        assert_eq!(notification.auction_id, None);
        assert_eq!(notification.kind, Kind::Unrecognized(None));
    }

    #[test]
    fn rejects_non_objects() {
        assert!(Notification::from_value(json!([1, 2])).is_err());
        assert!(Notification::from_value(json!("timeout")).is_err());
        assert!(Notification::from_value(json!(null)).is_err());
    }
}
