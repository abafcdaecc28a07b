use {
    serde::{Deserialize, Serialize},
    serde_ext::Hex,
    serde_with::{DisplayFromStr, PickFirst, serde_as},
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Unique ID of the solution (per driver competition), to reveal.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub solution_id: u64,
    /// Auction ID in which the specified solution ID is competing.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub auction_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub calldata: Calldata,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calldata {
    #[serde_as(as = "Hex")]
    pub internalized: Vec<u8>,
    #[serde_as(as = "Hex")]
    pub uninternalized: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use {super::*, crate::decode_value, serde_json::json};

    #[test]
    fn ids_as_string_or_integer() {
        let expected = Request {
            solution_id: 1,
            auction_id: 123,
        };
        assert_eq!(
            decode_value::<Request>(json!({ "solutionId": 1, "auctionId": 123 })).unwrap(),
            expected
        );
        assert_eq!(
            decode_value::<Request>(json!({ "solutionId": "1", "auctionId": "123" })).unwrap(),
            expected
        );
        assert!(decode_value::<Request>(json!({ "solutionId": -1, "auctionId": 123 })).is_err());
        assert!(decode_value::<Request>(json!({ "auctionId": 123 })).is_err());
    }

    #[test]
    fn calldata_is_hex() {
        let response = Response {
            calldata: Calldata {
                internalized: vec![0x12, 0x34],
                uninternalized: vec![0x56, 0x78],
            },
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "calldata": { "internalized": "0x1234", "uninternalized": "0x5678" } })
        );
    }
}
