use {
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, PickFirst, serde_as},
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Unique ID of the solution (per driver competition), to settle.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub solution_id: u64,
    /// The last block number in which the solution TX can be included.
    pub submission_deadline_latest_block: u64,
    /// Auction ID in which the specified solution ID is competing.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub auction_id: i64,
}

/// Settlement acknowledgement, serialized as an empty object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {}
