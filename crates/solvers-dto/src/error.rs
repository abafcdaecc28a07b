use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// PascalCase error kind, for example `InvalidRequest`.
    pub kind: String,
    pub description: String,
}
