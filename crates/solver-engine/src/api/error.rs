use {
    crate::domain::{quote, solver},
    axum::http::StatusCode,
    serde::Serialize,
    std::fmt::Display,
};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(super) enum Kind {
    InvalidRequest,
    QuoteSameTokens,
    QuotingFailed,
    SolutionNotFound,
    Unknown,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    kind: Kind,
    description: String,
}

impl Kind {
    fn status(self) -> StatusCode {
        match self {
            Kind::InvalidRequest | Kind::QuoteSameTokens | Kind::QuotingFailed => {
                StatusCode::BAD_REQUEST
            }
            Kind::SolutionNotFound => StatusCode::NOT_FOUND,
            Kind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn description(self) -> &'static str {
        match self {
            Kind::InvalidRequest => "Invalid request",
            Kind::QuoteSameTokens => "Invalid quote with same buy and sell tokens",
            Kind::QuotingFailed => "No valid quote found",
            Kind::SolutionNotFound => "No solution found for the given ID",
            Kind::Unknown => "An unknown error occurred",
        }
    }

    /// Builds the error response with additional details appended to the
    /// description.
    pub(super) fn with_details(self, details: impl Display) -> (StatusCode, axum::Json<Error>) {
        (
            self.status(),
            axum::Json(Error {
                kind: self,
                description: format!("{}: {details}", self.description()),
            }),
        )
    }
}

impl From<Kind> for (StatusCode, axum::Json<Error>) {
    fn from(value: Kind) -> Self {
        (
            value.status(),
            axum::Json(Error {
                kind: value,
                description: value.description().to_owned(),
            }),
        )
    }
}

/// Responds to a request body or query that doesn't have the expected shape.
pub(super) fn invalid_request(err: impl Display) -> (StatusCode, axum::Json<Error>) {
    tracing::debug!(%err, "invalid request");
    Kind::InvalidRequest.with_details(err)
}

impl From<quote::Error> for (StatusCode, axum::Json<Error>) {
    fn from(value: quote::Error) -> Self {
        match value {
            quote::Error::SameTokens => Kind::QuoteSameTokens.into(),
            quote::Error::Overflow => Kind::QuotingFailed.with_details(value),
            quote::Error::InvalidRatio => Kind::Unknown.into(),
        }
    }
}

impl From<solver::Error> for (StatusCode, axum::Json<Error>) {
    fn from(value: solver::Error) -> Self {
        tracing::error!(err = ?value, "failed to solve auction");
        Kind::Unknown.into()
    }
}

impl From<solver::RevealError> for (StatusCode, axum::Json<Error>) {
    fn from(value: solver::RevealError) -> Self {
        match value {
            solver::RevealError::NotFound(_) => Kind::SolutionNotFound.into(),
        }
    }
}
