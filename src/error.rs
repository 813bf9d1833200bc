use thiserror::Error;

/// Errors that can occur while solving a puzzle image pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolveError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("no opaque pixel found in patch image")]
    OutlineNotFound,

    #[error("silhouette outline did not close after {steps} steps")]
    MalformedSilhouette { steps: usize },

    #[error("no background position fits the patch outline")]
    PatchFitNotFound,
}

/// Errors raised while talking to the captcha portal.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PortalError {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("portal page did not set a session cookie")]
    MissingCookie,

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("invalid base64 image: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
