use thiserror::Error;

use crate::client::BoxError;
use crate::protocol::{Request, Response, ValidationError};

/// A transport failure enriched with the exchange it belongs to.
///
/// Built once at the failure boundary of
/// [`Client::send`](crate::client::Client::send) and never recovered from
/// inside this crate.
/// The carried response is always optional: it is only present when the
/// transport produced a partial native response before failing, and that
/// response translated cleanly. The carried request's body stream may be in
/// the detached state, since the body handle was handed to the transport
/// before the failure.
#[derive(Debug, Error)]
#[error("request to {} failed: {source}", .request.url())]
pub struct RequestError {
    request: Request,
    response: Option<Response>,
    #[source]
    source: BoxError,
}

impl RequestError {
    pub(crate) fn new(request: Request, response: Option<Response>, source: BoxError) -> Self {
        Self { request, response, source }
    }

    /// The request whose exchange failed.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// The partial response, when the transport produced one.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Decomposes the error into request, optional response and cause.
    pub fn into_parts(self) -> (Request, Option<Response>, BoxError) {
        (self.request, self.response, self.source)
    }
}

/// Everything that can go wrong inside [`Client::send`](crate::client::Client::send).
#[derive(Debug, Error)]
pub enum SendError {
    /// The transport's request factory rejected the transformed request.
    /// Passed through as-is, without request/response context.
    #[error("failed to build transport request: {0}")]
    BuildRequest(#[source] BoxError),

    /// The transport-native response did not translate into a valid
    /// [`Response`](crate::protocol::Response).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Request(#[from] RequestError),
}
