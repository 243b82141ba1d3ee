//! The transport capability consumed by the client adapter.
//!
//! A [`Transport`] is the concrete HTTP implementation doing the actual
//! network I/O. It is injected into the [`Client`](crate::client::Client) at
//! construction and accessed through exactly three capabilities: a request
//! factory, an async dispatch, and a readable native response. Pooling,
//! retries, TLS, timeouts and cancellation all live behind this boundary;
//! the adapter never looks at them.

use std::fmt;

use async_trait::async_trait;
use http::{Method, Uri, Version};

use crate::client::BoxError;
use crate::protocol::{HeaderBag, RawBody};

/// Options handed to the transport's request factory alongside method and
/// URL.
///
/// `body` is `None` for a bodyless request. The transport must treat absence
/// as "no body", never as an empty payload.
pub struct RequestOptions {
    /// HTTP protocol version to use for the exchange.
    pub version: Version,
    /// The fully normalized header mapping.
    pub headers: HeaderBag,
    /// Detached raw body handle, when the request carries one.
    pub body: Option<RawBody>,
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("version", &self.version)
            .field("headers", &self.headers)
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// Failure signal of [`Transport::send`].
///
/// Carries whatever partial native response the transport managed to
/// produce before failing, plus the transport-native error itself.
pub struct TransportFailure<R> {
    /// Partial native response, when the exchange got far enough to have one.
    pub response: Option<R>,
    /// The transport-native error.
    pub source: BoxError,
}

impl<R> TransportFailure<R> {
    /// A failure that produced no response at all.
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self { response: None, source: source.into() }
    }

    /// Attaches the partial native response the transport had in hand when
    /// it failed.
    pub fn with_response(mut self, response: R) -> Self {
        self.response = Some(response);
        self
    }
}

impl<R> fmt::Debug for TransportFailure<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportFailure")
            .field("response", &self.response.is_some())
            .field("source", &self.source)
            .finish()
    }
}

/// Read access to a transport-native response.
///
/// The adapter only ever needs these four views to translate a native
/// response into a [`Response`](crate::protocol::Response). The reason
/// phrase is deliberately not part of the contract: phrases are
/// standardized and derived on our side, never taken from the wire.
pub trait NativeResponse {
    /// Status code as reported by the transport.
    fn status(&self) -> u16;

    /// Protocol version of the exchange.
    fn version(&self) -> Version;

    /// Header entries as reported by the transport, values in wire order.
    fn headers(&self) -> Vec<(String, Vec<String>)>;

    /// Transfers the native body handle out, if the response has one.
    ///
    /// Called at most once per response; the returned handle is owned by the
    /// caller from then on.
    fn take_body(&mut self) -> Option<RawBody>;
}

/// A concrete HTTP transport implementation.
#[async_trait]
pub trait Transport {
    /// The transport's native request handle.
    type Request: Send;
    /// The transport's native response handle.
    type Response: NativeResponse + Send;
    /// The transport's request-construction error.
    type Error: Into<BoxError> + Send;

    /// Builds a native request from method, URL and options.
    fn new_request(
        &self,
        method: Method,
        url: Uri,
        options: RequestOptions,
    ) -> Result<Self::Request, Self::Error>;

    /// Performs the exchange. Blocks the calling task until the transport
    /// completes or fails; no retries happen at this level.
    async fn send(&self, request: Self::Request) -> Result<Self::Response, TransportFailure<Self::Response>>;
}
