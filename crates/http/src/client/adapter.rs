//! The adapter between abstract messages and a concrete transport.
//!
//! [`Client`] owns a single transport handle, read-only after construction,
//! and keeps no other state. Each [`Client::send`] call is one pass through
//! transform → dispatch → translate:
//!
//! 1. the abstract [`Request`] is turned into a transport-native request via
//!    the transport's own factory, with the body handle detached and handed
//!    over when one is present;
//! 2. the transport performs the exchange;
//! 3. the native result is translated back — a native response becomes an
//!    abstract [`Response`], a native failure becomes a [`RequestError`]
//!    carrying the request, any partial response, and the native error as
//!    its source.
//!
//! Concurrent `send` calls on one `Client` are as safe as the underlying
//! transport makes them; nothing is shared at this level.

use tracing::{debug, error};

use crate::client::error::{RequestError, SendError};
use crate::client::transport::{NativeResponse, RequestOptions, Transport};
use crate::protocol::{BodyStream, Message, Request, Response, ValidationError};

/// HTTP client adapter over an injected [`Transport`].
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Wraps a transport. The transport is the adapter's only state.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs one exchange.
    ///
    /// Returns `Ok(None)` only when the transport completed without
    /// producing a response object (see [`Client::transform_response`]).
    /// Fails with [`SendError::Request`] when the transport could not
    /// complete the exchange; the error carries the attempted request, the
    /// translated partial response if one exists, and the transport-native
    /// error as its source. No retries happen here and no state survives
    /// the call.
    pub async fn send(&self, mut request: Request) -> Result<Option<Response>, SendError> {
        debug!(method = %request.method(), url = %request.url(), "dispatching request");

        let native_request =
            self.transform_request(&mut request).map_err(|e| SendError::BuildRequest(e.into()))?;

        match self.transport.send(native_request).await {
            Ok(native_response) => Ok(self.transform_response(Some(native_response))?),
            Err(failure) => {
                error!(url = %request.url(), cause = %failure.source, "transport failed to complete the exchange");
                // A partial response that itself fails translation must not
                // mask the transport failure; it is dropped instead.
                let response = self.transform_response(failure.response).ok().flatten();
                Err(RequestError::new(request, response, failure.source).into())
            }
        }
    }

    /// Transforms an abstract request into the transport's native form.
    ///
    /// The request's method, URL, version and normalized headers are passed
    /// to the transport's factory. A present body has its raw handle
    /// detached and handed over; an absent body leaves `options.body` as
    /// `None`. Factory failures propagate unmodified.
    pub fn transform_request(&self, request: &mut Request) -> Result<T::Request, T::Error> {
        let options = RequestOptions {
            version: request.version(),
            headers: request.headers().clone(),
            body: request.detach_body(),
        };

        self.transport.new_request(request.method().clone(), request.url().clone(), options)
    }

    /// Translates an optional transport-native response.
    ///
    /// `None` in, `None` out: a transport that produced no response object
    /// is not an error at this level. Otherwise status, version and headers
    /// are read off the native response, its body handle (if any) is wrapped
    /// into a new [`BodyStream`] that takes ownership, and the reason phrase
    /// is always derived from the status table, never taken from the wire.
    pub fn transform_response(
        &self,
        native: Option<T::Response>,
    ) -> Result<Option<Response>, ValidationError> {
        let Some(mut native) = native else {
            return Ok(None);
        };

        let mut builder = Response::builder()
            .status(native.status())
            .version(native.version())
            .headers(native.headers());

        if let Some(handle) = native.take_body() {
            builder = builder.body(BodyStream::from_raw(handle));
        }

        builder.build().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use http::{Method, Uri, Version};

    use super::*;
    use crate::client::BoxError;
    use crate::client::transport::TransportFailure;
    use crate::protocol::RawBody;

    /// Native request type shared by the test transports.
    struct StubRequest {
        method: Method,
        url: Uri,
        options: RequestOptions,
    }

    /// Native response type shared by the test transports.
    struct StubResponse {
        status: u16,
        version: Version,
        headers: Vec<(String, Vec<String>)>,
        body: Option<RawBody>,
    }

    impl StubResponse {
        fn new(status: u16) -> Self {
            Self { status, version: Version::HTTP_11, headers: Vec::new(), body: None }
        }

        fn with_header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), vec![value.to_string()]));
            self
        }

        fn with_body(mut self, body: &'static str) -> Self {
            self.body = Some(Box::new(std::io::Cursor::new(body.as_bytes())));
            self
        }
    }

    impl NativeResponse for StubResponse {
        fn status(&self) -> u16 {
            self.status
        }

        fn version(&self) -> Version {
            self.version
        }

        fn headers(&self) -> Vec<(String, Vec<String>)> {
            self.headers.clone()
        }

        fn take_body(&mut self) -> Option<RawBody> {
            self.body.take()
        }
    }

    /// Answers every exchange with a canned response.
    struct StubTransport<F: Fn() -> StubResponse> {
        respond: F,
    }

    #[async_trait]
    impl<F> Transport for StubTransport<F>
    where
        F: Fn() -> StubResponse + Send + Sync,
    {
        type Request = StubRequest;
        type Response = StubResponse;
        type Error = BoxError;

        fn new_request(
            &self,
            method: Method,
            url: Uri,
            options: RequestOptions,
        ) -> Result<Self::Request, Self::Error> {
            Ok(StubRequest { method, url, options })
        }

        async fn send(&self, _request: Self::Request) -> Result<Self::Response, TransportFailure<Self::Response>> {
            Ok((self.respond)())
        }
    }

    /// Fails every exchange, optionally with a partial response in hand.
    struct FailingTransport {
        partial_status: Option<u16>,
    }

    #[async_trait]
    impl Transport for FailingTransport {
        type Request = StubRequest;
        type Response = StubResponse;
        type Error = BoxError;

        fn new_request(
            &self,
            method: Method,
            url: Uri,
            options: RequestOptions,
        ) -> Result<Self::Request, Self::Error> {
            Ok(StubRequest { method, url, options })
        }

        async fn send(&self, _request: Self::Request) -> Result<Self::Response, TransportFailure<Self::Response>> {
            let failure = TransportFailure::new("connection reset by peer");
            match self.partial_status {
                Some(status) => Err(failure.with_response(StubResponse::new(status))),
                None => Err(failure),
            }
        }
    }

    /// Rejects every request at the factory.
    struct RejectingTransport;

    #[async_trait]
    impl Transport for RejectingTransport {
        type Request = StubRequest;
        type Response = StubResponse;
        type Error = BoxError;

        fn new_request(
            &self,
            _method: Method,
            _url: Uri,
            _options: RequestOptions,
        ) -> Result<Self::Request, Self::Error> {
            Err("unsupported scheme".into())
        }

        async fn send(&self, _request: Self::Request) -> Result<Self::Response, TransportFailure<Self::Response>> {
            unreachable!("factory always rejects")
        }
    }

    fn get_request(url: &str) -> Request {
        Request::builder().url(url).build().unwrap()
    }

    #[tokio::test]
    async fn round_trip_translates_the_native_response() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(200) });

        let response = client.send(get_request("http://foo.com")).await.unwrap().unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.reason(), "OK");
        assert_eq!(response.version(), Version::HTTP_11);
        assert!(response.headers().is_empty());
        assert!(response.body().is_none());
    }

    #[tokio::test]
    async fn native_headers_and_body_are_carried_over() {
        let client = Client::new(StubTransport {
            respond: || StubResponse::new(200).with_header("Content-Type", "text/plain").with_body("hi"),
        });

        let response = client.send(get_request("http://foo.com")).await.unwrap().unwrap();

        assert_eq!(response.header("content-type"), Some("text/plain"));
        let body = response.body().unwrap();
        assert!(!body.is_detached());
    }

    #[tokio::test]
    async fn reason_is_derived_not_transport_supplied() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(209) });

        let response = client.send(get_request("http://foo.com")).await.unwrap().unwrap();

        assert_eq!(response.reason(), "Unknown");
    }

    #[tokio::test]
    async fn out_of_range_native_status_fails_validation() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(600) });

        let err = client.send(get_request("http://foo.com")).await.unwrap_err();

        assert!(matches!(err, SendError::Validation(ValidationError::InvalidStatusCode { code: 600 })));
    }

    #[tokio::test]
    async fn transport_failure_is_wrapped_with_request_context() {
        let client = Client::new(FailingTransport { partial_status: None });

        let err = client.send(get_request("http://foo.com/path")).await.unwrap_err();

        let err = match err {
            SendError::Request(err) => err,
            other => panic!("expected a request error, got {other:?}"),
        };
        assert_eq!(err.request().url().to_string(), "http://foo.com/path");
        assert!(err.response().is_none());
        let (_, _, source) = err.into_parts();
        assert_eq!(source.to_string(), "connection reset by peer");
    }

    #[tokio::test]
    async fn partial_native_response_is_translated_into_the_failure() {
        let client = Client::new(FailingTransport { partial_status: Some(502) });

        let err = client.send(get_request("http://foo.com")).await.unwrap_err();

        let err = match err {
            SendError::Request(err) => err,
            other => panic!("expected a request error, got {other:?}"),
        };
        let response = err.response().unwrap();
        assert_eq!(response.status(), 502);
        assert_eq!(response.reason(), "Bad Gateway");
    }

    #[tokio::test]
    async fn untranslatable_partial_response_does_not_mask_the_failure() {
        let client = Client::new(FailingTransport { partial_status: Some(42) });

        let err = client.send(get_request("http://foo.com")).await.unwrap_err();

        let err = match err {
            SendError::Request(err) => err,
            other => panic!("expected a request error, got {other:?}"),
        };
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn factory_failure_passes_through_unwrapped() {
        let client = Client::new(RejectingTransport);

        let err = client.send(get_request("http://foo.com")).await.unwrap_err();

        let source = match err {
            SendError::BuildRequest(source) => source,
            other => panic!("expected a factory failure, got {other:?}"),
        };
        assert_eq!(source.to_string(), "unsupported scheme");
    }

    #[test]
    fn transform_omits_body_option_for_bodyless_request() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(200) });
        let mut request = get_request("http://foo.com");

        let native = client.transform_request(&mut request).unwrap();

        assert!(native.options.body.is_none());
        assert_eq!(native.method, Method::GET);
        assert_eq!(native.url.to_string(), "http://foo.com/");
        assert_eq!(native.options.version, Version::HTTP_11);
        assert!(native.options.headers.is_empty());
    }

    #[test]
    fn transform_detaches_a_present_body_into_the_options() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(200) });
        let mut request = Request::builder()
            .method("POST")
            .url("http://foo.com/upload")
            .header("Content-Type", "application/octet-stream")
            .body("bytes")
            .build()
            .unwrap();

        let native = client.transform_request(&mut request).unwrap();

        assert!(native.options.body.is_some());
        assert!(request.body().is_some_and(BodyStream::is_detached));
        assert_eq!(native.options.headers.first("content-type"), Some("application/octet-stream"));
    }

    #[test]
    fn transform_response_short_circuits_on_absent_native_response() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(200) });

        let translated = client.transform_response(None).unwrap();

        assert!(translated.is_none());
    }

    #[tokio::test]
    async fn translated_body_collects_to_the_native_payload() {
        let client = Client::new(StubTransport { respond: || StubResponse::new(200).with_body("hello") });

        let response = client.send(get_request("http://foo.com")).await.unwrap().unwrap();

        // ownership of the native handle moved into the abstract response
        let body = response.into_body().unwrap();
        let bytes = body.collect().await.unwrap();
        assert_eq!(&bytes[..], b"hello");
    }
}
