//! A transport-agnostic HTTP message model and client adapter
//!
//! This crate defines HTTP requests and responses as plain, immutable value
//! objects — normalized headers, validated status codes, standard reason
//! phrases, explicit body-stream ownership — and an adapter that maps those
//! value objects onto whatever concrete HTTP transport actually performs the
//! network I/O.
//!
//! # Features
//!
//! - Case-insensitive, order-preserving header normalization
//! - Status-code validation with derived standard reason phrases
//! - Body streams with explicit detach/ownership-transfer semantics
//! - A three-operation transport capability, injected at construction
//! - Failures as values: transport errors come back enriched with the
//!   request and any partial response, never as panics
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use courier_http::client::{
//!     BoxError, Client, NativeResponse, RequestOptions, Transport, TransportFailure,
//! };
//! use courier_http::protocol::{RawBody, Request};
//! use http::{Method, Uri, Version};
//!
//! /// A transport that answers every exchange itself instead of going to
//! /// the network. Real deployments put an actual HTTP implementation here.
//! struct Loopback;
//!
//! struct LoopbackRequest;
//! struct LoopbackResponse;
//!
//! impl NativeResponse for LoopbackResponse {
//!     fn status(&self) -> u16 {
//!         200
//!     }
//!
//!     fn version(&self) -> Version {
//!         Version::HTTP_11
//!     }
//!
//!     fn headers(&self) -> Vec<(String, Vec<String>)> {
//!         Vec::new()
//!     }
//!
//!     fn take_body(&mut self) -> Option<RawBody> {
//!         None
//!     }
//! }
//!
//! #[async_trait]
//! impl Transport for Loopback {
//!     type Request = LoopbackRequest;
//!     type Response = LoopbackResponse;
//!     type Error = BoxError;
//!
//!     fn new_request(
//!         &self,
//!         _method: Method,
//!         _url: Uri,
//!         _options: RequestOptions,
//!     ) -> Result<Self::Request, Self::Error> {
//!         Ok(LoopbackRequest)
//!     }
//!
//!     async fn send(
//!         &self,
//!         _request: Self::Request,
//!     ) -> Result<Self::Response, TransportFailure<Self::Response>> {
//!         Ok(LoopbackResponse)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     tracing_subscriber::fmt().init();
//!
//!     let client = Client::new(Loopback);
//!     let request = Request::builder().url("http://foo.com").build().unwrap();
//!
//!     match client.send(request).await {
//!         Ok(Some(response)) => {
//!             tracing::info!(status = response.status(), reason = response.reason(), "done");
//!         }
//!         Ok(None) => tracing::info!("transport produced no response"),
//!         Err(e) => tracing::error!(cause = %e, "exchange failed"),
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: the message vocabulary — [`protocol::Request`],
//!   [`protocol::Response`], [`protocol::HeaderBag`],
//!   [`protocol::BodyStream`] and their validation rules
//! - [`client`]: the active side — the [`client::Transport`] capability and
//!   the [`client::Client`] adapter translating between the two worlds
//!
//! # Division of labor
//!
//! This crate owns message semantics: header normalization, status
//! validation, reason derivation, body-handle lifecycle, and error
//! translation. Everything about actually moving bytes — connection
//! pooling, retries, TLS, timeouts, cancellation — belongs to the transport
//! behind the [`client::Transport`] boundary and is invoked transparently
//! through it.

pub mod client;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
