//! Client adapter over an injected HTTP transport.
//!
//! This module is the active half of the crate. It consists of:
//!
//! - **Transport boundary** ([`transport`]): the [`Transport`] capability a
//!   concrete HTTP implementation must satisfy — a request factory, an async
//!   dispatch, and readable native responses ([`NativeResponse`])
//! - **Adapter** ([`adapter`]): [`Client`], translating abstract
//!   [`Request`](crate::protocol::Request)s into native requests and native
//!   results back into abstract
//!   [`Response`](crate::protocol::Response)s
//! - **Error translation** ([`error`]): [`RequestError`] enriching transport
//!   failures with the exchange they belong to, and [`SendError`] as the
//!   overall failure type of [`Client::send`]
//!
//! The transport is injected at construction, never looked up globally, and
//! the adapter holds no other state. Failures are values end to end; a
//! transport failure is enriched and returned, never recovered from here.

mod transport;
pub use transport::NativeResponse;
pub use transport::RequestOptions;
pub use transport::Transport;
pub use transport::TransportFailure;

mod adapter;
pub use adapter::Client;

mod error;
pub use error::RequestError;
pub use error::SendError;

/// Boxed error type carried across the transport boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
