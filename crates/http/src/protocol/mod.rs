//! Transport-agnostic HTTP message vocabulary.
//!
//! This module holds the value objects the rest of the crate speaks in:
//!
//! - **Headers** ([`header`]): [`HeaderBag`], the case-insensitive,
//!   order-preserving multi-value store shared by requests and responses
//! - **Bodies** ([`body`]): [`BodyStream`], an owned wrapper around a raw
//!   byte-stream handle with explicit detach semantics
//! - **Messages** ([`message`]): the [`Message`] trait both value objects
//!   implement by delegation
//! - **Requests** ([`request`]): [`Request`] and its builder
//! - **Responses** ([`response`]): [`Response`] and its builder, with
//!   status-code validation and reason-phrase derivation
//! - **Status table** ([`status`]): the read-only code → reason mapping
//! - **Errors** ([`error`]): [`ValidationError`] for construction failures
//!
//! Everything here is plain data plus validation; no I/O happens in this
//! module. The [`client`](crate::client) module maps these types onto a
//! concrete transport.

mod header;
pub use header::HeaderBag;
pub use header::HeaderValues;

pub mod body;
pub use body::BodyStream;
pub use body::RawBody;

mod message;
pub use message::Message;

mod request;
pub use request::Request;
pub use request::RequestBuilder;

mod response;
pub use response::Response;
pub use response::ResponseBuilder;

pub mod status;

mod error;
pub use error::ValidationError;
