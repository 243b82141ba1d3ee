//! Shared accessors for HTTP messages.
//!
//! Requests and responses share protocol version, headers and an optional
//! body. That sharing is expressed as a trait implemented by both value
//! objects through delegation to fields they own, not through a common base
//! struct.

use http::Version;

use crate::protocol::body::BodyStream;
use crate::protocol::header::HeaderBag;

/// Common surface of [`Request`](crate::protocol::Request) and
/// [`Response`](crate::protocol::Response).
pub trait Message {
    /// The HTTP protocol version of this message.
    fn version(&self) -> Version;

    /// The normalized header bag of this message.
    fn headers(&self) -> &HeaderBag;

    /// The message body, if one is attached.
    ///
    /// A present body may be open or already detached; detachment is part of
    /// the normal body hand-off lifecycle.
    fn body(&self) -> Option<&BodyStream>;

    /// First value of the named header, matching case-insensitively.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().first(name)
    }
}
