//! Message body streams with explicit ownership transfer.
//!
//! A [`BodyStream`] owns at most one raw byte-stream handle. The handle is a
//! boxed [`AsyncRead`], which is the lowest common denominator between the
//! transports this crate adapts: an in-memory buffer, a socket half, or a
//! transport-native body reader all fit behind it.
//!
//! Exactly one component owns the raw handle at a time. [`BodyStream::detach`]
//! transfers it out, leaving the stream empty; this is how a request body is
//! handed to the transport and how a transport body is taken over by a
//! response. Whoever holds the detached handle manages read/close from then
//! on.

use std::fmt;
use std::io::{self, Cursor};

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

/// The raw byte-stream handle moved across the transport boundary.
pub type RawBody = Box<dyn AsyncRead + Send + Unpin>;

/// Owned wrapper around an optional raw body handle.
pub struct BodyStream {
    handle: Option<RawBody>,
}

impl BodyStream {
    /// Wraps a readable handle into a stream that owns it.
    pub fn new<R>(handle: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        Self { handle: Some(Box::new(handle)) }
    }

    /// Wraps an already-boxed raw handle.
    pub fn from_raw(handle: RawBody) -> Self {
        Self { handle: Some(handle) }
    }

    /// Transfers the raw handle out of this stream.
    ///
    /// After a detach the stream holds nothing; a second detach returns
    /// `None` rather than panicking.
    pub fn detach(&mut self) -> Option<RawBody> {
        self.handle.take()
    }

    /// Returns true once the raw handle has been transferred out.
    pub fn is_detached(&self) -> bool {
        self.handle.is_none()
    }

    /// Drains the stream into a single buffer.
    ///
    /// An already-detached stream collects to an empty buffer.
    pub async fn collect(mut self) -> io::Result<Bytes> {
        let Some(mut handle) = self.handle.take() else {
            return Ok(Bytes::new());
        };

        let mut buf = Vec::new();
        handle.read_to_end(&mut buf).await?;
        Ok(buf.into())
    }
}

impl From<Bytes> for BodyStream {
    fn from(bytes: Bytes) -> Self {
        Self::new(Cursor::new(bytes))
    }
}

impl From<Vec<u8>> for BodyStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(Bytes::from(bytes))
    }
}

impl From<String> for BodyStream {
    fn from(body: String) -> Self {
        Self::from(Bytes::from(body))
    }
}

impl From<&'static str> for BodyStream {
    fn from(body: &'static str) -> Self {
        Self::from(Bytes::from_static(body.as_bytes()))
    }
}

impl fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyStream").field("detached", &self.is_detached()).finish()
    }
}
