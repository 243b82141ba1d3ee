//! HTTP response value object.
//!
//! A [`Response`] is normally constructed by the client adapter from a
//! transport-native response, but callers can build synthetic responses the
//! same way (stubs, cached replies). The status code is validated against
//! the `100..=599` window at build time, and the reason phrase is derived
//! from the standard table whenever none is supplied. Both are fixed once
//! the response exists.

use http::Version;

use crate::ensure;
use crate::protocol::body::BodyStream;
use crate::protocol::error::ValidationError;
use crate::protocol::header::{HeaderBag, HeaderValues};
use crate::protocol::message::Message;
use crate::protocol::status::reason_phrase;

/// An HTTP response with a validated status code and a reason phrase.
#[derive(Debug)]
pub struct Response {
    status: u16,
    reason: String,
    version: Version,
    headers: HeaderBag,
    body: Option<BodyStream>,
}

impl Response {
    /// Starts building a response. Defaults: status 200, derived reason,
    /// version HTTP/1.1, no headers, no body.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::new()
    }

    /// The status code, within `100..=599`.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The reason phrase, as supplied or as derived from the standard table.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Consumes the response, yielding its body stream for reading.
    pub fn into_body(self) -> Option<BodyStream> {
        self.body
    }
}

impl Message for Response {
    fn version(&self) -> Version {
        self.version
    }

    fn headers(&self) -> &HeaderBag {
        &self.headers
    }

    fn body(&self) -> Option<&BodyStream> {
        self.body.as_ref()
    }
}

/// Builder for [`Response`].
#[derive(Debug)]
pub struct ResponseBuilder {
    status: u16,
    reason: Option<String>,
    version: Version,
    headers: Vec<(String, HeaderValues)>,
    body: Option<BodyStream>,
}

impl ResponseBuilder {
    fn new() -> Self {
        Self { status: 200, reason: None, version: Version::HTTP_11, headers: Vec::new(), body: None }
    }

    /// Sets the status code.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets an explicit reason phrase. An empty phrase counts as absent and
    /// is replaced by the derived one at `build`.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the HTTP protocol version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Adds a raw header entry, normalized together with the rest at `build`.
    pub fn header(mut self, name: impl Into<String>, values: impl Into<HeaderValues>) -> Self {
        self.headers.push((name.into(), values.into()));
        self
    }

    /// Adds a batch of raw header entries, e.g. everything a transport-native
    /// response reported.
    pub fn headers<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HeaderValues>,
    {
        self.headers.extend(entries.into_iter().map(|(name, values)| (name.into(), values.into())));
        self
    }

    /// Attaches a body stream.
    pub fn body(mut self, body: impl Into<BodyStream>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Validates and builds the response.
    ///
    /// Fails with [`ValidationError::InvalidStatusCode`] when the status is
    /// outside `100..=599`.
    pub fn build(self) -> Result<Response, ValidationError> {
        ensure!((100..=599).contains(&self.status), ValidationError::invalid_status_code(self.status));

        let reason = match self.reason {
            Some(reason) if !reason.is_empty() => reason,
            _ => reason_phrase(self.status).to_string(),
        };

        Ok(Response {
            status: self.status,
            reason,
            version: self.version,
            headers: HeaderBag::normalize(self.headers),
            body: self.body,
        })
    }
}
