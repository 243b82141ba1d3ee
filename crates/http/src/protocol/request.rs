//! HTTP request value object.
//!
//! A [`Request`] is built once through [`RequestBuilder`] and not mutated
//! afterward; callers wanting a different request build a new one. The only
//! post-construction state change is [`Request::detach_body`], which
//! transfers the raw body handle out when the request is handed to a
//! transport.

use http::{Method, Uri, Version};

use crate::ensure;
use crate::protocol::body::{BodyStream, RawBody};
use crate::protocol::error::ValidationError;
use crate::protocol::header::{HeaderBag, HeaderValues};
use crate::protocol::message::Message;

/// An HTTP request with an absolute target URL.
#[derive(Debug)]
pub struct Request {
    method: Method,
    url: Uri,
    version: Version,
    headers: HeaderBag,
    body: Option<BodyStream>,
}

impl Request {
    /// Starts building a request. Defaults: method `GET`, version HTTP/1.1,
    /// no headers, no body. The URL must be supplied.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The absolute target URL.
    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// Transfers the raw body handle out of this request, if a body is
    /// attached and not yet detached.
    pub fn detach_body(&mut self) -> Option<RawBody> {
        self.body.as_mut().and_then(BodyStream::detach)
    }
}

impl Message for Request {
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

/// Builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
    method: String,
    url: Option<String>,
    version: Version,
    headers: Vec<(String, HeaderValues)>,
    body: Option<BodyStream>,
}

impl RequestBuilder {
    fn new() -> Self {
        Self {
            method: Method::GET.to_string(),
            url: None,
            version: Version::HTTP_11,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets the request method, standard or extension.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the absolute target URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the HTTP protocol version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Adds a raw header entry. Entries are normalized together at `build`;
    /// two names differing only in case collapse to one, last write wins.
    pub fn header(mut self, name: impl Into<String>, values: impl Into<HeaderValues>) -> Self {
        self.headers.push((name.into(), values.into()));
        self
    }

    /// Attaches a body stream.
    pub fn body(mut self, body: impl Into<BodyStream>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Validates and builds the request.
    ///
    /// Fails when the method is empty or not a valid token, when no URL was
    /// supplied, or when the URL is not absolute (a scheme and a host are
    /// required).
    pub fn build(self) -> Result<Request, ValidationError> {
        let method =
            self.method.parse::<Method>().map_err(|_| ValidationError::invalid_method(&self.method))?;

        let raw_url = self.url.ok_or_else(|| ValidationError::invalid_url("no url supplied"))?;
        let url = raw_url.parse::<Uri>().map_err(ValidationError::invalid_url)?;
        ensure!(
            url.scheme().is_some() && url.host().is_some(),
            ValidationError::invalid_url(format!("not an absolute url: {raw_url}"))
        );

        Ok(Request {
            method,
            url,
            version: self.version,
            headers: HeaderBag::normalize(self.headers),
            body: self.body,
        })
    }
}
