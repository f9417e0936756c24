/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::Params;
use crate::rest::errors::FlickrError;
use async_trait::async_trait;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

// Flickr API endpoints
pub const REST_ENDPOINT: &str = "http://api.flickr.com/services/rest/";
pub const AUTH_ENDPOINT: &str = "http://flickr.com/services/auth/";
pub const OAUTH_ENDPOINT: &str = "http://www.flickr.com/services/oauth/";

/// Carries built requests to Flickr and hands back the raw response body.
///
/// Errors are passed through as is. Implement this to plug in another HTTP
/// stack or to stub Flickr out in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET of a fully built URL
    async fn get(&self, url: &str) -> Result<Bytes, FlickrError>;

    /// POSTs `form` as `application/x-www-form-urlencoded`. The values are
    /// not encoded yet; the transport does it.
    async fn post_form(&self, url: &str, form: &Params) -> Result<Bytes, FlickrError>;
}

/// Default [`Transport`] on top of reqwest
#[derive(Default, Clone)]
pub struct HttpTransport {
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured reqwest client (timeouts, proxies, ...)
    pub fn with_client(https_client: reqwest::Client) -> Self {
        Self { https_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Bytes, FlickrError> {
        let resp = self
            .https_client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Ok(resp.bytes().await?)
    }

    async fn post_form(&self, url: &str, form: &Params) -> Result<Bytes, FlickrError> {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form.iter())
            .finish();
        let resp = self
            .https_client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;
        Ok(resp.bytes().await?)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish()
    }
}

/// API-wide error codes per the Flickr API site. Individual methods add their own
/// codes below 95.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}
