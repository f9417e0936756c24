/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::errors::FlickrError;
use crate::rest::request::{self, Auth, SignedRequest};
use crate::rest::signing::{encode, sign_legacy};
use crate::rest::{
    Creds, HttpMethod, HttpTransport, Options, Params, Permission, Response, Token, Transport,
    config,
};
use log::{debug, trace, warn};

/// Invokes Flickr API methods.
///
/// Example
/// ```rust,no_run
/// use flickr::rest::{Client, Creds, Params};
///
/// # async fn echo() -> Result<(), flickr::rest::FlickrError> {
/// let client = Client::new(Creds::from_shared_secret("api key", None));
/// let rsp = client
///     .call("flickr.test.echo", Params::from([("text", "hello")]))
///     .await?;
/// assert!(rsp.is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    pub(crate) creds: Creds,
    pub(crate) options: Options,
    pub(crate) transport: T,
    pub(crate) request_token: Option<Token>,
}

impl Client<HttpTransport> {
    pub fn new(creds: Creds) -> Self {
        Self::with_options(creds, Options::default())
    }

    pub fn with_options(creds: Creds, options: Options) -> Self {
        Self::with_transport(creds, options, HttpTransport::new())
    }

    /// Creates a client from the process-wide defaults registered with
    /// [`config::set_defaults`]
    pub fn from_defaults() -> Result<Self, FlickrError> {
        let (creds, options) = config::defaults().ok_or(FlickrError::DefaultsMissing())?;
        Ok(Self::with_options(creds, options))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(creds: Creds, options: Options, transport: T) -> Self {
        Self {
            creds,
            options,
            transport,
            request_token: None,
        }
    }

    /// Invokes a Flickr method.
    ///
    /// Mark the params with [`Params::signed`] for calls that need
    /// authentication. With legacy credentials an `auth_token` param also
    /// causes the call to be signed. With OAuth credentials unsigned calls go
    /// out without any signature.
    ///
    /// A response Flickr flags as failed is returned as is unless
    /// [`Options::raise_exception_on_error`] is set, in which case it comes back
    /// as [`FlickrError::ApiResponse`].
    pub async fn call(&self, method: &str, params: Params) -> Result<Response, FlickrError> {
        let req = self.build_request(method, params)?;
        debug!("Invoking {} via {}", method, req.method);

        let body = match (req.method, &req.body) {
            (HttpMethod::Post, Some(form)) => self.transport.post_form(&req.url, form).await?,
            _ => self.transport.get(&req.url).await?,
        };
        trace!("{} response: {}", method, String::from_utf8_lossy(&body));

        let rsp = Response::from_slice(&body)?;
        if self.options.raise_exception_on_error && rsp.is_error() {
            warn!(
                "{} failed with {}: {}",
                method,
                rsp.error_code(),
                rsp.error_message().unwrap_or_default()
            );
            return Err(FlickrError::ApiResponse(Box::new(rsp)));
        }
        Ok(rsp)
    }

    /// Builds the request [`Client::call`] would send, without sending it
    pub fn build_request(
        &self,
        method: &str,
        params: Params,
    ) -> Result<SignedRequest, FlickrError> {
        let endpoint = &self.options.rest_endpoint;
        let api_key = self.creds.api_key();
        match self.creds.access_signer() {
            Some(signer) => request::build(endpoint, api_key, method, params, Auth::OAuth(&signer)),
            None => request::build(
                endpoint,
                api_key,
                method,
                params,
                Auth::Legacy {
                    shared_secret: self.creds.shared_secret(),
                },
            ),
        }
    }

    /// Legacy browser login URL. Flickr sends the user back to the app's
    /// callback with a frob to exchange for an auth token.
    ///
    /// Superseded by the OAuth flow ([`Client::fetch_request_token`]).
    pub fn login_url(&self, permission: Permission, frob: Option<&str>) -> String {
        let perms: &'static str = permission.into();
        let mut pairs = vec![("api_key", self.creds.api_key()), ("perms", perms)];
        if let Some(frob) = frob {
            pairs.push(("frob", frob));
        }
        let sig = sign_legacy(self.creds.shared_secret(), pairs.iter().copied());
        let query = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}&api_sig={}", self.options.auth_endpoint, query, sig)
    }

    /// True once calls can be OAuth signed
    pub fn is_using_oauth(&self) -> bool {
        self.creds.is_oauth()
    }

    pub fn access_token(&self) -> Option<&Token> {
        self.creds.access_token()
    }

    pub fn request_token(&self) -> Option<&Token> {
        self.request_token.as_ref()
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
