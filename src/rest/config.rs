/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::OAuthSigner;
use crate::rest::api::{AUTH_ENDPOINT, OAUTH_ENDPOINT, REST_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// Client behavior and endpoint overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Return `Err(FlickrError::ApiResponse)` instead of `Ok` when Flickr reports a failure
    pub raise_exception_on_error: bool,
    pub rest_endpoint: String,
    pub auth_endpoint: String,
    pub oauth_endpoint: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            raise_exception_on_error: false,
            rest_endpoint: REST_ENDPOINT.into(),
            auth_endpoint: AUTH_ENDPOINT.into(),
            oauth_endpoint: OAUTH_ENDPOINT.into(),
        }
    }
}

/// An OAuth request or access token with its secret
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub token: String,
    pub secret: String,
}

impl Token {
    pub fn new(token: &str, secret: &str) -> Self {
        Self {
            token: token.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &self.token)
            .field("secret", &"xxx")
            .finish()
    }
}

/// Credentials for talking to Flickr.
///
/// The API key is required for every call. For legacy signed calls a shared
/// secret is needed. OAuth calls use the API key as the consumer key together
/// with the consumer secret and an access token. OAuth is in effect as soon
/// as an access token is present.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    shared_secret: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<Token>,
}

impl Creds {
    /// Credentials for the legacy shared-secret signing
    pub fn from_shared_secret(api_key: &str, shared_secret: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            shared_secret: shared_secret.map(Into::into),
            ..Default::default()
        }
    }

    /// OAuth credentials. The access token only takes effect when both the
    /// token and its secret are given.
    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            api_key: consumer_key.into(),
            shared_secret: None,
            consumer_secret: consumer_secret.map(Into::into),
            access_token: access_token
                .zip(token_secret)
                .map(|(token, secret)| Token::new(token, secret)),
        }
    }

    pub fn with_shared_secret(mut self, shared_secret: &str) -> Self {
        self.shared_secret = Some(shared_secret.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn access_token(&self) -> Option<&Token> {
        self.access_token.as_ref()
    }

    pub fn is_oauth(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn shared_secret(&self) -> &str {
        self.shared_secret.as_deref().unwrap_or_default()
    }

    pub(crate) fn set_access_token(&mut self, token: Token) {
        self.access_token = Some(token);
    }

    /// Signer bound to the given token (or to the consumer only)
    pub(crate) fn signer(&self, token: Option<Token>) -> OAuthSigner {
        OAuthSigner::new(
            &self.api_key,
            self.consumer_secret.as_deref().unwrap_or_default(),
            token,
        )
    }

    /// Signer bound to the access token, when OAuth is in effect
    pub(crate) fn access_signer(&self) -> Option<OAuthSigner> {
        self.access_token
            .as_ref()
            .map(|token| self.signer(Some(token.clone())))
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &self.api_key)
            .field("shared_secret", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("access_token", &self.access_token)
            .finish()
    }
}

static DEFAULTS: RwLock<Option<(Creds, Options)>> = RwLock::new(None);

/// Registers process-wide default credentials and options used by
/// [`Client::from_defaults`](crate::rest::Client::from_defaults).
///
/// The application owns this state; it is only read when a client is constructed.
pub fn set_defaults(creds: Creds, options: Options) {
    *DEFAULTS.write().unwrap_or_else(PoisonError::into_inner) = Some((creds, options));
}

/// Removes any registered defaults
pub fn clear_defaults() {
    *DEFAULTS.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns a copy of the registered defaults
pub fn defaults() -> Option<(Creds, Options)> {
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
