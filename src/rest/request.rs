/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::signing::{encode, sign_legacy};
use crate::rest::{HttpMethod, OAuthSigner};

const API_KEY_KEY: &str = "api_key";
const METHOD_KEY: &str = "method";
const API_SIG_KEY: &str = "api_sig";
const AUTH_TOKEN_KEY: &str = "auth_token";
const AUTH_MARKER: &str = "auth";
const POST_MARKER: &str = "post";

/// Parameters for a Flickr method call.
///
/// Keeps insertion order, which is the order they are emitted in the query
/// string. Values are stored in their string form so the signature and the
/// emitted request always agree. The `auth` and `post` markers are flags on
/// the call rather than entries and are never sent to Flickr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
    auth: bool,
    post: bool,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Marks the call as one that must be signed
    pub fn signed(mut self) -> Self {
        self.auth = true;
        self
    }

    /// Marks the call to be sent as a form POST
    pub fn post(mut self) -> Self {
        self.post = true;
        self
    }

    /// Inserts or replaces a value, returning the previous one.
    ///
    /// The `auth` and `post` keys set the corresponding call flags instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        let key = key.into();
        let value = value.to_string();
        match key.as_str() {
            AUTH_MARKER => {
                self.auth = is_flag_set(&value);
                return None;
            }
            POST_MARKER => {
                self.post = is_flag_set(&value);
                return None;
            }
            _ => {}
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn is_auth(&self) -> bool {
        self.auth
    }

    pub fn is_post(&self) -> bool {
        self.post
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // Same entries with the call flags cleared
    fn into_body(self) -> Self {
        Self {
            entries: self.entries,
            auth: false,
            post: false,
        }
    }
}

impl<K: Into<String>, V: ToString> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

fn is_flag_set(value: &str) -> bool {
    !matches!(value, "false" | "0")
}

/// How a request gets signed
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    /// MD5 `api_sig` with the shared secret, applied when the call asks for it
    Legacy { shared_secret: &'a str },
    /// OAuth 1.0a with an access token, applied when the call asks for it
    OAuth(&'a OAuthSigner),
}

/// A fully built request ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub url: String,
    pub method: HttpMethod,
    /// Form body for POST requests, not percent-encoded
    pub body: Option<Params>,
}

/// Builds the request for calling `method` on the REST `endpoint`.
///
/// `format=json` and `nojsoncallback=1` are always added. Signing is applied
/// per the [`Auth`] mode when the params are marked as signed (or, for the
/// legacy scheme, carry an `auth_token`).
pub fn build(
    endpoint: &str,
    api_key: &str,
    method: &str,
    mut params: Params,
    auth: Auth<'_>,
) -> Result<SignedRequest, FlickrError> {
    params.insert("format", "json");
    params.insert("nojsoncallback", 1);

    match auth {
        Auth::OAuth(signer) if params.is_auth() => {
            if params.is_post() {
                params.insert(METHOD_KEY, method);
                let body = signer.sign_form(HttpMethod::Post, endpoint, &params.into_body())?;
                Ok(SignedRequest {
                    url: endpoint.into(),
                    method: HttpMethod::Post,
                    body: Some(body),
                })
            } else {
                let url = query_url(endpoint, api_key, method, &params);
                Ok(SignedRequest {
                    url: signer.sign_url(HttpMethod::Get, &url)?,
                    method: HttpMethod::Get,
                    body: None,
                })
            }
        }
        Auth::OAuth(_) => Ok(unsigned(endpoint, api_key, method, params)),
        Auth::Legacy { shared_secret } => {
            if params.is_auth() || params.contains_key(AUTH_TOKEN_KEY) {
                let mut sig_params = params.clone();
                sig_params.insert(METHOD_KEY, method);
                sig_params.insert(API_KEY_KEY, api_key);
                let sig = sign_legacy(shared_secret, sig_params.iter());
                params.insert(API_SIG_KEY, sig);
            }
            Ok(unsigned(endpoint, api_key, method, params))
        }
    }
}

// Emits the params as is, with api_key and method first
fn unsigned(endpoint: &str, api_key: &str, method: &str, params: Params) -> SignedRequest {
    if params.is_post() {
        let mut body = Params::from([(API_KEY_KEY, api_key), (METHOD_KEY, method)]);
        body.extend(
            params
                .iter()
                .filter(|(k, _)| *k != API_KEY_KEY && *k != METHOD_KEY),
        );
        SignedRequest {
            url: endpoint.into(),
            method: HttpMethod::Post,
            body: Some(body),
        }
    } else {
        SignedRequest {
            url: query_url(endpoint, api_key, method, &params),
            method: HttpMethod::Get,
            body: None,
        }
    }
}

fn query_url(endpoint: &str, api_key: &str, method: &str, params: &Params) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    let mut url = format!(
        "{endpoint}{sep}{API_KEY_KEY}={}&{METHOD_KEY}={}",
        encode(api_key),
        encode(method)
    );
    for (k, v) in params
        .iter()
        .filter(|(k, _)| *k != API_KEY_KEY && *k != METHOD_KEY)
    {
        url.push('&');
        url.push_str(&encode(k));
        url.push('=');
        url.push_str(&encode(v));
    }
    url
}
