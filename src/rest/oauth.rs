/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
//! The OAuth 1.0a login flow.
//!
//! 1. [`Client::fetch_request_token`] with the app's callback url
//! 2. Send the user to [`Client::authorize_url`]
//! 3. Flickr redirects back to the callback with an `oauth_verifier`, which
//!    [`Client::fetch_access_token`] exchanges for the access token
//!
//! Persisting the access token between runs is up to the application.

use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_form_reply;
use crate::rest::signing::encode;
use crate::rest::{Client, HttpMethod, Permission, Token, Transport};
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

const REQUEST_TOKEN_PATH: &str = "request_token";
const AUTHORIZE_PATH: &str = "authorize";
const ACCESS_TOKEN_PATH: &str = "access_token";

/// The access token along with the user it was granted for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    pub token: Token,
    pub user_nsid: Option<String>,
    pub username: Option<String>,
    pub fullname: Option<String>,
}

impl<T: Transport> Client<T> {
    /// Obtains a request token from Flickr. The user is sent back to
    /// `callback_url` after authorizing the app.
    pub async fn fetch_request_token(&mut self, callback_url: &str) -> Result<&Token, FlickrError> {
        let url = self.oauth_url(REQUEST_TOKEN_PATH)?;
        let url = self.creds.signer(None).sign_url_with(
            HttpMethod::Get,
            url.as_str(),
            &[("oauth_callback", callback_url)],
        )?;
        debug!("Fetching OAuth request token");
        let mut reply = from_form_reply(&self.transport.get(&url).await?);
        let token = token_from_reply(&mut reply)?;
        Ok(&*self.request_token.insert(token))
    }

    /// URL to send the user to for authorizing the app with `perms`
    /// (one of `read`, `write`, `delete`)
    pub fn authorize_url(&self, perms: &str) -> Result<String, FlickrError> {
        let request_token = self
            .request_token
            .as_ref()
            .ok_or(FlickrError::MissingRequestToken())?;
        let perms = Permission::from_str(perms)
            .map_err(|_| FlickrError::InvalidPermission(perms.into()))?;
        let url = self.oauth_url(AUTHORIZE_PATH)?;
        Ok(format!(
            "{}?oauth_token={}&perms={}",
            url,
            encode(&request_token.token),
            perms
        ))
    }

    /// Exchanges the verifier Flickr passed to the callback for an access
    /// token. Subsequent signed calls use OAuth.
    pub async fn fetch_access_token(&mut self, verifier: &str) -> Result<AccessGrant, FlickrError> {
        let request_token = self
            .request_token
            .clone()
            .ok_or(FlickrError::MissingRequestToken())?;
        let url = self.oauth_url(ACCESS_TOKEN_PATH)?;
        let url = self.creds.signer(Some(request_token)).sign_url_with(
            HttpMethod::Get,
            url.as_str(),
            &[("oauth_verifier", verifier)],
        )?;
        debug!("Exchanging OAuth verifier for an access token");
        let mut reply = from_form_reply(&self.transport.get(&url).await?);
        let grant = AccessGrant {
            token: token_from_reply(&mut reply)?,
            user_nsid: reply.remove("user_nsid"),
            username: reply.remove("username"),
            fullname: reply.remove("fullname"),
        };
        self.creds.set_access_token(grant.token.clone());
        Ok(grant)
    }

    fn oauth_url(&self, path: &str) -> Result<url::Url, FlickrError> {
        Ok(url::Url::parse(&self.options.oauth_endpoint)?.join(path)?)
    }
}

fn token_from_reply(reply: &mut HashMap<String, String>) -> Result<Token, FlickrError> {
    match (reply.remove("oauth_token"), reply.remove("oauth_token_secret")) {
        (Some(token), Some(secret)) => Ok(Token { token, secret }),
        _ => Err(FlickrError::Auth(format!(
            "token missing from reply: {:?}",
            reply.get("oauth_problem")
        ))),
    }
}
