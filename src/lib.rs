/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! A minimal client for the Flickr REST API. Methods are invoked by name and
//! the JSON response comes back as a [`rest::Response`], so any API method
//! can be called without a dedicated binding.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Call any API method by name, GET or form POST
//! - Request signing
//!     - OAuth 1.0a (HMAC-SHA1), including the request/access token exchange
//!     - Legacy shared secret signing and browser login URL
//! - Error aware response wrapper, optionally turning Flickr failures into errors
//! - Photo helpers (no network access)
//!     - Photo and buddy icon URLs
//!     - Element ids that pack a photo's attributes into one string and back
//!
//! *Persisting the OAuth access token between runs is left up to the consumer
//! of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::rest::{Client, Creds, Params, PhotoAttributes};
//!
//!async fn recent_photo_urls(
//!    api_key: &str,
//!    api_secret: &str,
//!    access_token: &str,
//!    access_token_secret: &str,
//!) -> anyhow::Result<Vec<String>> {
//!    // The API key/secret is obtained from your Flickr account
//!    // The Access Token/Secret is obtained via the OAuth flow in `rest::oauth`
//!    let client = Client::new(Creds::from_tokens(
//!        api_key,
//!        Some(api_secret),
//!        Some(access_token),
//!        Some(access_token_secret),
//!    ));
//!
//!    let rsp = client
//!        .call(
//!            "flickr.photos.getRecent",
//!            Params::from([("per_page", 10)]).signed(),
//!        )
//!        .await?;
//!    if rsp.is_error() {
//!        anyhow::bail!("{:?}", rsp.error_message());
//!    }
//!
//!    let photos: Vec<PhotoAttributes> = serde_json::from_value(rsp["photos"]["photo"].clone())?;
//!    Ok(photos.iter().map(PhotoAttributes::url).collect())
//!}
//! ```
//!
pub mod rest;
