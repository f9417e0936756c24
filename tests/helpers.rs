/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use flickr::rest::{FlickrError, Params, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub(crate) fn get_read_only_auth_tokens() -> anyhow::Result<flickr::rest::Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    Ok(flickr::rest::Creds::from_shared_secret(&api_key, None))
}

pub(crate) fn get_full_auth_tokens() -> anyhow::Result<flickr::rest::Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let token = std::env::var("FLICKR_ACCESS_TOKEN")?;
    let token_secret = std::env::var("FLICKR_ACCESS_TOKEN_SECRET")?;

    Ok(flickr::rest::Creds::from_tokens(
        &api_key,
        Some(&api_secret),
        Some(&token),
        Some(&token_secret),
    ))
}

/// A request as it reached the transport
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Recorded {
    Get(String),
    Post(String, Params),
}

/// Replays canned bodies and records what was sent
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    replies: Arc<Mutex<VecDeque<Bytes>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockTransport {
    pub(crate) fn replying(replies: &[&str]) -> Self {
        let mock = Self::default();
        mock.replies
            .lock()
            .unwrap()
            .extend(replies.iter().map(|r| Bytes::from(r.to_string())));
        mock
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_get(&self) -> String {
        match self.requests().pop() {
            Some(Recorded::Get(url)) => url,
            other => panic!("expected a GET, got {:?}", other),
        }
    }

    pub(crate) fn last_post(&self) -> (String, Params) {
        match self.requests().pop() {
            Some(Recorded::Post(url, form)) => (url, form),
            other => panic!("expected a POST, got {:?}", other),
        }
    }

    fn next_reply(&self) -> Result<Bytes, FlickrError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(FlickrError::ResponseMissing("no canned reply".into()))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Bytes, FlickrError> {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded::Get(url.to_string()));
        self.next_reply()
    }

    async fn post_form(&self, url: &str, form: &Params) -> Result<Bytes, FlickrError> {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded::Post(url.to_string(), form.clone()));
        self.next_reply()
    }
}
