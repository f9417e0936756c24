/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::Response;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Request token not available. Call fetch_request_token with a callback url first")]
    MissingRequestToken(),

    #[error("Invalid permission: {0}. Expected one of read, write, delete")]
    InvalidPermission(String),

    #[error("No default credentials have been registered")]
    DefaultsMissing(),

    #[error("Expected response missing: {0}")]
    ResponseMissing(String),

    #[error(
        "API Response was error: {}, msg: {}",
        .0.error_code(),
        .0.error_message().unwrap_or_default()
    )]
    ApiResponse(Box<Response>),
}
