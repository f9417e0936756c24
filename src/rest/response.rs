/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::ApiErrorCodes;
use crate::rest::errors::FlickrError;
use crate::rest::parsers::scalar_to_i64;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ops::Index;

const STAT_OK: &str = "ok";

/// A decoded Flickr JSON response.
///
/// Flickr reports success with `"stat": "ok"`. Failures carry `"stat": "fail"`
/// along with a numeric `code` and a `message`. The rest of the document is
/// method specific and reachable by key.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    data: Value,
}

impl Response {
    /// Decodes a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self, FlickrError> {
        Ok(Self {
            data: serde_json::from_slice(body)?,
        })
    }

    pub fn from_value(data: Value) -> Self {
        Self { data }
    }

    /// Returns true if Flickr reported success
    pub fn is_ok(&self) -> bool {
        self.data.get("stat").and_then(Value::as_str) == Some(STAT_OK)
    }

    /// Returns true if something went wrong with the method call
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Flickr's error code, 0 if none
    pub fn error_code(&self) -> i64 {
        self.data.get("code").and_then(scalar_to_i64).unwrap_or(0)
    }

    /// Flickr's error message if there is one
    pub fn error_message(&self) -> Option<&str> {
        self.data.get("message").and_then(Value::as_str)
    }

    /// The error code as one of the API-wide codes, if it is one of them
    pub fn known_error(&self) -> Option<ApiErrorCodes> {
        if !self.is_error() {
            return None;
        }
        u32::try_from(self.error_code())
            .ok()
            .and_then(|code| ApiErrorCodes::try_from(code).ok())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Deserializes the sub-document at `key`
    pub fn payload<T: DeserializeOwned>(&self, key: &str) -> Result<T, FlickrError> {
        let value = self
            .data
            .get(key)
            .ok_or_else(|| FlickrError::ResponseMissing(key.into()))?;
        Ok(T::deserialize(value)?)
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_inner(self) -> Value {
        self.data
    }
}

impl Index<&str> for Response {
    type Output = Value;

    /// Missing keys index to `Value::Null`
    fn index(&self, key: &str) -> &Value {
        &self.data[key]
    }
}

/// Flickr's `{"_content": "..."}` text wrapper, used for most string fields
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(rename = "_content")]
    pub content: String,
}
