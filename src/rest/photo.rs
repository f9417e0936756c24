/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
//! Helpers for turning Flickr photo attributes into URLs and element ids.
//!
//! An element id packs the attributes needed to rebuild a photo URL into a
//! single dash separated string (`photo-{server}-{id}-{secret}-{farm}-{size}-{format}`),
//! handy for carrying photo references through web pages. None of this
//! touches the network.
//!
//! Decoding an element id is positional. Attribute values must not contain
//! `-` themselves; this is not checked.

use crate::rest::parsers::{has_nonzero_leading_int, scalar_to_string};
use serde::Deserialize;
use serde_json::Value;

/// Host of the static photo servers, without a farm prefix
pub const PHOTO_URL_BASE: &str = "static.flickr.com";

/// Returned for users without a custom buddy icon
pub const DEFAULT_BUDDY_ICON: &str = "http://www.flickr.com/images/buddyicon.jpg";

/// Default prefix of element ids
pub const DEFAULT_PREFIX: &str = "photo";

const DEFAULT_FORMAT: &str = "jpg";
const ORIGINAL_SIZE: &str = "o";
const SEPARATOR: &str = "-";

/// The attributes of a photo needed to build its URL.
///
/// See [Flickr URLs](https://www.flickr.com/services/api/misc.urls.html).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct PhotoAttributes {
    /// Empty when the photo has no farm
    pub farm: String,
    pub server: String,
    pub id: String,
    pub secret: String,
    /// Size suffix such as `s`, `t`, `m`, `b` or `o`. Empty for the default size
    pub size: String,
    pub format: String,
    pub original_secret: Option<String>,
    pub original_format: Option<String>,
}

impl Default for PhotoAttributes {
    fn default() -> Self {
        Self {
            farm: String::new(),
            server: String::new(),
            id: String::new(),
            secret: String::new(),
            size: String::new(),
            format: DEFAULT_FORMAT.into(),
            original_secret: None,
            original_format: None,
        }
    }
}

impl PhotoAttributes {
    pub fn new(server: &str, id: &str, secret: &str) -> Self {
        Self {
            server: server.into(),
            id: id.into(),
            secret: secret.into(),
            ..Default::default()
        }
    }

    pub fn with_farm(mut self, farm: &str) -> Self {
        self.farm = farm.into();
        self
    }

    pub fn with_size(mut self, size: &str) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_original(mut self, original_secret: &str, original_format: &str) -> Self {
        self.original_secret = Some(original_secret.into());
        self.original_format = Some(original_format.into());
        self
    }

    /// Extracts the photo attributes from a Flickr photo object.
    ///
    /// Scalars of any type are taken in their string form. `format` falls back
    /// to the older `type` key and then to `jpg`; other missing fields are
    /// empty. `originalsecret`/`originalformat` are only set when present.
    pub fn normalize(v: &Value) -> Self {
        let field = |key: &str| v.get(key).and_then(scalar_to_string);
        Self {
            farm: field("farm").unwrap_or_default(),
            server: field("server").unwrap_or_default(),
            id: field("id").unwrap_or_default(),
            secret: field("secret").unwrap_or_default(),
            size: field("size").unwrap_or_default(),
            format: field("format")
                .or_else(|| field("type"))
                .unwrap_or_else(|| DEFAULT_FORMAT.into()),
            original_secret: field("originalsecret"),
            original_format: field("originalformat"),
        }
    }

    /// Rebuilds the attributes from an element id. The prefix is ignored and
    /// missing trailing fields come back empty.
    pub fn from_element_id(uid: &str) -> Self {
        let mut parts = uid.split(SEPARATOR).skip(1).map(str::to_string);
        let mut next = || parts.next().unwrap_or_default();
        Self {
            server: next(),
            id: next(),
            secret: next(),
            farm: next(),
            size: next(),
            format: next(),
            original_secret: None,
            original_format: None,
        }
    }

    /// Photo URL. The original image URL is used when the size is `o` and
    /// both original attributes are known.
    pub fn url(&self) -> String {
        let host = photo_url_base(&self.farm);
        match (&self.original_secret, &self.original_format) {
            (Some(original_secret), Some(original_format)) if self.size == ORIGINAL_SIZE => {
                format!(
                    "{host}/{}/{}_{original_secret}_{ORIGINAL_SIZE}.{original_format}",
                    self.server, self.id
                )
            }
            _ => {
                let mut url = format!("{host}/{}/{}_{}", self.server, self.id, self.secret);
                if !self.size.is_empty() {
                    url.push('_');
                    url.push_str(&self.size);
                }
                url.push('.');
                url.push_str(&self.format);
                url
            }
        }
    }

    /// Packs the attributes into `{prefix}-{server}-{id}-{secret}-{farm}-{size}-{format}`.
    /// Empty attributes stay as empty segments.
    pub fn element_id(&self, prefix: &str) -> String {
        [
            prefix,
            self.server.as_str(),
            self.id.as_str(),
            self.secret.as_str(),
            self.farm.as_str(),
            self.size.as_str(),
            self.format.as_str(),
        ]
        .join(SEPARATOR)
    }
}

impl From<Value> for PhotoAttributes {
    fn from(v: Value) -> Self {
        Self::normalize(&v)
    }
}

/// Photo URL for an element id
pub fn url_from_element_id(uid: &str) -> String {
    PhotoAttributes::from_element_id(uid).url()
}

/// URL of a user's buddy icon.
///
/// Users whose icon server is missing or `0` get [`DEFAULT_BUDDY_ICON`].
pub fn buddy_icon_url(user_id: &str, icon_server: Option<&str>, icon_farm: Option<&str>) -> String {
    match icon_server {
        Some(server) if has_nonzero_leading_int(server) => format!(
            "{}/{server}/buddyicons/{user_id}.jpg",
            photo_url_base(icon_farm.unwrap_or_default())
        ),
        _ => DEFAULT_BUDDY_ICON.into(),
    }
}

fn photo_url_base(farm: &str) -> String {
    if farm.is_empty() {
        format!("http://{PHOTO_URL_BASE}")
    } else {
        format!("http://farm{farm}.{PHOTO_URL_BASE}")
    }
}
