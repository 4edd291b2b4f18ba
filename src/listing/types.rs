//! Wire types for Reddit listing responses.

use serde::Deserialize;
use serde_json::Value;

use crate::listing::error::FetchError;

/// A single post record as the API sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub ups: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Child {
    pub data: PostData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Child>,
}

/// Raw response body: either field may be present.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    data: Option<ListingData>,
}

/// A successfully decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPayload {
    Listing(ListingData),
    /// `{ "error": <code> }`, carried through as text.
    Error { code: String },
}

impl ListingPayload {
    /// Decodes a response body.
    ///
    /// An `error` field wins over `data`; `"error": null` counts as absent.
    /// A body with neither is a decode failure.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        let raw: RawListing = serde_json::from_slice(body)?;
        match (raw.error, raw.data) {
            (Some(code), _) => Ok(Self::Error {
                code: error_code_text(&code),
            }),
            (None, Some(data)) => Ok(Self::Listing(data)),
            (None, None) => Err(FetchError::Decode {
                message: "response has neither `data` nor `error`".to_string(),
            }),
        }
    }
}

fn error_code_text(code: &Value) -> String {
    match code {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
