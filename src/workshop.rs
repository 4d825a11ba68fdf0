//! Steam Workshop metadata client.
//!
//! One batched call to `IPublishedFileService/GetDetails` covers every id a
//! run needs — configured items plus their linked-stats items. The rest of
//! the pipeline never talks to the network for metadata, so everything
//! downstream of [`MetadataSource`] is testable with a recording mock.

use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

const GET_DETAILS_URL: &str =
    "https://api.steampowered.com/IPublishedFileService/GetDetails/v1/";
const REQUEST_TIMEOUT_SECONDS: u64 = 60;

/// Payload `result` code for a live, visible item.
const RESULT_OK: u32 = 1;

#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("metadata request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("metadata request returned HTTP status {0}")]
    Status(u16),
    #[error("malformed metadata response: {0}")]
    Response(String),
}

/// Metadata for one workshop item, immutable for the lifetime of a run.
///
/// `downloads` is Steam's `lifetime_subscriptions`; `favorites` is
/// `favorited`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    pub id: u64,
    pub title: String,
    pub preview_url: String,
    pub views: u64,
    pub downloads: u64,
    pub favorites: u64,
}

/// The metadata boundary: given a set of ids, return per-item records.
///
/// The production implementation is [`SteamClient`]. Tests substitute
/// [`tests::MockMetadataSource`], which records the request and serves
/// fixtures.
pub trait MetadataSource: Sync {
    fn fetch_details(&self, ids: &[u64]) -> Result<Vec<ItemDetails>, WorkshopError>;
}

/// Blocking client for the Steam Web API.
pub struct SteamClient {
    api_key: String,
    client: reqwest::blocking::Client,
}

impl SteamClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WorkshopError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self {
            api_key: api_key.into(),
            client,
        })
    }
}

impl MetadataSource for SteamClient {
    fn fetch_details(&self, ids: &[u64]) -> Result<Vec<ItemDetails>, WorkshopError> {
        let url = request_url(&self.api_key, ids);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorkshopError::Status(status.as_u16()));
        }

        let envelope: GetDetailsEnvelope = response
            .json()
            .map_err(|e| WorkshopError::Response(e.to_string()))?;
        Ok(parse_details(envelope))
    }
}

/// Build the GetDetails request URL — ids go in numbered
/// `publishedfileids[i]` query parameters.
fn request_url(api_key: &str, ids: &[u64]) -> String {
    let mut url = format!("{GET_DETAILS_URL}?key={api_key}");
    for (i, id) in ids.iter().enumerate() {
        url.push_str(&format!("&publishedfileids[{i}]={id}"));
    }
    url
}

fn parse_details(envelope: GetDetailsEnvelope) -> Vec<ItemDetails> {
    envelope
        .response
        .publishedfiledetails
        .into_iter()
        // Deleted or hidden items come back with a non-ok result code and no
        // usable fields; dropping them here turns a configured reference to
        // one into an unresolved-item failure downstream.
        .filter(|raw| raw.result == RESULT_OK)
        .map(|raw| ItemDetails {
            id: raw.publishedfileid,
            title: raw.title,
            preview_url: raw.preview_url,
            views: raw.views,
            downloads: raw.lifetime_subscriptions,
            favorites: raw.favorited,
        })
        .collect()
}

// ----------------------------------------------------------------------------
// Wire types
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GetDetailsEnvelope {
    response: GetDetailsResponse,
}

#[derive(Debug, Default, Deserialize)]
struct GetDetailsResponse {
    #[serde(default)]
    publishedfiledetails: Vec<RawDetails>,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    #[serde(deserialize_with = "id_string_or_int")]
    publishedfileid: u64,
    #[serde(default)]
    result: u32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    preview_url: String,
    #[serde(default)]
    views: u64,
    #[serde(default)]
    lifetime_subscriptions: u64,
    #[serde(default)]
    favorited: u64,
}

/// Steam serializes file ids as decimal strings; accept integers too.
fn id_string_or_int<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Int(u64),
        Str(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Int(v) => Ok(v),
        IdRepr::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
