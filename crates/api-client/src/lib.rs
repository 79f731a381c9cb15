/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// these are not visible outside of this crate
mod directory;
mod geocoder;
mod recorder;

// re-exports
use std::time::Duration;

pub use directory::{DirectoryClient, UserProfile, sized_avatar_url};
pub use geocoder::{GeocoderClient, ReverseGeocode, UNKNOWN_COUNTRY};
pub use recorder::RecorderClient;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIRECTORY_URL: &str = "https://api.github.com";
pub const DEFAULT_RECORDER_URL: &str = "http://127.0.0.1:8083";
pub const DEFAULT_GEOCODER_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_USER_AGENT: &str = "ot-recorder-agent/1.0";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    // directory_url is the base of the user directory API
    // (GET {directory_url}/users/{username}).
    pub directory_url: String,
    // recorder_url is the base of the recorder's HTTP API, without
    // the /api/0 endpoint path.
    pub recorder_url: String,
    // geocoder_url is the full reverse geocoding endpoint.
    pub geocoder_url: String,
    pub geocoder_key: Option<String>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            recorder_url: DEFAULT_RECORDER_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_key: None,
            request_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub(crate) fn http_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(ApiError::from)
    }
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{what} not found ({detail})")]
    NotFound { what: String, detail: String },
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> ApiError {
        ApiError::Transport(format!("Communication error: {}", value))
    }
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, ApiError::MalformedResponse(_))
    }
}

// trim_base drops trailing slashes so paths can be appended.
pub(crate) fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}

// read_body returns the body of a successful response, turning
// anything else into an error carrying the status and body text.
pub(crate) async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
