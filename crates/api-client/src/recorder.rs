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

// src/recorder.rs
// Client for the recorder's HTTP retrieval API.

use serde_json as sj;
use tracing::debug;

use crate::{ApiError, Config, read_body, trim_base};

#[derive(Debug)]
pub struct RecorderClient {
    config: Config,
    http_client: reqwest::Client,
}

impl RecorderClient {
    pub fn new_with_config(config: &Config) -> Result<RecorderClient, ApiError> {
        Ok(RecorderClient {
            config: config.clone(),
            http_client: config.http_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        trim_base(&self.config.recorder_url)
    }

    // last_timestamp asks the recorder for the newest stored record of
    // user/device and returns its `tst`.
    pub async fn last_timestamp(&self, user: &str, device: &str) -> Result<i64, ApiError> {
        let url = format!("{}/api/0/last", self.base_url());
        debug!(%url, user, device, "Fetching last position");

        let response = self
            .http_client
            .post(&url)
            .query(&[("user", user), ("device", device)])
            .send()
            .await?;
        let body = read_body(response).await?;

        let json: sj::Value = sj::from_str(&body).map_err(|e| {
            ApiError::MalformedResponse(format!("Error parsing last position: {}", e))
        })?;
        let first = json
            .as_array()
            .and_then(|entries| entries.first())
            .ok_or_else(|| ApiError::NotFound {
                what: format!("last position of {user}/{device}"),
                detail: "recorder returned no entries".to_string(),
            })?;

        first
            .get("tst")
            .and_then(sj::Value::as_i64)
            .ok_or_else(|| ApiError::MalformedResponse("Last position has no 'tst'".to_string()))
    }
}
