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

// src/directory.rs
// User directory lookups (GitHub-style /users/{username}) and avatar
// downloads for building cards.

use serde_json as sj;
use tracing::debug;

use crate::{ApiError, Config, read_body, trim_base};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub login: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug)]
pub struct DirectoryClient {
    config: Config,
    http_client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new_with_config(config: &Config) -> Result<DirectoryClient, ApiError> {
        Ok(DirectoryClient {
            config: config.clone(),
            http_client: config.http_client()?,
        })
    }

    // user_profile fetches a user's public profile. Both `name` and
    // `avatar_url` must be present and non-empty.
    pub async fn user_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        let url = format!(
            "{}/users/{}",
            trim_base(&self.config.directory_url),
            urlencoding::encode(username)
        );
        debug!(%url, "Fetching user profile");

        let response = self.http_client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                what: format!("user '{username}'"),
                detail: url,
            });
        }
        let body = read_body(response).await?;

        let json: sj::Value = sj::from_str(&body).map_err(|e| {
            ApiError::MalformedResponse(format!("Error parsing user profile: {}", e))
        })?;

        Ok(UserProfile {
            login: username.to_string(),
            name: required_field(&json, "name")?,
            avatar_url: required_field(&json, "avatar_url")?,
        })
    }

    // avatar downloads the avatar image at the requested pixel size.
    pub async fn avatar(&self, avatar_url: &str, size: u32) -> Result<Vec<u8>, ApiError> {
        let url = sized_avatar_url(avatar_url, size);
        debug!(%url, "Fetching avatar");

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::MalformedResponse(format!(
                "Empty avatar image from {url}"
            )));
        }
        Ok(bytes.to_vec())
    }
}

// sized_avatar_url appends the size parameter, joining with '&' when
// the URL already carries a query string.
pub fn sized_avatar_url(avatar_url: &str, size: u32) -> String {
    let separator = if avatar_url.contains('?') { '&' } else { '?' };
    format!("{avatar_url}{separator}size={size}")
}

fn required_field(json: &sj::Value, field: &str) -> Result<String, ApiError> {
    match json.get(field).and_then(sj::Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ApiError::MalformedResponse(format!(
            "Profile has no '{field}'"
        ))),
    }
}
