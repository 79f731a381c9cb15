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

// src/geocoder.rs
// Reverse geocoding against a Google-style geocode JSON API.

use ot_location::Position;
use serde::{Deserialize, Serialize};
use serde_json as sj;
use tracing::debug;

use crate::{ApiError, Config, read_body};

// UNKNOWN_COUNTRY is reported for positions that are not looked up.
pub const UNKNOWN_COUNTRY: &str = "__";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    pub cc: String,
    pub addr: String,
    pub locality: Option<String>,
}

impl ReverseGeocode {
    // unknown is the placeholder for (0, 0), which devices report
    // without a fix and which no geocoder resolves meaningfully.
    pub fn unknown(lat: f64, lon: f64) -> Self {
        Self {
            cc: UNKNOWN_COUNTRY.to_string(),
            addr: format!("Unknown ({lat:.6},{lon:.6})"),
            locality: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl GeocodeResult {
    fn component(&self, kind: &str) -> Option<&AddressComponent> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
    }
}

#[derive(Debug)]
pub struct GeocoderClient {
    config: Config,
    http_client: reqwest::Client,
}

impl GeocoderClient {
    pub fn new_with_config(config: &Config) -> Result<GeocoderClient, ApiError> {
        Ok(GeocoderClient {
            config: config.clone(),
            http_client: config.http_client()?,
        })
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<ReverseGeocode, ApiError> {
        if Position::new(lat, lon).is_null_island() {
            return Ok(ReverseGeocode::unknown(lat, lon));
        }

        let mut query = vec![("latlng", format!("{lat},{lon}"))];
        if let Some(key) = &self.config.geocoder_key {
            query.push(("key", key.clone()));
        }
        debug!(url = %self.config.geocoder_url, lat, lon, "Reverse geocoding");

        let response = self
            .http_client
            .get(&self.config.geocoder_url)
            .query(&query)
            .send()
            .await?;
        let body = read_body(response).await?;

        let parsed: GeocodeResponse = sj::from_str(&body).map_err(|e| {
            ApiError::MalformedResponse(format!("Error parsing geocode response: {}", e))
        })?;
        if parsed.status != "OK" {
            return Err(ApiError::LookupFailed(match parsed.error_message {
                Some(message) => format!("{}: {}", parsed.status, message),
                None => parsed.status,
            }));
        }

        let Some(first) = parsed.results.first() else {
            return Err(ApiError::LookupFailed(format!(
                "no results for {lat},{lon}"
            )));
        };
        let cc = first
            .component("country")
            .map(|c| c.short_name.clone())
            .ok_or_else(|| ApiError::MalformedResponse("Result has no country".to_string()))?;

        Ok(ReverseGeocode {
            cc,
            addr: first.formatted_address.clone(),
            locality: first.component("locality").map(|c| c.long_name.clone()),
        })
    }
}
