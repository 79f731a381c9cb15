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

// src/takeout.rs
// Location history exports (Google Takeout "Records.json" style).
//
// The export is an object with a `locations` array. Newer exports
// carry an ISO 8601 `timestamp` (with or without fractional seconds),
// older ones a `timestampMs` string. Coordinates are fixed-point
// degrees * 10^7.

use std::io::Read;

use serde::Deserialize;

use crate::errors::LocationError;
use crate::gpx::parse_time;
use crate::record::{LocationRecord, Position, Tid};

#[derive(Debug, Deserialize)]
pub struct LocationHistory {
    pub locations: Vec<HistoryEntry>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub timestamp_ms: Option<Millis>,
    #[serde(default)]
    pub latitude_e7: Option<i64>,
    #[serde(default)]
    pub longitude_e7: Option<i64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
}

// Millis shows up both as a JSON string and as a number depending on
// the export's age.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Millis {
    Number(i64),
    Text(String),
}

impl Millis {
    fn as_millis(&self) -> Result<i64, LocationError> {
        match self {
            Millis::Number(ms) => Ok(*ms),
            Millis::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| LocationError::InvalidTimestamp(text.clone())),
        }
    }
}

impl LocationHistory {
    pub fn from_reader(reader: impl Read) -> Result<Self, LocationError> {
        serde_json::from_reader(reader).map_err(|e| LocationError::MalformedExport(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, LocationError> {
        serde_json::from_str(json).map_err(|e| LocationError::MalformedExport(e.to_string()))
    }

    // records maps every entry, in file order. One bad entry fails the
    // whole export, so nothing is published from a half-understood file.
    pub fn records(&self, tid: &Tid) -> Result<Vec<LocationRecord>, LocationError> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.to_record(tid).map_err(|e| {
                    LocationError::MalformedExport(format!("location #{index}: {e}"))
                })
            })
            .collect()
    }
}

impl HistoryEntry {
    // unix_timestamp prefers the ISO `timestamp` over `timestampMs`.
    pub fn unix_timestamp(&self) -> Result<Option<i64>, LocationError> {
        if let Some(timestamp) = &self.timestamp {
            return Ok(Some(parse_time(timestamp)?.timestamp()));
        }
        self.timestamp_ms
            .as_ref()
            .map(|ms| ms.as_millis().map(|ms| ms.div_euclid(1000)))
            .transpose()
    }

    pub fn to_record(&self, tid: &Tid) -> Result<LocationRecord, LocationError> {
        let mut record = LocationRecord::new().with_tid(tid.clone());

        if let Some(tst) = self.unix_timestamp()? {
            record = record.with_unix_timestamp(tst)?;
        }

        match (self.latitude_e7, self.longitude_e7) {
            (Some(lat), Some(lon)) => record = record.with_position(Position::from_e7(lat, lon)),
            (None, None) => {}
            (Some(_), None) => {
                return Err(LocationError::UnpairedCoordinate {
                    present: "latitudeE7",
                    missing: "longitudeE7",
                });
            }
            (None, Some(_)) => {
                return Err(LocationError::UnpairedCoordinate {
                    present: "longitudeE7",
                    missing: "latitudeE7",
                });
            }
        }

        if let Some(acc) = self.accuracy {
            record = record.with_accuracy(acc);
        }
        if let Some(alt) = self.altitude {
            record = record.with_altitude(alt);
        }
        Ok(record)
    }
}
