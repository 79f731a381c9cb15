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

// src/record.rs
// Location and card records as published to the broker and stored
// by the recorder.
//
// Records are flat JSON objects tagged by `_type`. They are built
// once through the with_* methods and never mutated afterwards; the
// wire structs below do the JSON shaping and validate on the way in.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::errors::LocationError;

pub const LOCATION_TYPE: &str = "location";
pub const CARD_TYPE: &str = "card";

// Tid is a tracker id, the short label a device shows on maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tid(String);

impl Tid {
    // new accepts any non-empty tid without whitespace, which is
    // what the recorder itself accepts from devices.
    pub fn new(tid: impl Into<String>) -> Result<Self, LocationError> {
        let tid = tid.into();
        if tid.is_empty() {
            return Err(LocationError::InvalidTid {
                tid,
                reason: "must not be empty",
            });
        }
        if tid.chars().any(char::is_whitespace) {
            return Err(LocationError::InvalidTid {
                tid,
                reason: "must not contain whitespace",
            });
        }
        Ok(Self(tid))
    }

    // strict only accepts exactly two ASCII letters (e.g. "aa").
    pub fn strict(tid: &str) -> Result<Self, LocationError> {
        if tid.len() != 2 || !tid.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocationError::InvalidTid {
                tid: tid.to_string(),
                reason: "must be 2 letters (e.g. 'aa')",
            });
        }
        Ok(Self(tid.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tid {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tid::new(s)
    }
}

impl fmt::Display for Tid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Position is a lat/lon pair in decimal degrees. Keeping both in one
// value is what guarantees a record never carries just one of them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    // from_e7 converts fixed-point degrees * 10^7, as found in
    // location-history exports.
    pub fn from_e7(lat_e7: i64, lon_e7: i64) -> Self {
        Self {
            lat: lat_e7 as f64 / 1e7,
            lon: lon_e7 as f64 / 1e7,
        }
    }

    // from_parts pairs up optional coordinates, rejecting a lone one.
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Result<Option<Self>, LocationError> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Ok(Some(Self::new(lat, lon))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(LocationError::UnpairedCoordinate {
                present: "lat",
                missing: "lon",
            }),
            (None, Some(_)) => Err(LocationError::UnpairedCoordinate {
                present: "lon",
                missing: "lat",
            }),
        }
    }

    // is_null_island is true for (0, 0), which devices report when
    // they have no fix.
    pub fn is_null_island(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

// LocationRecord is a single position observation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireLocation", try_from = "WireLocation")]
pub struct LocationRecord {
    tid: Option<Tid>,
    position: Option<Position>,
    tst: Option<u64>,
    acc: Option<f64>,
    alt: Option<f64>,
    http: Option<bool>,
}

impl LocationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tid(mut self, tid: Tid) -> Self {
        self.tid = Some(tid);
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_timestamp(mut self, tst: u64) -> Self {
        self.tst = Some(tst);
        self
    }

    // with_unix_timestamp takes a signed timestamp (as produced by
    // chrono) and rejects anything before the epoch.
    pub fn with_unix_timestamp(self, tst: i64) -> Result<Self, LocationError> {
        let tst = u64::try_from(tst).map_err(|_| LocationError::NegativeTimestamp(tst))?;
        Ok(self.with_timestamp(tst))
    }

    pub fn with_accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc);
        self
    }

    pub fn with_altitude(mut self, alt: f64) -> Self {
        self.alt = Some(alt);
        self
    }

    // with_http marks the record as received over HTTP, which is
    // how the recorder tags records that did not come via MQTT.
    pub fn with_http(mut self, http: bool) -> Self {
        self.http = Some(http);
        self
    }

    pub fn tid(&self) -> Option<&Tid> {
        self.tid.as_ref()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn lat(&self) -> Option<f64> {
        self.position.map(|p| p.lat)
    }

    pub fn lon(&self) -> Option<f64> {
        self.position.map(|p| p.lon)
    }

    pub fn tst(&self) -> Option<u64> {
        self.tst
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.acc
    }

    pub fn altitude(&self) -> Option<f64> {
        self.alt
    }

    pub fn is_http(&self) -> bool {
        self.http.unwrap_or(false)
    }

    pub fn to_json(&self) -> Result<String, LocationError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LocationError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Serialize, Deserialize)]
struct WireLocation {
    #[serde(rename = "_type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tst: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    acc: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<f64>,
    #[serde(rename = "_http", default, skip_serializing_if = "Option::is_none")]
    http: Option<bool>,
}

impl From<LocationRecord> for WireLocation {
    fn from(record: LocationRecord) -> Self {
        Self {
            kind: LOCATION_TYPE.to_string(),
            tid: record.tid.map(|t| t.0),
            lat: record.position.map(|p| p.lat),
            lon: record.position.map(|p| p.lon),
            tst: record.tst,
            acc: record.acc,
            alt: record.alt,
            http: record.http,
        }
    }
}

impl TryFrom<WireLocation> for LocationRecord {
    type Error = LocationError;

    fn try_from(wire: WireLocation) -> Result<Self, Self::Error> {
        if wire.kind != LOCATION_TYPE {
            return Err(LocationError::UnexpectedType(wire.kind));
        }
        Ok(Self {
            tid: wire.tid.map(Tid::new).transpose()?,
            position: Position::from_parts(wire.lat, wire.lon)?,
            tst: wire.tst,
            acc: wire.acc,
            alt: wire.alt,
            http: wire.http,
        })
    }
}

// CardRecord carries a display name and face image for a device,
// published retained to the device's info topic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "WireCard", try_from = "WireCard")]
pub struct CardRecord {
    name: String,
    face: Option<String>,
}

impl CardRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            face: None,
        }
    }

    // from_image base64-encodes the raw image bytes into `face`.
    pub fn from_image(name: impl Into<String>, image: &[u8]) -> Self {
        Self {
            name: name.into(),
            face: Some(STANDARD.encode(image)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn face(&self) -> Option<&str> {
        self.face.as_deref()
    }

    pub fn face_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.face.as_ref().map(|face| STANDARD.decode(face))
    }

    pub fn to_json(&self) -> Result<String, LocationError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Serialize, Deserialize)]
struct WireCard {
    #[serde(rename = "_type")]
    kind: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    face: Option<String>,
}

impl From<CardRecord> for WireCard {
    fn from(card: CardRecord) -> Self {
        Self {
            kind: CARD_TYPE.to_string(),
            name: card.name,
            face: card.face,
        }
    }
}

impl TryFrom<WireCard> for CardRecord {
    type Error = LocationError;

    fn try_from(wire: WireCard) -> Result<Self, Self::Error> {
        if wire.kind != CARD_TYPE {
            return Err(LocationError::UnexpectedType(wire.kind));
        }
        Ok(Self {
            name: wire.name,
            face: wire.face,
        })
    }
}
