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

// src/gpx.rs
// GPX track parsing. Only tracks are read (tracks -> segments ->
// points); waypoints, routes and extensions are ignored.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::errors::LocationError;

// TrackPoint is a single <trkpt>, flattened out of its track and
// segment.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct GpxDocument {
    #[serde(rename = "trk", default)]
    tracks: Vec<GpxTrack>,
}

#[derive(Debug, Deserialize)]
struct GpxTrack {
    #[serde(rename = "trkseg", default)]
    segments: Vec<GpxSegment>,
}

#[derive(Debug, Deserialize)]
struct GpxSegment {
    #[serde(rename = "trkpt", default)]
    points: Vec<GpxPoint>,
}

#[derive(Debug, Deserialize)]
struct GpxPoint {
    #[serde(rename = "@lat")]
    lat: f64,
    #[serde(rename = "@lon")]
    lon: f64,
    #[serde(default)]
    ele: Option<f64>,
    #[serde(default)]
    time: Option<String>,
}

// parse_track reads every track point in document order.
pub fn parse_track(gpx: &str) -> Result<Vec<TrackPoint>, LocationError> {
    let document: GpxDocument = quick_xml::de::from_str(gpx)?;

    let mut points = Vec::new();
    for track in document.tracks {
        for segment in track.segments {
            for point in segment.points {
                let time = point.time.as_deref().map(parse_time).transpose()?;
                points.push(TrackPoint {
                    lat: point.lat,
                    lon: point.lon,
                    elevation: point.ele,
                    time,
                });
            }
        }
    }
    Ok(points)
}

// parse_time accepts RFC 3339 timestamps, and zone-less ones (seen in
// older GPX 1.0 files) which are taken as UTC.
pub fn parse_time(value: &str) -> Result<DateTime<Utc>, LocationError> {
    let value = value.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| LocationError::InvalidTimestamp(value.to_string()))
}
