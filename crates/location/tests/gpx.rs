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

// tests/gpx.rs
// Tests for GPX track parsing.

use chrono::{TimeZone, Utc};
use ot_location::gpx::{parse_time, parse_track};
use ot_location::LocationError;

const TWO_SEGMENTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <metadata><time>2022-01-01T00:00:00Z</time></metadata>
  <wpt lat="1.0" lon="1.0"><name>ignored</name></wpt>
  <trk>
    <name>Morning walk</name>
    <trkseg>
      <trkpt lat="52.5200" lon="13.4050"><ele>34.2</ele><time>2022-03-05T10:11:12Z</time></trkpt>
      <trkpt lat="52.5210" lon="13.4060"><time>2022-03-05T10:11:42.250Z</time></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="52.5300" lon="13.4100"><ele>40</ele></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

#[test]
fn test_parse_points_in_document_order() {
    let points = parse_track(TWO_SEGMENTS).unwrap();
    assert_eq!(points.len(), 3);

    assert_eq!(points[0].lat, 52.52);
    assert_eq!(points[0].lon, 13.405);
    assert_eq!(points[0].elevation, Some(34.2));
    assert_eq!(
        points[0].time,
        Some(Utc.with_ymd_and_hms(2022, 3, 5, 10, 11, 12).unwrap())
    );

    assert_eq!(points[1].elevation, None);
    assert_eq!(points[1].time.map(|t| t.timestamp()), Some(1_646_475_102));

    // A point without <time> is still returned; callers decide.
    assert_eq!(points[2].elevation, Some(40.0));
    assert_eq!(points[2].time, None);
}

#[test]
fn test_parse_empty_document() {
    let points = parse_track(r#"<gpx version="1.1" creator="test"></gpx>"#).unwrap();
    assert!(points.is_empty());
}

#[test]
fn test_bad_coordinates_are_malformed() {
    let gpx = r#"<gpx><trk><trkseg><trkpt lat="north" lon="1"/></trkseg></trk></gpx>"#;
    assert!(matches!(parse_track(gpx), Err(LocationError::MalformedGpx(_))));
}

#[test]
fn test_bad_time_is_rejected() {
    let gpx = r#"<gpx><trk><trkseg><trkpt lat="1" lon="1"><time>soon</time></trkpt></trkseg></trk></gpx>"#;
    assert!(matches!(parse_track(gpx), Err(LocationError::InvalidTimestamp(_))));
}

#[test]
fn test_parse_time_variants() {
    let expected = Utc.with_ymd_and_hms(2022, 3, 5, 10, 11, 12).unwrap();
    assert_eq!(parse_time("2022-03-05T10:11:12Z").unwrap(), expected);
    assert_eq!(parse_time("2022-03-05T12:11:12+02:00").unwrap(), expected);
    assert_eq!(parse_time("2022-03-05T10:11:12").unwrap(), expected);
    assert_eq!(
        parse_time("2022-03-05T10:11:12.999Z").unwrap().timestamp(),
        expected.timestamp()
    );
}
