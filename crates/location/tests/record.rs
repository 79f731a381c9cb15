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

// tests/record.rs
// Tests for location and card records: construction invariants and
// the JSON shape the recorder expects.

use ot_location::{CardRecord, LocationError, LocationRecord, Position, Tid};
use serde_json::Value;

fn ping_record() -> LocationRecord {
    LocationRecord::new()
        .with_tid(Tid::new("pp").unwrap())
        .with_position(Position::new(51.47879, -0.010677))
        .with_timestamp(1_700_000_000)
}

#[test]
fn test_location_json_shape() {
    let json: Value = serde_json::from_str(&ping_record().to_json().unwrap()).unwrap();

    assert_eq!(json["_type"], "location");
    assert_eq!(json["tid"], "pp");
    assert_eq!(json["lat"], 51.47879);
    assert_eq!(json["lon"], -0.010677);
    assert_eq!(json["tst"], 1_700_000_000u64);
    // Absent optionals are omitted rather than null.
    assert!(json.get("acc").is_none());
    assert!(json.get("alt").is_none());
    assert!(json.get("_http").is_none());
}

#[test]
fn test_location_json_round_trip() {
    let record = ping_record()
        .with_accuracy(12.0)
        .with_altitude(35.5)
        .with_http(true);

    let parsed = LocationRecord::from_json(&record.to_json().unwrap()).unwrap();

    assert_eq!(parsed.tid().map(Tid::as_str), Some("pp"));
    assert!((parsed.lat().unwrap() - 51.47879).abs() < 1e-9);
    assert!((parsed.lon().unwrap() + 0.010677).abs() < 1e-9);
    assert_eq!(parsed.tst(), Some(1_700_000_000));
    assert_eq!(parsed.accuracy(), Some(12.0));
    assert_eq!(parsed.altitude(), Some(35.5));
    assert!(parsed.is_http());
}

#[test]
fn test_lat_without_lon_is_rejected() {
    let err = LocationRecord::from_json(r#"{"_type":"location","lat":1.0,"tst":5}"#)
        .expect_err("lat without lon should not parse");
    assert!(err.to_string().contains("lon"));

    let err = Position::from_parts(None, Some(2.0)).unwrap_err();
    assert!(matches!(
        err,
        LocationError::UnpairedCoordinate {
            present: "lon",
            missing: "lat"
        }
    ));
}

#[test]
fn test_negative_timestamp_is_rejected() {
    let err = LocationRecord::new().with_unix_timestamp(-1).unwrap_err();
    assert!(matches!(err, LocationError::NegativeTimestamp(-1)));

    assert!(LocationRecord::from_json(r#"{"_type":"location","tst":-5}"#).is_err());
}

#[test]
fn test_wrong_type_tag_is_rejected() {
    assert!(LocationRecord::from_json(r#"{"_type":"card","name":"x"}"#).is_err());
    assert!(LocationRecord::from_json(r#"{"lat":1.0,"lon":2.0}"#).is_err());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let record = LocationRecord::from_json(
        r#"{"_type":"location","lat":1.5,"lon":2.5,"tst":10,"topic":"owntracks/a/b","batt":80}"#,
    )
    .unwrap();
    assert_eq!(record.position(), Some(Position::new(1.5, 2.5)));
}

#[test]
fn test_tid_validation() {
    assert!(Tid::new("pp").is_ok());
    assert!(Tid::new("longer-is-fine").is_ok());
    assert!(Tid::new("").is_err());
    assert!(Tid::new("a b").is_err());

    assert!(Tid::strict("aa").is_ok());
    assert!(Tid::strict("Zq").is_ok());
    assert!(Tid::strict("a").is_err());
    assert!(Tid::strict("abc").is_err());
    assert!(Tid::strict("a1").is_err());
}

#[test]
fn test_position_from_e7() {
    let position = Position::from_e7(407_128_000, -740_060_000);
    assert_eq!(position.lat, 40.7128);
    assert_eq!(position.lon, -74.006);
    assert!(!position.is_null_island());
    assert!(Position::new(0.0, 0.0).is_null_island());
}

#[test]
fn test_card_json_shape() {
    let card = CardRecord::from_image("Jane Doe", b"\x89PNG");
    let json: Value = serde_json::from_str(&card.to_json().unwrap()).unwrap();

    assert_eq!(json["_type"], "card");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["face"], "iVBORw==");
    assert_eq!(card.face_bytes().unwrap().unwrap(), b"\x89PNG");
}
