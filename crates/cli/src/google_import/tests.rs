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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Export Loading    - Map export files into records.

use std::io::Write;

use clap::{CommandFactory, Parser};
use ot_mqtt::{PublishStats, QoS};

use super::args::*;
use super::cmds;
use crate::errors::CliError;

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_required ensures google-import parses with topic, tid and file.
#[test]
fn parse_required() {
    let opts = Opts::try_parse_from([
        "google-import",
        "-t",
        "owntracks/jane/phone",
        "--tid",
        "jp",
        "Records.json",
    ])
    .expect("should parse google-import");

    assert_eq!(opts.topic, "owntracks/jane/phone");
    assert_eq!(opts.tid.as_str(), "jp");
    assert_eq!(opts.qos, 2);
    assert!(!opts.dry_run);
}

// parse_requires_topic ensures the topic is mandatory.
#[test]
fn parse_requires_topic() {
    assert!(Opts::try_parse_from(["google-import", "--tid", "jp", "Records.json"]).is_err());
}

// parse_rejects_bad_tids ensures tids must be exactly two letters.
#[test]
fn parse_rejects_bad_tids() {
    for tid in ["j", "jpm", "j1", ""] {
        let result = Opts::try_parse_from([
            "google-import",
            "-t",
            "owntracks/jane/phone",
            "--tid",
            tid,
            "Records.json",
        ]);
        assert!(result.is_err(), "tid '{tid}' should be rejected");
    }
}

// parse_qos_range ensures only QoS 0-2 are accepted.
#[test]
fn parse_qos_range() {
    let base = ["google-import", "-t", "t", "--tid", "jp", "f.json", "--qos"];
    let opts = Opts::try_parse_from(base.iter().copied().chain(["1"])).unwrap();
    assert_eq!(opts.qos, 1);
    assert!(Opts::try_parse_from(base.iter().copied().chain(["3"])).is_err());
}

// publish_options_follow_qos ensures messages are never retained.
#[test]
fn publish_options_follow_qos() {
    let opts =
        Opts::try_parse_from(["google-import", "-t", "t", "--tid", "jp", "f.json", "-q", "0"])
            .unwrap();
    let publish_options = cmds::publish_options(&opts).unwrap();
    assert_eq!(publish_options.qos, Some(QoS::AtMostOnce));
    assert_eq!(publish_options.retain, Some(false));
}

/////////////////////////////////////////////////////////////////////////////
// Export Loading

const EXPORT: &str = r#"{
  "locations": [
    {"timestamp": "2022-03-05T10:11:12.345Z", "latitudeE7": 407128000, "longitudeE7": -740060000, "accuracy": 12, "altitude": 30},
    {"timestampMs": "1622548800000", "latitudeE7": 515000000, "longitudeE7": -1270000}
  ]
}"#;

fn opts_for(file: &std::path::Path, extra: &[&str]) -> Opts {
    let mut args = vec![
        "google-import",
        "-t",
        "owntracks/jane/phone",
        "--tid",
        "jp",
        file.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    Opts::try_parse_from(args).unwrap()
}

// load_records_maps_entries checks both timestamp styles and E7 scaling.
#[test]
fn load_records_maps_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let records = cmds::load_records(&opts_for(file.path(), &[])).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].tst(), Some(1646475072));
    assert_eq!(records[0].lat(), Some(40.7128));
    assert_eq!(records[0].lon(), Some(-74.006));
    assert_eq!(records[0].accuracy(), Some(12.0));
    assert_eq!(records[0].tid().map(|t| t.as_str()), Some("jp"));
    assert_eq!(records[1].tst(), Some(1622548800));
    assert_eq!(records[1].altitude(), None);
}

// load_records_rejects_unpaired_coordinates ensures nothing is loaded
// from an export with a half coordinate.
#[test]
fn load_records_rejects_unpaired_coordinates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"locations": [{"timestampMs": "0", "latitudeE7": 1}]}"#)
        .unwrap();

    let err = cmds::load_records(&opts_for(file.path(), &[])).unwrap_err();

    assert!(matches!(err, CliError::Location(_)), "{err}");
    assert_eq!(err.exit_code(), 1);
}

// dry_run_prints_payloads checks the printed JSON lines.
#[tokio::test]
async fn dry_run_prints_payloads() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();
    let records = cmds::load_records(&opts_for(file.path(), &["--dry-run"])).unwrap();
    let mut out: Vec<u8> = Vec::new();

    cmds::print_records(&records, &mut out).await.unwrap();

    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        r#"{"_type":"location","tid":"jp","lat":51.5,"lon":-0.127,"tst":1622548800}"#
    );
}

#[test]
fn summary_line_reports_counts() {
    let stats = PublishStats {
        total_published: 3,
        total_failed: 0,
        total_bytes_published: 210,
    };
    assert_eq!(
        cmds::summary_line("owntracks/jane/phone", &stats),
        "Published 3 messages (210 bytes) to owntracks/jane/phone"
    );
}
