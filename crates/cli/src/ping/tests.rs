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
// Verification      - Status classification of the round trip.
// Round Trip        - Run the check against a fake broker and mock recorder.

use std::time::Duration;

use chrono::Utc;
use clap::{CommandFactory, Parser};
use ot_api_client::ApiError;
use ot_location::Status;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::args::*;
use super::cmds;
use crate::cfg::runtime::RuntimeConfig;

const URL: &str = "http://127.0.0.1:8083";

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_defaults ensures ping parses with no arguments.
#[test]
fn parse_defaults() {
    let opts = Opts::try_parse_from(["ping"]).expect("should parse ping");

    assert_eq!(opts.topic, "owntracks/ping/ping");
    assert_eq!(opts.user, "ping");
    assert_eq!(opts.device, "ping");
    assert_eq!(opts.settle, Duration::from_secs(1));
    assert_eq!(opts.mqtt.port, 1883);
}

// parse_custom_target ensures the recorder and broker are configurable.
#[test]
fn parse_custom_target() {
    let opts = Opts::try_parse_from([
        "ping",
        "--url",
        "https://recorder.example",
        "--settle",
        "0s",
        "-H",
        "broker.example",
        "-p",
        "8883",
    ])
    .expect("should parse ping with a custom target");

    assert_eq!(opts.url, "https://recorder.example");
    assert!(opts.settle.is_zero());
    assert_eq!(opts.mqtt.host, "broker.example");
    assert_eq!(opts.mqtt.port, 8883);
}

/////////////////////////////////////////////////////////////////////////////
// Verification

#[test]
fn ping_record_payload() {
    let record = cmds::ping_record(1_700_000_000).unwrap();
    assert_eq!(
        record.to_json().unwrap(),
        r#"{"_type":"location","tid":"pp","lat":51.47879,"lon":-0.010677,"tst":1700000000}"#
    );
}

#[test]
fn ping_client_id_carries_pid() {
    assert_eq!(
        cmds::ping_client_id(),
        format!("ot-recorder-ping-ping-{}", std::process::id())
    );
}

#[test]
fn verify_classifies_drift() {
    let published = 1_700_000_000;
    for (drift, status) in [
        (0, Status::Ok),
        (5, Status::Ok),
        (10, Status::Ok),
        (11, Status::Warning),
        (45, Status::Warning),
        (60, Status::Warning),
        (61, Status::Critical),
        (120, Status::Critical),
        (-45, Status::Warning),
    ] {
        let result = cmds::verify(URL, published, Ok(published - drift));
        assert_eq!(result.status, status, "drift {drift}");
    }
}

#[test]
fn verify_status_line() {
    let result = cmds::verify(URL, 1_700_000_003, Ok(1_700_000_000));
    assert_eq!(
        result.to_string(),
        "OK ot-recorder pingping at http://127.0.0.1:8083: 3 seconds difference"
    );
}

#[test]
fn verify_retrieval_error_is_critical() {
    let result = cmds::verify(
        URL,
        1_700_000_000,
        Err(ApiError::Transport("connection refused".to_string())),
    );
    assert_eq!(result.status, Status::Critical);
    assert_eq!(
        result.to_string(),
        "CRITICAL ot-recorder pingping at http://127.0.0.1:8083: connection refused"
    );
}

/////////////////////////////////////////////////////////////////////////////
// Round Trip

fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        http_timeout: Duration::from_secs(5),
    }
}

// fake_broker accepts one client, acknowledges its CONNECT and then
// swallows everything it sends.
async fn fake_broker() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        // CONNACK, session not present, connection accepted
        socket.write_all(&[0x20, 0x02, 0x00, 0x00]).await.unwrap();
        while let Ok(n) = socket.read(&mut buf).await {
            if n == 0 {
                break;
            }
        }
    });
    port
}

async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn ping_round_trip_ok() {
    let port = fake_broker().await;
    let mut recorder = mockito::Server::new_async().await;
    let mock = recorder
        .mock("POST", "/api/0/last")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("user".into(), "ping".into()),
            mockito::Matcher::UrlEncoded("device".into(), "ping".into()),
        ]))
        .with_status(200)
        .with_body(format!(r#"[{{"tid":"pp","tst":{}}}]"#, Utc::now().timestamp()))
        .create_async()
        .await;
    let opts = Opts::try_parse_from([
        "ping",
        "--url",
        &recorder.url(),
        "--settle",
        "0s",
        "-p",
        &port.to_string(),
        "-H",
        "127.0.0.1",
        "--mqtt-timeout",
        "5s",
    ])
    .unwrap();

    let result = cmds::ping(&opts, &runtime_config()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.status, Status::Ok, "{result}");
    assert!(
        result
            .message
            .starts_with(&format!("ot-recorder pingping at {}: ", recorder.url())),
        "{result}"
    );
}

#[tokio::test]
async fn ping_unreachable_broker_is_critical() {
    let port = closed_port().await;
    let opts = Opts::try_parse_from([
        "ping",
        "--settle",
        "0s",
        "-H",
        "127.0.0.1",
        "-p",
        &port.to_string(),
    ])
    .unwrap();

    let result = cmds::ping(&opts, &runtime_config()).await.unwrap();

    assert_eq!(result.status, Status::Critical);
    assert!(
        result
            .to_string()
            .starts_with("CRITICAL ot-recorder pingping failed: MQTT publish "),
        "{result}"
    );
}

#[tokio::test]
async fn ping_unusable_http_client_is_critical() {
    let opts = Opts::try_parse_from(["ping", "--url", URL]).unwrap();
    // A newline is not a valid header value, so the client cannot be built.
    let config = ot_api_client::Config {
        recorder_url: format!("{URL}/"),
        user_agent: "ot-contrib\nbroken".to_string(),
        ..Default::default()
    };

    let result = cmds::check_recorder(&config, &opts, Utc::now().timestamp()).await;

    assert_eq!(result.status, Status::Critical);
    assert_eq!(result.status.exit_code(), 2);
    assert!(
        result
            .to_string()
            .starts_with(&format!("CRITICAL ot-recorder pingping at {URL}: ")),
        "{result}"
    );
}
