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

use std::fmt::Display;

use chrono::Utc;
use ot_api_client::{ApiError, Config, RecorderClient};
use ot_location::{CheckResult, LocationRecord, Position, Status, Tid};
use ot_mqtt::{MqttError, MqttPublisher};
use tracing::debug;

use super::Opts;
use crate::cfg::runtime::RuntimeConfig;
use crate::errors::CliResult;

pub const PING_TID: &str = "pp";
pub const PING_POSITION: Position = Position {
    lat: 51.47879,
    lon: -0.010677,
};

pub fn ping_client_id() -> String {
    format!("ot-recorder-ping-ping-{}", std::process::id())
}

pub fn ping_record(tst: i64) -> CliResult<LocationRecord> {
    Ok(LocationRecord::new()
        .with_tid(Tid::new(PING_TID)?)
        .with_position(PING_POSITION)
        .with_unix_timestamp(tst)?)
}

// publish_ping publishes the record and disconnects cleanly.
pub async fn publish_ping(
    mut publisher: MqttPublisher,
    topic: &str,
    record: &LocationRecord,
) -> Result<(), MqttError> {
    publisher.publish(topic, record).await?;
    publisher.disconnect().await?;
    Ok(())
}

pub fn publish_failed(err: impl Display) -> CheckResult {
    CheckResult::critical(format!("ot-recorder pingping failed: MQTT publish {err}"))
}

// verify compares the published timestamp with what the recorder
// returned.
pub fn verify(url: &str, published: i64, retrieved: Result<i64, ApiError>) -> CheckResult {
    match retrieved {
        Ok(tst) => {
            let drift = published - tst;
            CheckResult::new(
                Status::from_drift(drift),
                format!(
                    "ot-recorder pingping at {url}: {} seconds difference",
                    drift.unsigned_abs()
                ),
            )
        }
        Err(e) => CheckResult::critical(format!("ot-recorder pingping at {url}: {e}")),
    }
}

// check_recorder fetches the newest timestamp the recorder stored for
// the ping device and compares it with the published one.
pub async fn check_recorder(config: &Config, opts: &Opts, published: i64) -> CheckResult {
    match RecorderClient::new_with_config(config) {
        Ok(recorder) => {
            let retrieved = recorder.last_timestamp(&opts.user, &opts.device).await;
            verify(recorder.base_url(), published, retrieved)
        }
        Err(e) => verify(
            config.recorder_url.trim_end_matches('/'),
            published,
            Err(e),
        ),
    }
}

// ping runs the round trip. Broker and recorder failures become a
// CRITICAL result rather than an error, so a status line is always
// printed.
pub async fn ping(opts: &Opts, config: &RuntimeConfig) -> CliResult<CheckResult> {
    let tst = Utc::now().timestamp();
    let record = ping_record(tst)?;

    let publisher = match opts.mqtt.publisher(Some(ping_client_id())) {
        Ok(publisher) => publisher,
        Err(e) => return Ok(publish_failed(e)),
    };
    if let Err(e) = publish_ping(publisher, &opts.topic, &record).await {
        return Ok(publish_failed(e));
    }
    debug!(topic = %opts.topic, tst, "Published ping");

    if !opts.settle.is_zero() {
        tokio::time::sleep(opts.settle).await;
    }

    let api_config = Config {
        recorder_url: opts.url.clone(),
        ..config.api_config()
    };
    Ok(check_recorder(&api_config, opts, tst).await)
}
