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

use std::fs::File;
use std::io::BufReader;

use ot_location::{LocationHistory, LocationRecord};
use ot_mqtt::{MqttPublisher, PublishOptions, PublishStats, qos_from_level};
use tokio::io::AsyncWrite;
use tracing::info;

use super::Opts;
use crate::cfg::runtime::write_line;
use crate::errors::{CliError, CliResult};

// load_records maps the whole export up front, so a malformed entry
// stops the import before anything is published.
pub fn load_records(opts: &Opts) -> CliResult<Vec<LocationRecord>> {
    let file = File::open(&opts.file)?;
    let history = LocationHistory::from_reader(BufReader::new(file))?;
    let records = history.records(&opts.tid)?;
    info!(
        file = %opts.file.display(),
        count = records.len(),
        "Loaded location history"
    );
    Ok(records)
}

pub fn publish_options(opts: &Opts) -> CliResult<PublishOptions> {
    let qos = qos_from_level(opts.qos)
        .ok_or_else(|| CliError::InvalidInput(format!("QoS {} is not 0, 1 or 2", opts.qos)))?;
    Ok(PublishOptions::default().with_qos(qos).with_retain(false))
}

// print_records writes each payload on its own line.
pub async fn print_records<W>(records: &[LocationRecord], out: &mut W) -> CliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    for record in records {
        write_line(out, &record.to_json()?).await?;
    }
    Ok(())
}

// import publishes every record in file order over one connection.
pub async fn import(
    publisher: &mut MqttPublisher,
    opts: &Opts,
    records: &[LocationRecord],
) -> CliResult<PublishStats> {
    info!(topic = %opts.topic, count = records.len(), "Publishing location history");
    let stats = publisher
        .publish_all(&opts.topic, records, publish_options(opts)?)
        .await?;
    Ok(stats)
}

pub fn summary_line(topic: &str, stats: &PublishStats) -> String {
    format!(
        "Published {} messages ({} bytes) to {}",
        stats.total_published, stats.total_bytes_published, topic
    )
}
