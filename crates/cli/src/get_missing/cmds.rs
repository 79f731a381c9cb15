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

use std::io::{BufRead, ErrorKind};

use chrono::Utc;
use ot_api_client::{GeocoderClient, ReverseGeocode};
use serde::Serialize;
use tokio::io::AsyncWrite;
use tracing::{info, warn};

use super::Opts;
use crate::cfg::runtime::write_line;
use crate::errors::{CliError, CliResult};

// MissingEntry is one "<ghash> <lat> <lon>" input line.
#[derive(Clone, Debug, PartialEq)]
pub struct MissingEntry {
    pub ghash: String,
    pub lat: f64,
    pub lon: f64,
}

impl MissingEntry {
    pub fn parse(line: &str) -> CliResult<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [ghash, lat, lon] = fields.as_slice() else {
            return Err(CliError::InvalidInput(format!(
                "expected \"<ghash> <lat> <lon>\", got '{line}'"
            )));
        };
        let coordinate = |value: &str| {
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::InvalidInput(format!("bad coordinate '{value}'")))
        };
        Ok(Self {
            ghash: ghash.to_string(),
            lat: coordinate(*lat)?,
            lon: coordinate(*lon)?,
        })
    }
}

// GeocodePayload is the cache entry printed for each resolved line.
#[derive(Debug, Serialize)]
pub struct GeocodePayload {
    pub tst: i64,
    pub cc: String,
    pub addr: String,
    pub locality: Option<String>,
}

impl GeocodePayload {
    pub fn new(tst: i64, geocode: ReverseGeocode) -> Self {
        Self {
            tst,
            cc: geocode.cc,
            addr: geocode.addr,
            locality: geocode.locality,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub resolved: usize,
    pub requeued: Vec<String>,
}

// read_lines collects the input lines, from the files in order or
// from stdin.
pub fn read_lines(opts: &Opts) -> CliResult<Vec<String>> {
    if opts.files.is_empty() {
        return collect_lines(std::io::stdin().lock());
    }
    let mut lines = Vec::new();
    for path in &opts.files {
        let file = std::fs::File::open(path)?;
        lines.extend(collect_lines(std::io::BufReader::new(file))?);
    }
    Ok(lines)
}

fn collect_lines(reader: impl BufRead) -> CliResult<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line.trim_end().to_string());
        }
    }
    Ok(lines)
}

// get_missing resolves every line, printing "<ghash> <json>" for each
// success. Failures never stop the run: their original lines are
// collected and written to the requeue file once, at the end.
pub async fn get_missing<W>(
    opts: &Opts,
    geocoder: &GeocoderClient,
    lines: &[String],
    out: &mut W,
) -> CliResult<Summary>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut summary = Summary::default();
    let mut looked_up = false;

    for line in lines {
        let entry = match MissingEntry::parse(line) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping input line: {e}");
                summary.requeued.push(line.clone());
                continue;
            }
        };

        if looked_up && !opts.delay.is_zero() {
            tokio::time::sleep(opts.delay).await;
        }
        looked_up = true;

        match geocoder.reverse(entry.lat, entry.lon).await {
            Ok(geocode) => {
                let payload = GeocodePayload::new(Utc::now().timestamp(), geocode);
                let json = serde_json::to_string(&payload)?;
                write_line(out, &format!("{} {}", entry.ghash, json)).await?;
                summary.resolved += 1;
            }
            Err(e) => {
                warn!(ghash = %entry.ghash, "Lookup failed: {e}");
                summary.requeued.push(line.clone());
            }
        }
    }

    if !summary.requeued.is_empty() {
        let mut body = summary.requeued.join("\n");
        body.push('\n');
        tokio::fs::write(&opts.requeue_file, body).await?;
    } else {
        clear_requeue_file(opts).await?;
    }
    info!(
        resolved = summary.resolved,
        requeued = summary.requeued.len(),
        requeue_file = %opts.requeue_file.display(),
        "Reverse geocoding finished"
    );
    Ok(summary)
}

// clear_requeue_file removes a requeue file left by an earlier run, so
// one only exists after a run with failures. It is kept when it is one
// of this run's inputs.
async fn clear_requeue_file(opts: &Opts) -> CliResult<()> {
    let requeue = match tokio::fs::canonicalize(&opts.requeue_file).await {
        Ok(path) => path,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    for input in &opts.files {
        if tokio::fs::canonicalize(input).await.ok().as_ref() == Some(&requeue) {
            info!(
                requeue_file = %opts.requeue_file.display(),
                "Keeping requeue file, it was read as input"
            );
            return Ok(());
        }
    }
    tokio::fs::remove_file(&opts.requeue_file).await?;
    info!(
        requeue_file = %opts.requeue_file.display(),
        "Removed requeue file from an earlier run"
    );
    Ok(())
}
