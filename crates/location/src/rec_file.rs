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

// src/rec_file.rs
// The recorder's monthly .rec files.
//
// Each line is "<isotime>\t<topic column>\t<json>", where the topic
// column is left-aligned and padded to 18 characters. Records that
// did not arrive over MQTT carry "*" in that column. Files are named
// after the year-month of the lines they hold (e.g. 2022-03.rec).

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use crate::errors::LocationError;
use crate::gpx::TrackPoint;
use crate::record::{LocationRecord, Position};

pub const REC_EXTENSION: &str = "rec";
pub const HTTP_TOPIC_MARKER: &str = "*";

const ISOTIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const TOPIC_COLUMN_WIDTH: usize = 18;

// WriteMode controls what happens to an existing month file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Replace,
    Append,
}

// RecLine is one line of a .rec file.
#[derive(Clone, Debug, PartialEq)]
pub struct RecLine {
    timestamp: DateTime<Utc>,
    record: LocationRecord,
}

impl RecLine {
    pub fn new(timestamp: DateTime<Utc>, record: LocationRecord) -> Self {
        Self { timestamp, record }
    }

    // from_point builds the line for a GPX track point. Points without
    // a time cannot be placed in a month file and are refused.
    pub fn from_point(point: &TrackPoint) -> Result<Self, LocationError> {
        let timestamp = point.time.ok_or(LocationError::MissingTimestamp)?;
        let mut record = LocationRecord::new()
            .with_position(Position::new(point.lat, point.lon))
            .with_unix_timestamp(timestamp.timestamp())?
            .with_http(true);
        if let Some(elevation) = point.elevation {
            record = record.with_altitude(elevation);
        }
        Ok(Self::new(timestamp, record))
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn record(&self) -> &LocationRecord {
        &self.record
    }

    // isotime is the sortable UTC timestamp column.
    pub fn isotime(&self) -> String {
        self.timestamp.format(ISOTIME_FORMAT).to_string()
    }

    // month is the year-month prefix of the timestamp column, which is
    // also the name of the file the line belongs in.
    pub fn month(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }

    pub fn to_line(&self) -> Result<String, LocationError> {
        Ok(format!(
            "{}\t{:<width$}\t{}",
            self.isotime(),
            HTTP_TOPIC_MARKER,
            self.record.to_json()?,
            width = TOPIC_COLUMN_WIDTH,
        ))
    }

    pub fn parse(line: &str) -> Result<Self, LocationError> {
        let mut columns = line.trim_end_matches(['\r', '\n']).splitn(3, '\t');
        let (Some(isotime), Some(_topic), Some(json)) =
            (columns.next(), columns.next(), columns.next())
        else {
            return Err(LocationError::MalformedRecLine(format!(
                "expected 3 tab-separated columns: {line}"
            )));
        };

        let timestamp = NaiveDateTime::parse_from_str(isotime, ISOTIME_FORMAT)
            .map_err(|_| LocationError::InvalidTimestamp(isotime.to_string()))?
            .and_utc();
        let record = LocationRecord::from_json(json)?;
        Ok(Self::new(timestamp, record))
    }
}

// group_by_month sorts all lines by time (stable, so equal times keep
// their input order) and then splits them into per-month buckets.
pub fn group_by_month(mut lines: Vec<RecLine>) -> BTreeMap<String, Vec<RecLine>> {
    lines.sort_by_key(|line| line.timestamp);

    let mut months: BTreeMap<String, Vec<RecLine>> = BTreeMap::new();
    for line in lines {
        months.entry(line.month()).or_default().push(line);
    }
    months
}

pub fn month_file_name(month: &str) -> String {
    format!("{month}.{REC_EXTENSION}")
}

// write_months writes one file per month into dir and returns the
// paths written, in month order. All lines are rendered before any
// file is touched.
pub fn write_months(
    dir: &Path,
    months: &BTreeMap<String, Vec<RecLine>>,
    mode: WriteMode,
) -> Result<Vec<PathBuf>, LocationError> {
    let mut rendered = Vec::with_capacity(months.len());
    for (month, lines) in months {
        let body = lines
            .iter()
            .map(RecLine::to_line)
            .collect::<Result<Vec<_>, _>>()?;
        rendered.push((dir.join(month_file_name(month)), body));
    }

    let mut written = Vec::with_capacity(rendered.len());
    for (path, body) in rendered {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Replace => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };

        let mut writer = BufWriter::new(options.open(&path)?);
        for line in &body {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        debug!(path = %path.display(), lines = body.len(), ?mode, "Wrote rec file");
        written.push(path);
    }
    Ok(written)
}
