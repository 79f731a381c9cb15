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

use std::path::PathBuf;

use ot_location::{LocationError, RecLine};
use ot_location::gpx::parse_track;
use ot_location::rec_file::{group_by_month, write_months};
use tracing::{info, warn};

use super::Opts;
use crate::errors::{CliError, CliResult};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    // written pairs each month file with the number of lines in it.
    pub written: Vec<(PathBuf, usize)>,
    pub skipped: usize,
}

// read_lines turns every timed point of every file into a line.
// Points without a time are skipped; anything malformed fails the
// whole run before a file is written.
pub fn read_lines(opts: &Opts) -> CliResult<(Vec<RecLine>, usize)> {
    let mut lines = Vec::new();
    let mut skipped = 0;

    for path in &opts.files {
        let gpx = std::fs::read_to_string(path)?;
        let context =
            |e: LocationError| CliError::InvalidInput(format!("{}: {e}", path.display()));
        let points = parse_track(&gpx).map_err(context)?;

        let before = lines.len();
        for point in &points {
            if point.time.is_none() {
                skipped += 1;
                warn!(
                    file = %path.display(),
                    lat = point.lat,
                    lon = point.lon,
                    "Skipping track point without a time"
                );
                continue;
            }
            lines.push(RecLine::from_point(point).map_err(context)?);
        }
        info!(file = %path.display(), points = lines.len() - before, "Read track");
    }
    Ok((lines, skipped))
}

// convert sorts the points of all files together and writes one
// file per month.
pub fn convert(opts: &Opts) -> CliResult<Conversion> {
    let (lines, skipped) = read_lines(opts)?;
    let months = group_by_month(lines);
    let paths = write_months(&opts.output_dir, &months, opts.write_mode())?;

    let written = paths
        .into_iter()
        .zip(months.values().map(Vec::len))
        .collect();
    Ok(Conversion { written, skipped })
}
